//! Material issue entry drafts.

use serde::{Deserialize, Serialize};

use crate::item::LineItem;

/// Reference to an approver role attached to an issue entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRef {
    pub role_id: u32,
}

/// In-progress material issue entry as collected by the create screen.
///
/// Identifier fields stay `None` until the operator picks them; the
/// validator decides what is submittable. The labour selection is only
/// offered once a sub-contractor is chosen, and the IOW picker only
/// once a WBS is chosen; that gating lives in the screen, not here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IssueEntryDraft {
    pub sub_contractor_id: Option<u32>,
    #[serde(default)]
    pub issue_no: String,
    #[serde(default)]
    pub roles: Vec<RoleRef>,
    pub wbs_id: Option<u32>,
    pub iow_id: Option<u32>,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub indent_no: String,
    pub issued_by: Option<u32>,
    pub location_id: Option<u32>,
    pub labour_id: Option<u32>,
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub notes: String,
}
