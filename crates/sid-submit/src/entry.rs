//! Issue entry payload assembly.

use serde::{Deserialize, Serialize};
use sid_model::{IssueEntryDraft, RoleRef};

use crate::items::{IssuedItem, assemble_items};

/// Payload for creating a material issue entry upstream.
///
/// Field presence mirrors what the create screen dispatches: selection
/// ids the operator never made and blank notes are dropped from the
/// JSON rather than sent as nulls or empty strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueEntryPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_contractor_id: Option<u32>,
    pub issue_no: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wbs_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iow_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labour_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issued_by: Option<u32>,
    pub date: String,
    pub indent_no: String,
    pub roles: Vec<RoleRef>,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub items: Vec<IssuedItem>,
}

/// Assemble the upstream payload from a screen draft.
///
/// New entries are always marked active; only bound rows survive into
/// `items`. The draft is expected to have passed
/// `sid_validate::validate_issue_entry` first; assembly itself stays
/// mechanical and never fails.
pub fn assemble_entry(draft: &IssueEntryDraft) -> IssueEntryPayload {
    IssueEntryPayload {
        sub_contractor_id: draft.sub_contractor_id,
        issue_no: draft.issue_no.clone(),
        wbs_id: draft.wbs_id,
        iow_id: draft.iow_id,
        location_id: draft.location_id,
        labour_id: draft.labour_id,
        issued_by: draft.issued_by,
        date: draft.date.clone(),
        indent_no: draft.indent_no.clone(),
        roles: draft.roles.clone(),
        is_active: true,
        notes: if draft.notes.is_empty() {
            None
        } else {
            Some(draft.notes.clone())
        },
        items: assemble_items(&draft.items),
    }
}
