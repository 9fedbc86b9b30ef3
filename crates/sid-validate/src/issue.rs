//! Issue entry screen validation.

use sid_model::{IssueEntryDraft, ValidationReport};
use tracing::debug;

use crate::checks;

/// Validate a material issue entry draft before payload assembly.
///
/// These are the rules the create screen enforces on submit: the
/// header selections and text fields are required (WBS and IOW stay
/// optional), at least one approver role must be picked, and the
/// line-item table must contain at least one bound row. Leftover
/// placeholder rows are only a warning since assembly drops them.
pub fn validate_issue_entry(draft: &IssueEntryDraft) -> ValidationReport {
    let mut report = ValidationReport::new("issue_entry");

    let field_checks = [
        checks::require_selected(
            "IE0001",
            "sub_contractor_id",
            draft.sub_contractor_id,
            "Please provide sub-contractor",
        ),
        checks::require_text("IE0002", "issue_no", &draft.issue_no, "Please provide an Issue No"),
        checks::require_text("IE0003", "date", &draft.date, "Please provide a Date"),
        checks::require_text(
            "IE0004",
            "indent_no",
            &draft.indent_no,
            "Please provide Indent No",
        ),
        checks::require_selected("IE0005", "issued_by", draft.issued_by, "Please provide Employee"),
        checks::require_selected(
            "IE0006",
            "location_id",
            draft.location_id,
            "Please provide Location",
        ),
        checks::require_selected("IE0007", "labour_id", draft.labour_id, "Please provide Labour"),
    ];
    for issue in field_checks.into_iter().flatten() {
        report.add(issue);
    }

    if draft.roles.is_empty() {
        report.add(checks::error("IE0008", "roles", "Please provide User Role"));
    }

    // Table legality lives here, not in the engine: an empty or
    // placeholder-only table is editable but not submittable.
    let bound = draft.items.iter().filter(|item| item.is_bound()).count();
    if bound == 0 {
        report.add(checks::error(
            "IE0009",
            "items",
            "Provide at least one material line item",
        ));
    }
    let unbound = draft.items.len() - bound;
    if unbound > 0 {
        report.add(checks::warning(
            "IE0010",
            "items",
            &format!("{unbound} row(s) without a material selection will be dropped"),
        ));
    }

    // The IOW picker is only enabled once a WBS is chosen; a draft
    // carrying an IOW without its WBS bypassed that gate.
    if draft.iow_id.is_some() && draft.wbs_id.is_none() {
        report.add(checks::warning(
            "IE0011",
            "iow_id",
            "IOW selected without a WBS",
        ));
    }

    debug!(
        errors = report.error_count(),
        warnings = report.warning_count(),
        "issue entry draft validated"
    );
    report
}
