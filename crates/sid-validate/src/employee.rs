//! Employee onboarding screen validation.

use sid_model::{EmployeeDraft, ValidationReport};
use tracing::debug;

use crate::checks;

/// Validate a new-hire draft against the onboarding screen's rules.
///
/// Identity and contact fields are required; the statutory ids (PAN,
/// Aadhar) and the remaining personal details are optional but must
/// match their format when present.
pub fn validate_employee(draft: &EmployeeDraft) -> ValidationReport {
    let mut report = ValidationReport::new("employee_onboarding");

    let field_checks = [
        checks::require_text(
            "EM0001",
            "employee_no",
            &draft.employee_no,
            "Please provide an Employee ID",
        ),
        checks::max_len("EM0002", "employee_no", &draft.employee_no, 20),
        checks::require_text("EM0003", "name", &draft.name, "Please provide an Employee Name"),
        checks::require_text("EM0004", "email", &draft.email, "Please provide a Contact Email"),
        checks::digits_only("EM0005", "contact_no", &draft.contact_no),
        checks::len_range("EM0006", "contact_no", &draft.contact_no, 8, 12),
        checks::require_text("EM0007", "mobile_no", &draft.mobile_no, "Please provide a Mobile"),
        checks::exact_len("EM0008", "mobile_no", &draft.mobile_no, 10),
        checks::digits_only("EM0009", "mobile_no", &draft.mobile_no),
        checks::require_selected(
            "EM0010",
            "department_id",
            draft.department_id,
            "Please provide a Department",
        ),
        checks::require_selected(
            "EM0011",
            "designation_id",
            draft.designation_id,
            "Please provide a Designation",
        ),
        checks::exact_len("EM0012", "pan", &draft.pan, 10),
        checks::digits_only("EM0013", "aadhar", &draft.aadhar),
        checks::exact_len("EM0014", "blood_group", &draft.blood_group, 2),
    ];
    for issue in field_checks.into_iter().flatten() {
        report.add(issue);
    }

    debug!(
        errors = report.error_count(),
        warnings = report.warning_count(),
        "employee draft validated"
    );
    report
}
