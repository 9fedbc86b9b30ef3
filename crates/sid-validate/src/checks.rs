//! Reusable field-level checks.
//!
//! Each check returns `Some(FieldIssue)` when its rule is violated.
//! Length and digit rules skip blank values; pair them with a
//! `require_*` check when the field is mandatory.

use sid_model::{FieldIssue, IssueSeverity};

/// A required selection that has not been made.
pub fn require_selected(
    code: &str,
    field: &str,
    value: Option<u32>,
    message: &str,
) -> Option<FieldIssue> {
    if value.is_some() {
        return None;
    }
    Some(error(code, field, message))
}

/// A required text input left blank.
pub fn require_text(code: &str, field: &str, value: &str, message: &str) -> Option<FieldIssue> {
    if !value.trim().is_empty() {
        return None;
    }
    Some(error(code, field, message))
}

/// Maximum character count.
pub fn max_len(code: &str, field: &str, value: &str, limit: usize) -> Option<FieldIssue> {
    if value.chars().count() <= limit {
        return None;
    }
    Some(error(
        code,
        field,
        &format!("Must be max of {limit} characters"),
    ))
}

/// Exact character count; blank values pass.
pub fn exact_len(code: &str, field: &str, value: &str, expected: usize) -> Option<FieldIssue> {
    if value.is_empty() || value.chars().count() == expected {
        return None;
    }
    Some(error(code, field, &format!("Must be {expected} characters")))
}

/// Digits-only rule for phone-style fields; blank values pass.
pub fn digits_only(code: &str, field: &str, value: &str) -> Option<FieldIssue> {
    if value.is_empty() || value.chars().all(|ch| ch.is_ascii_digit()) {
        return None;
    }
    Some(error(code, field, "Only numbers allowed"))
}

/// Inclusive character-count range; blank values pass.
pub fn len_range(
    code: &str,
    field: &str,
    value: &str,
    min: usize,
    max: usize,
) -> Option<FieldIssue> {
    if value.is_empty() {
        return None;
    }
    let count = value.chars().count();
    if (min..=max).contains(&count) {
        return None;
    }
    Some(error(
        code,
        field,
        &format!("Must be between {min} and {max} characters"),
    ))
}

pub(crate) fn error(code: &str, field: &str, message: &str) -> FieldIssue {
    issue(code, field, message, IssueSeverity::Error)
}

pub(crate) fn warning(code: &str, field: &str, message: &str) -> FieldIssue {
    issue(code, field, message, IssueSeverity::Warning)
}

fn issue(code: &str, field: &str, message: &str, severity: IssueSeverity) -> FieldIssue {
    FieldIssue {
        code: code.to_string(),
        message: message.to_string(),
        severity,
        field: Some(field.to_string()),
    }
}
