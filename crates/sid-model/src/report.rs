//! Validation findings reported against a screen draft.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Error,
    Warning,
}

/// A single finding against one form field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldIssue {
    /// Stable rule code (e.g., "IE0002").
    pub code: String,
    /// Human-readable message describing the finding.
    pub message: String,
    /// Severity level.
    pub severity: IssueSeverity,
    /// Field the finding is anchored to (if applicable).
    pub field: Option<String>,
}

/// Validation findings for one screen's draft.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    pub screen: String,
    pub issues: Vec<FieldIssue>,
}

impl ValidationReport {
    pub fn new(screen: &str) -> Self {
        Self {
            screen: screen.to_string(),
            issues: Vec::new(),
        }
    }

    pub fn add(&mut self, issue: FieldIssue) {
        self.issues.push(issue);
    }

    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Warning)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }
}
