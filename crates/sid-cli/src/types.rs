use sid_model::{LineItem, ValidationReport};
use sid_submit::{IssueEntryPayload, IssuedItem};

/// Outcome of replaying an edit script.
#[derive(Debug)]
pub struct SimulateResult {
    /// Final table state, in row order.
    pub rows: Vec<LineItem>,
    /// Number of change notifications the table emitted.
    pub notifications: usize,
    /// Issued-items payload assembled from the bound rows.
    pub items: Vec<IssuedItem>,
}

/// Outcome of validating a draft and assembling its payload.
#[derive(Debug)]
pub struct PayloadOutcome {
    pub report: ValidationReport,
    /// Present only when the draft validated clean of errors.
    pub payload: Option<IssueEntryPayload>,
}
