//! Error types for table mutations.

use sid_model::MaterialId;
use thiserror::Error;

/// Errors surfaced by table mutations.
///
/// A row key that no longer exists is deliberately not represented
/// here: edits and deletes against a vanished row are expected under
/// rapid delete-then-edit interaction and recover locally as no-ops.
#[derive(Debug, Error)]
pub enum TableError {
    /// A bind referenced a material absent from the catalog snapshot.
    #[error("material {id} not found in catalog snapshot")]
    BindNotFound { id: MaterialId },

    /// A catalog entry's unit rate failed to parse as a decimal.
    #[error("material {id} has unparseable unit rate {value:?}")]
    RateParse {
        id: MaterialId,
        value: String,
        #[source]
        source: rust_decimal::Error,
    },
}
