//! Field edits applied to individual rows.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single field edit targeting one row.
///
/// `Quantity` carries the raw widget value: `None` means the operator
/// cleared the input, which normalizes back to one unit. The toggles
/// and purpose text are only meaningful on bound rows; the engine
/// applies whatever it is handed and leaves that affordance gating to
/// the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemEdit {
    Quantity(Option<Decimal>),
    SelfUse(bool),
    Chargeable(bool),
    Returnable(bool),
    Purpose(String),
}
