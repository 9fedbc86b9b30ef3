//! Line items of the material issue table.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::MaterialId;

/// Identifier of a row in the line-item table.
///
/// Keys come from a monotonic counter owned by the table and are never
/// reused, even after the row they named was deleted.
pub type ItemKey = u64;

/// One row of the material issue table.
///
/// A freshly added row is an unbound placeholder: no material selected,
/// description empty, rate and amount zero. Selecting a material copies
/// the catalog entry's name and rate onto the row and the remaining
/// fields become meaningful. `amount` is derived: it equals
/// `quantity * rate` after every quantity edit, and is reset to the
/// one-unit baseline (`rate`) when the row binds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub key: ItemKey,
    pub description: String,
    pub material_id: Option<MaterialId>,
    pub quantity: Decimal,
    pub rate: Decimal,
    pub amount: Decimal,
    pub self_use: bool,
    pub chargeable: bool,
    pub returnable: bool,
    pub purpose: String,
}

impl LineItem {
    /// Unbound placeholder row awaiting a material selection.
    pub fn placeholder(key: ItemKey) -> Self {
        Self {
            key,
            description: String::new(),
            material_id: None,
            quantity: Decimal::ONE,
            rate: Decimal::ZERO,
            amount: Decimal::ZERO,
            self_use: false,
            chargeable: false,
            returnable: false,
            purpose: String::new(),
        }
    }

    /// True once a catalog entry has been selected for this row.
    ///
    /// Quantity, the three flags, and purpose are only meaningful on a
    /// bound row; the interaction layer keeps their widgets disabled
    /// until then.
    pub fn is_bound(&self) -> bool {
        self.material_id.is_some()
    }
}
