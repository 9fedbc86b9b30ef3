//! Line-item payload shaping.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sid_model::{LineItem, MaterialId};

/// One submitted line of a material issue entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedItem {
    pub material_id: MaterialId,
    pub quantity: Decimal,
    pub self_use: bool,
    pub chargeable: bool,
    pub returnable: bool,
    pub rate: Decimal,
    pub amount: Decimal,
    /// Omitted entirely when the operator left it blank.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
}

impl IssuedItem {
    /// Reshape a bound row for submission.
    ///
    /// Returns `None` for unbound placeholder rows, which are never
    /// sent upstream.
    pub fn from_row(item: &LineItem) -> Option<Self> {
        let material_id = item.material_id?;
        Some(Self {
            material_id,
            quantity: item.quantity,
            self_use: item.self_use,
            chargeable: item.chargeable,
            returnable: item.returnable,
            rate: item.rate,
            amount: item.amount,
            purpose: if item.purpose.is_empty() {
                None
            } else {
                Some(item.purpose.clone())
            },
        })
    }
}

/// Keep only bound rows, in table order.
pub fn assemble_items(items: &[LineItem]) -> Vec<IssuedItem> {
    items.iter().filter_map(IssuedItem::from_row).collect()
}
