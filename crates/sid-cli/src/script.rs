//! Edit script replay.
//!
//! A script is the recorded sequence of interactions a user performed
//! against the line-item table: add and remove rows, bind materials,
//! edit quantities, toggle flags, type purposes. Replaying one against
//! a fresh table reproduces the session's final row state.

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sid_model::{ItemKey, MaterialId};
use sid_table::{ItemEdit, ItemTable, TableError};

/// One scripted interaction with the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditOp {
    /// Append a fresh placeholder row.
    Add,
    /// Remove the row with the given key.
    Remove { key: ItemKey },
    /// Bind a row to a catalog material.
    Bind { key: ItemKey, material_id: MaterialId },
    /// Change a row's quantity; omit `value` for a cleared input.
    Quantity {
        key: ItemKey,
        #[serde(default)]
        value: Option<Decimal>,
    },
    SelfUse { key: ItemKey, value: bool },
    Chargeable { key: ItemKey, value: bool },
    Returnable { key: ItemKey, value: bool },
    Purpose { key: ItemKey, value: String },
}

/// A recorded screen session: the operations, in order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditScript {
    pub ops: Vec<EditOp>,
}

/// Replay a script against the table, reporting the failing op index.
pub fn replay(table: &mut ItemTable, script: &EditScript) -> Result<()> {
    for (index, op) in script.ops.iter().enumerate() {
        apply_op(table, op).with_context(|| format!("script op {index} failed"))?;
    }
    Ok(())
}

fn apply_op(table: &mut ItemTable, op: &EditOp) -> Result<(), TableError> {
    match op {
        EditOp::Add => {
            table.add_row();
        }
        EditOp::Remove { key } => table.remove_row(*key),
        EditOp::Bind { key, material_id } => return table.bind_material(*key, *material_id),
        EditOp::Quantity { key, value } => table.set_quantity(*key, *value),
        EditOp::SelfUse { key, value } => table.apply(*key, &ItemEdit::SelfUse(*value)),
        EditOp::Chargeable { key, value } => table.apply(*key, &ItemEdit::Chargeable(*value)),
        EditOp::Returnable { key, value } => table.apply(*key, &ItemEdit::Returnable(*value)),
        EditOp::Purpose { key, value } => table.apply(*key, &ItemEdit::Purpose(value.clone())),
    }
    Ok(())
}
