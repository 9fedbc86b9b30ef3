//! Row store for the material issue line-item table.
//!
//! The store owns the ordered row sequence, the catalog snapshot used
//! to resolve material selections, and the monotonic key counter. Key
//! assignment never derives from the sequence length, so deleting rows
//! can never cause a key to be reissued. Every mutation that actually
//! changes state triggers exactly one change notification with the
//! full sequence; no-ops and failed binds leave the sequence and the
//! parent untouched.

use rust_decimal::Decimal;
use sid_model::{Catalog, ItemKey, LineItem, MaterialId};
use tracing::{debug, warn};

use crate::derive;
use crate::edit::ItemEdit;
use crate::error::TableError;
use crate::notify::ChangeNotifier;

const FIRST_KEY: ItemKey = 1;

/// Editable collection of line items for one screen session.
///
/// The table is single-threaded and synchronous: each user interaction
/// maps to one mutation evaluated to completion, so the parent never
/// observes a row mid-derivation.
#[derive(Debug)]
pub struct ItemTable {
    rows: Vec<LineItem>,
    next_key: ItemKey,
    catalog: Catalog,
    notifier: ChangeNotifier,
}

impl ItemTable {
    /// Start a session with a single unbound placeholder row (key 1).
    pub fn new(catalog: Catalog) -> Self {
        Self {
            rows: vec![LineItem::placeholder(FIRST_KEY)],
            next_key: FIRST_KEY + 1,
            catalog,
            notifier: ChangeNotifier::new(),
        }
    }

    /// Register the parent notification sink.
    pub fn on_change<F>(&mut self, sink: F)
    where
        F: FnMut(&str, &[LineItem]) + Send + 'static,
    {
        self.notifier.register(sink);
    }

    /// Rows in table order.
    pub fn rows(&self) -> &[LineItem] {
        &self.rows
    }

    /// The row with `key`, if it still exists.
    pub fn get(&self, key: ItemKey) -> Option<&LineItem> {
        self.rows.iter().find(|row| row.key == key)
    }

    pub fn contains_key(&self, key: ItemKey) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The catalog snapshot this session resolves against.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Apply a field edit to the row with `key`.
    ///
    /// A key that no longer exists is an expected delete-then-edit
    /// race: the edit is dropped without touching any other row and
    /// without notifying.
    pub fn apply(&mut self, key: ItemKey, edit: &ItemEdit) {
        let Some(index) = self.position(key) else {
            warn!(key, "edit targeted a row that no longer exists");
            return;
        };
        let next = derive::apply_edit(&self.rows[index], edit);
        self.rows[index] = next;
        debug!(key, ?edit, "row edited");
        self.notify();
    }

    /// Quantity edit straight from the number input; `None` (a cleared
    /// input) and zero normalize back to one unit.
    pub fn set_quantity(&mut self, key: ItemKey, value: Option<Decimal>) {
        self.apply(key, &ItemEdit::Quantity(value));
    }

    /// Bind the row with `key` to a catalog entry, copying the entry's
    /// name and rate and resetting the amount to the one-unit baseline.
    /// The previously entered quantity is left as-is.
    ///
    /// A missing catalog id or an unparseable unit rate fails the bind:
    /// the row is left untouched and no notification fires.
    pub fn bind_material(
        &mut self,
        key: ItemKey,
        material_id: MaterialId,
    ) -> Result<(), TableError> {
        let Some(index) = self.position(key) else {
            warn!(key, material_id, "bind targeted a row that no longer exists");
            return Ok(());
        };
        let entry = self
            .catalog
            .get(material_id)
            .ok_or(TableError::BindNotFound { id: material_id })?;
        let fields = derive::bound_fields(entry)?;
        let next = derive::apply_bind(&self.rows[index], fields);
        self.rows[index] = next;
        debug!(key, material_id, "row bound to material");
        self.notify();
        Ok(())
    }

    /// Append a fresh placeholder row and return its key.
    ///
    /// Keys come from the store-owned counter, which only ever moves
    /// forward: deleted keys are never reissued.
    pub fn add_row(&mut self) -> ItemKey {
        let key = self.next_key;
        self.next_key += 1;
        self.rows.push(LineItem::placeholder(key));
        debug!(key, rows = self.rows.len(), "row added");
        self.notify();
        key
    }

    /// Remove the row with `key`.
    ///
    /// Removing an absent key is a no-op, so deletion is idempotent.
    /// Surviving rows keep their keys and order. An emptied table is
    /// legal here; whether it is submittable is the validator's call.
    pub fn remove_row(&mut self, key: ItemKey) {
        let before = self.rows.len();
        self.rows.retain(|row| row.key != key);
        if self.rows.len() == before {
            return;
        }
        debug!(key, rows = self.rows.len(), "row removed");
        self.notify();
    }

    fn position(&self, key: ItemKey) -> Option<usize> {
        self.rows.iter().position(|row| row.key == key)
    }

    fn notify(&mut self) {
        self.notifier.emit(&self.rows);
    }
}
