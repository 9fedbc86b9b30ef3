//! Line-item table engine for material issue entries.
//!
//! The engine owns the editable row collection of the issue entry
//! screen: an ordered sequence of [`sid_model::LineItem`]s keyed by a
//! store-owned monotonic counter, a read-only catalog snapshot used to
//! resolve material selections, pure derivation rules that recompute
//! dependent fields on each edit, and a single-callback notifier that
//! hands the full sequence back to the owning screen after every
//! successful mutation.
//!
//! Everything runs synchronously on the caller's thread: each user
//! interaction maps to exactly one store mutation evaluated to
//! completion before control returns.

pub mod derive;
pub mod edit;
pub mod error;
pub mod notify;
pub mod state;

pub use edit::ItemEdit;
pub use error::TableError;
pub use notify::{ChangeNotifier, ITEMS_FIELD};
pub use state::ItemTable;
