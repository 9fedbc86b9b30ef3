//! Submission payload assembly.
//!
//! Reshapes screen drafts into the payloads dispatched upstream. Only
//! bound line items are sent, and optional fields are omitted from the
//! JSON entirely rather than serialized as empty strings or nulls: the
//! receiving service treats a present-but-empty value differently from
//! an absent one.

pub mod entry;
pub mod items;

pub use entry::{IssueEntryPayload, assemble_entry};
pub use items::{IssuedItem, assemble_items};
