pub mod catalog;
pub mod employee;
pub mod entry;
pub mod error;
pub mod item;
pub mod report;

pub use catalog::{Catalog, CatalogEntry, MaterialId};
pub use employee::EmployeeDraft;
pub use entry::{IssueEntryDraft, RoleRef};
pub use error::ModelError;
pub use item::{ItemKey, LineItem};
pub use report::{FieldIssue, IssueSeverity, ValidationReport};
