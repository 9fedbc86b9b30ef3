//! Material catalog reference data.
//!
//! The catalog is a read-only snapshot supplied by the host application
//! for the duration of one screen session. Replacing the snapshot never
//! retouches rows that already bound to an entry: the rate copied at
//! bind time is immutable.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Identifier of a material within a catalog snapshot.
pub type MaterialId = u32;

/// One issuable material as presented by the stores catalog.
///
/// `unit_rate` stays string-encoded exactly as supplied by the host. It
/// is parsed into a decimal only when a line item binds to the entry,
/// so a malformed rate fails the bind instead of being coerced during
/// ingest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: MaterialId,
    pub name: String,
    pub unit_rate: String,
}

/// Ordered catalog snapshot with unique material ids.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(into = "Vec<CatalogEntry>", try_from = "Vec<CatalogEntry>")]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a snapshot, rejecting duplicate material ids.
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, ModelError> {
        let mut seen = BTreeSet::new();
        for entry in &entries {
            if !seen.insert(entry.id) {
                return Err(ModelError::DuplicateMaterial { id: entry.id });
            }
        }
        Ok(Self { entries })
    }

    /// Look up an entry by material id.
    pub fn get(&self, id: MaterialId) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Entries in the order the host supplied them.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Catalog> for Vec<CatalogEntry> {
    fn from(catalog: Catalog) -> Self {
        catalog.entries
    }
}

impl TryFrom<Vec<CatalogEntry>> for Catalog {
    type Error = ModelError;

    fn try_from(entries: Vec<CatalogEntry>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}
