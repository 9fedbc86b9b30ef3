//! Catalog snapshot loading.
//!
//! The host application owns the stores catalog; for the desk, a
//! snapshot is a JSON array or a CSV export with `id,name,unit_rate`
//! columns. Rates stay string-encoded on load: the table engine parses
//! them at bind time, so a malformed rate fails that bind rather than
//! the whole load.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use csv::ReaderBuilder;
use sid_model::{Catalog, CatalogEntry};

/// Load a catalog snapshot, picking the format from the file extension.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => load_json(path),
        Some("csv") => load_csv(path),
        _ => bail!("unsupported catalog format: {}", path.display()),
    }
}

fn load_json(path: &Path) -> Result<Catalog> {
    let raw =
        fs::read_to_string(path).with_context(|| format!("read catalog: {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parse catalog: {}", path.display()))
}

fn load_csv(path: &Path) -> Result<Catalog> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("read catalog: {}", path.display()))?;
    let mut entries = Vec::new();
    for record in reader.deserialize() {
        let entry: CatalogEntry =
            record.with_context(|| format!("parse catalog record: {}", path.display()))?;
        entries.push(entry);
    }
    Catalog::new(entries).with_context(|| format!("build catalog snapshot: {}", path.display()))
}
