use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use sid_cli::catalog_io::load_catalog;
use sid_cli::script::{EditScript, replay};
use sid_model::{EmployeeDraft, IssueEntryDraft, ValidationReport};
use sid_submit::{assemble_entry, assemble_items};
use sid_table::ItemTable;
use sid_validate::{validate_employee, validate_issue_entry};

use crate::cli::{PayloadArgs, ScreenArg, SimulateArgs, ValidateArgs};
use crate::types::{PayloadOutcome, SimulateResult};

pub fn run_simulate(args: &SimulateArgs) -> Result<SimulateResult> {
    let catalog = load_catalog(&args.catalog)?;
    info!(
        entries = catalog.len(),
        catalog = %args.catalog.display(),
        "catalog snapshot loaded"
    );
    let script: EditScript = read_json(&args.script)?;

    let notifications = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&notifications);
    let mut table = ItemTable::new(catalog);
    table.on_change(move |_, items| {
        counter.fetch_add(1, Ordering::Relaxed);
        debug!(rows = items.len(), "change notification");
    });

    replay(&mut table, &script)?;
    let items = assemble_items(table.rows());
    info!(
        ops = script.ops.len(),
        rows = table.len(),
        issued = items.len(),
        "script replayed"
    );
    emit_json(&items, args.payload_out.as_deref())?;
    Ok(SimulateResult {
        rows: table.rows().to_vec(),
        notifications: notifications.load(Ordering::Relaxed),
        items,
    })
}

pub fn run_validate(args: &ValidateArgs) -> Result<ValidationReport> {
    let report = match args.screen {
        ScreenArg::Issue => validate_issue_entry(&read_json::<IssueEntryDraft>(&args.draft)?),
        ScreenArg::Employee => validate_employee(&read_json::<EmployeeDraft>(&args.draft)?),
    };
    Ok(report)
}

pub fn run_payload(args: &PayloadArgs) -> Result<PayloadOutcome> {
    let draft: IssueEntryDraft = read_json(&args.draft)?;
    let report = validate_issue_entry(&draft);
    if report.has_errors() {
        return Ok(PayloadOutcome {
            report,
            payload: None,
        });
    }
    let payload = assemble_entry(&draft);
    emit_json(&payload, args.out.as_deref())?;
    Ok(PayloadOutcome {
        report,
        payload: Some(payload),
    })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))
}

/// Write pretty JSON to `out`, or to stdout when no path was given.
fn emit_json<T: Serialize>(value: &T, out: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize output")?;
    match out {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("write {}", path.display()))
        }
        None => {
            println!("{json}");
            Ok(())
        }
    }
}
