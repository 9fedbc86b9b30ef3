use std::fs;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use sid_cli::catalog_io::load_catalog;
use sid_cli::script::{EditOp, EditScript, replay};
use sid_model::{Catalog, CatalogEntry};
use sid_table::ItemTable;

fn unique_temp_file(name: &str, ext: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!(
        "stores-desk-{}-{}-{}.{}",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        ext
    ));
    path
}

fn sample_catalog() -> Catalog {
    Catalog::new(vec![
        CatalogEntry {
            id: 1,
            name: "Cement".to_string(),
            unit_rate: "10.00".to_string(),
        },
        CatalogEntry {
            id: 2,
            name: "Sand".to_string(),
            unit_rate: "4.50".to_string(),
        },
    ])
    .expect("unique catalog ids")
}

#[test]
fn script_parses_and_replays_to_final_state() {
    let raw = r#"{
        "ops": [
            {"bind": {"key": 1, "material_id": 1}},
            {"quantity": {"key": 1, "value": "5"}},
            "add",
            {"bind": {"key": 2, "material_id": 2}},
            {"purpose": {"key": 2, "value": "urgent"}},
            {"remove": {"key": 2}}
        ]
    }"#;
    let script: EditScript = serde_json::from_str(raw).expect("parse script");
    assert_eq!(
        script.ops[0],
        EditOp::Bind {
            key: 1,
            material_id: 1
        }
    );

    let mut table = ItemTable::new(sample_catalog());
    replay(&mut table, &script).expect("replay succeeds");
    assert_eq!(table.len(), 1);
    let row = table.get(1).expect("row 1 survives");
    assert_eq!(row.description, "Cement");
    assert_eq!(row.amount, Decimal::new(5000, 2));
}

#[test]
fn failed_bind_reports_the_op_index() {
    let script = EditScript {
        ops: vec![
            EditOp::Add,
            EditOp::Bind {
                key: 2,
                material_id: 99,
            },
        ],
    };
    let mut table = ItemTable::new(sample_catalog());
    let error = replay(&mut table, &script).expect_err("unknown material");
    assert!(error.to_string().contains("script op 1 failed"));
    // The failed bind left the row untouched.
    assert!(!table.get(2).expect("row 2").is_bound());
}

#[test]
fn csv_catalog_loads_with_string_rates() {
    let path = unique_temp_file("catalog", "csv");
    fs::write(&path, "id,name,unit_rate\n1,Cement,10.00\n2,Sand,4.50\n").expect("write csv");
    let catalog = load_catalog(&path).expect("load csv catalog");
    assert_eq!(catalog.len(), 2);
    assert_eq!(
        catalog.get(2).map(|entry| entry.unit_rate.as_str()),
        Some("4.50")
    );
    fs::remove_file(&path).ok();
}

#[test]
fn json_catalog_rejects_duplicate_ids() {
    let path = unique_temp_file("catalog", "json");
    fs::write(
        &path,
        r#"[
            {"id": 1, "name": "Cement", "unit_rate": "10.00"},
            {"id": 1, "name": "Sand", "unit_rate": "4.50"}
        ]"#,
    )
    .expect("write json");
    assert!(load_catalog(&path).is_err());
    fs::remove_file(&path).ok();
}

#[test]
fn unknown_catalog_extension_is_rejected() {
    assert!(load_catalog(Path::new("catalog.xml")).is_err());
}
