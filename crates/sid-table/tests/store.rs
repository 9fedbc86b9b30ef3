use std::sync::{Arc, Mutex};

use rust_decimal::Decimal;
use sid_model::{Catalog, CatalogEntry, LineItem};
use sid_table::{ITEMS_FIELD, ItemEdit, ItemTable, TableError};

fn dec(raw: &str) -> Decimal {
    raw.parse().expect("decimal literal")
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
        CatalogEntry {
            id: 3,
            name: "Binding Wire".to_string(),
            unit_rate: "not-a-rate".to_string(),
        },
    ])
    .expect("unique catalog ids")
}

/// Records every notification the table emits.
fn record_changes(table: &mut ItemTable) -> Arc<Mutex<Vec<Vec<LineItem>>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    table.on_change(move |field, items| {
        assert_eq!(field, ITEMS_FIELD);
        sink.lock().expect("sink lock").push(items.to_vec());
    });
    seen
}

#[test]
fn starts_with_one_placeholder_row() {
    let table = ItemTable::new(sample_catalog());
    assert_eq!(table.len(), 1);
    assert_eq!(table.catalog().len(), 3);
    let row = table.get(1).expect("initial row");
    assert!(!row.is_bound());
    assert_eq!(row.quantity, Decimal::ONE);
    assert_eq!(row.amount, Decimal::ZERO);
}

#[test]
fn bind_copies_catalog_fields_and_baseline_amount() {
    let mut table = ItemTable::new(sample_catalog());
    table.bind_material(1, 1).expect("cement exists");
    let row = table.get(1).expect("row 1");
    assert_eq!(row.description, "Cement");
    assert_eq!(row.material_id, Some(1));
    assert_eq!(row.rate, dec("10.00"));
    assert_eq!(row.amount, dec("10.00"));
    assert!(row.is_bound());
}

#[test]
fn quantity_edit_recomputes_amount() {
    let mut table = ItemTable::new(sample_catalog());
    table.bind_material(1, 1).expect("cement exists");
    table.set_quantity(1, Some(dec("5")));
    assert_eq!(table.get(1).expect("row 1").amount, dec("50.00"));
}

#[test]
fn cleared_quantity_falls_back_to_one_unit() {
    let mut table = ItemTable::new(sample_catalog());
    table.bind_material(1, 1).expect("cement exists");
    table.set_quantity(1, Some(dec("4")));
    table.set_quantity(1, None);
    let row = table.get(1).expect("row 1");
    assert_eq!(row.quantity, Decimal::ONE);
    assert_eq!(row.amount, dec("10.00"));
}

#[test]
fn added_rows_take_fresh_keys_even_after_deletions() {
    let mut table = ItemTable::new(sample_catalog());
    let second = table.add_row();
    assert_eq!(second, 2);
    table.remove_row(1);
    table.remove_row(2);
    assert!(table.is_empty());
    let third = table.add_row();
    assert_eq!(third, 3);
    let fourth = table.add_row();
    assert_eq!(fourth, 4);
    let keys: Vec<_> = table.rows().iter().map(|row| row.key).collect();
    assert_eq!(keys, vec![3, 4]);
}

#[test]
fn remove_is_idempotent_and_preserves_survivors() {
    let mut table = ItemTable::new(sample_catalog());
    table.add_row();
    table.add_row();
    table.remove_row(2);
    table.remove_row(2);
    assert!(!table.contains_key(2));
    let keys: Vec<_> = table.rows().iter().map(|row| row.key).collect();
    assert_eq!(keys, vec![1, 3]);
}

#[test]
fn bind_to_unknown_material_fails_without_mutating() {
    let mut table = ItemTable::new(sample_catalog());
    let changes = record_changes(&mut table);
    let error = table.bind_material(1, 99).expect_err("no such material");
    assert!(matches!(error, TableError::BindNotFound { id: 99 }));
    assert!(!table.get(1).expect("row 1").is_bound());
    assert!(changes.lock().expect("changes lock").is_empty());
}

#[test]
fn bind_with_bad_rate_fails_without_mutating() {
    let mut table = ItemTable::new(sample_catalog());
    let changes = record_changes(&mut table);
    let error = table.bind_material(1, 3).expect_err("rate does not parse");
    assert!(matches!(error, TableError::RateParse { id: 3, .. }));
    let row = table.get(1).expect("row 1");
    assert!(!row.is_bound());
    assert_eq!(row.rate, Decimal::ZERO);
    assert!(changes.lock().expect("changes lock").is_empty());
}

#[test]
fn edits_against_vanished_rows_are_silent_noops() {
    let mut table = ItemTable::new(sample_catalog());
    table.bind_material(1, 1).expect("cement exists");
    let changes = record_changes(&mut table);
    table.set_quantity(42, Some(dec("3")));
    table.apply(42, &ItemEdit::Chargeable(true));
    table.remove_row(42);
    assert!(table.bind_material(42, 1).is_ok());
    assert!(changes.lock().expect("changes lock").is_empty());
    assert_eq!(table.get(1).expect("row 1").amount, dec("10.00"));
}

#[test]
fn each_successful_mutation_notifies_exactly_once() {
    let mut table = ItemTable::new(sample_catalog());
    let changes = record_changes(&mut table);
    table.add_row();
    table.bind_material(2, 2).expect("sand exists");
    table.set_quantity(2, Some(dec("2")));
    table.apply(2, &ItemEdit::Purpose("kerb laying".to_string()));
    table.remove_row(1);
    let seen = changes.lock().expect("changes lock");
    assert_eq!(seen.len(), 5);
    // Every notification carries the full sequence as of that mutation.
    assert_eq!(seen[0].len(), 2);
    let last = seen.last().expect("at least one notification");
    assert_eq!(last.len(), 1);
    assert_eq!(last[0].key, 2);
    assert_eq!(last[0].amount, dec("9.00"));
    assert_eq!(last[0].purpose, "kerb laying");
}

#[test]
fn toggles_and_purpose_replace_only_their_field() {
    let mut table = ItemTable::new(sample_catalog());
    table.bind_material(1, 2).expect("sand exists");
    table.apply(1, &ItemEdit::SelfUse(true));
    table.apply(1, &ItemEdit::Returnable(true));
    let row = table.get(1).expect("row 1");
    assert!(row.self_use);
    assert!(row.returnable);
    assert!(!row.chargeable);
    assert_eq!(row.rate, dec("4.50"));
    assert_eq!(row.amount, dec("4.50"));
}
