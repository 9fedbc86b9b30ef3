//! Derivation rules: pure row transformations applied on user edits.
//!
//! No stored state lives here. Each function maps a row plus a
//! proposed edit to the fully derived replacement row; the store in
//! [`crate::state`] decides where the result lands.

use rust_decimal::Decimal;
use sid_model::{CatalogEntry, LineItem, MaterialId};

use crate::edit::ItemEdit;
use crate::error::TableError;

/// Field set copied onto a row when it binds to a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundFields {
    pub description: String,
    pub material_id: MaterialId,
    pub rate: Decimal,
    pub amount: Decimal,
}

/// Resolve the bound field set for a catalog entry.
///
/// The unit rate is parsed here, at bind time, so a malformed rate
/// fails the bind instead of flowing into `amount`. The baseline
/// amount is one unit of the new rate.
pub fn bound_fields(entry: &CatalogEntry) -> Result<BoundFields, TableError> {
    let rate: Decimal = entry
        .unit_rate
        .trim()
        .parse()
        .map_err(|source| TableError::RateParse {
            id: entry.id,
            value: entry.unit_rate.clone(),
            source,
        })?;
    Ok(BoundFields {
        description: entry.name.clone(),
        material_id: entry.id,
        rate,
        amount: rate,
    })
}

/// Apply a bound field set, leaving the remaining fields as entered.
pub fn apply_bind(item: &LineItem, fields: BoundFields) -> LineItem {
    let mut next = item.clone();
    next.description = fields.description;
    next.material_id = Some(fields.material_id);
    next.rate = fields.rate;
    next.amount = fields.amount;
    next
}

/// Clamp an empty or zero quantity back to one unit.
pub fn normalize_quantity(value: Option<Decimal>) -> Decimal {
    match value {
        Some(quantity) if !quantity.is_zero() => quantity,
        _ => Decimal::ONE,
    }
}

/// Apply a field edit, recomputing the dependent amount for quantity
/// changes. Toggles and purpose text replace their field only.
pub fn apply_edit(item: &LineItem, edit: &ItemEdit) -> LineItem {
    let mut next = item.clone();
    match edit {
        ItemEdit::Quantity(value) => {
            next.quantity = normalize_quantity(*value);
            next.amount = next.quantity * next.rate;
        }
        ItemEdit::SelfUse(value) => next.self_use = *value,
        ItemEdit::Chargeable(value) => next.chargeable = *value,
        ItemEdit::Returnable(value) => next.returnable = *value,
        ItemEdit::Purpose(value) => next.purpose.clone_from(value),
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(raw: &str) -> Decimal {
        raw.parse().expect("decimal literal")
    }

    fn cement() -> CatalogEntry {
        CatalogEntry {
            id: 1,
            name: "Cement".to_string(),
            unit_rate: "10.00".to_string(),
        }
    }

    #[test]
    fn bound_fields_parses_rate_and_sets_baseline_amount() {
        let fields = bound_fields(&cement()).expect("parseable rate");
        assert_eq!(fields.description, "Cement");
        assert_eq!(fields.rate, dec("10.00"));
        assert_eq!(fields.amount, dec("10.00"));
    }

    #[test]
    fn bound_fields_rejects_unparseable_rate() {
        let entry = CatalogEntry {
            id: 3,
            name: "Binding Wire".to_string(),
            unit_rate: "n/a".to_string(),
        };
        let error = bound_fields(&entry).expect_err("rate is not a number");
        assert!(matches!(error, TableError::RateParse { id: 3, .. }));
    }

    #[test]
    fn quantity_edit_recomputes_amount_exactly() {
        let mut row = LineItem::placeholder(1);
        row = apply_bind(&row, bound_fields(&cement()).unwrap());
        let edited = apply_edit(&row, &ItemEdit::Quantity(Some(dec("5"))));
        assert_eq!(edited.quantity, dec("5"));
        assert_eq!(edited.amount, dec("50.00"));
        assert_eq!(edited.rate, dec("10.00"));
    }

    #[test]
    fn cleared_quantity_normalizes_to_one_unit() {
        assert_eq!(normalize_quantity(None), Decimal::ONE);
        assert_eq!(normalize_quantity(Some(Decimal::ZERO)), Decimal::ONE);
        assert_eq!(normalize_quantity(Some(dec("2.5"))), dec("2.5"));
    }

    #[test]
    fn toggles_do_not_touch_derived_fields() {
        let row = apply_bind(
            &LineItem::placeholder(1),
            bound_fields(&cement()).unwrap(),
        );
        let toggled = apply_edit(&row, &ItemEdit::Chargeable(true));
        assert!(toggled.chargeable);
        assert_eq!(toggled.rate, row.rate);
        assert_eq!(toggled.amount, row.amount);
        assert_eq!(toggled.quantity, row.quantity);
    }

    #[test]
    fn rebind_keeps_quantity_and_resets_amount_to_baseline() {
        let sand = CatalogEntry {
            id: 2,
            name: "Sand".to_string(),
            unit_rate: "4.50".to_string(),
        };
        let mut row = apply_bind(
            &LineItem::placeholder(1),
            bound_fields(&cement()).unwrap(),
        );
        row = apply_edit(&row, &ItemEdit::Quantity(Some(dec("3"))));
        let rebound = apply_bind(&row, bound_fields(&sand).unwrap());
        assert_eq!(rebound.quantity, dec("3"));
        assert_eq!(rebound.rate, dec("4.50"));
        assert_eq!(rebound.amount, dec("4.50"));
        assert_eq!(rebound.description, "Sand");
    }
}
