//! Property-based tests for the derived arithmetic and the line-item
//! invariant.
//!
//! Run with: `cargo test --test proptest_tests`

use invoice_form::core::{grand_total, line_amount, Invoice, LineItem};
use invoice_form::form::InvoiceForm;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ── Proptest Strategies ─────────────────────────────────────────────────────

/// Generate a reasonable price (0.00 to 99999.99).
fn arb_price() -> impl Strategy<Value = Decimal> {
    (0u64..10_000_000u64).prop_map(|cents| Decimal::new(cents as i64, 2))
}

/// Generate a reasonable quantity (1 to 100).
fn arb_quantity() -> impl Strategy<Value = Decimal> {
    (1u32..=100u32).prop_map(Decimal::from)
}

/// Generate a tax percentage (0.00% to 40.00%).
fn arb_tax() -> impl Strategy<Value = Decimal> {
    (0u32..=4000u32).prop_map(|basis| Decimal::new(basis as i64, 2))
}

fn arb_line() -> impl Strategy<Value = LineItem> {
    (arb_quantity(), arb_price(), arb_tax()).prop_map(|(quantity, rate, tax)| LineItem {
        product_name: "item".into(),
        quantity,
        rate_per_unit: rate,
        tax_percentage: tax,
    })
}

fn invoice_with(lines: Vec<LineItem>) -> Invoice {
    Invoice {
        line_items: lines,
        ..Invoice::blank()
    }
}

// ── Properties ──────────────────────────────────────────────────────────────

proptest! {
    /// amount = q · r · (1 + t/100), computed exactly.
    #[test]
    fn amount_matches_formula(line in arb_line()) {
        let expected = line.quantity * line.rate_per_unit
            * (dec!(1) + line.tax_percentage / dec!(100));
        prop_assert_eq!(line_amount(&line), expected);
    }

    /// The grand total is the sum of the per-line amounts.
    #[test]
    fn grand_total_is_sum_of_amounts(lines in prop::collection::vec(arb_line(), 1..20)) {
        let invoice = invoice_with(lines.clone());
        let sum: Decimal = lines.iter().map(line_amount).sum();
        prop_assert_eq!(grand_total(&invoice), sum);
    }

    /// Amounts scale linearly in quantity.
    #[test]
    fn amount_is_linear_in_quantity(line in arb_line()) {
        let mut doubled = line.clone();
        doubled.quantity *= dec!(2);
        prop_assert_eq!(line_amount(&doubled), line_amount(&line) * dec!(2));
    }

    /// Adding a row always grows the list by exactly one default item.
    #[test]
    fn add_line_item_grows_by_one(lines in prop::collection::vec(arb_line(), 1..10)) {
        let mut form = InvoiceForm::with_invoice(invoice_with(lines));
        let before = form.invoice().line_items.len();
        form.add_line_item();
        prop_assert_eq!(form.invoice().line_items.len(), before + 1);
        prop_assert_eq!(form.invoice().line_items.last().unwrap(), &LineItem::default());
    }

    /// No sequence of removals can empty the list: index 0 is never removable.
    #[test]
    fn removals_never_empty_the_list(
        lines in prop::collection::vec(arb_line(), 1..10),
        removals in prop::collection::vec(0usize..12, 0..30),
    ) {
        let mut form = InvoiceForm::with_invoice(invoice_with(lines));
        for index in removals {
            let len = form.invoice().line_items.len();
            let result = form.remove_line_item(index);
            if index == 0 || index >= len {
                prop_assert!(result.is_err());
                prop_assert_eq!(form.invoice().line_items.len(), len);
            } else {
                prop_assert!(result.is_ok());
                prop_assert_eq!(form.invoice().line_items.len(), len - 1);
            }
            prop_assert!(!form.invoice().line_items.is_empty());
        }
    }

    /// Serialization round-trips the record unchanged.
    #[test]
    fn json_roundtrip(lines in prop::collection::vec(arb_line(), 1..10)) {
        let invoice = invoice_with(lines);
        let json = serde_json::to_string(&invoice).unwrap();
        let back: Invoice = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, invoice);
    }
}
