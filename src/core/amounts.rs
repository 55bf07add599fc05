//! Derived monetary values.
//!
//! Amounts are never stored on the invoice; they are recomputed from the
//! line items whenever the preview renders.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::types::{Invoice, LineItem};

/// Gross amount of one line: `quantity × rate × (1 + tax / 100)`.
///
/// Returned unrounded; use [`display_amount`] for rendering.
pub fn line_amount(item: &LineItem) -> Decimal {
    item.quantity * item.rate_per_unit * (Decimal::ONE + item.tax_percentage / dec!(100))
}

/// Sum of all line amounts.
pub fn grand_total(invoice: &Invoice) -> Decimal {
    invoice.line_items.iter().map(line_amount).sum()
}

/// Round a derived amount to 2 decimal places for display.
pub fn display_amount(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}
