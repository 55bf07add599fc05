//! Render-ready view of the invoice, recomputed from scratch on every call.

use rust_decimal::Decimal;

use crate::core::{display_amount, line_amount, Invoice};

/// Rewrite an ISO date string ("YYYY-MM-DD") to display form ("DD-MM-YYYY").
///
/// Empty input yields an empty string. Input is not validated: the segments
/// around '-' are swapped as-is, matching the date input's contract that
/// only well-formed ISO strings reach this function.
pub fn format_date(iso: &str) -> String {
    if iso.is_empty() {
        return String::new();
    }
    let mut parts = iso.splitn(3, '-');
    let year = parts.next().unwrap_or_default();
    let month = parts.next().unwrap_or_default();
    let day = parts.next().unwrap_or_default();
    format!("{day}-{month}-{year}")
}

/// One row of the preview table.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewRow {
    /// 1-based position, as the table numbers its rows.
    pub position: usize,
    pub product_name: String,
    pub quantity: Decimal,
    /// Rate rounded to 2 decimal places for display.
    pub rate_per_unit: Decimal,
    /// Tax percentage rounded to 2 decimal places for display.
    pub tax_percentage: Decimal,
    /// Derived gross amount, rounded to 2 decimal places.
    pub amount: Decimal,
}

/// The derived preview: formatted date, per-line amounts, grand total.
///
/// Never cached — build one from the invoice whenever the view renders.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoicePreview {
    pub invoice_number: String,
    /// Invoice date in "DD-MM-YYYY" display form.
    pub display_date: String,
    pub rows: Vec<PreviewRow>,
    /// Sum of the unrounded line amounts, rounded once at the end.
    pub grand_total: Decimal,
}

impl InvoicePreview {
    /// Derive the preview from the current invoice state.
    pub fn of(invoice: &Invoice) -> Self {
        let rows = invoice
            .line_items
            .iter()
            .enumerate()
            .map(|(i, item)| PreviewRow {
                position: i + 1,
                product_name: item.product_name.clone(),
                quantity: item.quantity,
                rate_per_unit: display_amount(item.rate_per_unit),
                tax_percentage: display_amount(item.tax_percentage),
                amount: display_amount(line_amount(item)),
            })
            .collect();

        let grand_total = display_amount(invoice.line_items.iter().map(line_amount).sum());

        Self {
            invoice_number: invoice.invoice_number.clone(),
            display_date: format_date(&invoice.invoice_date),
            rows,
            grand_total,
        }
    }
}
