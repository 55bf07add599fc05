use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::path::{FieldPath, LineItemField, PartyField, PartyRole};
use super::preview::InvoicePreview;
use crate::core::{grand_total, FormError, Invoice, LineItem};

/// Mutable state of the invoice entry form.
///
/// Owns one [`Invoice`] and guarantees its single structural invariant:
/// `line_items` is never empty. Edits are addressed by the same
/// dot-separated paths the form inputs are named with.
///
/// ```
/// use invoice_form::form::InvoiceForm;
///
/// let mut form = InvoiceForm::new();
/// form.update_field("line_items.0.quantity", "3").unwrap();
/// form.add_line_item();
/// assert_eq!(form.invoice().line_items.len(), 2);
/// assert!(form.remove_line_item(0).is_err());
/// form.remove_line_item(1).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct InvoiceForm {
    invoice: Invoice,
}

impl Default for InvoiceForm {
    fn default() -> Self {
        Self::new()
    }
}

impl InvoiceForm {
    /// A pristine form: empty fields, one default line item.
    pub fn new() -> Self {
        Self {
            invoice: Invoice::blank(),
        }
    }

    /// Start from an existing record, e.g. to re-edit a submitted invoice.
    /// An empty line-item list is repaired to the single default row.
    pub fn with_invoice(mut invoice: Invoice) -> Self {
        if invoice.line_items.is_empty() {
            invoice.line_items.push(LineItem::default());
        }
        Self { invoice }
    }

    /// The current record.
    pub fn invoice(&self) -> &Invoice {
        &self.invoice
    }

    /// Consume the form, yielding the record for submission.
    pub fn into_invoice(self) -> Invoice {
        self.invoice
    }

    /// Write `value` into the field addressed by `path`.
    ///
    /// String fields take the value verbatim. The numeric line-item fields
    /// (quantity, rate, tax) coerce through [`Decimal`]; input that does not
    /// parse leaves the field unchanged and returns
    /// [`FormError::NumberFormat`].
    pub fn update_field(&mut self, path: &str, value: &str) -> Result<(), FormError> {
        match FieldPath::parse(path)? {
            FieldPath::InvoiceNumber => self.invoice.invoice_number = value.to_string(),
            FieldPath::InvoiceDate => self.invoice.invoice_date = value.to_string(),
            FieldPath::Party(role, field) => {
                let party = match role {
                    PartyRole::Seller => &mut self.invoice.seller,
                    PartyRole::Buyer => &mut self.invoice.buyer,
                };
                let slot = match field {
                    PartyField::Name => &mut party.name,
                    PartyField::Address => &mut party.address,
                    PartyField::GstNumber => &mut party.gst_number,
                    PartyField::PhoneNumber => &mut party.phone_number,
                };
                *slot = value.to_string();
            }
            FieldPath::LineItem(index, field) => {
                let len = self.invoice.line_items.len();
                let item = self
                    .invoice
                    .line_items
                    .get_mut(index)
                    .ok_or(FormError::LineItemOutOfRange { index, len })?;
                match field {
                    LineItemField::ProductName => item.product_name = value.to_string(),
                    LineItemField::Quantity => item.quantity = coerce_number(path, value)?,
                    LineItemField::RatePerUnit => {
                        item.rate_per_unit = coerce_number(path, value)?
                    }
                    LineItemField::TaxPercentage => {
                        item.tax_percentage = coerce_number(path, value)?
                    }
                }
            }
        }
        Ok(())
    }

    /// Write the invoice date from a typed date, formatted as ISO.
    pub fn set_invoice_date(&mut self, date: NaiveDate) {
        self.invoice.invoice_date = date.format("%Y-%m-%d").to_string();
    }

    /// Append a line item with the default values
    /// `{product_name: "", quantity: 1, rate_per_unit: 0, tax_percentage: 0}`.
    pub fn add_line_item(&mut self) {
        self.invoice.line_items.push(LineItem::default());
    }

    /// Remove the line item at `index`.
    ///
    /// Index 0 is always rejected — the form renders no remove control for
    /// the first row — so the invoice keeps at least one line item.
    pub fn remove_line_item(&mut self, index: usize) -> Result<(), FormError> {
        if index == 0 {
            return Err(FormError::ProtectedLineItem);
        }
        let len = self.invoice.line_items.len();
        if index >= len {
            return Err(FormError::LineItemOutOfRange { index, len });
        }
        self.invoice.line_items.remove(index);
        Ok(())
    }

    /// Current grand total, recomputed from the line items.
    pub fn grand_total(&self) -> Decimal {
        grand_total(&self.invoice)
    }

    /// Derive the render-ready preview from the current state.
    pub fn preview(&self) -> InvoicePreview {
        InvoicePreview::of(&self.invoice)
    }

    /// Discard all edits, returning to the pristine single-line form.
    pub fn reset(&mut self) {
        self.invoice = Invoice::blank();
    }
}

fn coerce_number(field: &str, value: &str) -> Result<Decimal, FormError> {
    Decimal::from_str(value.trim()).map_err(|_| FormError::NumberFormat {
        field: field.to_string(),
        value: value.to_string(),
    })
}
