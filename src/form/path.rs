//! Dot-separated field paths addressing invoice fields, in the same shape
//! the form inputs are named: `"invoice_number"`, `"seller.gst_number"`,
//! `"line_items.2.quantity"`.

use crate::core::FormError;

/// A parsed field path into the invoice record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPath {
    InvoiceNumber,
    InvoiceDate,
    Party(PartyRole, PartyField),
    LineItem(usize, LineItemField),
}

/// Which party a path addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartyRole {
    Seller,
    Buyer,
}

/// Fields of a party section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartyField {
    Name,
    Address,
    GstNumber,
    PhoneNumber,
}

/// Fields of a line item row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineItemField {
    ProductName,
    Quantity,
    RatePerUnit,
    TaxPercentage,
}

impl FieldPath {
    /// Parse a dot-separated path string.
    pub fn parse(path: &str) -> Result<Self, FormError> {
        let unknown = || FormError::UnknownField(path.to_string());

        let mut segments = path.split('.');
        let head = segments.next().ok_or_else(unknown)?;

        let parsed = match head {
            "invoice_number" => Self::InvoiceNumber,
            "invoice_date" => Self::InvoiceDate,
            "seller" | "buyer" => {
                let role = if head == "seller" {
                    PartyRole::Seller
                } else {
                    PartyRole::Buyer
                };
                let field = match segments.next().ok_or_else(unknown)? {
                    "name" => PartyField::Name,
                    "address" => PartyField::Address,
                    "gst_number" => PartyField::GstNumber,
                    "phone_number" => PartyField::PhoneNumber,
                    _ => return Err(unknown()),
                };
                Self::Party(role, field)
            }
            "line_items" => {
                let index: usize = segments
                    .next()
                    .and_then(|s| s.parse().ok())
                    .ok_or_else(unknown)?;
                let field = match segments.next().ok_or_else(unknown)? {
                    "product_name" => LineItemField::ProductName,
                    "quantity" => LineItemField::Quantity,
                    "rate_per_unit" => LineItemField::RatePerUnit,
                    "tax_percentage" => LineItemField::TaxPercentage,
                    _ => return Err(unknown()),
                };
                Self::LineItem(index, field)
            }
            _ => return Err(unknown()),
        };

        // Trailing segments make the path invalid
        if segments.next().is_some() {
            return Err(unknown());
        }
        Ok(parsed)
    }
}
