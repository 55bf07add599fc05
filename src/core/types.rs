use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The invoice record as entered in the form and sent to the generator.
///
/// Field names are the wire format: the record is serialized verbatim as
/// the JSON body of the generate request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Invoice number; also names the downloaded PDF (`{invoice_number}.pdf`).
    pub invoice_number: String,
    /// Issue date as an ISO string ("YYYY-MM-DD"), exactly as the date
    /// input produces it. Not parsed or validated here.
    pub invoice_date: String,
    /// Issuing party.
    pub seller: Party,
    /// Receiving party.
    pub buyer: Party,
    /// Product rows. Never empty: the form guarantees at least one.
    pub line_items: Vec<LineItem>,
}

impl Invoice {
    /// A fresh invoice as the form shows it on load: empty fields and a
    /// single default line item.
    pub fn blank() -> Self {
        Self {
            line_items: vec![LineItem::default()],
            ..Self::default()
        }
    }
}

/// Seller or buyer. All fields are free text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Party {
    pub name: String,
    pub address: String,
    /// GST registration number. Optional in the form, carried as an empty
    /// string when unset.
    pub gst_number: String,
    pub phone_number: String,
}

/// One product row.
///
/// The derived amount (`quantity × rate × (1 + tax/100)`) is never stored —
/// see [`crate::core::amounts::line_amount`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_name: String,
    /// Invoiced quantity. Serialized as a plain JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    pub quantity: Decimal,
    /// Net price per unit.
    #[serde(with = "rust_decimal::serde::float")]
    pub rate_per_unit: Decimal,
    /// Tax rate percentage applied on top of quantity × rate.
    #[serde(with = "rust_decimal::serde::float")]
    pub tax_percentage: Decimal,
}

impl Default for LineItem {
    /// The defaults of a freshly appended row: quantity 1, rate 0, tax 0.
    fn default() -> Self {
        Self {
            product_name: String::new(),
            quantity: Decimal::ONE,
            rate_per_unit: Decimal::ZERO,
            tax_percentage: Decimal::ZERO,
        }
    }
}
