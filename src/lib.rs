//! # invoice-form
//!
//! Form state, derived totals, and submission for a single-invoice entry
//! form backed by an external PDF generator service.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//! The JSON wire format matches the generator endpoint: snake_case field
//! names with plain numbers for quantity, rate, and tax.
//!
//! ## Quick Start
//!
//! ```rust
//! use invoice_form::form::InvoiceForm;
//! use rust_decimal_macros::dec;
//!
//! let mut form = InvoiceForm::new();
//! form.update_field("invoice_number", "INV-042").unwrap();
//! form.update_field("invoice_date", "2024-03-05").unwrap();
//! form.update_field("seller.name", "ACME Traders").unwrap();
//! form.update_field("buyer.name", "Kunde & Co").unwrap();
//! form.update_field("line_items.0.product_name", "Widget").unwrap();
//! form.update_field("line_items.0.quantity", "2").unwrap();
//! form.update_field("line_items.0.rate_per_unit", "100").unwrap();
//! form.update_field("line_items.0.tax_percentage", "18").unwrap();
//!
//! let preview = form.preview();
//! assert_eq!(preview.display_date, "05-03-2024");
//! assert_eq!(preview.grand_total, dec!(236.00));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Invoice types, form state, derived preview |
//! | `submit` | HTTP submission to the PDF generator service |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod form;

#[cfg(feature = "submit")]
pub mod client;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
