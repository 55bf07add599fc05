//! The invoice form controller.
//!
//! [`InvoiceForm`] owns the invoice record, applies field edits addressed by
//! dot-separated paths, maintains the non-empty line-item invariant, and
//! derives the preview (formatted date, per-line amounts, grand total) on
//! demand.

mod path;
mod preview;
mod state;

pub use path::{FieldPath, LineItemField, PartyField, PartyRole};
pub use preview::{format_date, InvoicePreview, PreviewRow};
pub use state::InvoiceForm;
