use thiserror::Error;

/// Errors that can occur while editing the invoice form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FormError {
    /// The field path does not name a known invoice field.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// The path addressed a line item index that does not exist.
    #[error("line item index {index} out of range (have {len})")]
    LineItemOutOfRange { index: usize, len: usize },

    /// The first line item can never be removed; the invoice always keeps
    /// at least one row.
    #[error("line item 0 cannot be removed")]
    ProtectedLineItem,

    /// A numeric field received input that does not parse as a decimal.
    #[error("invalid number for {field}: {value:?}")]
    NumberFormat { field: String, value: String },
}
