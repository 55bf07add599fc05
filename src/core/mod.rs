//! Core invoice types and derived arithmetic.
//!
//! This module provides the data model for the invoice entry form and the
//! pure functions that derive per-line amounts and the grand total.

pub mod amounts;
mod error;
mod types;

pub use amounts::{display_amount, grand_total, line_amount};
pub use error::*;
pub use types::*;
