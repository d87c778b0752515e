//! Balanced GL journal construction.
//!
//! This module implements the core double-entry contract:
//! - Journal and line aggregates with strongly-typed subledger links
//! - Pure validation of lines against the zero-sum balance invariant
//! - Reversing-journal construction for corrections

pub mod error;
pub mod reversal;
pub mod types;
pub mod validation;

#[cfg(test)]
mod validation_props;

pub use error::JournalError;
pub use reversal::reversing_lines;
pub use types::{Journal, JournalLine, JournalSource, LineInput};
pub use validation::validate_lines;
