//! Voucher number series and formatting.
//!
//! Each journal source posts into its own named series; the backing counter
//! (an atomic fetch-and-increment, supplied by the store) guarantees that
//! no two mints of the same series ever return the same value. Formatting
//! here only turns the minted value into the human-readable voucher number.

use crate::journal::JournalSource;

/// Returns the voucher series a journal source mints from.
#[must_use]
pub const fn voucher_series(source: &JournalSource) -> &'static str {
    match source {
        JournalSource::ArReceipt(_) => "RCPT",
        JournalSource::ApPayment(_) => "PAY",
        JournalSource::BankTransfer(_) => "TRF",
        JournalSource::FxRevaluation(_) => "REVAL",
        JournalSource::Reversal(_) => "RJV",
        JournalSource::Manual => "JV",
    }
}

/// Formats a minted counter value as a voucher number, e.g. `RCPT-000042`.
#[must_use]
pub fn format_voucher(series: &str, value: u64) -> String {
    format!("{series}-{value:06}")
}
