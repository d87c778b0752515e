//! Posting builders for business events.
//!
//! Each builder takes the already-resolved collaborator data (bank
//! accounts, control accounts) plus the event input, and produces the
//! subledger record together with the journal lines that settle it. The
//! lines always satisfy the balance invariant before any commit is
//! requested; persistence is the store's concern.

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::PostingError;
pub use service::{
    ApPosting, ArPosting, TransferPosting, build_ap_payment, build_ar_receipt, build_transfer,
};
pub use types::{
    ApPaymentInput, ApTransaction, ArReceiptInput, ArTransaction, BankAccount, BankAccountKind,
    BankTransfer, SubledgerSource, TransferInput,
};
