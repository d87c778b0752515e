//! Shared domain-neutral types.

pub mod id;
pub mod money;
pub mod pagination;

pub use id::{
    AccountId, ApTransactionId, ArTransactionId, BankAccountId, CustomerId, JournalId,
    RevaluationId, SupplierId, TransferId,
};
pub use money::{round2, to_local};
pub use pagination::{PageMeta, PageRequest, PageResponse};
