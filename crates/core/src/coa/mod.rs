//! Chart of Accounts domain types.
//!
//! The chart is a tree of ledger accounts maintained by administrative
//! setup and read-only to the posting engine. The one rule the engine
//! enforces everywhere is postability: only leaf accounts that allow
//! manual posting may ever appear on a GL journal line.

use glint_shared::types::AccountId;
use serde::{Deserialize, Serialize};

/// Ledger account classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    /// Asset account.
    Asset,
    /// Liability account.
    Liability,
    /// Equity account.
    Equity,
    /// Revenue account.
    Revenue,
    /// Expense account.
    Expense,
}

impl AccountType {
    /// The side on which balances of this account type normally sit.
    #[must_use]
    pub const fn normal_balance(self) -> NormalBalance {
        match self {
            Self::Asset | Self::Expense => NormalBalance::Debit,
            Self::Liability | Self::Equity | Self::Revenue => NormalBalance::Credit,
        }
    }
}

/// The normal balance side of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalBalance {
    /// Balance normally sits on the debit side.
    Debit,
    /// Balance normally sits on the credit side.
    Credit,
}

/// A Chart-of-Accounts node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier.
    pub id: AccountId,
    /// Unique human-readable code, e.g. "1.1.2".
    pub code: String,
    /// Display name.
    pub name: String,
    /// Account classification.
    pub account_type: AccountType,
    /// Normal balance side.
    pub normal_balance: NormalBalance,
    /// Parent node (tree edge only, no cycles).
    pub parent_id: Option<AccountId>,
    /// Whether this node has no children.
    pub is_leaf: bool,
    /// Whether journal lines may target this account directly.
    pub allow_manual_post: bool,
}

impl Account {
    /// Returns true if GL journal lines may post to this account.
    ///
    /// A non-leaf account can never be a posting target, whatever its
    /// `allow_manual_post` flag says.
    #[must_use]
    pub fn is_postable(&self) -> bool {
        self.is_leaf && self.allow_manual_post
    }
}
