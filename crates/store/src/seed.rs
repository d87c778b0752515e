//! Default chart of accounts.
//!
//! Master-data administration is outside the posting engine; the server
//! installs this chart at startup so the control accounts the engine
//! resolves by code always exist. The leaf codes for AR, AP, and the FX
//! gain/loss accounts come from configuration.

use glint_core::coa::{Account, AccountType, NormalBalance};
use glint_shared::AppResult;
use glint_shared::config::LedgerConfig;
use glint_shared::types::AccountId;

use crate::LedgerStore;

fn node(
    code: &str,
    name: &str,
    account_type: AccountType,
    parent_id: Option<AccountId>,
    is_leaf: bool,
) -> Account {
    Account {
        id: AccountId::new(),
        code: code.to_string(),
        name: name.to_string(),
        account_type,
        normal_balance: account_type.normal_balance(),
        parent_id,
        is_leaf,
        allow_manual_post: is_leaf,
    }
}

/// Installs the default chart into an empty store.
///
/// # Errors
///
/// Propagates registration failures (e.g. when called twice).
pub fn install_default_chart(store: &LedgerStore, config: &LedgerConfig) -> AppResult<()> {
    use AccountType::{Asset, Equity, Expense, Liability, Revenue};

    let assets = store.register_account(node("1", "Assets", Asset, None, false))?;
    let cash_and_bank = store.register_account(node(
        "1.1",
        "Cash & Bank",
        Asset,
        Some(assets.id),
        false,
    ))?;
    store.register_account(node("1.1.1", "Main Cash", Asset, Some(cash_and_bank.id), true))?;
    store.register_account(node(
        "1.1.2",
        "Operating Bank",
        Asset,
        Some(cash_and_bank.id),
        true,
    ))?;
    store.register_account(node(
        "1.1.3",
        "Foreign Currency Bank",
        Asset,
        Some(cash_and_bank.id),
        true,
    ))?;
    store.register_account(node(
        &config.receivable_account,
        "Accounts Receivable",
        Asset,
        Some(assets.id),
        true,
    ))?;

    let liabilities = store.register_account(node("2", "Liabilities", Liability, None, false))?;
    store.register_account(node(
        &config.payable_account,
        "Accounts Payable",
        Liability,
        Some(liabilities.id),
        true,
    ))?;

    let equity = store.register_account(node("3", "Equity", Equity, None, false))?;
    store.register_account(node("3.1", "Retained Earnings", Equity, Some(equity.id), true))?;

    let income = store.register_account(node("4", "Income", Revenue, None, false))?;
    store.register_account(node("4.1", "Sales", Revenue, Some(income.id), true))?;
    store.register_account(node(
        &config.fx_gain_account,
        "Exchange Gain",
        Revenue,
        Some(income.id),
        true,
    ))?;

    let expenses = store.register_account(node("5", "Expenses", Expense, None, false))?;
    store.register_account(node(
        "5.1",
        "Operating Expenses",
        Expense,
        Some(expenses.id),
        true,
    ))?;
    store.register_account(node(
        &config.fx_loss_account,
        "Exchange Loss",
        Expense,
        Some(expenses.id),
        true,
    ))?;

    Ok(())
}
