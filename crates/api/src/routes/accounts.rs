//! Chart-of-accounts read endpoints.
//!
//! Account administration happens through seeding; the API only reads.

use axum::extract::{Path, State};
use axum::{Json, Router, routing::get};
use glint_core::coa::Account;
use serde::Serialize;

use crate::AppState;
use crate::error::ApiError;

/// Response for a single account.
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    /// Account ID.
    pub id: String,
    /// Unique account code.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Classification.
    #[serde(rename = "type")]
    pub account_type: glint_core::coa::AccountType,
    /// Normal balance side.
    pub normal_balance: glint_core::coa::NormalBalance,
    /// Parent account ID, if any.
    pub parent_id: Option<String>,
    /// Whether this node has no children.
    pub is_leaf: bool,
    /// Whether journal lines may target this account.
    pub allow_manual_post: bool,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id.to_string(),
            code: account.code,
            name: account.name,
            account_type: account.account_type,
            normal_balance: account.normal_balance,
            parent_id: account.parent_id.map(|id| id.to_string()),
            is_leaf: account.is_leaf,
            allow_manual_post: account.allow_manual_post,
        }
    }
}

/// GET `/accounts` - List the chart ordered by code.
async fn list_accounts(State(state): State<AppState>) -> Result<Json<Vec<AccountResponse>>, ApiError> {
    let accounts = state.store.list_accounts()?;
    Ok(Json(accounts.into_iter().map(AccountResponse::from).collect()))
}

/// GET `/accounts/{code}` - Fetch one account by code.
async fn get_account(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<AccountResponse>, ApiError> {
    let account = state.store.account_by_code(&code)?;
    Ok(Json(account.into()))
}

/// Creates the account routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/accounts", get(list_accounts))
        .route("/accounts/{code}", get(get_account))
}
