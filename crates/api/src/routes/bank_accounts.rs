//! Bank account (payment method) endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Json, Router, routing::delete, routing::get, routing::post};
use glint_core::posting::{BankAccount, BankAccountKind};
use glint_shared::types::BankAccountId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::AppState;
use crate::error::ApiError;
use glint_store::CreateBankAccountInput;

/// Request body for creating a bank account.
#[derive(Debug, Deserialize)]
pub struct CreateBankAccountRequest {
    /// Unique short code, e.g. "BANK-USD".
    pub code: String,
    /// Display name.
    pub name: String,
    /// Payment method classification.
    pub kind: BankAccountKind,
    /// Declared currency.
    pub currency: String,
    /// Code of the COA leaf this method posts to.
    pub ledger_account_code: String,
}

/// Response for a bank account.
#[derive(Debug, Serialize)]
pub struct BankAccountResponse {
    /// Bank account ID.
    pub id: String,
    /// Unique short code.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Payment method classification.
    pub kind: BankAccountKind,
    /// Declared currency.
    pub currency: String,
    /// Linked ledger account ID.
    pub ledger_account_id: String,
    /// Whether new postings are accepted.
    pub is_active: bool,
}

impl From<BankAccount> for BankAccountResponse {
    fn from(bank_account: BankAccount) -> Self {
        Self {
            id: bank_account.id.to_string(),
            code: bank_account.code,
            name: bank_account.name,
            kind: bank_account.kind,
            currency: bank_account.currency,
            ledger_account_id: bank_account.ledger_account_id.to_string(),
            is_active: bank_account.is_active,
        }
    }
}

/// POST `/bank-accounts` - Create a bank account.
async fn create_bank_account(
    State(state): State<AppState>,
    Json(payload): Json<CreateBankAccountRequest>,
) -> Result<(StatusCode, Json<BankAccountResponse>), ApiError> {
    let bank_account = state.store.create_bank_account(CreateBankAccountInput {
        code: payload.code,
        name: payload.name,
        kind: payload.kind,
        currency: payload.currency,
        ledger_account_code: payload.ledger_account_code,
    })?;
    Ok((StatusCode::CREATED, Json(bank_account.into())))
}

/// GET `/bank-accounts` - List bank accounts ordered by code.
async fn list_bank_accounts(
    State(state): State<AppState>,
) -> Result<Json<Vec<BankAccountResponse>>, ApiError> {
    let bank_accounts = state.store.list_bank_accounts()?;
    Ok(Json(
        bank_accounts
            .into_iter()
            .map(BankAccountResponse::from)
            .collect(),
    ))
}

/// GET `/bank-accounts/{id}` - Fetch one bank account.
async fn get_bank_account(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BankAccountResponse>, ApiError> {
    let bank_account = state.store.bank_account(BankAccountId::from_uuid(id))?;
    Ok(Json(bank_account.into()))
}

/// DELETE `/bank-accounts/{id}` - Soft-deactivate a bank account.
///
/// Historical journals keep referencing the linked ledger account, so the
/// record is never removed; it only stops accepting postings.
async fn deactivate_bank_account(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BankAccountResponse>, ApiError> {
    let bank_account = state.store.deactivate_bank_account(BankAccountId::from_uuid(id))?;
    Ok(Json(bank_account.into()))
}

/// Creates the bank account routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/bank-accounts", post(create_bank_account))
        .route("/bank-accounts", get(list_bank_accounts))
        .route("/bank-accounts/{id}", get(get_bank_account))
        .route("/bank-accounts/{id}", delete(deactivate_bank_account))
}
