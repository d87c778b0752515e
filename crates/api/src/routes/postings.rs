//! Posting endpoints: AR receipts, AP payments, bank transfers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Json, Router, routing::post};
use chrono::{NaiveDate, Utc};
use glint_core::posting::{ApPaymentInput, ArReceiptInput, TransferInput};
use glint_shared::types::{BankAccountId, CustomerId, SupplierId};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::AppState;
use crate::error::ApiError;
use crate::routes::journals::journal_response;

/// Request body for posting a customer receipt.
#[derive(Debug, Deserialize)]
pub struct ReceiptRequest {
    /// The bank account receiving the funds.
    pub bank_account_id: Uuid,
    /// The paying customer.
    pub customer_id: Uuid,
    /// Received amount (> 0).
    pub amount: Decimal,
    /// Currency of the receipt.
    pub currency: String,
    /// Exchange rate to functional currency.
    pub exchange_rate: Decimal,
    /// The settled sales invoice.
    pub invoice_id: String,
    /// Business date; defaults to today.
    pub txn_date: Option<NaiveDate>,
    /// Free-form remarks.
    pub remarks: Option<String>,
}

/// Request body for posting a supplier payment.
#[derive(Debug, Deserialize)]
pub struct PaymentRequest {
    /// The bank account paying out.
    pub bank_account_id: Uuid,
    /// The supplier being paid.
    pub supplier_id: Uuid,
    /// Paid amount (> 0).
    pub amount: Decimal,
    /// Currency of the payment.
    pub currency: String,
    /// Exchange rate to functional currency.
    pub exchange_rate: Decimal,
    /// The settled purchase invoice.
    pub invoice_id: String,
    /// Business date; defaults to today.
    pub txn_date: Option<NaiveDate>,
    /// Free-form remarks.
    pub remarks: Option<String>,
}

/// Request body for posting a bank-to-bank transfer.
#[derive(Debug, Deserialize)]
pub struct TransferRequest {
    /// Source bank account.
    pub from_bank_account_id: Uuid,
    /// Destination bank account.
    pub to_bank_account_id: Uuid,
    /// Amount leaving the source (> 0).
    pub amount_from: Decimal,
    /// Currency of the source leg.
    pub currency_from: String,
    /// Rate of the source leg.
    pub exchange_rate_from: Decimal,
    /// Amount arriving at the destination (> 0).
    pub amount_to: Decimal,
    /// Currency of the destination leg.
    pub currency_to: String,
    /// Rate of the destination leg.
    pub exchange_rate_to: Decimal,
    /// Business date; defaults to today.
    pub txn_date: Option<NaiveDate>,
    /// Free-form remarks.
    pub remarks: Option<String>,
}

fn default_date(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Utc::now().date_naive())
}

/// POST `/receipts` - Post an AR receipt.
async fn post_receipt(
    State(state): State<AppState>,
    Json(payload): Json<ReceiptRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let posted = state.store.post_ar_receipt(ArReceiptInput {
        bank_account_id: BankAccountId::from_uuid(payload.bank_account_id),
        customer_id: CustomerId::from_uuid(payload.customer_id),
        amount: payload.amount,
        currency: payload.currency,
        exchange_rate: payload.exchange_rate,
        invoice_id: payload.invoice_id,
        txn_date: default_date(payload.txn_date),
        remarks: payload.remarks,
    })?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "transaction": posted.txn,
            "journal": journal_response(&state, &posted.journal),
        })),
    ))
}

/// POST `/payments` - Post an AP payment.
async fn post_payment(
    State(state): State<AppState>,
    Json(payload): Json<PaymentRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let posted = state.store.post_ap_payment(ApPaymentInput {
        bank_account_id: BankAccountId::from_uuid(payload.bank_account_id),
        supplier_id: SupplierId::from_uuid(payload.supplier_id),
        amount: payload.amount,
        currency: payload.currency,
        exchange_rate: payload.exchange_rate,
        invoice_id: payload.invoice_id,
        txn_date: default_date(payload.txn_date),
        remarks: payload.remarks,
    })?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "transaction": posted.txn,
            "journal": journal_response(&state, &posted.journal),
        })),
    ))
}

/// POST `/transfers` - Post a bank-to-bank transfer.
async fn post_transfer(
    State(state): State<AppState>,
    Json(payload): Json<TransferRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let posted = state.store.post_transfer(TransferInput {
        from_bank_account_id: BankAccountId::from_uuid(payload.from_bank_account_id),
        to_bank_account_id: BankAccountId::from_uuid(payload.to_bank_account_id),
        amount_from: payload.amount_from,
        currency_from: payload.currency_from,
        exchange_rate_from: payload.exchange_rate_from,
        amount_to: payload.amount_to,
        currency_to: payload.currency_to,
        exchange_rate_to: payload.exchange_rate_to,
        txn_date: default_date(payload.txn_date),
        remarks: payload.remarks,
    })?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "transaction": posted.txn,
            "journal": journal_response(&state, &posted.journal),
        })),
    ))
}

/// Creates the posting routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/receipts", post(post_receipt))
        .route("/payments", post(post_payment))
        .route("/transfers", post(post_transfer))
}
