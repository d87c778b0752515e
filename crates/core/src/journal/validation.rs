//! Pure validation of journal lines against the balance invariant.
//!
//! Validation runs before the unit of work is opened, so the invariant is
//! testable without any storage. A journal that fails any check here is
//! rejected in its entirety; nothing is written and no voucher number is
//! consumed.

use glint_shared::types::{AccountId, round2, to_local};
use rust_decimal::Decimal;

use super::error::JournalError;
use super::types::{JournalLine, LineInput};
use crate::coa::Account;

/// Validates line inputs and resolves their functional-currency amounts.
///
/// Per line:
/// - the account must resolve to a postable leaf;
/// - debit and credit must be non-negative and not both positive;
/// - the currency must be non-empty and the exchange rate non-negative;
/// - a monetary line (exactly one side positive) gets
///   `local_amount = round2((debit - credit) * exchange_rate)`; a supplied
///   value is rounded and must agree with the computed one;
/// - an adjustment line (both sides zero) must supply a non-zero local
///   amount.
///
/// Finally the zero-sum invariant is checked: `round2(sum of local
/// amounts)` must be exactly zero, otherwise the whole journal is rejected.
///
/// # Errors
///
/// Returns the first violated rule as a [`JournalError`].
pub fn validate_lines<A>(
    lines: &[LineInput],
    resolve_account: A,
) -> Result<Vec<JournalLine>, JournalError>
where
    A: Fn(AccountId) -> Option<Account>,
{
    if lines.is_empty() {
        return Err(JournalError::Empty);
    }

    let mut validated = Vec::with_capacity(lines.len());

    for (line_no, input) in (1u32..).zip(lines) {
        if input.debit.is_sign_negative() || input.credit.is_sign_negative() {
            return Err(JournalError::NegativeAmount { line_no });
        }
        if input.debit > Decimal::ZERO && input.credit > Decimal::ZERO {
            return Err(JournalError::BothSides { line_no });
        }
        if input.currency.trim().is_empty() {
            return Err(JournalError::EmptyCurrency { line_no });
        }
        if input.exchange_rate.is_sign_negative() {
            return Err(JournalError::NegativeExchangeRate { line_no });
        }

        let account = resolve_account(input.account_id).ok_or(JournalError::AccountNotFound {
            line_no,
            account_id: input.account_id,
        })?;
        if !account.is_postable() {
            return Err(JournalError::AccountNotPostable {
                line_no,
                code: account.code,
            });
        }

        let local_amount = if input.debit.is_zero() && input.credit.is_zero() {
            // Adjustment line: only the functional-currency value moves.
            let supplied = input
                .local_amount
                .map(round2)
                .ok_or(JournalError::ZeroLine { line_no })?;
            if supplied.is_zero() {
                return Err(JournalError::ZeroLine { line_no });
            }
            supplied
        } else {
            let computed = to_local(input.debit - input.credit, input.exchange_rate);
            if let Some(supplied) = input.local_amount {
                let supplied = round2(supplied);
                if supplied != computed {
                    return Err(JournalError::LocalAmountMismatch {
                        line_no,
                        supplied,
                        computed,
                    });
                }
            }
            computed
        };

        validated.push(JournalLine {
            line_no,
            account_id: input.account_id,
            debit: input.debit,
            credit: input.credit,
            currency: input.currency.clone(),
            exchange_rate: input.exchange_rate,
            local_amount,
            link: input.link,
            memo: input.memo.clone(),
        });
    }

    let net = round2(validated.iter().map(|line| line.local_amount).sum());
    if !net.is_zero() {
        return Err(JournalError::Unbalanced { net });
    }

    Ok(validated)
}
