//! Property-based tests for the posting builders.
//!
//! - Every built posting validates and nets to zero in functional currency.
//! - A transfer books two lines exactly when `diff == 0`, three otherwise,
//!   and the FX line's sign always matches the sign of `diff`.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::service::{build_ar_receipt, build_transfer};
use super::types::{ArReceiptInput, BankAccount, BankAccountKind, TransferInput};
use crate::coa::{Account, AccountType, NormalBalance};
use crate::journal::validate_lines;
use glint_shared::types::{AccountId, BankAccountId, CustomerId, round2, to_local};

fn leaf(id: AccountId) -> Account {
    Account {
        id,
        code: "1.1.2".to_string(),
        name: "Operating Bank".to_string(),
        account_type: AccountType::Asset,
        normal_balance: NormalBalance::Debit,
        parent_id: None,
        is_leaf: true,
        allow_manual_post: true,
    }
}

fn bank(currency: &str) -> BankAccount {
    BankAccount {
        id: BankAccountId::new(),
        code: format!("BANK-{currency}"),
        name: format!("Bank {currency}"),
        kind: BankAccountKind::Bank,
        currency: currency.to_string(),
        ledger_account_id: AccountId::new(),
        is_active: true,
    }
}

fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..10_000i64).prop_map(|v| Decimal::new(v, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// An AR receipt of amount A at rate R produces exactly two lines
    /// whose local amounts are +round2(A*R) and -round2(A*R).
    #[test]
    fn prop_ar_receipt_totals(amount in positive_amount(), rate in positive_rate()) {
        let bank = bank("USD");
        let receivable = leaf(AccountId::new());
        let input = ArReceiptInput {
            bank_account_id: bank.id,
            customer_id: CustomerId::new(),
            amount,
            currency: "USD".to_string(),
            exchange_rate: rate,
            invoice_id: "INV-1".to_string(),
            txn_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            remarks: None,
        };

        let posting = build_ar_receipt(&input, &bank, &receivable).unwrap();
        prop_assert_eq!(posting.lines.len(), 2);

        let validated = validate_lines(&posting.lines, |id| Some(leaf(id))).unwrap();
        let expected = to_local(amount, rate);
        prop_assert_eq!(validated[0].local_amount, expected);
        prop_assert_eq!(validated[1].local_amount, -expected);
        prop_assert_eq!(posting.txn.local_amount, expected);
    }

    /// Transfer line count follows `diff`, the FX line's sign matches it,
    /// and the journal always validates.
    #[test]
    fn prop_transfer_lines_follow_diff(
        amount_from in positive_amount(),
        rate_from in positive_rate(),
        amount_to in positive_amount(),
        rate_to in positive_rate(),
    ) {
        let (from, to) = (bank("USD"), bank("EUR"));
        let fx_gain = leaf(AccountId::new());
        let fx_loss = leaf(AccountId::new());
        let input = TransferInput {
            from_bank_account_id: from.id,
            to_bank_account_id: to.id,
            amount_from,
            currency_from: "USD".to_string(),
            exchange_rate_from: rate_from,
            amount_to,
            currency_to: "EUR".to_string(),
            exchange_rate_to: rate_to,
            txn_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            remarks: None,
        };

        let posting = build_transfer(&input, &from, &to, &fx_gain, &fx_loss, "INR").unwrap();
        let diff = round2(to_local(amount_to, rate_to) - to_local(amount_from, rate_from));
        prop_assert_eq!(posting.txn.diff, diff);

        if diff.is_zero() {
            prop_assert_eq!(posting.lines.len(), 2);
        } else {
            prop_assert_eq!(posting.lines.len(), 3);
            let fx_line = &posting.lines[2];
            if diff > Decimal::ZERO {
                prop_assert_eq!(fx_line.account_id, fx_gain.id);
            } else {
                prop_assert_eq!(fx_line.account_id, fx_loss.id);
            }
        }

        let validated = validate_lines(&posting.lines, |id| Some(leaf(id))).unwrap();
        let net: Decimal = validated.iter().map(|line| line.local_amount).sum();
        prop_assert_eq!(net, Decimal::ZERO);
    }
}
