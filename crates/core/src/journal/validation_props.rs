//! Property-based tests for journal validation.
//!
//! - Every accepted journal nets to exactly zero in functional currency.
//! - Unbalanced inputs are always rejected.
//! - Reversing an accepted journal yields an accepted journal that cancels
//!   the original.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::types::{Journal, JournalSource, LineInput};
use super::validation::validate_lines;
use crate::coa::{Account, AccountType, NormalBalance};
use chrono::{NaiveDate, Utc};
use glint_shared::types::{AccountId, JournalId, round2};

fn leaf(id: AccountId) -> Account {
    Account {
        id,
        code: "1.1.1".to_string(),
        name: "Cash".to_string(),
        account_type: AccountType::Asset,
        normal_balance: NormalBalance::Debit,
        parent_id: None,
        is_leaf: true,
        allow_manual_post: true,
    }
}

/// Positive amounts between 0.01 and 10,000.00.
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Non-negative exchange rates between 0.01 and 100.00.
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..10_000i64).prop_map(|v| Decimal::new(v, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// round2 is idempotent over a wide range of scales.
    #[test]
    fn prop_round2_idempotent(mantissa in -1_000_000_000_000i64..1_000_000_000_000i64, scale in 0u32..8) {
        let value = Decimal::new(mantissa, scale);
        let once = round2(value);
        prop_assert_eq!(round2(once), once);
    }

    /// A mirrored debit/credit pair at any amount and rate is accepted and
    /// nets to zero.
    #[test]
    fn prop_mirrored_pair_balances(amount in positive_amount(), rate in positive_rate()) {
        let (a, b) = (AccountId::new(), AccountId::new());
        let lines = vec![
            LineInput::debit(a, amount, "USD", rate),
            LineInput::credit(b, amount, "USD", rate),
        ];

        let validated = validate_lines(&lines, |id| Some(leaf(id)));
        prop_assert!(validated.is_ok());

        let net: Decimal = validated.unwrap().iter().map(|line| line.local_amount).sum();
        prop_assert_eq!(net, Decimal::ZERO);
    }

    /// Several debits covered by one credit still satisfy the invariant
    /// when the credit carries the rounded sum as its local amount.
    #[test]
    fn prop_multi_debit_single_credit_balances(
        amounts in proptest::collection::vec(positive_amount(), 1..6),
    ) {
        let credit_total: Decimal = amounts.iter().copied().sum();
        let accounts: Vec<AccountId> = (0..=amounts.len()).map(|_| AccountId::new()).collect();

        let mut lines: Vec<LineInput> = amounts
            .iter()
            .zip(&accounts)
            .map(|(amount, id)| LineInput::debit(*id, *amount, "USD", Decimal::ONE))
            .collect();
        lines.push(LineInput::credit(
            accounts[amounts.len()],
            credit_total,
            "USD",
            Decimal::ONE,
        ));

        let validated = validate_lines(&lines, |id| Some(leaf(id)));
        prop_assert!(validated.is_ok());
    }

    /// A pair whose amounts differ is always rejected as unbalanced.
    #[test]
    fn prop_unbalanced_pair_rejected(
        debit in positive_amount(),
        credit in positive_amount(),
    ) {
        prop_assume!(debit != credit);

        let (a, b) = (AccountId::new(), AccountId::new());
        let lines = vec![
            LineInput::debit(a, debit, "USD", Decimal::ONE),
            LineInput::credit(b, credit, "USD", Decimal::ONE),
        ];

        let result = validate_lines(&lines, |id| Some(leaf(id)));
        let is_unbalanced_err = matches!(result, Err(super::error::JournalError::Unbalanced { .. }));
        prop_assert!(is_unbalanced_err);
    }

    /// Reversal of an accepted journal is itself accepted, and the two
    /// journals cancel exactly.
    #[test]
    fn prop_reversal_cancels(amount in positive_amount(), rate in positive_rate()) {
        let (a, b) = (AccountId::new(), AccountId::new());
        let lines = vec![
            LineInput::debit(a, amount, "EUR", rate),
            LineInput::credit(b, amount, "EUR", rate),
        ];
        let validated = validate_lines(&lines, |id| Some(leaf(id))).unwrap();
        let journal = Journal {
            id: JournalId::new(),
            voucher_no: "JV-000001".to_string(),
            voucher_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            source: JournalSource::Manual,
            remarks: None,
            lines: validated,
            created_at: Utc::now(),
        };

        let reversed = validate_lines(&super::reversal::reversing_lines(&journal), |id| Some(leaf(id)));
        prop_assert!(reversed.is_ok());

        let net: Decimal = journal
            .lines
            .iter()
            .chain(reversed.unwrap().iter())
            .map(|line| line.local_amount)
            .sum();
        prop_assert_eq!(net, Decimal::ZERO);
    }
}
