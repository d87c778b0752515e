//! Reversing-journal construction.
//!
//! Posted journals are never edited. A correction is made by posting a new
//! journal that mirrors the original: debits become credits, credits become
//! debits, and adjustment lines negate their local amount. The reversing
//! journal balances whenever the original did.

use super::types::{Journal, JournalSource, LineInput};

/// Builds the line inputs for a journal that exactly reverses `journal`.
///
/// The caller posts the result with [`JournalSource::Reversal`] pointing at
/// the original.
#[must_use]
pub fn reversing_lines(journal: &Journal) -> Vec<LineInput> {
    let memo = format!("Reversal of {}", journal.voucher_no);

    journal
        .lines
        .iter()
        .map(|line| {
            let input = if line.is_adjustment() {
                LineInput::adjustment(
                    line.account_id,
                    -line.local_amount,
                    &line.currency,
                    line.exchange_rate,
                )
            } else {
                LineInput {
                    account_id: line.account_id,
                    debit: line.credit,
                    credit: line.debit,
                    currency: line.currency.clone(),
                    exchange_rate: line.exchange_rate,
                    local_amount: None,
                    link: None,
                    memo: None,
                }
            };
            let input = match line.link {
                Some(link) => input.linked(link),
                None => input,
            };
            input.with_memo(memo.clone())
        })
        .collect()
}

/// Convenience check used before reversing: a journal qualifies when its
/// own lines net to zero, which holds for every committed journal.
#[must_use]
pub fn is_reversible(journal: &Journal) -> bool {
    journal
        .lines
        .iter()
        .map(|line| line.local_amount)
        .sum::<rust_decimal::Decimal>()
        .is_zero()
}
