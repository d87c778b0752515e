//! Concurrency behavior: vouchers stay unique under parallel postings.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;
use glint_core::journal::{JournalSource, LineInput};
use glint_shared::config::LedgerConfig;
use glint_shared::types::{AccountId, PageRequest};
use glint_store::{CreateJournalInput, JournalFilter, LedgerStore, seed};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn setup() -> (Arc<LedgerStore>, AccountId, AccountId) {
    let config = LedgerConfig::default();
    let store = LedgerStore::from_config(&config);
    seed::install_default_chart(&store, &config).unwrap();
    let cash = store.account_by_code("1.1.1").unwrap().id;
    let sales = store.account_by_code("4.1").unwrap().id;
    (Arc::new(store), cash, sales)
}

fn manual_journal(cash: AccountId, sales: AccountId) -> CreateJournalInput {
    CreateJournalInput {
        voucher_date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
        source: JournalSource::Manual,
        remarks: None,
        lines: vec![
            LineInput::debit(cash, dec!(100), "INR", Decimal::ONE),
            LineInput::credit(sales, dec!(100), "INR", Decimal::ONE),
        ],
    }
}

#[test]
fn test_parallel_postings_mint_unique_vouchers() {
    let (store, cash, sales) = setup();
    let mut handles = Vec::new();

    for _ in 0..4 {
        let store = Arc::clone(&store);
        handles.push(std::thread::spawn(move || {
            (0..25)
                .map(|_| {
                    store
                        .create_journal(manual_journal(cash, sales))
                        .unwrap()
                        .voucher_no
                })
                .collect::<Vec<String>>()
        }));
    }

    let mut vouchers = HashSet::new();
    for handle in handles {
        for voucher in handle.join().expect("posting thread panicked") {
            assert!(vouchers.insert(voucher.clone()), "duplicate voucher {voucher}");
        }
    }
    assert_eq!(vouchers.len(), 100);

    let page = store
        .list_journals(
            &JournalFilter::default(),
            PageRequest { page: 1, per_page: 200 },
        )
        .unwrap();
    assert_eq!(page.meta.total, 100);

    // Every committed journal satisfies the balance invariant.
    for journal in &page.data {
        let net: Decimal = journal.lines.iter().map(|line| line.local_amount).sum();
        assert!(net.is_zero());
    }
}

#[test]
fn test_failed_posting_under_contention_leaves_no_trace() {
    let (store, cash, sales) = setup();

    let mut bad = manual_journal(cash, sales);
    bad.lines[0].debit = dec!(99);
    assert!(store.create_journal(bad).is_err());

    let good = store.create_journal(manual_journal(cash, sales)).unwrap();
    assert_eq!(good.voucher_no, "JV-000001");
}
