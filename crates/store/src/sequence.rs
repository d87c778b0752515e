//! Named sequence counters for voucher numbers.
//!
//! Each series holds a single monotonically increasing value. Minting is
//! an atomic fetch-and-increment through the map's entry guard — never a
//! read-then-write — so concurrent postings can never receive the same
//! value.

use dashmap::DashMap;

/// Registry of named, monotonically increasing counters.
#[derive(Debug, Default)]
pub struct SequenceRegistry {
    counters: DashMap<String, u64>,
}

impl SequenceRegistry {
    /// Creates an empty registry. Counters start at zero and the first
    /// mint of a series returns 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            counters: DashMap::new(),
        }
    }

    /// Mints the next value of the named series.
    pub fn next(&self, series: &str) -> u64 {
        let mut entry = self.counters.entry(series.to_string()).or_insert(0);
        *entry += 1;
        *entry
    }

    /// The last minted value of the named series (0 if never minted).
    #[must_use]
    pub fn current(&self, series: &str) -> u64 {
        self.counters.get(series).map_or(0, |value| *value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn test_series_are_independent() {
        let registry = SequenceRegistry::new();
        assert_eq!(registry.next("RCPT"), 1);
        assert_eq!(registry.next("RCPT"), 2);
        assert_eq!(registry.next("PAY"), 1);
        assert_eq!(registry.current("RCPT"), 2);
        assert_eq!(registry.current("TRF"), 0);
    }

    #[test]
    fn test_concurrent_mints_never_collide() {
        let registry = Arc::new(SequenceRegistry::new());
        let mut handles = Vec::new();

        for _ in 0..8 {
            let registry = Arc::clone(&registry);
            handles.push(std::thread::spawn(move || {
                (0..250).map(|_| registry.next("JV")).collect::<Vec<u64>>()
            }));
        }

        let mut seen = HashSet::new();
        for handle in handles {
            for value in handle.join().expect("mint thread panicked") {
                assert!(seen.insert(value), "duplicate voucher value {value}");
            }
        }
        assert_eq!(seen.len(), 2000);
        assert_eq!(registry.current("JV"), 2000);
    }
}
