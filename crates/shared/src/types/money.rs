//! Monetary rounding helpers.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! All amounts are `rust_decimal::Decimal`, and every monetary value that is
//! compared or summed passes through [`round2`] first so that precision
//! drift can never produce a spurious "unbalanced journal" failure.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places of the functional currency.
pub const FUNCTIONAL_DP: u32 = 2;

/// Rounds a value half-away-from-zero to 2 decimal places.
///
/// The result always carries exactly two decimal places, so equal amounts
/// render identically wherever they surface.
///
/// Idempotent: `round2(round2(x)) == round2(x)` for every finite `x`.
#[must_use]
pub fn round2(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(FUNCTIONAL_DP, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(FUNCTIONAL_DP);
    rounded
}

/// Converts a foreign amount to its functional-currency equivalent.
///
/// The rate means "1 unit of the foreign currency = `rate` units of the
/// functional currency"; the product is rounded with [`round2`].
#[must_use]
pub fn to_local(amount: Decimal, rate: Decimal) -> Decimal {
    round2(amount * rate)
}
