//! Fixed-decimal rounding for bucket values.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Round `value` to `places` decimals, resolving exact ties away from zero.
///
/// Rounding works on the exact binary value, so `1.005` (stored just below
/// `1.005`) rounds down to `1.0` while `0.125` (stored exactly) rounds up to
/// `0.13`. The result is the nearest `f64` to the rounded decimal.
///
/// Values a [`Decimal`] cannot hold (non-finite or out of range) pass through
/// unchanged.
pub fn round_to_places(value: f64, places: u32) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|exact| exact.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|rounded| rounded.to_f64())
        .unwrap_or(value)
}
