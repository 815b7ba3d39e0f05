//! Decimal formatting utilities for human-readable display.
//!
//! Handles `rust_decimal::Decimal` values with fixed decimal places, locale-style
//! grouping, the "value in millions" contract used for market caps, and
//! conversion from on-chain base units.
//!
//! Rounding is half away from zero everywhere (`0.125` → `0.13`), which is what
//! listing tables have always shown.

use rust_decimal::prelude::*;
use std::sync::OnceLock;

static MILLION: OnceLock<Decimal> = OnceLock::new();

fn get_million() -> &'static Decimal {
    MILLION.get_or_init(|| Decimal::from(1_000_000))
}

/// Maximum fraction digits used by [`locale`].
pub const LOCALE_MAX_FRACTION_DIGITS: u32 = 3;

/// Rounds half away from zero to `dp` decimal places.
pub fn round_half_up(value: &Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Format with exactly `dp` decimal places (`0.005`, 8 → `"0.00500000"`).
pub fn fixed(value: &Decimal, dp: u32) -> String {
    let rounded = round_half_up(value, dp);
    format!("{:.precision$}", rounded, precision = dp as usize)
}

/// Locale-style rendering: thousands separators, at most three fraction
/// digits, trailing zeros trimmed (`1234567.8` → `"1,234,567.8"`).
pub fn locale(value: &Decimal) -> String {
    super::num::display_formatted_string(&fixed(value, LOCALE_MAX_FRACTION_DIGITS))
}

/// Converts a raw value into millions (divide by 1,000,000). No rounding.
pub fn to_millions(value: &Decimal) -> Decimal {
    value / get_million()
}

/// Value in millions with `dp` decimal places (`12_345_678` → `"12.35"`).
pub fn millions(value: &Decimal, dp: u32) -> String {
    fixed(&to_millions(value), dp)
}

/// Converts token base units to a human-readable amount.
///
/// Scales the raw value down by `10^decimals`. For example, a supply of
/// 1_000_000_000 base units with 6 decimals becomes 1000.
///
/// Returns `None` if `decimals` exceeds the largest scale a `Decimal` can
/// carry (28) or the product cannot be represented.
pub fn from_base_units(value: &Decimal, decimals: u32) -> Option<Decimal> {
    let scale = Decimal::try_new(1, decimals).ok()?;
    value.checked_mul(scale)
}
