//! Metrics calculator: market cap, recency, price change since listing.
//!
//! All functions are pure; nothing is cached. Recency depends on the `now`
//! passed in and must be re-evaluated on every read.

use crate::domain::coin::Coin;
use crate::shared::fmt::decimal;
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A listing is "recent" for this many seconds after `listed_at`.
pub const RECENT_LISTING_WINDOW_SECS: i64 = 24 * 60 * 60;

/// Decimal places used when rendering the absolute price change.
pub const PRICE_DECIMALS: u32 = 8;

/// Decimal places used when rendering percentages and market caps in millions.
pub const PERCENT_DECIMALS: u32 = 2;

pub fn recent_listing_window() -> Duration {
    Duration::seconds(RECENT_LISTING_WINDOW_SECS)
}

// ─── Market cap ──────────────────────────────────────────────────────────────

/// `(circulating_supply / 10^decimals) * day.price`.
///
/// Decimals outside the representable range are treated as 0 (no scaling).
pub fn market_cap_usd(coin: &Coin) -> Decimal {
    let supply = decimal::from_base_units(&coin.circulating_supply, coin.decimals)
        .unwrap_or(coin.circulating_supply);
    supply.checked_mul(coin.day.price).unwrap_or_else(|| {
        tracing::warn!(coin = %coin.id, "market cap overflow, using 0");
        Decimal::ZERO
    })
}

/// Market cap expressed in millions (`market_cap_usd / 1_000_000`).
pub fn market_cap_millions(coin: &Coin) -> Decimal {
    decimal::to_millions(&market_cap_usd(coin))
}

// ─── Recency ─────────────────────────────────────────────────────────────────

/// `now - listed_at <= window`. A missing `listed_at` is never recent.
pub fn is_recent_listing(listed_at: Option<DateTime<Utc>>, now: DateTime<Utc>, window: Duration) -> bool {
    match listed_at {
        Some(listed_at) => now.signed_duration_since(listed_at) <= window,
        None => false,
    }
}

// ─── Price change since listing ──────────────────────────────────────────────

/// Change between the reference price at listing and the current price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PriceChange {
    /// No reference price, or a reference price of exactly zero.
    NotApplicable,
    Change {
        absolute: Decimal,
        /// Percent, e.g. `50` for +50%.
        percentage: Decimal,
    },
}

impl PriceChange {
    pub fn is_applicable(&self) -> bool {
        matches!(self, PriceChange::Change { .. })
    }

    /// Absolute change with token-price precision (`"0.00500000"`).
    pub fn absolute_display(&self) -> Option<String> {
        match self {
            PriceChange::Change { absolute, .. } => Some(decimal::fixed(absolute, PRICE_DECIMALS)),
            PriceChange::NotApplicable => None,
        }
    }

    /// Percentage with two decimals and a `%` sign (`"50.00%"`).
    pub fn percentage_display(&self) -> Option<String> {
        match self {
            PriceChange::Change { percentage, .. } => {
                Some(format!("{}%", decimal::fixed(percentage, PERCENT_DECIMALS)))
            }
            PriceChange::NotApplicable => None,
        }
    }
}

impl std::fmt::Display for PriceChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.absolute_display(), self.percentage_display()) {
            (Some(absolute), Some(percentage)) => write!(f, "{} ({})", absolute, percentage),
            _ => write!(f, "N/A"),
        }
    }
}

pub fn price_change_since_listing(current_price: Decimal, price_at_listed: Option<Decimal>) -> PriceChange {
    let reference = match price_at_listed {
        Some(p) if !p.is_zero() => p,
        _ => return PriceChange::NotApplicable,
    };
    let absolute = current_price - reference;
    match absolute
        .checked_div(reference)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
    {
        Some(percentage) => PriceChange::Change {
            absolute,
            percentage,
        },
        None => PriceChange::NotApplicable,
    }
}
