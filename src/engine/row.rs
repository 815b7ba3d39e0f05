//! Presentation rows: display strings for one listing table line.

use super::canonical::CanonicalCoin;
use super::metrics::{self, PERCENT_DECIMALS, PRICE_DECIMALS};
use super::tags::TagPalette;
use crate::shared::fmt::decimal;
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Placeholder for values that cannot be shown.
pub const NOT_AVAILABLE: &str = "N/A";

/// Direction of the 24h change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// Zero counts as up.
    pub fn of(change: &Decimal) -> Self {
        if change.is_sign_negative() && !change.is_zero() {
            Trend::Down
        } else {
            Trend::Up
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "▲",
            Trend::Down => "▼",
        }
    }
}

/// A tag with its palette slot for this render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagChip {
    pub label: String,
    pub slot: usize,
}

/// One rendered table row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinRow {
    pub id: String,
    pub name: String,
    pub ticker: String,
    pub image_url: String,
    /// `$0.00001234`
    pub price: String,
    pub trend: Trend,
    /// `▲ 12.50%`
    pub change_24h: String,
    /// `$1,234,567.891`
    pub volume: String,
    /// `$24.50 million`
    pub market_cap: String,
    /// `7xKXtg...Pump`, or `N/A` off Solana.
    pub contract_label: String,
    pub explorer_url: Option<String>,
    pub created_at: String,
    pub listed_at: String,
    pub is_recent_listing: bool,
    /// `0.00500000 (50.00%)` or `N/A`
    pub change_since_listing: String,
    pub tags: Vec<TagChip>,
}

fn date_label(ts: Option<DateTime<Utc>>) -> String {
    ts.map(|t| t.format("%-m/%-d/%Y").to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

impl CoinRow {
    /// Render `coin` as of `now`. `palette` is shared across the rows of one
    /// render so tag colours stay consistent.
    pub fn render(
        coin: &CanonicalCoin,
        now: DateTime<Utc>,
        recent_window: Duration,
        palette: &mut TagPalette,
    ) -> Self {
        let inner = &coin.coin;
        let trend = Trend::of(&inner.day.change);
        let explorer_url = inner.chain.explorer_token_url(&inner.contract_address);
        let contract_label = match explorer_url {
            Some(_) => inner.contract_address.short(),
            None => NOT_AVAILABLE.to_string(),
        };

        CoinRow {
            id: inner.id.to_string(),
            name: inner.name.clone(),
            ticker: inner.ticker.clone(),
            image_url: inner.image_url.clone(),
            price: format!("${}", decimal::fixed(&inner.day.price, PRICE_DECIMALS)),
            trend,
            change_24h: format!(
                "{} {}%",
                trend.arrow(),
                decimal::fixed(&inner.day.change.abs(), PERCENT_DECIMALS)
            ),
            volume: format!("${}", decimal::locale(&inner.day.volume)),
            market_cap: format!("${} million", decimal::millions(&coin.market_cap_usd, PERCENT_DECIMALS)),
            contract_label,
            explorer_url,
            created_at: date_label(inner.created_at),
            listed_at: date_label(inner.listed_at),
            is_recent_listing: metrics::is_recent_listing(inner.listed_at, now, recent_window),
            change_since_listing: coin.price_change_since_listing.to_string(),
            tags: coin
                .tags
                .iter()
                .map(|tag| TagChip {
                    label: tag.clone(),
                    slot: palette.slot(tag),
                })
                .collect(),
        }
    }
}
