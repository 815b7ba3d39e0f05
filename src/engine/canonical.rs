//! Canonical coin: the reconciled, enriched and derived record.

use super::metrics::{self, PriceChange};
use super::reconcile::ReconciledCoin;
use super::tags;
use crate::domain::coin::Coin;
use crate::domain::reference_price::ReferencePriceTable;
use crate::shared::CoinId;
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One coin as the view shows it.
///
/// Recency is not a field: it depends on wall-clock time
/// and is computed on each call to [`CanonicalCoin::is_recent_listing`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalCoin {
    /// Representative record with `price_at_listed` enriched from the
    /// reference table.
    pub coin: Coin,
    pub market_cap_usd: Decimal,
    pub price_change_since_listing: PriceChange,
    pub tags: BTreeSet<String>,
}

impl CanonicalCoin {
    /// Enrich, derive and tag a reconciled coin.
    pub fn build(reconciled: ReconciledCoin, references: &ReferencePriceTable) -> Self {
        let ReconciledCoin { mut coin, sections } = reconciled;

        // A table hit overrides whatever upstream sent; a miss leaves the
        // field as it was.
        if let Some(reference) = references.lookup(&coin.contract_address) {
            coin.price_at_listed = Some(reference);
        }

        let market_cap_usd = metrics::market_cap_usd(&coin);
        let price_change_since_listing =
            metrics::price_change_since_listing(coin.day.price, coin.price_at_listed);
        let tags = tags::extract_tags(&coin, &sections);

        Self {
            coin,
            market_cap_usd,
            price_change_since_listing,
            tags,
        }
    }

    pub fn id(&self) -> &CoinId {
        &self.coin.id
    }

    pub fn listed_at(&self) -> Option<DateTime<Utc>> {
        self.coin.listed_at
    }

    pub fn price_at_listed(&self) -> Option<Decimal> {
        self.coin.price_at_listed
    }

    pub fn market_cap_millions(&self) -> Decimal {
        crate::shared::fmt::decimal::to_millions(&self.market_cap_usd)
    }

    /// Listed within the last 24 hours of `now`.
    pub fn is_recent_listing(&self, now: DateTime<Utc>) -> bool {
        self.is_recent_listing_within(now, metrics::recent_listing_window())
    }

    pub fn is_recent_listing_within(&self, now: DateTime<Utc>, window: Duration) -> bool {
        metrics::is_recent_listing(self.coin.listed_at, now, window)
    }

    pub fn is_pump_fun(&self) -> bool {
        self.tags.contains(tags::PUMP_FUN_TAG)
    }
}
