//! Reconciliation engine: dedup, enrich, derive, tag, order.
//!
//! Pipeline for one snapshot:
//!
//! 1. [`reconcile::Reconciliation`]: one representative per coin id
//! 2. [`ReferencePriceTable`] lookup: `price_at_listed`
//! 3. [`metrics`]: market cap, price change since listing
//! 4. [`tags`]: category names + pump.fun marker
//! 5. [`view`]: unified or grouped ordering
//!
//! Every pass is synchronous and pure. The same sections and table always give
//! the same output; only [`CanonicalCoin::is_recent_listing`] depends on the
//! clock. The reference table sits behind an `Arc` so one [`Engine`] can be
//! cloned into concurrent callers without locking.

pub mod canonical;
pub mod metrics;
pub mod reconcile;
pub mod row;
pub mod tags;
pub mod view;

pub use canonical::CanonicalCoin;
pub use metrics::PriceChange;
pub use reconcile::{ReconciledCoin, Reconciliation};
pub use row::{CoinRow, TagChip, Trend};
pub use tags::TagPalette;
pub use view::{SectionView, View, ViewMode};

use crate::domain::category::CategorySection;
use crate::domain::reference_price::ReferencePriceTable;
use crate::shared::CoinId;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;

/// Palette size used by [`Engine::rows`] when none is configured.
pub const DEFAULT_PALETTE_SIZE: usize = 8;

// ─── Config ──────────────────────────────────────────────────────────────────

/// Tunables for view assembly.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Coins kept per section in grouped mode.
    pub group_limit: usize,
    /// How long after listing a coin counts as recent.
    pub recent_window: Duration,
    /// Number of tag colours available to the presentation layer.
    pub palette_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            group_limit: view::DEFAULT_GROUP_LIMIT,
            recent_window: metrics::recent_listing_window(),
            palette_size: DEFAULT_PALETTE_SIZE,
        }
    }
}

impl EngineConfig {
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct EngineConfigBuilder {
    config: EngineConfig,
}

impl EngineConfigBuilder {
    pub fn group_limit(mut self, limit: usize) -> Self {
        self.config.group_limit = limit;
        self
    }

    pub fn recent_window(mut self, window: Duration) -> Self {
        self.config.recent_window = window;
        self
    }

    pub fn palette_size(mut self, size: usize) -> Self {
        self.config.palette_size = size;
        self
    }

    pub fn build(self) -> EngineConfig {
        self.config
    }
}

// ─── Engine ──────────────────────────────────────────────────────────────────

/// Reconciliation engine bound to a reference table and a config.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    references: Arc<ReferencePriceTable>,
    config: EngineConfig,
}

impl Engine {
    pub fn new(references: impl Into<Arc<ReferencePriceTable>>) -> Self {
        Self {
            references: references.into(),
            config: EngineConfig::default(),
        }
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn references(&self) -> &ReferencePriceTable {
        &self.references
    }

    /// One canonical coin per distinct id. No ordering is implied.
    ///
    /// `sections` must be in upstream snapshot order: equal-`listed_at`
    /// duplicates resolve to the first one encountered.
    pub fn reconcile(&self, sections: &[CategorySection]) -> HashMap<CoinId, CanonicalCoin> {
        reconcile(sections, &self.references)
    }

    /// Ordered view ready for rendering.
    pub fn sorted_view(&self, sections: &[CategorySection], mode: ViewMode) -> View {
        assemble(sections, &self.references, mode, self.config.group_limit)
    }

    /// Render a view into table rows as of `now`, sharing one tag palette
    /// across all rows.
    pub fn rows(&self, view: &View, now: DateTime<Utc>) -> Vec<CoinRow> {
        let mut palette = TagPalette::new(self.config.palette_size);
        view.coins()
            .into_iter()
            .map(|coin| CoinRow::render(coin, now, self.config.recent_window, &mut palette))
            .collect()
    }
}

// ─── Free functions ──────────────────────────────────────────────────────────

/// Canonical coins in first-seen traversal order.
fn canonical_in_order(
    sections: &[CategorySection],
    references: &ReferencePriceTable,
) -> Vec<CanonicalCoin> {
    Reconciliation::from_sections(sections)
        .into_iter()
        .map(|reconciled| CanonicalCoin::build(reconciled, references))
        .collect()
}

fn assemble(
    sections: &[CategorySection],
    references: &ReferencePriceTable,
    mode: ViewMode,
    group_limit: usize,
) -> View {
    let view = match mode {
        ViewMode::Unified => View::Unified(view::unified(canonical_in_order(sections, references))),
        ViewMode::Grouped => View::Grouped(view::grouped(
            sections,
            &reconcile(sections, references),
            group_limit,
        )),
    };
    tracing::debug!(mode = %mode, coins = view.coins().len(), "assembled view");
    view
}

/// [`Engine::reconcile`] without an engine.
pub fn reconcile(
    sections: &[CategorySection],
    references: &ReferencePriceTable,
) -> HashMap<CoinId, CanonicalCoin> {
    canonical_in_order(sections, references)
        .into_iter()
        .map(|coin| (coin.id().clone(), coin))
        .collect()
}

/// [`Engine::sorted_view`] with the default group limit.
pub fn sorted_view(
    sections: &[CategorySection],
    references: &ReferencePriceTable,
    mode: ViewMode,
) -> View {
    assemble(sections, references, mode, view::DEFAULT_GROUP_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::coin::Coin;
    use crate::domain::reference_price::ReferencePriceEntry;
    use chrono::TimeZone;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn coin(id: &str, listed_secs: i64) -> Coin {
        let mut c = Coin::new(id);
        c.listed_at = Some(Utc.timestamp_opt(listed_secs, 0).unwrap());
        c.contract_address = format!("{id}Mint").into();
        c
    }

    fn sections() -> Vec<CategorySection> {
        vec![
            CategorySection::new("trending", "Trending", vec![coin("A", 1), coin("B", 3)]),
            CategorySection::new("new", "New Listings", vec![coin("A", 1), coin("C", 2)]),
        ]
    }

    #[test]
    fn test_engine_reconcile_and_tags() {
        let engine = Engine::default();
        let map = engine.reconcile(&sections());
        assert_eq!(map.len(), 3);
        let a = &map[&CoinId::from("A")];
        let tags: Vec<_> = a.tags.iter().map(String::as_str).collect();
        assert_eq!(tags, ["New Listings", "Trending"]);
    }

    #[test]
    fn test_engine_enriches_with_reference_prices() {
        let table = ReferencePriceTable::from_entries([ReferencePriceEntry::new(
            "BMint",
            Decimal::from_str("0.5").unwrap(),
        )]);
        let engine = Engine::new(table);
        let map = engine.reconcile(&sections());
        assert_eq!(map[&CoinId::from("B")].price_at_listed(), Some(Decimal::from_str("0.5").unwrap()));
        assert_eq!(map[&CoinId::from("C")].price_at_listed(), None);
    }

    #[test]
    fn test_engine_unified_view() {
        let view = Engine::default().sorted_view(&sections(), ViewMode::Unified);
        let ids: Vec<_> = view.coins().iter().map(|c| c.id().as_str()).collect();
        assert_eq!(ids, ["B", "C", "A"]);
        assert_eq!(view.mode(), ViewMode::Unified);
    }

    #[test]
    fn test_engine_grouped_view_respects_config() {
        let engine = Engine::default().with_config(EngineConfig::builder().group_limit(1).build());
        let view = engine.sorted_view(&sections(), ViewMode::Grouped);
        let grouped = view.as_grouped().unwrap();
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].coins.len(), 1);
        assert_eq!(grouped[0].coins[0].id().as_str(), "B");
        assert_eq!(grouped[1].coins[0].id().as_str(), "C");
    }

    #[test]
    fn test_free_functions_match_engine() {
        let table = ReferencePriceTable::new();
        let engine = Engine::default();
        assert_eq!(reconcile(&sections(), &table), engine.reconcile(&sections()));
        for mode in [ViewMode::Unified, ViewMode::Grouped] {
            assert_eq!(sorted_view(&sections(), &table, mode), engine.sorted_view(&sections(), mode));
        }
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let engine = Engine::default();
        let first = serde_json::to_string(&engine.sorted_view(&sections(), ViewMode::Unified)).unwrap();
        let second = serde_json::to_string(&engine.sorted_view(&sections(), ViewMode::Unified)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rows_share_palette() {
        let engine = Engine::default();
        let view = engine.sorted_view(&sections(), ViewMode::Unified);
        let rows = engine.rows(&view, Utc::now());
        assert_eq!(rows.len(), 3);
        // B is only in Trending, so Trending gets the first slot.
        assert_eq!(rows[0].tags[0].label, "Trending");
        assert_eq!(rows[0].tags[0].slot, 0);
        let a_row = rows.iter().find(|r| r.id == "A").unwrap();
        let slots: Vec<_> = a_row.tags.iter().map(|t| (t.label.as_str(), t.slot)).collect();
        assert_eq!(slots, [("New Listings", 1), ("Trending", 0)]);
    }
}
