//! Sort/view assembler: deterministic ordering for presentation.

use super::canonical::CanonicalCoin;
use crate::domain::category::CategorySection;
use crate::shared::CoinId;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Coins kept per section in grouped mode.
pub const DEFAULT_GROUP_LIMIT: usize = 10;

/// How the view is laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Every canonical coin once, most recently listed first.
    #[default]
    Unified,
    /// Upstream sections kept, each limited to its most recent entries.
    Grouped,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Unified => "unified",
            ViewMode::Grouped => "grouped",
        }
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One section in grouped mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionView {
    pub id: String,
    pub name: String,
    pub coins: Vec<CanonicalCoin>,
}

/// Assembled, ordered view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "data", rename_all = "lowercase")]
pub enum View {
    Unified(Vec<CanonicalCoin>),
    Grouped(Vec<SectionView>),
}

impl View {
    pub fn mode(&self) -> ViewMode {
        match self {
            View::Unified(_) => ViewMode::Unified,
            View::Grouped(_) => ViewMode::Grouped,
        }
    }

    /// All coins in display order (grouped views are flattened section by section).
    pub fn coins(&self) -> Vec<&CanonicalCoin> {
        match self {
            View::Unified(coins) => coins.iter().collect(),
            View::Grouped(sections) => sections.iter().flat_map(|s| s.coins.iter()).collect(),
        }
    }

    pub fn as_unified(&self) -> Option<&[CanonicalCoin]> {
        match self {
            View::Unified(coins) => Some(coins),
            View::Grouped(_) => None,
        }
    }

    pub fn as_grouped(&self) -> Option<&[SectionView]> {
        match self {
            View::Grouped(sections) => Some(sections),
            View::Unified(_) => None,
        }
    }
}

/// Most recently listed first. `Vec::sort_by` is stable, so equal timestamps
/// keep their incoming order; missing timestamps sink to the end.
pub fn sort_by_listed_at_desc(coins: &mut [CanonicalCoin]) {
    coins.sort_by(|a, b| b.listed_at().cmp(&a.listed_at()));
}

/// `coins` must be in first-seen traversal order.
pub fn unified(mut coins: Vec<CanonicalCoin>) -> Vec<CanonicalCoin> {
    sort_by_listed_at_desc(&mut coins);
    coins
}

/// Rebuild the upstream grouping from canonical records.
///
/// Each section lists the canonical record of every id it contained (once,
/// even if the section repeated it), sorted like the unified view and cut to
/// `limit` entries.
pub fn grouped(
    sections: &[CategorySection],
    canonical: &HashMap<CoinId, CanonicalCoin>,
    limit: usize,
) -> Vec<SectionView> {
    sections
        .iter()
        .map(|section| {
            let mut seen = HashSet::new();
            let mut coins: Vec<CanonicalCoin> = section
                .coins
                .iter()
                .filter(|coin| seen.insert(&coin.id))
                .filter_map(|coin| canonical.get(&coin.id).cloned())
                .collect();
            sort_by_listed_at_desc(&mut coins);
            coins.truncate(limit);
            SectionView {
                id: section.id.clone(),
                name: section.name.clone(),
                coins,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::coin::Coin;
    use crate::domain::reference_price::ReferencePriceTable;
    use crate::engine::reconcile::Reconciliation;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(secs: i64) -> Option<DateTime<Utc>> {
        Some(Utc.timestamp_opt(secs, 0).unwrap())
    }

    fn coin(id: &str, listed_at: Option<DateTime<Utc>>) -> Coin {
        let mut c = Coin::new(id);
        c.listed_at = listed_at;
        c
    }

    fn canonical_in_order(sections: &[CategorySection]) -> Vec<CanonicalCoin> {
        let table = ReferencePriceTable::new();
        Reconciliation::from_sections(sections)
            .into_iter()
            .map(|rc| CanonicalCoin::build(rc, &table))
            .collect()
    }

    fn ids(coins: &[CanonicalCoin]) -> Vec<&str> {
        coins.iter().map(|c| c.id().as_str()).collect()
    }

    #[test]
    fn test_unified_orders_by_listed_at_desc() {
        let sections = vec![
            CategorySection::new("s1", "One", vec![coin("A", at(1)), coin("B", at(3))]),
            CategorySection::new("s2", "Two", vec![coin("A", at(1)), coin("C", at(2))]),
        ];
        let view = unified(canonical_in_order(&sections));
        assert_eq!(view.len(), 3);
        assert_eq!(ids(&view), ["B", "C", "A"]);
    }

    #[test]
    fn test_unified_ties_keep_traversal_order() {
        let sections = vec![
            CategorySection::new("s1", "One", vec![coin("X", at(5)), coin("Y", at(5))]),
            CategorySection::new("s2", "Two", vec![coin("Z", at(5)), coin("W", None)]),
        ];
        let view = unified(canonical_in_order(&sections));
        assert_eq!(ids(&view), ["X", "Y", "Z", "W"]);
    }

    #[test]
    fn test_grouped_limits_each_section() {
        let many: Vec<Coin> = (0..25).map(|i| coin(&format!("c{i}"), at(i))).collect();
        let sections = vec![
            CategorySection::new("big", "Big", many),
            CategorySection::new("small", "Small", vec![coin("c3", at(3)), coin("solo", at(100))]),
        ];
        let canonical: HashMap<_, _> = canonical_in_order(&sections)
            .into_iter()
            .map(|c| (c.id().clone(), c))
            .collect();

        let view = grouped(&sections, &canonical, DEFAULT_GROUP_LIMIT);
        assert_eq!(view.len(), 2);
        assert_eq!(view[0].coins.len(), 10);
        assert_eq!(view[0].coins[0].id().as_str(), "c24");
        assert_eq!(view[0].coins[9].id().as_str(), "c15");
        assert_eq!(ids(&view[1].coins), ["solo", "c3"]);
    }

    #[test]
    fn test_grouped_collapses_repeats_within_section() {
        let sections = vec![CategorySection::new(
            "s1",
            "One",
            vec![coin("A", at(1)), coin("A", at(9)), coin("B", at(5))],
        )];
        let canonical: HashMap<_, _> = canonical_in_order(&sections)
            .into_iter()
            .map(|c| (c.id().clone(), c))
            .collect();
        let view = grouped(&sections, &canonical, DEFAULT_GROUP_LIMIT);
        assert_eq!(ids(&view[0].coins), ["A", "B"]);
        assert_eq!(view[0].coins[0].listed_at(), at(9));
    }

    #[test]
    fn test_view_mode_serde() {
        assert_eq!(serde_json::to_string(&ViewMode::Grouped).unwrap(), "\"grouped\"");
        let mode: ViewMode = serde_json::from_str("\"unified\"").unwrap();
        assert_eq!(mode, ViewMode::Unified);
    }
}
