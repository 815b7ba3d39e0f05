//! Coin reconciler: one representative per coin id across all sections.

use crate::domain::category::CategorySection;
use crate::domain::coin::Coin;
use crate::shared::CoinId;
use std::collections::HashMap;

/// A deduplicated coin plus where it was seen.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconciledCoin {
    /// The kept representative (latest `listed_at`, first one on ties).
    pub coin: Coin,
    /// Names of the sections that contained this id, first-seen order, no duplicates.
    pub sections: Vec<String>,
}

/// Result of a reconciliation pass.
///
/// Entries are stored in first-seen traversal order (section order, then coin
/// order within a section). A duplicate that wins the tie-break replaces the
/// record but keeps the slot of the id's first appearance, so later stable
/// sorts break ties by first appearance.
#[derive(Debug, Clone, Default)]
pub struct Reconciliation {
    entries: Vec<ReconciledCoin>,
    index: HashMap<CoinId, usize>,
}

impl Reconciliation {
    /// Merge `sections` in the order given. Callers must pass sections in
    /// upstream snapshot order for results to be reproducible.
    pub fn from_sections(sections: &[CategorySection]) -> Self {
        let mut out = Reconciliation::default();
        for section in sections {
            for coin in &section.coins {
                out.insert(&section.name, coin);
            }
        }
        tracing::debug!(
            sections = sections.len(),
            coins = out.entries.len(),
            "reconciled snapshot"
        );
        out
    }

    fn insert(&mut self, section_name: &str, coin: &Coin) {
        match self.index.get(&coin.id) {
            Some(&slot) => {
                let entry = &mut self.entries[slot];
                // `None` (unparseable) orders before every real timestamp, so
                // it only survives when nothing better shows up.
                if coin.listed_at > entry.coin.listed_at {
                    tracing::debug!(coin = %coin.id, section = section_name, "newer duplicate replaces kept record");
                    entry.coin = coin.clone();
                }
                if !section_name.is_empty() && !entry.sections.iter().any(|s| s == section_name) {
                    entry.sections.push(section_name.to_string());
                }
            }
            None => {
                self.index.insert(coin.id.clone(), self.entries.len());
                let sections = if section_name.is_empty() {
                    Vec::new()
                } else {
                    vec![section_name.to_string()]
                };
                self.entries.push(ReconciledCoin {
                    coin: coin.clone(),
                    sections,
                });
            }
        }
    }

    pub fn get(&self, id: &CoinId) -> Option<&ReconciledCoin> {
        self.index.get(id).map(|&slot| &self.entries[slot])
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &ReconciledCoin> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Plain id → coin mapping.
    pub fn into_coins(self) -> HashMap<CoinId, Coin> {
        self.entries
            .into_iter()
            .map(|entry| (entry.coin.id.clone(), entry.coin))
            .collect()
    }
}

impl IntoIterator for Reconciliation {
    type Item = ReconciledCoin;
    type IntoIter = std::vec::IntoIter<ReconciledCoin>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
