//! Tag extraction and per-render tag colour assignment.

use crate::domain::coin::Coin;
use std::collections::{BTreeSet, HashMap};

/// Contract-address suffix used by pump.fun mints (compared case-insensitively).
pub const PUMP_SUFFIX: &str = "pump";

/// Synthetic tag added to coins whose address carries [`PUMP_SUFFIX`].
pub const PUMP_FUN_TAG: &str = "pump.fun";

/// Whether the coin's contract address marks it as a pump.fun launch.
pub fn is_pump_fun(coin: &Coin) -> bool {
    coin.contract_address.ends_with_ignore_case(PUMP_SUFFIX)
}

/// Category names that contained the coin, plus the platform tag when it applies.
pub fn extract_tags<S: AsRef<str>>(coin: &Coin, sections: &[S]) -> BTreeSet<String> {
    let mut tags: BTreeSet<String> = sections
        .iter()
        .map(|s| s.as_ref())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    if is_pump_fun(coin) {
        tags.insert(PUMP_FUN_TAG.to_string());
    }
    tags
}

// ─── TagPalette ──────────────────────────────────────────────────────────────

/// Stable tag → palette slot mapping for a single render.
///
/// Slots are handed out in first-seen order and wrap around `size`. Build a
/// fresh palette for every render.
#[derive(Debug, Clone)]
pub struct TagPalette {
    size: usize,
    order: Vec<String>,
    slots: HashMap<String, usize>,
}

impl TagPalette {
    /// `size` is clamped to at least 1.
    pub fn new(size: usize) -> Self {
        Self {
            size: size.max(1),
            order: Vec::new(),
            slots: HashMap::new(),
        }
    }

    /// Slot for `tag`, assigning the next one on first sight.
    pub fn slot(&mut self, tag: &str) -> usize {
        if let Some(&slot) = self.slots.get(tag) {
            return slot;
        }
        let slot = self.order.len() % self.size;
        self.order.push(tag.to_string());
        self.slots.insert(tag.to_string(), slot);
        slot
    }

    /// Tags in the order they were first seen.
    pub fn tags(&self) -> &[String] {
        &self.order
    }
}
