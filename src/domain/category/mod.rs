//! Category domain: topical sections ("Trending", "New Listings") and the
//! snapshot that carries them.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::domain::coin::Coin;
use crate::error::SnapshotError;
use serde::{Deserialize, Serialize};

// ─── CategorySection ─────────────────────────────────────────────────────────

/// One topical grouping of coins, in upstream order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategorySection {
    pub id: String,
    pub name: String,
    pub coins: Vec<Coin>,
}

impl CategorySection {
    pub fn new(id: impl Into<String>, name: impl Into<String>, coins: Vec<Coin>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            coins,
        }
    }
}

// ─── Snapshot ────────────────────────────────────────────────────────────────

/// A fetched set of sections, normalized to a sequence.
///
/// Section order is the upstream order and must be preserved all the way to
/// the reconciler: equal-`listed_at` duplicates resolve to the first one
/// encountered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub sections: Vec<CategorySection>,
}

impl Snapshot {
    pub fn new(sections: Vec<CategorySection>) -> Self {
        Self { sections }
    }

    /// Parse a raw categories body (single section object or array).
    pub fn from_json(body: &str) -> Result<Self, SnapshotError> {
        let value: serde_json::Value = serde_json::from_str(body).map_err(SnapshotError::NotJson)?;
        Self::from_value(value)
    }

    /// Normalize an already-decoded JSON body.
    pub fn from_value(value: serde_json::Value) -> Result<Self, SnapshotError> {
        let response: wire::SnapshotResponse = serde_json::from_value(value)
            .map_err(|e| SnapshotError::UnexpectedShape(e.to_string()))?;
        Ok(response.into())
    }

    pub fn sections(&self) -> &[CategorySection] {
        &self.sections
    }

    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(|s| s.coins.is_empty())
    }
}
