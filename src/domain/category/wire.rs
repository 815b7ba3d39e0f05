//! Wire types for the categories endpoint (REST).

use crate::shared::serde_util::lenient_string;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw category section. `coins` is required: an object without it is not a
/// category. Entries stay undecoded so one malformed coin cannot fail the
/// whole body; each is decoded into a
/// [`CoinResponse`](crate::domain::coin::wire::CoinResponse) during conversion.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CategoryResponse {
    #[serde(default, deserialize_with = "lenient_string::deserialize")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string::deserialize")]
    pub name: Option<String>,
    pub coins: Vec<Value>,
}

/// Body of `GET /api/categories`: either one section or an array of them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SnapshotResponse {
    Many(Vec<CategoryResponse>),
    One(CategoryResponse),
}

impl SnapshotResponse {
    /// Normalize to a sequence, preserving upstream order.
    pub fn into_sections(self) -> Vec<CategoryResponse> {
        match self {
            SnapshotResponse::Many(sections) => sections,
            SnapshotResponse::One(section) => vec![section],
        }
    }
}
