//! # coinboard
//!
//! Reconciles category snapshots from a coin listing tracker into one
//! canonical record per coin, with derived market metrics and a deterministic
//! presentation order.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core**: Newtypes, domain models, wire types (always available)
//! 2. **Engine**: Reconciliation, enrichment, metrics, tags, views (pure, synchronous)
//! 3. **HTTP API**: `ListingsHttp`, a single-shot category fetch
//! 4. **High-Level Client**: `ListingsClient`, fetch + reconcile in one call
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coinboard::prelude::*;
//!
//! let snapshot = Snapshot::from_json(&body)?;
//! let table = ReferencePriceTable::from_json(&reference_json)?;
//! let view = Engine::new(table).sorted_view(snapshot.sections(), ViewMode::Unified);
//!
//! // or, with the `http` feature:
//! let client = ListingsClient::builder().base_url("http://localhost:3000").build()?;
//! let view = client.view(ViewMode::Grouped).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and formatting helpers.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions.
pub mod domain;

/// Unified error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: Engine ──────────────────────────────────────────────────────────

/// Reconciliation engine.
pub mod engine;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// HTTP client for the category snapshot endpoint.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `ListingsClient`: the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{Chain, CoinId, ContractAddress};

    // Domain types
    pub use crate::domain::category::{CategorySection, Snapshot};
    pub use crate::domain::coin::{Coin, DayStats};
    pub use crate::domain::reference_price::{ReferencePriceEntry, ReferencePriceTable};

    // Engine
    pub use crate::engine::{
        reconcile, sorted_view, CanonicalCoin, CoinRow, Engine, EngineConfig, PriceChange,
        SectionView, TagPalette, Trend, View, ViewMode,
    };

    // Errors
    pub use crate::error::{HttpError, SdkError, SnapshotError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{CategoriesClient, ListingsClient, ListingsClientBuilder};
}
