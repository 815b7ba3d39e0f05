//! High-level client: `ListingsClient` with a sub-client accessor and a
//! one-call fetch-and-reconcile path.

use crate::domain::category::client::Categories;
use crate::domain::category::Snapshot;
use crate::domain::reference_price::ReferencePriceTable;
use crate::engine::{Engine, EngineConfig, View, ViewMode};
use crate::error::SdkError;
use crate::http::ListingsHttp;

use std::sync::Arc;

// Re-export sub-client types for convenience.
pub use crate::domain::category::client::Categories as CategoriesClient;

/// The primary entry point: fetches category snapshots and runs them through
/// an [`Engine`].
#[derive(Debug, Clone)]
pub struct ListingsClient {
    pub(crate) http: ListingsHttp,
    pub(crate) engine: Engine,
    pub(crate) category_limit: u32,
}

impl ListingsClient {
    pub fn builder() -> ListingsClientBuilder {
        ListingsClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn categories(&self) -> Categories<'_> {
        Categories { client: self }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Fetch a fresh snapshot and assemble it in `mode`.
    ///
    /// Nothing is cached: every call hits the endpoint once.
    pub async fn view(&self, mode: ViewMode) -> Result<View, SdkError> {
        let snapshot = self.categories().snapshot().await?;
        Ok(self.view_of(&snapshot, mode))
    }

    /// Assemble an already-fetched snapshot.
    pub fn view_of(&self, snapshot: &Snapshot, mode: ViewMode) -> View {
        self.engine.sorted_view(snapshot.sections(), mode)
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct ListingsClientBuilder {
    base_url: String,
    category_limit: u32,
    reference_prices: Arc<ReferencePriceTable>,
    engine_config: EngineConfig,
}

impl Default for ListingsClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            category_limit: crate::network::DEFAULT_CATEGORY_LIMIT,
            reference_prices: Arc::new(ReferencePriceTable::new()),
            engine_config: EngineConfig::default(),
        }
    }
}

impl ListingsClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Coins requested per category.
    pub fn category_limit(mut self, limit: u32) -> Self {
        self.category_limit = limit;
        self
    }

    pub fn reference_prices(mut self, table: impl Into<Arc<ReferencePriceTable>>) -> Self {
        self.reference_prices = table.into();
        self
    }

    pub fn engine_config(mut self, config: EngineConfig) -> Self {
        self.engine_config = config;
        self
    }

    pub fn build(self) -> Result<ListingsClient, SdkError> {
        Ok(ListingsClient {
            http: ListingsHttp::new(&self.base_url)?,
            engine: Engine::new(self.reference_prices).with_config(self.engine_config),
            category_limit: self.category_limit,
        })
    }
}
