//! Categories sub-client: fetch and normalize the category snapshot.

use crate::client::ListingsClient;
use crate::domain::category::Snapshot;
use crate::error::SdkError;

/// Sub-client for the category snapshot endpoint.
pub struct Categories<'a> {
    pub(crate) client: &'a ListingsClient,
}

impl<'a> Categories<'a> {
    /// Fetch the snapshot with the client's configured per-category limit.
    pub async fn snapshot(&self) -> Result<Snapshot, SdkError> {
        self.snapshot_with_limit(self.client.category_limit).await
    }

    /// Fetch the snapshot asking upstream for `limit` coins per category.
    pub async fn snapshot_with_limit(&self, limit: u32) -> Result<Snapshot, SdkError> {
        let body = self.client.http.get_categories(Some(limit)).await?;
        let snapshot = Snapshot::from_json(&body)?;
        tracing::debug!(
            sections = snapshot.sections().len(),
            "fetched category snapshot"
        );
        Ok(snapshot)
    }
}
