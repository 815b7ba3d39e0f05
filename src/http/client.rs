//! Low-level HTTP client: `ListingsHttp`.
//!
//! Returns raw bodies; normalization into domain types happens in the
//! category sub-client. Fetches are single-shot: a failed request surfaces as
//! an error and the caller decides whether to try again.

use crate::error::HttpError;
use crate::network::CATEGORIES_PATH;

use reqwest::Client;

/// Low-level HTTP client for the listings API.
#[derive(Debug, Clone)]
pub struct ListingsHttp {
    base_url: String,
    client: Client,
}

impl ListingsHttp {
    pub fn new(base_url: &str) -> Result<Self, HttpError> {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder
                .timeout(std::time::Duration::from_secs(30))
                .pool_max_idle_per_host(10);
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Categories ───────────────────────────────────────────────────────

    /// URL of the category snapshot endpoint.
    pub fn categories_url(&self, limit: Option<u32>) -> String {
        let mut url = format!("{}{}", self.base_url, CATEGORIES_PATH);
        if let Some(l) = limit {
            url = format!("{}?limit={}", url, l);
        }
        url
    }

    /// Raw body of `GET /api/categories`.
    pub async fn get_categories(&self, limit: Option<u32>) -> Result<String, HttpError> {
        let url = self.categories_url(limit);
        self.get_text(&url).await
    }

    // ── Internals ────────────────────────────────────────────────────────

    async fn get_text(&self, url: &str) -> Result<String, HttpError> {
        tracing::debug!(url, "GET");

        let resp = self.client.get(url).send().await.map_err(map_reqwest)?;
        let status = resp.status();

        if status.is_success() {
            return resp.text().await.map_err(map_reqwest);
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();
        tracing::debug!(status = status_code, "request to {} failed", url);

        match status_code {
            404 => Err(HttpError::NotFound(body_text)),
            429 => Err(HttpError::RateLimited),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}

fn map_reqwest(err: reqwest::Error) -> HttpError {
    if err.is_timeout() {
        HttpError::Timeout
    } else {
        HttpError::Reqwest(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_url() {
        let http = ListingsHttp::new("http://localhost:3000/").unwrap();
        assert_eq!(http.base_url(), "http://localhost:3000");
        assert_eq!(
            http.categories_url(Some(10)),
            "http://localhost:3000/api/categories?limit=10"
        );
        assert_eq!(http.categories_url(None), "http://localhost:3000/api/categories");
    }
}
