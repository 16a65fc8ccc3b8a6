//! HTTP client for IFDB
//!
//! Wraps a `reqwest` client configured with a timeout and user agent. Every
//! request is a single attempt: transport failures and non-success statuses
//! are returned as errors for the caller to treat as fatal.

use std::time::Duration;

use tracing::debug;

use crate::error::{IfdbError, Result};
use crate::parser::{parse_game_detail, parse_search_results};
use crate::provider::{DetailProvider, FileFetcher, SearchProvider};
use crate::types::{Candidate, GameDetail};
use crate::url::{DEFAULT_BASE_URL, build_game_url, build_search_url};

const USER_AGENT: &str = concat!("ifdb-dl/", env!("CARGO_PKG_VERSION"));

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Catalog root (default: "https://ifdb.org")
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

/// HTTP client for the IFDB JSON API and for download links
pub struct IfdbClient {
    client: reqwest::Client,
    base_url: String,
}

impl IfdbClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent)
            .build()
            .map_err(IfdbError::HttpError)?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    /// Perform one GET and return the response once its status is checked
    async fn get(&self, url: &str) -> Result<reqwest::Response> {
        debug!(url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(IfdbError::HttpError)?;

        let status = response.status();
        debug!(url, status = status.as_u16(), "response");

        if !status.is_success() {
            return Err(IfdbError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response)
    }

    /// Fetch a text body
    async fn fetch_text(&self, url: &str) -> Result<String> {
        let response = self.get(url).await?;
        response.text().await.map_err(IfdbError::HttpError)
    }
}

impl SearchProvider for IfdbClient {
    /// Search the catalog
    ///
    /// # Errors
    /// - `InvalidQuery` if query is empty or whitespace only
    /// - `HttpError` / `Status` if the request fails
    /// - `DecodeError` if the body is not a search document
    async fn search(&self, query: &str) -> Result<Vec<Candidate>> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(IfdbError::InvalidQuery(
                "Search query cannot be empty".to_string(),
            ));
        }

        let body = self
            .fetch_text(&build_search_url(&self.base_url, trimmed))
            .await?;
        parse_search_results(&body)
    }
}

impl DetailProvider for IfdbClient {
    async fn game_detail(&self, tuid: &str) -> Result<GameDetail> {
        let body = self.fetch_text(&build_game_url(&self.base_url, tuid)).await?;
        parse_game_detail(&body)
    }
}

impl FileFetcher for IfdbClient {
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.get(url).await?;
        let bytes = response.bytes().await.map_err(IfdbError::HttpError)?;
        debug!(url, len = bytes.len(), "downloaded");
        Ok(bytes.to_vec())
    }
}
