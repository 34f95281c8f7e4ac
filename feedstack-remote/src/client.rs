//! HTTP client for the feed API.
//!
//! Thin reqwest wrapper around the two read endpoints the core consumes.
//! No retries and no caching; one call maps to one request.

use crate::error::{RemoteError, RemoteResult};
use feedstack_types::{Post, PostId};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Configuration for the feed API client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Base URL of the feed API (e.g. `https://jsonplaceholder.typicode.com`).
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://jsonplaceholder.typicode.com".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Client for the remote feed API.
pub struct ApiClient {
    config: RemoteConfig,
    client: Client,
}

impl ApiClient {
    /// Creates a client from the given configuration.
    ///
    /// An unparseable base URL is a programming error and fails
    /// construction instead of surfacing later as a request failure.
    pub fn new(config: RemoteConfig) -> RemoteResult<Self> {
        reqwest::Url::parse(&config.base_url)
            .map_err(|e| RemoteError::InvalidConfig(format!("bad base url {:?}: {e}", config.base_url)))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| RemoteError::InvalidConfig(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { config, client })
    }

    /// Creates a client with the default configuration.
    pub fn with_defaults() -> RemoteResult<Self> {
        Self::new(RemoteConfig::default())
    }

    /// Fetches the whole feed: `GET {base}/posts`.
    pub async fn fetch_posts(&self) -> RemoteResult<Vec<Post>> {
        let url = self.endpoint("posts");
        debug!("Fetching feed from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| RemoteError::Network(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status {
                status: status.as_u16(),
                url,
            });
        }

        response
            .json()
            .await
            .map_err(|e| RemoteError::Decode(format!("invalid feed response from {url}: {e}")))
    }

    /// Fetches a single post: `GET {base}/posts/{id}`.
    pub async fn fetch_post(&self, id: PostId) -> RemoteResult<Post> {
        let url = self.endpoint(&format!("posts/{id}"));
        debug!("Fetching post {} from {}", id, url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| RemoteError::Network(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status {
                status: status.as_u16(),
                url,
            });
        }

        response
            .json()
            .await
            .map_err(|e| RemoteError::Decode(format!("invalid post response from {url}: {e}")))
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }
}
