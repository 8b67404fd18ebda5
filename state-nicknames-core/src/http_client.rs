//! HTTP fetcher
//!
//! One unauthenticated GET against a fixed endpoint.
//!
//! # design principles
//! - **The endpoint is parsed on every fetch** - a bad endpoint is a local configuration error and no request is sent
//! - **No retries, no custom headers** - timeouts and redirects follow the client defaults
//! - **The body is handed on as is** - the status code is logged, deciding what the body means is the decoder's job

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::error::{CoreResult, LoadError};
use crate::traits::Fetcher;
use crate::utils::log_sanitizer::payload_for_log;

/// Default endpoint
pub const DEFAULT_ENDPOINT: &str = "https://cs.okstate.edu/~ryavila/index.php";

/// HTTP implementation of [`Fetcher`]
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    endpoint: String,
}

impl HttpFetcher {
    /// Create a fetcher with a default client
    ///
    /// # Returns
    /// * `Err(LoadError::Transport)` - the TLS backend could not be initialized
    pub fn new(endpoint: impl Into<String>) -> CoreResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| LoadError::Transport(format!("Failed to create HTTP client: {e}")))?;
        Ok(Self::with_client(client, endpoint))
    }

    /// Create a fetcher around an existing client
    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    fn parse_endpoint(&self) -> CoreResult<Url> {
        Url::parse(&self.endpoint).map_err(|e| LoadError::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            detail: e.to_string(),
        })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self) -> CoreResult<Vec<u8>> {
        let url = self.parse_endpoint()?;
        log::debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LoadError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            log::debug!("Response Status: {}", status.as_u16());
        } else {
            log::warn!("Response Status: {} (body is decoded anyway)", status.as_u16());
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| LoadError::Transport(format!("Failed to read response body: {e}")))?;

        log::debug!("Response Body: {}", payload_for_log(&body));

        Ok(body.to_vec())
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
