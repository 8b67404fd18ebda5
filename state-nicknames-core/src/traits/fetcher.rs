//! Fetcher abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;

/// Fetcher Trait
///
/// Issues one request for the raw payload. Implementations report exactly one
/// outcome per call and never retry.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch the raw payload
    ///
    /// # Returns
    /// * `Ok(bytes)` - the response body, possibly empty
    /// * `Err(LoadError::InvalidEndpoint)` - the endpoint does not parse, nothing was sent
    /// * `Err(LoadError::Transport)` - network-layer failure
    async fn fetch(&self) -> CoreResult<Vec<u8>>;

    /// Endpoint description (for logging)
    fn endpoint(&self) -> &str;
}
