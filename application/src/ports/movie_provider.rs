//! Movie metadata provider port.

use async_trait::async_trait;
use reelbot_domain::MovieRecord;
use thiserror::Error;

/// Errors from the movie metadata provider.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

/// Access to an external movie-information service.
///
/// "Not found" is not an error: `search` and `details` return `Ok(None)`
/// when nothing matches, reserving `Err` for transport and protocol
/// failures.
#[async_trait]
pub trait MovieProvider: Send + Sync {
    /// Search by title and return the best match, if any.
    async fn search(&self, title: &str) -> Result<Option<MovieRecord>, ProviderError>;

    /// Fetch full details for a known movie id.
    async fn details(&self, movie_id: u64) -> Result<Option<MovieRecord>, ProviderError>;

    /// Fetch similar movies with `vote_average >= min_score`, sorted by
    /// popularity descending. An empty list is a valid result.
    async fn similar(&self, movie_id: u64, min_score: f64)
        -> Result<Vec<MovieRecord>, ProviderError>;
}
