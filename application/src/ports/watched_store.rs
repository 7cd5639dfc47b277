//! Watched-list store port.

use async_trait::async_trait;
use thiserror::Error;

/// Errors from the watched-list store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Per-user watched-movie persistence.
///
/// The store holds a set of movie ids per user identifier: adding an id
/// twice must leave a single entry. Ordering of `list` is whatever the
/// store returns; callers must not rely on it.
#[async_trait]
pub trait WatchedStore: Send + Sync {
    /// Add a movie to the user's watched set. Idempotent.
    async fn add(&self, user_id: &str, movie_id: u64) -> Result<(), StoreError>;

    /// All watched movie ids for the user. Empty when the user is unknown.
    async fn list(&self, user_id: &str) -> Result<Vec<u64>, StoreError>;

    /// Whether the user has the movie in their watched set.
    async fn is_watched(&self, user_id: &str, movie_id: u64) -> Result<bool, StoreError>;
}
