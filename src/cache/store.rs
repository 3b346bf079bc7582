//! The cache store seam.
//!
//! `CatalogService` talks to the cache only through this trait; the Redis
//! backend serves production and the in-memory backend serves tests and
//! embedders.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use super::keys::CacheKey;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache backend error: {message}")]
    Backend { message: String },
}

impl CacheError {
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }
}

impl From<redis::RedisError> for CacheError {
    fn from(err: redis::RedisError) -> Self {
        Self::backend(err.to_string())
    }
}

/// A key-value store with per-key expiration, holding serialized snapshots.
///
/// Single-key get/put/delete are atomic at the backend; no multi-key
/// operations are used anywhere.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Fetch an unexpired snapshot, or `None` on miss.
    async fn get(&self, key: &CacheKey) -> Result<Option<String>, CacheError>;

    /// Write a snapshot that expires after `ttl`.
    async fn put(&self, key: &CacheKey, value: &str, ttl: Duration) -> Result<(), CacheError>;

    /// Drop a snapshot. Deleting an absent key is not an error.
    async fn delete(&self, key: &CacheKey) -> Result<(), CacheError>;

    /// Round-trip to the backend, for health reporting.
    async fn ping(&self) -> Result<(), CacheError>;
}
