//! Repository traits describing persistence adapters.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::domain::assets::AssetRecord;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
    #[error("database timeout")]
    Timeout,
}

impl RepoError {
    pub fn from_persistence(err: impl std::fmt::Display) -> Self {
        Self::Persistence(err.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct CreateAssetParams {
    pub asset_name: String,
    pub asset_type: String,
    pub owner: Option<String>,
    pub sensitivity_level: Option<String>,
}

/// Rollup counters computed directly against the store, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AssetMetrics {
    pub total_assets: u64,
    pub asset_types: u64,
    pub high_sensitivity_assets: u64,
}

#[async_trait]
pub trait AssetsRepo: Send + Sync {
    /// All assets, newest-first by creation time.
    async fn list_assets(&self) -> Result<Vec<AssetRecord>, RepoError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<AssetRecord>, RepoError>;

    /// Insert a record; the store assigns `id` and both timestamps.
    async fn create_asset(&self, params: CreateAssetParams) -> Result<AssetRecord, RepoError>;

    async fn metrics(&self) -> Result<AssetMetrics, RepoError>;

    async fn health_check(&self) -> Result<(), RepoError>;
}
