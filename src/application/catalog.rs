//! The catalog service: single point of truth for reading and writing
//! assets while keeping the snapshot cache a correct-enough accelerator.
//!
//! Read paths consult the cache first and fall through to the store on a
//! miss, writing the snapshot back with a fixed expiration. The only write
//! path deletes the list snapshot after a successful insert so the next
//! list read is forced to the store. A cache failure fails the whole
//! operation; reads are never silently downgraded to store-only.

use std::sync::Arc;

use metrics::counter;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::application::repos::{AssetMetrics, AssetsRepo, CreateAssetParams, RepoError};
use crate::cache::{CacheError, CacheKey, CacheStore, SNAPSHOT_TTL};
use crate::domain::assets::{AssetRecord, NewAsset};
use crate::domain::error::DomainError;

pub const CACHE_HIT_TOTAL: &str = "catalogd_cache_hit_total";
pub const CACHE_MISS_TOTAL: &str = "catalogd_cache_miss_total";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("asset not found")]
    NotFound,
    #[error(transparent)]
    Validation(DomainError),
    #[error(transparent)]
    Repo(#[from] RepoError),
    #[error(transparent)]
    Cache(#[from] CacheError),
    #[error("snapshot codec error: {0}")]
    Codec(#[from] serde_json::Error),
}

impl From<DomainError> for CatalogError {
    fn from(err: DomainError) -> Self {
        Self::Validation(err)
    }
}

/// Where a read was served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Cache,
    Database,
}

/// A read result tagged with its origin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sourced<T> {
    pub source: Source,
    pub data: T,
}

impl<T> Sourced<T> {
    fn cached(data: T) -> Self {
        Self {
            source: Source::Cache,
            data,
        }
    }

    fn fresh(data: T) -> Self {
        Self {
            source: Source::Database,
            data,
        }
    }
}

/// Per-dependency health, reported by the `/health` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependencyHealth {
    pub database: bool,
    pub cache: bool,
}

impl DependencyHealth {
    pub fn all_up(&self) -> bool {
        self.database && self.cache
    }
}

/// Mediates between the snapshot cache and the persistent store.
///
/// Stateless between calls: correctness relies on the store's and cache's
/// own single-key atomicity, and a concurrent create/list pair may observe
/// either ordering (bounded staleness, not strong consistency).
pub struct CatalogService {
    repo: Arc<dyn AssetsRepo>,
    cache: Arc<dyn CacheStore>,
}

impl CatalogService {
    pub fn new(repo: Arc<dyn AssetsRepo>, cache: Arc<dyn CacheStore>) -> Self {
        Self { repo, cache }
    }

    /// All assets, newest-first, served from the list snapshot when one is
    /// live.
    pub async fn list_all(&self) -> Result<Sourced<Vec<AssetRecord>>, CatalogError> {
        let key = CacheKey::AssetsIndex;
        if let Some(raw) = self.cache.get(&key).await? {
            counter!(CACHE_HIT_TOTAL).increment(1);
            let assets: Vec<AssetRecord> = serde_json::from_str(&raw)?;
            return Ok(Sourced::cached(assets));
        }

        counter!(CACHE_MISS_TOTAL).increment(1);
        let assets = self.repo.list_assets().await?;
        let raw = serde_json::to_string(&assets)?;
        self.cache.put(&key, &raw, SNAPSHOT_TTL).await?;
        debug!(target = "catalogd::catalog", count = assets.len(), key = %key, "list snapshot refreshed");
        Ok(Sourced::fresh(assets))
    }

    /// A single asset by id, with an independent per-id snapshot.
    ///
    /// Absent records report `NotFound`, distinct from dependency failure,
    /// and are never cached.
    pub async fn get_by_id(&self, id: i64) -> Result<Sourced<AssetRecord>, CatalogError> {
        let key = CacheKey::AssetById(id);
        if let Some(raw) = self.cache.get(&key).await? {
            counter!(CACHE_HIT_TOTAL).increment(1);
            let asset: AssetRecord = serde_json::from_str(&raw)?;
            return Ok(Sourced::cached(asset));
        }

        counter!(CACHE_MISS_TOTAL).increment(1);
        let asset = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(CatalogError::NotFound)?;
        let raw = serde_json::to_string(&asset)?;
        self.cache.put(&key, &raw, SNAPSHOT_TTL).await?;
        Ok(Sourced::fresh(asset))
    }

    /// Validate, insert, then delete the list snapshot.
    ///
    /// A draft that fails validation touches neither dependency. A failed
    /// insert performs no cache mutation. Per-id snapshots for other ids
    /// are left alone; the new id cannot have a stale entry because ids
    /// are never reused.
    pub async fn create(&self, draft: NewAsset) -> Result<AssetRecord, CatalogError> {
        let draft = draft.validate()?;
        let params = CreateAssetParams {
            asset_name: draft.asset_name,
            asset_type: draft.asset_type,
            owner: draft.owner,
            sensitivity_level: draft.sensitivity_level,
        };

        let created = self.repo.create_asset(params).await?;
        self.cache.delete(&CacheKey::AssetsIndex).await?;
        debug!(target = "catalogd::catalog", id = created.id, "asset created, list snapshot invalidated");
        Ok(created)
    }

    /// Rollup counters straight from the store; intentionally uncached.
    pub async fn metrics(&self) -> Result<AssetMetrics, CatalogError> {
        Ok(self.repo.metrics().await?)
    }

    /// Probe both dependencies for the health endpoint.
    pub async fn dependency_health(&self) -> DependencyHealth {
        let (database, cache) = tokio::join!(self.repo.health_check(), self.cache.ping());
        DependencyHealth {
            database: database.is_ok(),
            cache: cache.is_ok(),
        }
    }
}
