//! Shared test doubles: an in-memory `AssetsRepo` and a failing cache.

#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use time::OffsetDateTime;

use catalogd::application::repos::{AssetMetrics, AssetsRepo, CreateAssetParams, RepoError};
use catalogd::cache::{CacheError, CacheKey, CacheStore};
use catalogd::domain::assets::AssetRecord;

const BASE_UNIX_SECS: i64 = 1_700_000_000;

/// In-memory store standing in for Postgres.
///
/// Assigns monotonic ids and strictly increasing creation times so
/// newest-first ordering is observable.
pub struct StubRepo {
    rows: Mutex<Vec<AssetRecord>>,
    next_id: AtomicI64,
    tick: AtomicI64,
    create_calls: AtomicUsize,
}

impl StubRepo {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
            tick: AtomicI64::new(0),
            create_calls: AtomicUsize::new(0),
        }
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }
}

impl Default for StubRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AssetsRepo for StubRepo {
    async fn list_assets(&self) -> Result<Vec<AssetRecord>, RepoError> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<AssetRecord>, RepoError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|row| row.id == id).cloned())
    }

    async fn create_asset(&self, params: CreateAssetParams) -> Result<AssetRecord, RepoError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let tick = self.tick.fetch_add(1, Ordering::SeqCst);
        let created_at = OffsetDateTime::from_unix_timestamp(BASE_UNIX_SECS + tick)
            .map_err(RepoError::from_persistence)?;

        let record = AssetRecord {
            id,
            asset_name: params.asset_name,
            asset_type: params.asset_type,
            owner: params.owner,
            sensitivity_level: params.sensitivity_level,
            created_at,
            updated_at: created_at,
        };
        self.rows.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn metrics(&self) -> Result<AssetMetrics, RepoError> {
        let rows = self.rows.lock().unwrap();
        let mut types: Vec<&str> = rows.iter().map(|row| row.asset_type.as_str()).collect();
        types.sort_unstable();
        types.dedup();

        Ok(AssetMetrics {
            total_assets: rows.len() as u64,
            asset_types: types.len() as u64,
            high_sensitivity_assets: rows
                .iter()
                .filter(|row| row.sensitivity_level.as_deref() == Some("HIGH"))
                .count() as u64,
        })
    }

    async fn health_check(&self) -> Result<(), RepoError> {
        Ok(())
    }
}

/// Cache store whose every operation fails, for propagation tests.
pub struct FailingCache;

#[async_trait]
impl CacheStore for FailingCache {
    async fn get(&self, _key: &CacheKey) -> Result<Option<String>, CacheError> {
        Err(CacheError::backend("connection refused"))
    }

    async fn put(&self, _key: &CacheKey, _value: &str, _ttl: Duration) -> Result<(), CacheError> {
        Err(CacheError::backend("connection refused"))
    }

    async fn delete(&self, _key: &CacheKey) -> Result<(), CacheError> {
        Err(CacheError::backend("connection refused"))
    }

    async fn ping(&self) -> Result<(), CacheError> {
        Err(CacheError::backend("connection refused"))
    }
}
