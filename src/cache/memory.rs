//! In-memory cache store with per-entry expiration.
//!
//! Drop-in stand-in for the Redis backend in tests and single-process
//! embeddings. Expired entries are dropped lazily on access.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::keys::CacheKey;
use super::store::{CacheError, CacheStore};

struct Entry {
    value: String,
    expires_at: Instant,
}

#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Entry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CacheStore for MemoryStore {
    async fn get(&self, key: &CacheKey) -> Result<Option<String>, CacheError> {
        let rendered = key.render();
        {
            let guard = self.entries.read().await;
            match guard.get(&rendered) {
                Some(entry) if entry.expires_at > Instant::now() => {
                    return Ok(Some(entry.value.clone()));
                }
                Some(_) => {}
                None => return Ok(None),
            }
        }
        // Entry exists but has expired; drop it under the write lock.
        self.entries.write().await.remove(&rendered);
        Ok(None)
    }

    async fn put(&self, key: &CacheKey, value: &str, ttl: Duration) -> Result<(), CacheError> {
        let entry = Entry {
            value: value.to_string(),
            expires_at: Instant::now() + ttl,
        };
        self.entries.write().await.insert(key.render(), entry);
        Ok(())
    }

    async fn delete(&self, key: &CacheKey) -> Result<(), CacheError> {
        self.entries.write().await.remove(&key.render());
        Ok(())
    }

    async fn ping(&self) -> Result<(), CacheError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_then_get_returns_value() {
        let store = MemoryStore::new();
        store
            .put(&CacheKey::AssetsIndex, "[]", Duration::from_secs(300))
            .await
            .unwrap();
        let value = store.get(&CacheKey::AssetsIndex).await.unwrap();
        assert_eq!(value.as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn entries_expire_after_ttl() {
        let store = MemoryStore::new();
        store
            .put(&CacheKey::AssetById(1), "{}", Duration::from_millis(10))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(30)).await;
        assert!(store.get(&CacheKey::AssetById(1)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_removes_entry() {
        let store = MemoryStore::new();
        store
            .put(&CacheKey::AssetsIndex, "[]", Duration::from_secs(300))
            .await
            .unwrap();
        store.delete(&CacheKey::AssetsIndex).await.unwrap();
        assert!(store.get(&CacheKey::AssetsIndex).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_of_absent_key_is_ok() {
        let store = MemoryStore::new();
        assert!(store.delete(&CacheKey::AssetById(99)).await.is_ok());
    }

    #[tokio::test]
    async fn keys_are_independent() {
        let store = MemoryStore::new();
        store
            .put(&CacheKey::AssetById(1), "one", Duration::from_secs(300))
            .await
            .unwrap();
        store
            .put(&CacheKey::AssetById(2), "two", Duration::from_secs(300))
            .await
            .unwrap();
        store.delete(&CacheKey::AssetById(1)).await.unwrap();
        assert!(store.get(&CacheKey::AssetById(1)).await.unwrap().is_none());
        assert_eq!(
            store.get(&CacheKey::AssetById(2)).await.unwrap().as_deref(),
            Some("two")
        );
    }
}
