//! Snapshot cache for catalog reads.
//!
//! Two keys exist: the full list snapshot (`assets:all`) and per-record
//! snapshots (`asset:<id>`), both with a fixed 300-second expiration. Reads
//! go through the cache first; a create deletes the list snapshot so the
//! next list read hits the store. Per-record snapshots are only ever
//! discovered lazily and self-expire.

mod keys;
mod memory;
mod redis;
mod store;

pub use keys::{CacheKey, SNAPSHOT_TTL};
pub use memory::MemoryStore;
pub use redis::RedisStore;
pub use store::{CacheError, CacheStore};
