//! Cache key definitions.
//!
//! Read and invalidation sites construct keys through `CacheKey`; rendering
//! is the only place key strings are built.

use std::fmt;
use std::time::Duration;

/// Fixed expiration for both snapshot keys.
pub const SNAPSHOT_TTL: Duration = Duration::from_secs(300);

/// Identifies a cached snapshot of catalog state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// The full list snapshot, newest-first.
    AssetsIndex,
    /// A single-record snapshot keyed by store id.
    AssetById(i64),
}

impl CacheKey {
    /// Render the backing store's key string.
    pub fn render(&self) -> String {
        match self {
            CacheKey::AssetsIndex => "assets:all".to_string(),
            CacheKey::AssetById(id) => format!("asset:{id}"),
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_key_renders_fixed_string() {
        assert_eq!(CacheKey::AssetsIndex.render(), "assets:all");
    }

    #[test]
    fn by_id_key_embeds_the_id() {
        assert_eq!(CacheKey::AssetById(1).render(), "asset:1");
        assert_eq!(CacheKey::AssetById(42).render(), "asset:42");
    }

    #[test]
    fn distinct_ids_render_distinct_keys() {
        assert_ne!(
            CacheKey::AssetById(1).render(),
            CacheKey::AssetById(2).render()
        );
    }

    #[test]
    fn display_matches_render() {
        assert_eq!(CacheKey::AssetById(7).to_string(), "asset:7");
    }
}
