//! In-memory LRU cache for fetched objects.
//!
//! Metadata tables and curve files are immutable once published, so a
//! read-through cache keyed by `(bucket, key)` never needs invalidation.
//! Shared by every request; values are cheap `Bytes` clones.

use bytes::Bytes;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use gds_common::GdsResult;

use crate::ObjectStorage;

type CacheKey = (String, String);

/// Statistics for the object cache
#[derive(Debug, Default, Clone, serde::Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
    pub bytes_cached: u64,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

/// Read-through LRU cache of object bytes.
pub struct ObjectCache {
    cache: Arc<RwLock<LruCache<CacheKey, Bytes>>>,
    stats: Arc<RwLock<CacheStats>>,
    capacity: usize,
}

impl ObjectCache {
    /// Create a cache holding at most `capacity` objects.
    pub fn new(capacity: usize) -> Self {
        let cache_size = NonZeroUsize::new(capacity.max(1)).unwrap_or(NonZeroUsize::MIN);

        Self {
            cache: Arc::new(RwLock::new(LruCache::new(cache_size))),
            stats: Arc::new(RwLock::new(CacheStats::default())),
            capacity,
        }
    }

    /// Return the cached object or fetch it from `storage` and remember it.
    pub async fn get_or_fetch(&self, storage: &ObjectStorage, key: &str) -> GdsResult<Bytes> {
        let cache_key = (storage.bucket().to_string(), key.to_string());

        let cached = self.cache.write().await.get(&cache_key).cloned();
        if let Some(bytes) = cached {
            self.stats.write().await.hits += 1;
            metrics::counter!("gds_cache_hits_total").increment(1);
            return Ok(bytes);
        }

        self.stats.write().await.misses += 1;
        metrics::counter!("gds_cache_misses_total").increment(1);
        debug!(bucket = storage.bucket(), key, "Object cache miss");

        let bytes = storage.get(key).await?;
        self.insert(cache_key, bytes.clone()).await;
        Ok(bytes)
    }

    async fn insert(&self, key: CacheKey, bytes: Bytes) {
        let mut cache = self.cache.write().await;
        let size = bytes.len() as u64;

        if let Some((_, evicted)) = cache.push(key, bytes) {
            let mut stats = self.stats.write().await;
            stats.bytes_cached = stats.bytes_cached.saturating_sub(evicted.len() as u64);
        }

        let mut stats = self.stats.write().await;
        stats.entries = cache.len();
        stats.bytes_cached += size;
    }

    /// Get current cache statistics.
    pub async fn stats(&self) -> CacheStats {
        let cache = self.cache.read().await;
        let mut stats = self.stats.write().await;
        stats.entries = cache.len();
        stats.clone()
    }

    /// Clear the cache.
    pub async fn clear(&self) {
        let mut cache = self.cache.write().await;
        cache.clear();

        let mut stats = self.stats.write().await;
        *stats = CacheStats::default();
    }

    /// Get cache capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use object_store::{memory::InMemory, path::Path, ObjectStore};

    async fn storage_with(bucket: &str, objects: &[(&str, &str)]) -> ObjectStorage {
        let store = Arc::new(InMemory::new());
        for (key, data) in objects {
            store
                .put(&Path::from(*key), Bytes::copy_from_slice(data.as_bytes()).into())
                .await
                .unwrap();
        }
        ObjectStorage::from_store(store, bucket)
    }

    #[tokio::test]
    async fn test_cache_hit_miss() {
        let storage = storage_with("meta", &[("a.csv", "abc")]).await;
        let cache = ObjectCache::new(4);

        assert_eq!(cache.get_or_fetch(&storage, "a.csv").await.unwrap(), "abc");
        assert_eq!(cache.get_or_fetch(&storage, "a.csv").await.unwrap(), "abc");

        let stats = cache.stats().await;
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.entries, 1);
        assert_eq!(stats.bytes_cached, 3);
    }

    #[tokio::test]
    async fn test_keyed_by_bucket_and_key() {
        let a = storage_with("bucket-a", &[("x.csv", "from-a")]).await;
        let b = storage_with("bucket-b", &[("x.csv", "from-b")]).await;
        let cache = ObjectCache::new(4);

        assert_eq!(cache.get_or_fetch(&a, "x.csv").await.unwrap(), "from-a");
        assert_eq!(cache.get_or_fetch(&b, "x.csv").await.unwrap(), "from-b");
        assert_eq!(cache.stats().await.entries, 2);
    }

    #[tokio::test]
    async fn test_lru_eviction() {
        let storage = storage_with("meta", &[("k0", "0"), ("k1", "1"), ("k2", "2")]).await;
        let cache = ObjectCache::new(2);

        for key in ["k0", "k1", "k2"] {
            cache.get_or_fetch(&storage, key).await.unwrap();
        }
        assert_eq!(cache.stats().await.entries, 2);

        // k0 was evicted, so it is fetched again
        cache.get_or_fetch(&storage, "k0").await.unwrap();
        assert_eq!(cache.stats().await.misses, 4);
    }

    #[tokio::test]
    async fn test_missing_object_is_not_cached() {
        let storage = storage_with("meta", &[]).await;
        let cache = ObjectCache::new(2);
        assert!(cache.get_or_fetch(&storage, "nope").await.is_err());
        assert_eq!(cache.stats().await.entries, 0);
    }
}
