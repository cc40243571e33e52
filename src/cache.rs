//! Response cache keyed by request fingerprint.
//!
//! Avoids redundant network calls for read requests whose results are
//! still fresh. Expiry is lazy: an entry's age is checked at lookup
//! time, and an expired entry simply counts as a miss until the next
//! successful fetch for the same key replaces it. The endpoint
//! cardinality of the API is small, so the map is not proactively
//! compacted.

use std::time::Duration;

use dashmap::DashMap;
use serde_json::Value;
use tokio::time::Instant;

use crate::types::CacheKey;

#[derive(Debug, Clone)]
struct CacheEntry {
    payload: Value,
    stored_at: Instant,
    ttl: Duration,
}

impl CacheEntry {
    fn is_fresh(&self, now: Instant) -> bool {
        now < self.stored_at + self.ttl
    }
}

/// Maps request fingerprints to previously fetched payloads.
///
/// Lookups and stores for different keys do not block each other; a
/// lookup racing a store for the same key sees either the old or the
/// new entry, never a partially written one.
#[derive(Debug)]
pub(crate) struct ResponseCache {
    entries: DashMap<CacheKey, CacheEntry>,
    enabled: bool,
}

impl ResponseCache {
    /// A disabled cache reports a miss for every key and ignores
    /// stores, without changing any other component's behavior.
    pub(crate) fn new(enabled: bool) -> Self {
        Self {
            entries: DashMap::new(),
            enabled,
        }
    }

    /// Return the payload stored under `key` if it is still fresh.
    pub(crate) fn lookup(&self, key: &CacheKey) -> Option<Value> {
        if !self.enabled {
            return None;
        }
        let entry = self.entries.get(key)?;
        if entry.is_fresh(Instant::now()) {
            Some(entry.payload.clone())
        } else {
            None
        }
    }

    /// Insert or replace the entry for `key`. Called only after a
    /// successful fetch; error responses are never stored.
    pub(crate) fn store(&self, key: CacheKey, payload: Value, ttl: Duration) {
        if !self.enabled {
            return;
        }
        self.entries.insert(
            key,
            CacheEntry {
                payload,
                stored_at: Instant::now(),
                ttl,
            },
        );
    }

    /// Evict the entry for `key`. A no-op when the key is absent.
    pub(crate) fn invalidate(&self, key: &CacheKey) {
        self.entries.remove(key);
    }

    /// Evict every entry.
    pub(crate) fn invalidate_all(&self) {
        self.entries.clear();
    }

    /// Number of entries, fresh or expired.
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;

    use super::ResponseCache;
    use crate::types::RequestDescriptor;

    const TTL: Duration = Duration::from_secs(60);

    #[tokio::test(start_paused = true)]
    async fn test_hit_before_ttl_miss_after() {
        let cache = ResponseCache::new(true);
        let key = RequestDescriptor::new("/servers").cache_key();
        cache.store(key.clone(), json!({"online": true}), TTL);

        tokio::time::sleep(TTL - Duration::from_millis(1)).await;
        assert_eq!(cache.lookup(&key), Some(json!({"online": true})));

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(cache.lookup(&key), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_store_replaces_expired_entry() {
        let cache = ResponseCache::new(true);
        let key = RequestDescriptor::new("/servers").cache_key();
        cache.store(key.clone(), json!(1), TTL);

        tokio::time::sleep(TTL * 2).await;
        assert_eq!(cache.lookup(&key), None);

        cache.store(key.clone(), json!(2), TTL);
        assert_eq!(cache.lookup(&key), Some(json!(2)));
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_disabled_cache_never_hits() {
        let cache = ResponseCache::new(false);
        let key = RequestDescriptor::new("/servers").cache_key();
        cache.store(key.clone(), json!(1), TTL);
        assert_eq!(cache.lookup(&key), None);
        assert_eq!(cache.len(), 0);
    }

    #[tokio::test]
    async fn test_invalidate_absent_key_is_noop() {
        let cache = ResponseCache::new(true);
        let key = RequestDescriptor::new("/servers").cache_key();
        cache.invalidate(&key);
        cache.invalidate(&key);

        cache.store(key.clone(), json!(1), TTL);
        cache.invalidate(&key);
        assert_eq!(cache.lookup(&key), None);
    }

    #[tokio::test]
    async fn test_invalidate_all() {
        let cache = ResponseCache::new(true);
        let servers = RequestDescriptor::new("/servers").cache_key();
        let events = RequestDescriptor::new("/events").cache_key();
        cache.store(servers.clone(), json!(1), TTL);
        cache.store(events.clone(), json!(2), TTL);

        cache.invalidate_all();
        assert_eq!(cache.lookup(&servers), None);
        assert_eq!(cache.lookup(&events), None);
        assert_eq!(cache.len(), 0);
    }
}
