//! In-memory query result cache with absolute expiry.
//!
//! This module provides `QueryCache`, a keyed store for query results shared through
//! `AppState`. Entries expire a fixed time after insertion regardless of how often they
//! are read. Expired entries are dropped when looked up and swept on every insert, and
//! every mutation of the underlying data clears the whole cache.
//!
//! Each clear bumps a generation counter. A reader takes the generation before querying
//! and stores its result only if no clear happened in between, so a result read before a
//! mutation is never cached after it.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Stored value with expiration timestamp.
#[derive(Clone)]
struct CachedEntry<V> {
    value: V,
    expires_at: Instant,
}

impl<V> CachedEntry<V> {
    fn new(value: V, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: Instant::now() + ttl,
        }
    }

    /// Checks if the entry has expired.
    ///
    /// # Returns
    /// - `true` - Entry has expired
    /// - `false` - Entry is still valid
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

struct CacheState<V> {
    entries: HashMap<String, CachedEntry<V>>,
    /// Incremented by every `invalidate_all`.
    generation: u64,
}

/// Keyed cache of query results with a shared time-to-live.
///
/// Cloning is cheap; clones share the same underlying map.
#[derive(Clone)]
pub struct QueryCache<V: Clone> {
    state: Arc<RwLock<CacheState<V>>>,
    ttl: Duration,
}

impl<V: Clone> QueryCache<V> {
    /// Creates an empty cache whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            state: Arc::new(RwLock::new(CacheState {
                entries: HashMap::new(),
                generation: 0,
            })),
            ttl,
        }
    }

    /// Gets a copy of the cached value for `key`.
    ///
    /// # Returns
    /// - `Some(V)` - A non-expired entry exists
    /// - `None` - No entry, or the entry expired and has been removed
    pub async fn get(&self, key: &str) -> Option<V> {
        {
            let state = self.state.read().await;
            match state.entries.get(key) {
                Some(entry) if !entry.is_expired() => return Some(entry.value.clone()),
                Some(_) => {}
                None => return None,
            }
        }

        // Entry exists but expired
        let mut state = self.state.write().await;
        if state.entries.get(key).is_some_and(CachedEntry::is_expired) {
            state.entries.remove(key);
        }
        None
    }

    /// Current invalidation generation; take it before running the query to be cached.
    pub async fn generation(&self) -> u64 {
        self.state.read().await.generation
    }

    /// Stores `value` under `key` unless the cache was cleared since `generation` was read.
    ///
    /// Expired entries for every key are swept before storing.
    ///
    /// # Arguments
    /// - `key` - Cache key
    /// - `generation` - Value returned by `generation()` before the query ran
    /// - `value` - Query result to store
    ///
    /// # Returns
    /// - `true` - The value was stored
    /// - `false` - A clear happened in between and the value was discarded
    pub async fn insert_if_generation(&self, key: String, generation: u64, value: V) -> bool {
        let mut state = self.state.write().await;
        if state.generation != generation {
            return false;
        }

        state.entries.retain(|_, entry| !entry.is_expired());
        state.entries.insert(key, CachedEntry::new(value, self.ttl));
        true
    }

    /// Removes every entry and starts a new generation.
    pub async fn invalidate_all(&self) {
        let mut state = self.state.write().await;
        state.entries.clear();
        state.generation += 1;
    }

    /// Number of stored entries, expired ones included.
    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.state.read().await.entries.len()
    }
}
