// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! In-memory cache implementation with LRU eviction

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

use super::{types::AccessSequence, CacheKey, CacheStats, ChartCache};
use crate::charts::ChartPayload;
use crate::config::constants::DEFAULT_CHART_CACHE_SIZE;

/// Entry in the memory cache with metadata
#[derive(Debug, Clone)]
struct CacheEntry {
    payload: Arc<ChartPayload>,
    /// Sequence number of the last access (for LRU eviction)
    last_access: AccessSequence,
}

/// Internal state for memory cache
#[derive(Debug, Default)]
struct MemoryCacheState {
    entries: HashMap<CacheKey, CacheEntry>,
    stats: CacheStats,
    next_seq: AccessSequence,
}

impl MemoryCacheState {
    fn take_seq(&mut self) -> AccessSequence {
        let seq = self.next_seq;
        self.next_seq = self.next_seq.next();
        seq
    }

    /// Evicts the least recently used entry from the cache
    fn evict_lru(&mut self) {
        let lru_key = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_access)
            .map(|(key, _)| *key);

        if let Some(key) = lru_key {
            debug!(key = %key, "Evicting LRU cache entry");
            self.entries.remove(&key);
            self.stats.evictions += 1;
        }
    }
}

/// In-memory chart cache bounded by entry count
///
/// Payloads are kept until capacity pressure evicts the least recently used
/// key. Reads and writes both count as use. There is no time-based expiry.
///
/// # Examples
///
/// ```rust,ignore
/// use blockcharts::{CacheKey, ChartCache, ChartType, MemoryCache};
///
/// let cache = MemoryCache::new(5);
/// cache.insert(CacheKey::new(ChartType::BlockSize), payload.clone()).await;
/// assert_eq!(cache.get(&CacheKey::new(ChartType::BlockSize)).await, Some(payload));
/// ```
///
/// # Performance
///
/// - Get: O(1) average case (HashMap lookup)
/// - Insert: O(1) without eviction, O(n) with eviction (finds LRU)
#[derive(Debug)]
pub struct MemoryCache {
    capacity: usize,
    state: Mutex<MemoryCacheState>,
}

impl MemoryCache {
    /// Creates a new memory cache holding at most `capacity` payloads
    ///
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            state: Mutex::new(MemoryCacheState::default()),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new(DEFAULT_CHART_CACHE_SIZE)
    }
}

#[async_trait]
impl ChartCache for MemoryCache {
    async fn get(&self, key: &CacheKey) -> Option<Arc<ChartPayload>> {
        let mut state = self.state.lock().await;
        let seq = state.take_seq();

        let result = state.entries.get_mut(key).map(|entry| {
            entry.last_access = seq;
            Arc::clone(&entry.payload)
        });

        if result.is_some() {
            state.stats.hits += 1;
            debug!(key = %key, "Cache hit (memory)");
        } else {
            state.stats.misses += 1;
            debug!(key = %key, "Cache miss (memory)");
        }

        result
    }

    async fn insert(&self, key: CacheKey, payload: Arc<ChartPayload>) {
        let mut state = self.state.lock().await;

        if !state.entries.contains_key(&key) {
            while state.entries.len() >= self.capacity {
                state.evict_lru();
            }
        }

        debug!(key = %key, "Inserting entry into memory cache");
        let last_access = state.take_seq();
        state.entries.insert(
            key,
            CacheEntry {
                payload,
                last_access,
            },
        );
        state.stats.entries = state.entries.len();
    }

    async fn clear(&self) {
        let mut state = self.state.lock().await;
        debug!(entries = state.entries.len(), "Clearing memory cache");
        state.entries.clear();
        state.stats.entries = 0;
    }

    async fn stats(&self) -> CacheStats {
        let state = self.state.lock().await;
        state.stats.clone()
    }

    fn name(&self) -> &'static str {
        "MemoryCache"
    }
}
