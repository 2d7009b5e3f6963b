// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Cache backends for generated chart payloads
//!
//! Building a chart costs one upstream call per block, plus one per transaction
//! for mining revenue, so payloads are memoized:
//!
//! - [`MemoryCache`]: In-memory cache bounded by entry count, LRU eviction (default)
//! - [`NoOpCache`]: Disables caching entirely (for testing or specific use cases)
//!
//! Entries never expire on their own. A payload stays cached until it is
//! pushed out by other keys.
//!
//! # Examples
//!
//! ```rust
//! use blockcharts::{ChartCache, MemoryCache, NoOpCache};
//!
//! // The explorer default: five charts
//! let cache = MemoryCache::new(5);
//! assert_eq!(cache.name(), "MemoryCache");
//!
//! // No cache (always compute)
//! let cache = NoOpCache;
//! assert_eq!(cache.name(), "NoOpCache");
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::blocks::ChartWindow;
use crate::charts::{ChartPayload, ChartType};
use crate::config::CacheKeyPolicy;

mod memory;
mod noop;
pub mod types;

pub use memory::MemoryCache;
pub use noop::NoOpCache;

/// Key for caching chart payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CacheKey {
    pub(crate) chart_type: ChartType,
    pub(crate) window: Option<ChartWindow>,
}

impl CacheKey {
    /// Creates a key that matches every window of a chart type
    pub fn new(chart_type: ChartType) -> Self {
        Self {
            chart_type,
            window: None,
        }
    }

    /// Creates a key bound to one chart window
    pub fn with_window(chart_type: ChartType, window: ChartWindow) -> Self {
        Self {
            chart_type,
            window: Some(window),
        }
    }

    /// Builds the key for a request according to `policy`
    pub fn for_policy(policy: CacheKeyPolicy, chart_type: ChartType, window: ChartWindow) -> Self {
        match policy {
            CacheKeyPolicy::ChartType => Self::new(chart_type),
            CacheKeyPolicy::ChartTypeAndWindow => Self::with_window(chart_type, window),
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.window {
            Some(window) => write!(f, "{}:{}:{}", self.chart_type, window.start, window.end),
            None => write!(f, "{}", self.chart_type),
        }
    }
}

/// Statistics about cache performance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Number of cache hits (successful retrievals)
    pub hits: u64,
    /// Number of cache misses (key not found)
    pub misses: u64,
    /// Number of entries evicted due to size limits
    pub evictions: u64,
    /// Current number of entries in the cache
    pub entries: usize,
}

impl CacheStats {
    /// Calculates the cache hit rate as a percentage (0.0 to 100.0)
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hit_rate = self.hit_rate();
        write!(
            f,
            "hits={}, misses={}, evictions={}, entries={}, hit_rate={hit_rate:.1}%",
            self.hits, self.misses, self.evictions, self.entries
        )
    }
}

/// Trait for chart cache backends
///
/// # Thread Safety
///
/// Implementations must be thread-safe and support concurrent access. The chart
/// service shares one cache between all in-flight requests, so a get and the
/// following insert are two separate critical sections: two concurrent misses
/// on the same key both compute and the last insert wins.
#[async_trait]
pub trait ChartCache: Send + Sync {
    /// Retrieves the cached payload for the given key
    ///
    /// A hit marks the entry as most recently used.
    async fn get(&self, key: &CacheKey) -> Option<Arc<ChartPayload>>;

    /// Inserts a payload, replacing any previous payload for the key
    ///
    /// If the cache is full, the least recently used entry is evicted first.
    async fn insert(&self, key: CacheKey, payload: Arc<ChartPayload>);

    /// Clears all entries from the cache
    async fn clear(&self);

    /// Returns current cache statistics
    async fn stats(&self) -> CacheStats;

    /// Returns a human-readable name for this cache backend
    ///
    /// Used for logging and debugging.
    fn name(&self) -> &'static str;
}
