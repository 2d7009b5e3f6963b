// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for chart generation and market polling
//!
//! This module provides a small configuration system for controlling the
//! chart cache, upstream fetch timeouts and the market ticker poller.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use blockcharts::ChartsConfig;
//!
//! // Five cached charts keyed by chart type, no fetch timeout
//! let config = ChartsConfig::default();
//! assert_eq!(config.cache_capacity, 5);
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use blockcharts::{CacheKeyPolicy, ChartsConfigBuilder};
//! use std::time::Duration;
//!
//! let config = ChartsConfigBuilder::new()
//!     .cache_capacity(16)
//!     .cache_key_policy(CacheKeyPolicy::ChartTypeAndWindow)
//!     .fetch_timeout(Duration::from_secs(10))
//!     .build();
//!
//! assert_eq!(config.fetch_timeout, Some(Duration::from_secs(10)));
//! ```

use std::time::Duration;

pub mod constants;

use constants::{DEFAULT_CHART_CACHE_SIZE, DEFAULT_TICKER_POLL_INTERVAL, DEFAULT_TICKER_URL};

/// How chart payloads are keyed in the result cache
///
/// The explorer historically keyed its cache by chart type alone, so a cached
/// chart is served for every window until it is evicted. Keying by window as
/// well trades cache hits for window-exact answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheKeyPolicy {
    /// One cached payload per chart type, regardless of the requested window
    #[default]
    ChartType,
    /// One cached payload per `(chart type, window start, window end)`
    ChartTypeAndWindow,
}

/// Configuration for chart generation
///
/// Use [`ChartsConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone)]
pub struct ChartsConfig {
    /// Maximum number of cached chart payloads
    /// Default: 5
    pub cache_capacity: usize,

    /// Cache key policy
    /// Default: [`CacheKeyPolicy::ChartType`]
    pub cache_key_policy: CacheKeyPolicy,

    /// Upper bound for each individual upstream fetch
    /// Default: None (a stalled upstream stalls the request)
    pub fetch_timeout: Option<Duration>,

    /// Market ticker endpoint, validated when the ticker source is built
    pub ticker_url: String,

    /// Delay between two market ticker fetches
    /// Default: 90 seconds
    pub ticker_poll_interval: Duration,
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CHART_CACHE_SIZE,
            cache_key_policy: CacheKeyPolicy::default(),
            fetch_timeout: None,
            ticker_url: DEFAULT_TICKER_URL.to_string(),
            ticker_poll_interval: DEFAULT_TICKER_POLL_INTERVAL,
        }
    }
}

/// Builder for [`ChartsConfig`]
///
/// # Example
///
/// ```rust
/// use blockcharts::ChartsConfigBuilder;
/// use std::time::Duration;
///
/// let config = ChartsConfigBuilder::new()
///     .ticker_poll_interval(Duration::from_secs(30))
///     .build();
/// assert_eq!(config.ticker_poll_interval, Duration::from_secs(30));
/// ```
#[derive(Debug, Default)]
pub struct ChartsConfigBuilder {
    config: ChartsConfig,
}

impl ChartsConfigBuilder {
    /// Create a new builder starting from the defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of cached chart payloads
    ///
    /// A capacity of zero is raised to one; use
    /// [`NoOpCache`](crate::NoOpCache) to disable caching.
    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.config.cache_capacity = capacity.max(1);
        self
    }

    /// Set the cache key policy
    pub fn cache_key_policy(mut self, policy: CacheKeyPolicy) -> Self {
        self.config.cache_key_policy = policy;
        self
    }

    /// Bound every upstream fetch by `timeout`
    pub fn fetch_timeout(mut self, timeout: Duration) -> Self {
        self.config.fetch_timeout = Some(timeout);
        self
    }

    /// Set the market ticker endpoint
    pub fn ticker_url(mut self, url: impl Into<String>) -> Self {
        self.config.ticker_url = url.into();
        self
    }

    /// Set the delay between market ticker fetches
    pub fn ticker_poll_interval(mut self, interval: Duration) -> Self {
        self.config.ticker_poll_interval = interval;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> ChartsConfig {
        self.config
    }
}
