// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Request-facing chart service: validation, caching, generation

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, Instrument};

use crate::blocks::{ChartWindow, UnixTimestamp};
use crate::cache::{CacheKey, CacheStats, ChartCache, MemoryCache};
use crate::charts::catalog::{ChartCatalog, ChartEntry, ChartType};
use crate::charts::generator::ChartGenerator;
use crate::charts::payload::ChartPayload;
use crate::config::{CacheKeyPolicy, ChartsConfig};
use crate::errors::ChartError;
use crate::source::{BlockSource, FeeSource};
use crate::tracing::spans;

/// Serves charts, consulting the cache before generating
///
/// Only successful payloads are cached. A failed generation leaves the cache
/// untouched, so the next request retries upstream.
pub struct ChartService<B, F> {
    catalog: ChartCatalog,
    cache: Box<dyn ChartCache>,
    generator: ChartGenerator<B, F>,
    key_policy: CacheKeyPolicy,
}

impl<B, F> ChartService<B, F>
where
    B: BlockSource,
    F: FeeSource,
{
    /// Creates a service with the default catalog and key policy
    pub fn new(generator: ChartGenerator<B, F>, cache: Box<dyn ChartCache>) -> Self {
        Self {
            catalog: ChartCatalog::new(),
            cache,
            generator,
            key_policy: CacheKeyPolicy::default(),
        }
    }

    /// Wires sources, a [`MemoryCache`] and the generator from `config`
    pub fn from_config(blocks: B, fees: F, config: &ChartsConfig) -> Self {
        let generator = ChartGenerator::new(blocks, fees).with_fetch_timeout(config.fetch_timeout);
        Self::new(generator, Box::new(MemoryCache::new(config.cache_capacity)))
            .with_key_policy(config.cache_key_policy)
    }

    pub fn with_key_policy(mut self, key_policy: CacheKeyPolicy) -> Self {
        self.key_policy = key_policy;
        self
    }

    /// Registered charts keyed by identifier
    pub fn list_charts(&self) -> &BTreeMap<ChartType, ChartEntry> {
        self.catalog.list()
    }

    /// Returns the chart named `chart_type` for today's UTC window
    ///
    /// `end` overrides the upper bound of the window; zero counts as absent.
    pub async fn chart(
        &self,
        chart_type: &str,
        end: Option<UnixTimestamp>,
    ) -> Result<Arc<ChartPayload>, ChartError> {
        self.chart_at(chart_type, end, Utc::now()).await
    }

    /// Same as [`chart`](Self::chart) with an explicit clock reading
    pub async fn chart_at(
        &self,
        chart_type: &str,
        end: Option<UnixTimestamp>,
        now: DateTime<Utc>,
    ) -> Result<Arc<ChartPayload>, ChartError> {
        let chart_type = self.catalog.resolve(chart_type)?;
        let window = ChartWindow::for_utc_day(now, end)?;
        self.chart_for_window(chart_type, window).await
    }

    /// Returns `chart_type` over `window`, generating it on a cache miss
    pub async fn chart_for_window(
        &self,
        chart_type: ChartType,
        window: ChartWindow,
    ) -> Result<Arc<ChartPayload>, ChartError> {
        let key = CacheKey::for_policy(self.key_policy, chart_type, window);

        async {
            if let Some(payload) = self.cache.get(&key).await {
                debug!(key = %key, "Serving cached chart");
                return Ok(payload);
            }

            let payload = Arc::new(self.generator.generate(chart_type, window).await?);
            self.cache.insert(key, Arc::clone(&payload)).await;
            Ok(payload)
        }
        .instrument(spans::serve_chart(chart_type, window))
        .await
    }

    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.stats().await
    }

    /// Drops every cached chart
    pub async fn clear_cache(&self) {
        self.cache.clear().await;
    }

    pub fn cache_name(&self) -> &'static str {
        self.cache.name()
    }
}
