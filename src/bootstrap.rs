// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Environment-driven server startup
//!
//! The crate ships no block source of its own, so the embedding explorer
//! passes its node adapters to [`run`]:
//!
//! ```rust,ignore
//! blockcharts::bootstrap::run(node.clone(), node).await?;
//! ```

use anyhow::Context;
use dotenvy::dotenv;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::info;

use crate::api::{router, serve_api, AppState};
use crate::charts::ChartService;
use crate::config::{CacheKeyPolicy, ChartsConfig, ChartsConfigBuilder};
use crate::market::{HttpTickerSource, MarketPoller};
use crate::source::{BlockSource, FeeSource};

const DEFAULT_API_PORT: u16 = 3000;

/// Server settings read from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub charts: ChartsConfig,
}

impl ServerConfig {
    /// Loads `.env` (if present) and reads:
    ///
    /// - `API_PORT` (default 3000)
    /// - `CHART_CACHE_SIZE`
    /// - `CHART_CACHE_KEY`: `type` (default) or `window`
    /// - `CHART_FETCH_TIMEOUT_SECS`
    /// - `TICKER_URL`
    /// - `TICKER_POLL_SECS`
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    /// Reads settings through `lookup` instead of the process environment
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = match lookup("API_PORT") {
            Some(raw) => raw.parse().context("Invalid 'API_PORT'")?,
            None => DEFAULT_API_PORT,
        };

        let mut builder = ChartsConfigBuilder::new();

        if let Some(raw) = lookup("CHART_CACHE_SIZE") {
            let capacity: usize = raw.parse().context("Invalid 'CHART_CACHE_SIZE'")?;
            builder = builder.cache_capacity(capacity);
        }

        if let Some(raw) = lookup("CHART_CACHE_KEY") {
            let policy = match raw.as_str() {
                "type" => CacheKeyPolicy::ChartType,
                "window" => CacheKeyPolicy::ChartTypeAndWindow,
                other => anyhow::bail!("Invalid 'CHART_CACHE_KEY' {other:?}"),
            };
            builder = builder.cache_key_policy(policy);
        }

        if let Some(raw) = lookup("CHART_FETCH_TIMEOUT_SECS") {
            let secs: u64 = raw.parse().context("Invalid 'CHART_FETCH_TIMEOUT_SECS'")?;
            builder = builder.fetch_timeout(Duration::from_secs(secs));
        }

        if let Some(url) = lookup("TICKER_URL") {
            builder = builder.ticker_url(url);
        }

        if let Some(raw) = lookup("TICKER_POLL_SECS") {
            let secs: u64 = raw.parse().context("Invalid 'TICKER_POLL_SECS'")?;
            anyhow::ensure!(secs > 0, "Invalid 'TICKER_POLL_SECS', must be at least 1");
            builder = builder.ticker_poll_interval(Duration::from_secs(secs));
        }

        Ok(Self {
            port,
            charts: builder.build(),
        })
    }
}

/// Main entry point for an explorer embedding the chart service.
pub async fn run<B, F>(blocks: B, fees: F) -> anyhow::Result<()>
where
    B: BlockSource + 'static,
    F: FeeSource + 'static,
{
    let config = ServerConfig::from_env()?;
    info!(port = config.port, charts = ?config.charts, "Loaded configuration");

    let listener = TcpListener::bind(&format!("0.0.0.0:{}", config.port)).await?;

    let service = Arc::new(ChartService::from_config(blocks, fees, &config.charts));

    let ticker = HttpTickerSource::new(&config.charts.ticker_url)?;
    let poller =
        Arc::new(MarketPoller::new(ticker).with_interval(config.charts.ticker_poll_interval));
    let poller_handle = poller.spawn();

    let state = AppState::new(service).with_market(poller.watch());
    let result = serve_api(listener, router(state)).await;

    poller_handle.stop().await;
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.charts.cache_capacity, 5);
        assert_eq!(config.charts.cache_key_policy, CacheKeyPolicy::ChartType);
        assert_eq!(config.charts.fetch_timeout, None);
        assert_eq!(config.charts.ticker_poll_interval, Duration::from_secs(90));
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("API_PORT", "8080"),
            ("CHART_CACHE_SIZE", "12"),
            ("CHART_CACHE_KEY", "window"),
            ("CHART_FETCH_TIMEOUT_SECS", "30"),
            ("TICKER_URL", "http://localhost:9000/ticker"),
            ("TICKER_POLL_SECS", "15"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.charts.cache_capacity, 12);
        assert_eq!(
            config.charts.cache_key_policy,
            CacheKeyPolicy::ChartTypeAndWindow
        );
        assert_eq!(config.charts.fetch_timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.charts.ticker_url, "http://localhost:9000/ticker");
        assert_eq!(config.charts.ticker_poll_interval, Duration::from_secs(15));
    }

    #[test]
    fn test_invalid_values_are_reported() {
        assert!(ServerConfig::from_lookup(lookup(&[("API_PORT", "http")])).is_err());
        assert!(ServerConfig::from_lookup(lookup(&[("CHART_CACHE_KEY", "lru")])).is_err());
        assert!(ServerConfig::from_lookup(lookup(&[("TICKER_POLL_SECS", "-1")])).is_err());
    }

    #[test]
    fn test_zero_ticker_poll_interval_is_rejected() {
        let err = ServerConfig::from_lookup(lookup(&[("TICKER_POLL_SECS", "0")])).unwrap_err();
        assert!(err.to_string().contains("TICKER_POLL_SECS"), "{err}");

        let config = ServerConfig::from_lookup(lookup(&[("TICKER_POLL_SECS", "1")])).unwrap();
        assert_eq!(config.charts.ticker_poll_interval, Duration::from_secs(1));
    }
}
