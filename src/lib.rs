// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! # blockcharts
//!
//! Chart generation for a block explorer: block size, block interval,
//! difficulty and mining revenue series over the current UTC day, served from
//! an LRU cache and computed on demand from a [`BlockSource`] and a
//! [`FeeSource`] supplied by the embedding explorer.
//!
//! A [`MarketPoller`] keeps the latest market ticker alongside.
//!
//! ```rust,ignore
//! use blockcharts::{ChartService, ChartsConfig};
//!
//! let service = ChartService::from_config(node.clone(), node, &ChartsConfig::default());
//! let chart = service.chart("block-size", None).await?;
//! println!("{} points", chart.len());
//! ```

pub mod api;
pub mod blocks;
pub mod bootstrap;
pub mod cache;
pub mod charts;
pub mod config;
pub mod errors;
pub mod market;
pub mod source;
mod tracing;
pub mod types;

pub use api::{router, serve_api, AppState, ChartListing};
pub use blocks::{BlockHash, BlockRecord, ChartWindow, TxId, UnixTimestamp};
pub use cache::types::AccessSequence;
pub use cache::{CacheKey, CacheStats, ChartCache, MemoryCache, NoOpCache};
pub use charts::{
    ChartCatalog, ChartData, ChartEntry, ChartGenerator, ChartPayload, ChartService, ChartType,
    Column,
};
pub use config::{CacheKeyPolicy, ChartsConfig, ChartsConfigBuilder};
pub use errors::{BlockchartsError, ChartError, MarketError, SourceError};
pub use market::{HttpTickerSource, MarketInfo, MarketPoller, PollerHandle, TickerSource};
pub use source::{BlockSource, FeeSource};
pub use types::satoshis::Satoshis;
