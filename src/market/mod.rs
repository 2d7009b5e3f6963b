// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Market ticker snapshot for the explorer header
//!
//! A [`MarketPoller`] periodically asks a [`TickerSource`] for the current
//! ticker, keeps the latest [`MarketInfo`] and notifies subscribers whenever
//! it changes. The chart pipeline does not depend on any of this.

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;

use crate::errors::MarketError;

mod poller;
mod ticker;

pub use poller::{MarketPoller, PollerHandle};
pub use ticker::{parse_ticker_body, HttpTickerSource};

/// Latest known market ticker
///
/// The exchange reports numeric fields either as JSON numbers or as numeric
/// strings; both are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketInfo {
    pub success: bool,
    #[serde(deserialize_with = "number_or_string")]
    pub initialprice: f64,
    #[serde(deserialize_with = "number_or_string")]
    pub price: f64,
    #[serde(deserialize_with = "number_or_string")]
    pub high: f64,
    #[serde(deserialize_with = "number_or_string")]
    pub low: f64,
    #[serde(deserialize_with = "number_or_string")]
    pub volume: f64,
    #[serde(deserialize_with = "number_or_string")]
    pub bid: f64,
    #[serde(deserialize_with = "number_or_string")]
    pub ask: f64,
}

impl Default for MarketInfo {
    /// Snapshot served before the first successful poll
    fn default() -> Self {
        Self {
            success: true,
            initialprice: 0.0,
            price: 0.0,
            high: 0.0,
            low: 0.0,
            volume: 0.0,
            bid: 0.0,
            ask: 0.0,
        }
    }
}

fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        Text(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(value) => Ok(value),
        NumberOrString::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid numeric value {text:?}"))),
    }
}

/// Source of market tickers
#[async_trait]
pub trait TickerSource: Send + Sync {
    /// Fetches the current ticker
    async fn fetch_ticker(&self) -> Result<MarketInfo, MarketError>;

    /// Name used in logs
    fn name(&self) -> &str;
}

#[async_trait]
impl<T: TickerSource + ?Sized> TickerSource for Arc<T> {
    async fn fetch_ticker(&self) -> Result<MarketInfo, MarketError> {
        (**self).fetch_ticker().await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
