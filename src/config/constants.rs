// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Well-known constants
//!
//! This module centralizes magic numbers used throughout the blockcharts crate,
//! improving discoverability and maintainability.

use std::time::Duration;

/// Number of chart payloads kept by the default memory cache
pub const DEFAULT_CHART_CACHE_SIZE: usize = 5;

/// Length of the default chart window (one UTC day)
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Smallest currency units per coin
pub const SATOSHIS_PER_COIN: u64 = 100_000_000;

/// Market ticker polling cadence
pub const DEFAULT_TICKER_POLL_INTERVAL: Duration = Duration::from_secs(90);

/// Market ticker endpoint polled by default
pub const DEFAULT_TICKER_URL: &str = "https://tradeogre.com/api/v1/ticker/BTC-ZEL";
