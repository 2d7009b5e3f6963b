// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the market ticker poller.
//!
//! These never reach the chart pipeline. The poller logs them and keeps the
//! previous snapshot.

/// Errors that can occur while fetching the market ticker.
#[derive(Debug, thiserror::Error)]
pub enum MarketError {
    /// The ticker endpoint URL could not be parsed.
    #[error("Invalid ticker URL {url}")]
    InvalidUrl {
        /// The rejected URL
        url: String,
        /// The underlying parse error
        #[source]
        source: url::ParseError,
    },

    /// The HTTP request failed before a response was received.
    #[error("Ticker request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The ticker answered with a non-success status code.
    #[error("Ticker returned status code {status}")]
    Status {
        /// The HTTP status code
        status: u16,
    },

    /// The response body is not a non-empty JSON array of tickers.
    #[error("Malformed ticker response: {details}")]
    MalformedResponse {
        /// Details about what was wrong with the body
        details: String,
    },
}

impl MarketError {
    /// Create an `InvalidUrl` error.
    pub fn invalid_url(url: impl Into<String>, source: url::ParseError) -> Self {
        MarketError::InvalidUrl {
            url: url.into(),
            source,
        }
    }

    /// Create a `MalformedResponse` error with details.
    pub fn malformed_response(details: impl Into<String>) -> Self {
        MarketError::MalformedResponse {
            details: details.into(),
        }
    }
}
