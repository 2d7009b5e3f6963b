// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for chart requests.

use super::SourceError;

/// Errors that can occur while serving a chart request.
///
/// `UnknownChartType` is a client error: nothing is computed and the cache is
/// never consulted. Every other variant is a server-side failure; no partial
/// payload is produced and nothing is cached.
///
/// # Examples
///
/// ```rust,ignore
/// use blockcharts::{ChartError, ChartService};
///
/// match service.chart("hashrate", None).await {
///     Ok(payload) => println!("{}", payload.name),
///     Err(ChartError::UnknownChartType { chart_type }) => {
///         eprintln!("No such chart: {chart_type}");
///     }
///     Err(e) => eprintln!("Upstream failure: {e}"),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    /// The requested chart type is not registered in the catalog.
    #[error("Unknown chart type: {chart_type}")]
    UnknownChartType {
        /// The identifier that was requested
        chart_type: String,
    },

    /// The chart window could not be computed.
    #[error("Invalid chart window: {details}")]
    InvalidWindow {
        /// Details about the failure
        details: String,
    },

    /// An upstream block or fee fetch failed.
    #[error("Upstream retrieval failed: {0}")]
    Source(#[from] SourceError),
}

impl ChartError {
    /// Create an `UnknownChartType` error.
    pub fn unknown_chart_type(chart_type: impl Into<String>) -> Self {
        ChartError::UnknownChartType {
            chart_type: chart_type.into(),
        }
    }

    /// Create an `InvalidWindow` error with details.
    pub fn invalid_window(details: impl Into<String>) -> Self {
        ChartError::InvalidWindow {
            details: details.into(),
        }
    }

    /// Whether the failure was caused by the request rather than the server.
    pub fn is_client_error(&self) -> bool {
        matches!(self, ChartError::UnknownChartType { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_chart_type_is_client_error() {
        let error = ChartError::unknown_chart_type("hashrate");
        assert!(error.is_client_error());
        assert_eq!(error.to_string(), "Unknown chart type: hashrate");
    }

    #[test]
    fn test_source_error_is_server_error() {
        let error: ChartError = SourceError::block_not_found("abc").into();
        assert!(!error.is_client_error());
        assert_eq!(
            error.to_string(),
            "Upstream retrieval failed: Block not found: abc"
        );
    }
}
