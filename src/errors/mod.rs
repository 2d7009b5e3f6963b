// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the blockcharts library.
//!
//! This module provides strongly-typed errors for all public APIs. It follows
//! a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained error handling (`ChartError`,
//!   `MarketError`)
//! - **Unified error type** (`BlockchartsError`) for convenience when you don't
//!   need to distinguish between error sources
//!
//! Additionally, [`SourceError`] describes failures of the external block and
//! fee sources and is shared by the chart generator and its callers.
//!
//! # Examples
//!
//! ```rust,ignore
//! use blockcharts::{BlockchartsError, ChartService};
//!
//! async fn example(service: &ChartService) -> Result<(), BlockchartsError> {
//!     let payload = service.chart("block-size", None).await?;
//!     println!("{} points", payload.len());
//!     Ok(())
//! }
//! ```

mod charts;
mod market;
mod source;

pub use charts::ChartError;
pub use market::MarketError;
pub use source::SourceError;

/// Unified error type for all blockcharts operations.
#[derive(Debug, thiserror::Error)]
pub enum BlockchartsError {
    /// Error from a chart request.
    #[error("Chart error: {0}")]
    Chart(#[from] ChartError),

    /// Error from the market ticker.
    #[error("Market error: {0}")]
    Market(#[from] MarketError),

    /// Error from an upstream block or fee source.
    #[error("Source error: {0}")]
    Source(#[from] SourceError),
}
