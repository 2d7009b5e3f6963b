// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for chart and market operations.
//!
//! Telemetry stays out of business logic: instead of `#[instrument]`
//! attributes, each instrumented operation has a span helper here which the
//! caller attaches with [`tracing::Instrument`].
//!
//! Usage pattern:
//! ```rust,ignore
//! self.blocks
//!     .block_by_hash(hash)
//!     .instrument(spans::fetch_block(hash))
//!     .await
//! ```

use tracing::{Level, Span};

use crate::blocks::{BlockHash, ChartWindow, TxId};
use crate::charts::ChartType;

/// Create span for serving one chart request.
///
/// Parent: None (root span for this operation)
/// Children: generate_chart span on cache miss
#[inline]
pub(crate) fn serve_chart(chart_type: ChartType, window: ChartWindow) -> Span {
    tracing::span!(
        Level::INFO,
        "blockcharts.serve_chart",
        chart_type = %chart_type,
        start = window.start.0,
        end = window.end.0,
    )
}

/// Create span for generating a chart from upstream data.
///
/// Parent: serve_chart span
/// Children: fetch_block_hashes, fetch_block and sum_block_fees spans
#[inline]
pub(crate) fn generate_chart(chart_type: ChartType, window: ChartWindow) -> Span {
    tracing::debug_span!(
        "blockcharts.generate_chart",
        chart_type = %chart_type,
        start = window.start.0,
        end = window.end.0,
    )
}

/// Create span for listing the block hashes of a window.
#[inline]
pub(crate) fn fetch_block_hashes(window: ChartWindow) -> Span {
    tracing::debug_span!(
        "blockcharts.fetch_block_hashes",
        high = window.end.0,
        low = window.start.0,
    )
}

/// Create span for fetching a single block.
#[inline]
pub(crate) fn fetch_block(hash: &BlockHash) -> Span {
    tracing::trace_span!("blockcharts.fetch_block", hash = %hash)
}

/// Create span for summing the reward and fees of one block.
///
/// Children: fetch_fee spans (one per transaction)
#[inline]
pub(crate) fn sum_block_fees(height: u64, tx_count: usize) -> Span {
    tracing::trace_span!(
        "blockcharts.sum_block_fees",
        height = height,
        tx_count = tx_count,
    )
}

/// Create span for looking up a transaction fee.
#[inline]
pub(crate) fn fetch_fee(txid: &TxId) -> Span {
    tracing::trace_span!("blockcharts.fetch_fee", txid = %txid)
}

/// Create span for one ticker poll cycle.
#[inline]
pub(crate) fn poll_ticker(source: &str) -> Span {
    tracing::debug_span!("blockcharts.poll_ticker", source = source)
}
