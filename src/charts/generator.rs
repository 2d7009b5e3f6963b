// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Chart generation from upstream block data
//!
//! The generator lists the hashes of a window, fetches each block one after
//! another and derives the requested series. Nothing is fetched concurrently:
//! the first failure aborts the whole request and no partial chart is ever
//! produced.

use futures::{stream, StreamExt, TryStreamExt};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info, Instrument};

use crate::blocks::{BlockHash, BlockRecord, ChartWindow, TxId};
use crate::charts::catalog::ChartType;
use crate::charts::derive;
use crate::charts::payload::ChartPayload;
use crate::errors::{ChartError, SourceError};
use crate::source::{BlockSource, FeeSource};
use crate::tracing::spans;
use crate::types::satoshis::Satoshis;

/// Builds chart payloads from a block source and a fee source
#[derive(Debug, Clone)]
pub struct ChartGenerator<B, F> {
    blocks: B,
    fees: F,
    fetch_timeout: Option<Duration>,
}

impl<B, F> ChartGenerator<B, F>
where
    B: BlockSource,
    F: FeeSource,
{
    pub fn new(blocks: B, fees: F) -> Self {
        Self {
            blocks,
            fees,
            fetch_timeout: None,
        }
    }

    /// Bounds every individual upstream call; `None` waits indefinitely
    pub fn with_fetch_timeout(mut self, fetch_timeout: Option<Duration>) -> Self {
        self.fetch_timeout = fetch_timeout;
        self
    }

    /// Generates `chart_type` over `window`
    pub async fn generate(
        &self,
        chart_type: ChartType,
        window: ChartWindow,
    ) -> Result<ChartPayload, ChartError> {
        async {
            let blocks = self.fetch_blocks(window).await?;

            let payload = match chart_type {
                ChartType::BlockSize => derive::block_size(&blocks),
                ChartType::BlockInterval => derive::block_interval(&blocks),
                ChartType::Difficulty => derive::difficulty(&blocks),
                ChartType::MiningRevenue => {
                    let revenues = self.mining_revenues(&blocks).await?;
                    derive::mining_revenue(&blocks, &revenues)
                }
            };

            info!(
                chart_type = %chart_type,
                window = %window,
                blocks = blocks.len(),
                points = payload.len(),
                "Generated chart"
            );
            Ok::<_, ChartError>(payload)
        }
        .instrument(spans::generate_chart(chart_type, window))
        .await
    }

    /// Fetches every block of `window`, in the order the source lists them
    pub async fn fetch_blocks(
        &self,
        window: ChartWindow,
    ) -> Result<Vec<BlockRecord>, SourceError> {
        let ChartWindow { start, end } = window;
        let hashes = self
            .bounded(
                || format!("listing block hashes for {window}"),
                self.blocks.block_hashes_by_timestamp(end, start),
            )
            .instrument(spans::fetch_block_hashes(window))
            .await?;

        debug!(window = %window, count = hashes.len(), "Listed block hashes");

        stream::iter(&hashes)
            .then(|hash| self.fetch_block(hash))
            .try_collect()
            .await
    }

    /// Revenue of each block: block reward plus the fee of every transaction
    pub async fn mining_revenues(
        &self,
        blocks: &[BlockRecord],
    ) -> Result<Vec<Satoshis>, SourceError> {
        stream::iter(blocks)
            .then(|block| self.block_revenue(block))
            .try_collect()
            .await
    }

    async fn block_revenue(&self, block: &BlockRecord) -> Result<Satoshis, SourceError> {
        stream::iter(&block.tx)
            .then(|txid| self.fetch_fee(txid))
            .try_fold(Satoshis::from_coins(block.reward), |total, fee| async move {
                Ok::<_, SourceError>(total + fee)
            })
            .instrument(spans::sum_block_fees(block.height, block.tx.len()))
            .await
    }

    async fn fetch_block(&self, hash: &BlockHash) -> Result<BlockRecord, SourceError> {
        self.bounded(
            || format!("fetching block {hash}"),
            self.blocks.block_by_hash(hash),
        )
        .instrument(spans::fetch_block(hash))
        .await
    }

    async fn fetch_fee(&self, txid: &TxId) -> Result<Satoshis, SourceError> {
        self.bounded(
            || format!("looking up fee of {txid}"),
            self.fees.fee_for_transaction(txid),
        )
        .instrument(spans::fetch_fee(txid))
        .await
    }

    async fn bounded<T>(
        &self,
        operation: impl FnOnce() -> String,
        call: impl Future<Output = Result<T, SourceError>>,
    ) -> Result<T, SourceError> {
        match self.fetch_timeout {
            Some(after) => tokio::time::timeout(after, call)
                .await
                .map_err(|_| SourceError::timeout(operation(), after))?,
            None => call.await,
        }
    }
}
