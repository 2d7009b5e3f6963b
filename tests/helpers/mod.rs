// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for blockcharts integration tests
//!
//! Provides mock implementations of the source traits to enable testing
//! without a running node.

#![allow(dead_code)]

use async_trait::async_trait;
use blockcharts::{
    BlockHash, BlockRecord, BlockSource, FeeSource, Satoshis, SourceError, TxId, UnixTimestamp,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Mock node serving both blocks and fees
///
/// Every trait call is counted so tests can assert how much upstream traffic
/// a request caused. Block and fee calls also track how many of them are
/// running at the same time.
///
/// # Example
///
/// ```rust,ignore
/// let chain = Arc::new(
///     MockChain::new()
///         .with_block(test_block(10, 100, 12.5, &["coinbase"]))
///         .with_fee("coinbase", 0),
/// );
/// let service = ChartService::from_config(chain.clone(), chain.clone(), &ChartsConfig::default());
/// ```
#[derive(Default)]
pub struct MockChain {
    blocks: Vec<BlockRecord>,
    fees: HashMap<String, u64>,
    failing_blocks: Mutex<Vec<String>>,
    hash_calls: AtomicUsize,
    block_calls: AtomicUsize,
    fee_calls: AtomicUsize,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
    fetched_blocks: Mutex<Vec<String>>,
    windows: Mutex<Vec<(UnixTimestamp, UnixTimestamp)>>,
}

impl MockChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a block; blocks are listed in insertion order
    pub fn with_block(mut self, block: BlockRecord) -> Self {
        self.blocks.push(block);
        self
    }

    pub fn with_fee(mut self, txid: &str, satoshis: u64) -> Self {
        self.fees.insert(txid.to_string(), satoshis);
        self
    }

    /// Make `block_by_hash` fail for `hash` until [`heal`](Self::heal) is called
    pub fn fail_block(&self, hash: &str) {
        self.failing_blocks.lock().unwrap().push(hash.to_string());
    }

    pub fn heal(&self) {
        self.failing_blocks.lock().unwrap().clear();
    }

    pub fn hash_calls(&self) -> usize {
        self.hash_calls.load(Ordering::SeqCst)
    }

    pub fn block_calls(&self) -> usize {
        self.block_calls.load(Ordering::SeqCst)
    }

    pub fn fee_calls(&self) -> usize {
        self.fee_calls.load(Ordering::SeqCst)
    }

    /// Highest number of block and fee calls that were running at once
    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }

    /// Hashes passed to `block_by_hash`, in call order
    pub fn fetched_blocks(&self) -> Vec<String> {
        self.fetched_blocks.lock().unwrap().clone()
    }

    /// `(high, low)` arguments of every hash listing, in call order
    pub fn requested_windows(&self) -> Vec<(UnixTimestamp, UnixTimestamp)> {
        self.windows.lock().unwrap().clone()
    }

    async fn enter(&self) {
        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(running, Ordering::SeqCst);
        // Lets any call polled alongside this one start before it returns
        tokio::task::yield_now().await;
    }

    fn leave(&self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }

    fn lookup_block(&self, hash: &BlockHash) -> Result<BlockRecord, SourceError> {
        let failing = self
            .failing_blocks
            .lock()
            .unwrap()
            .iter()
            .any(|h| h == hash.as_str());
        if failing {
            return Err(SourceError::get_block_failed(
                hash.as_str(),
                std::io::Error::other("connection reset"),
            ));
        }

        self.blocks
            .iter()
            .find(|block| &block.hash == hash)
            .cloned()
            .ok_or_else(|| SourceError::block_not_found(hash.as_str()))
    }

    fn lookup_fee(&self, txid: &TxId) -> Result<Satoshis, SourceError> {
        self.fees
            .get(txid.as_str())
            .copied()
            .map(Satoshis::new)
            .ok_or_else(|| {
                SourceError::fee_lookup_failed(
                    txid.as_str(),
                    std::io::Error::other("unknown transaction"),
                )
            })
    }
}

#[async_trait]
impl BlockSource for MockChain {
    async fn block_hashes_by_timestamp(
        &self,
        high: UnixTimestamp,
        low: UnixTimestamp,
    ) -> Result<Vec<BlockHash>, SourceError> {
        self.hash_calls.fetch_add(1, Ordering::SeqCst);
        self.windows.lock().unwrap().push((high, low));
        Ok(self.blocks.iter().map(|block| block.hash.clone()).collect())
    }

    async fn block_by_hash(&self, hash: &BlockHash) -> Result<BlockRecord, SourceError> {
        self.block_calls.fetch_add(1, Ordering::SeqCst);
        self.fetched_blocks
            .lock()
            .unwrap()
            .push(hash.as_str().to_string());

        self.enter().await;
        let result = self.lookup_block(hash);
        self.leave();
        result
    }
}

#[async_trait]
impl FeeSource for MockChain {
    async fn fee_for_transaction(&self, txid: &TxId) -> Result<Satoshis, SourceError> {
        self.fee_calls.fetch_add(1, Ordering::SeqCst);

        self.enter().await;
        let result = self.lookup_fee(txid);
        self.leave();
        result
    }
}

/// Route library logs to the test output, filtered by `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Helper to create a block record with hash `block-{height}`
pub fn test_block(height: u64, time: i64, reward: f64, tx: &[&str]) -> BlockRecord {
    BlockRecord {
        hash: BlockHash::new(format!("block-{height}")),
        height,
        size: 250 * height,
        time: UnixTimestamp(time),
        difficulty: 1_000.0 + height as f64,
        reward,
        tx: tx.iter().map(|id| TxId::new(*id)).collect(),
    }
}

/// Three consecutive blocks at times 100, 150 and 220
pub fn three_block_chain() -> MockChain {
    MockChain::new()
        .with_block(test_block(10, 100, 12.5, &["cb-10"]))
        .with_block(test_block(11, 150, 12.5, &["cb-11", "tx-a"]))
        .with_block(test_block(12, 220, 12.5, &["cb-12"]))
        .with_fee("cb-10", 0)
        .with_fee("cb-11", 0)
        .with_fee("tx-a", 2_500)
        .with_fee("cb-12", 0)
}
