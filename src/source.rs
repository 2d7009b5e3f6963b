// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Interfaces of the external block and fee sources
//!
//! The chart pipeline never talks to a node directly. Instead it is generic over
//! two small traits that the embedding explorer implements on top of whatever
//! index it has: a [`BlockSource`] for block records and hash listings and a
//! [`FeeSource`] for per-transaction fees.
//!
//! # Example: Implementing BlockSource
//!
//! ```rust,ignore
//! use async_trait::async_trait;
//! use blockcharts::{BlockHash, BlockRecord, BlockSource, SourceError, UnixTimestamp};
//!
//! struct NodeIndex { /* ... */ }
//!
//! #[async_trait]
//! impl BlockSource for NodeIndex {
//!     async fn block_hashes_by_timestamp(
//!         &self,
//!         high: UnixTimestamp,
//!         low: UnixTimestamp,
//!     ) -> Result<Vec<BlockHash>, SourceError> {
//!         self.hashes_between(low, high)
//!             .await
//!             .map_err(|e| SourceError::block_hashes_failed(low, high, e))
//!     }
//!
//!     async fn block_by_hash(&self, hash: &BlockHash) -> Result<BlockRecord, SourceError> {
//!         self.lookup(hash)
//!             .await
//!             .map_err(|e| SourceError::get_block_failed(hash.as_str(), e))?
//!             .ok_or_else(|| SourceError::block_not_found(hash.as_str()))
//!     }
//! }
//! ```

use async_trait::async_trait;
use std::sync::Arc;

use crate::blocks::{BlockHash, BlockRecord, TxId, UnixTimestamp};
use crate::errors::SourceError;
use crate::types::satoshis::Satoshis;

/// Source of block records
#[async_trait]
pub trait BlockSource: Send + Sync {
    /// Returns the hashes of blocks whose timestamps fall between `low` and
    /// `high`, ordered by height.
    ///
    /// Note the argument order: upper bound first.
    async fn block_hashes_by_timestamp(
        &self,
        high: UnixTimestamp,
        low: UnixTimestamp,
    ) -> Result<Vec<BlockHash>, SourceError>;

    /// Returns the block with the given hash
    ///
    /// Fails with [`SourceError::BlockNotFound`] for unknown hashes.
    async fn block_by_hash(&self, hash: &BlockHash) -> Result<BlockRecord, SourceError>;
}

/// Source of transaction fees
#[async_trait]
pub trait FeeSource: Send + Sync {
    /// Returns the fee paid by a transaction, in satoshis
    async fn fee_for_transaction(&self, txid: &TxId) -> Result<Satoshis, SourceError>;
}

#[async_trait]
impl<T: BlockSource + ?Sized> BlockSource for Arc<T> {
    async fn block_hashes_by_timestamp(
        &self,
        high: UnixTimestamp,
        low: UnixTimestamp,
    ) -> Result<Vec<BlockHash>, SourceError> {
        (**self).block_hashes_by_timestamp(high, low).await
    }

    async fn block_by_hash(&self, hash: &BlockHash) -> Result<BlockRecord, SourceError> {
        (**self).block_by_hash(hash).await
    }
}

#[async_trait]
impl<T: FeeSource + ?Sized> FeeSource for Arc<T> {
    async fn fee_for_transaction(&self, txid: &TxId) -> Result<Satoshis, SourceError> {
        (**self).fee_for_transaction(txid).await
    }
}
