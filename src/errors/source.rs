// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Shared error types for upstream block and transaction retrieval.
//!
//! The block data source and the transaction fee source are external
//! services. This module describes how their failures surface in the chart
//! pipeline, with enough context to tell which fetch of a sequential chain
//! broke it.

use std::time::Duration;

use crate::blocks::UnixTimestamp;

/// Errors that can occur while talking to a block or fee source.
///
/// # Examples
///
/// ```rust
/// use blockcharts::SourceError;
///
/// let error = SourceError::block_not_found("00000000000000000001");
/// assert_eq!(error.to_string(), "Block not found: 00000000000000000001");
/// ```
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Listing block hashes for a timestamp range failed.
    #[error("Failed to list block hashes between {low} and {high}")]
    BlockHashesFailed {
        /// Lower timestamp bound of the query
        low: UnixTimestamp,
        /// Upper timestamp bound of the query
        high: UnixTimestamp,
        /// The underlying source error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// No block is known for the given hash.
    #[error("Block not found: {hash}")]
    BlockNotFound {
        /// The block hash that wasn't found
        hash: String,
    },

    /// Fetching a block record failed.
    ///
    /// This is different from `BlockNotFound`: the call itself failed, the
    /// block may well exist.
    #[error("Failed to fetch block {hash}")]
    GetBlockFailed {
        /// The block hash we tried to fetch
        hash: String,
        /// The underlying source error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Looking up the fee of a transaction failed.
    #[error("Failed to fetch fee for transaction {txid}")]
    FeeLookupFailed {
        /// The transaction id whose fee was requested
        txid: String,
        /// The underlying source error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An upstream call did not complete within the configured timeout.
    #[error("{operation} timed out after {after:?}")]
    Timeout {
        /// Description of the operation that timed out
        operation: String,
        /// The configured timeout
        after: Duration,
    },
}

impl SourceError {
    /// Create a `BlockHashesFailed` error from any error type.
    pub fn block_hashes_failed(
        low: UnixTimestamp,
        high: UnixTimestamp,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        SourceError::BlockHashesFailed {
            low,
            high,
            source: Box::new(source),
        }
    }

    /// Create a `BlockNotFound` error.
    pub fn block_not_found(hash: impl Into<String>) -> Self {
        SourceError::BlockNotFound { hash: hash.into() }
    }

    /// Create a `GetBlockFailed` error from any error type.
    pub fn get_block_failed(
        hash: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        SourceError::GetBlockFailed {
            hash: hash.into(),
            source: Box::new(source),
        }
    }

    /// Create a `FeeLookupFailed` error from any error type.
    pub fn fee_lookup_failed(
        txid: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        SourceError::FeeLookupFailed {
            txid: txid.into(),
            source: Box::new(source),
        }
    }

    /// Create a `Timeout` error.
    pub fn timeout(operation: impl Into<String>, after: Duration) -> Self {
        SourceError::Timeout {
            operation: operation.into(),
            after,
        }
    }
}
