// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Block records as returned by the block data source

use serde::{Deserialize, Serialize};
use std::fmt;

use super::window::UnixTimestamp;

/// Hex-encoded block hash
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockHash(String);

impl BlockHash {
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockHash {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Hex-encoded transaction id
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TxId(String);

impl TxId {
    pub fn new(txid: impl Into<String>) -> Self {
        Self(txid.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TxId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A block as seen by the chart pipeline
///
/// Records are read-only and short-lived: they are fetched for one chart
/// request and dropped once the payload is built. `tx` always holds at least
/// the coinbase transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockRecord {
    /// Block hash
    pub hash: BlockHash,
    /// Block height, strictly increasing within a window
    pub height: u64,
    /// Serialized block size in bytes
    pub size: u64,
    /// Block timestamp in Unix seconds
    pub time: UnixTimestamp,
    /// Proof-of-work difficulty
    pub difficulty: f64,
    /// Coinbase reward in coins (fractional)
    pub reward: f64,
    /// Ordered transaction ids, coinbase first
    pub tx: Vec<TxId>,
}
