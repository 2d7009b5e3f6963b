// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Pure derivations from block records to chart payloads
//!
//! Every function here is synchronous and side-effect free: the
//! [`ChartGenerator`](crate::charts::ChartGenerator) does the fetching and
//! hands the finished block list over.

use crate::blocks::BlockRecord;
use crate::charts::catalog::ChartType;
use crate::charts::payload::{ChartPayload, Column, HEIGHT_COLUMN, HEIGHT_LABEL};
use crate::types::satoshis::Satoshis;

fn heights<'a>(blocks: impl IntoIterator<Item = &'a BlockRecord>) -> Column {
    Column::Unsigned(blocks.into_iter().map(|block| block.height).collect())
}

fn chart(chart_type: ChartType, x: Column, key: &str, label: &str, values: Column) -> ChartPayload {
    ChartPayload::new(chart_type.display_name())
        .with_column(HEIGHT_COLUMN, HEIGHT_LABEL, x)
        .with_column(key, label, values)
}

/// Block size in bytes per block
pub fn block_size(blocks: &[BlockRecord]) -> ChartPayload {
    chart(
        ChartType::BlockSize,
        heights(blocks),
        "size",
        "Block size",
        Column::Unsigned(blocks.iter().map(|block| block.size).collect()),
    )
}

/// Seconds elapsed since the previous block
///
/// The first block of the window has no predecessor and is left out, so the
/// result holds one point fewer than `blocks`. Deltas are signed: miners may
/// timestamp a block earlier than its parent.
pub fn block_interval(blocks: &[BlockRecord]) -> ChartPayload {
    let intervals = blocks
        .windows(2)
        .map(|pair| pair[1].time.seconds_since(pair[0].time))
        .collect();

    chart(
        ChartType::BlockInterval,
        heights(blocks.iter().skip(1)),
        "blockinterval",
        "Block interval",
        Column::Signed(intervals),
    )
}

/// Mining difficulty per block
pub fn difficulty(blocks: &[BlockRecord]) -> ChartPayload {
    chart(
        ChartType::Difficulty,
        heights(blocks),
        "difficulty",
        "Difficulty",
        Column::Float(blocks.iter().map(|block| block.difficulty).collect()),
    )
}

/// Miner revenue per block, rendered as fixed 8-decimal coin strings
///
/// `revenues[i]` is the revenue of `blocks[i]`; points without a matching
/// revenue are dropped.
pub fn mining_revenue(blocks: &[BlockRecord], revenues: &[Satoshis]) -> ChartPayload {
    let (heights, revenues): (Vec<u64>, Vec<String>) = blocks
        .iter()
        .zip(revenues)
        .map(|(block, revenue)| (block.height, revenue.to_coin_string()))
        .unzip();

    chart(
        ChartType::MiningRevenue,
        Column::Unsigned(heights),
        "revenue",
        "Mining revenue",
        Column::Text(revenues),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::{BlockHash, TxId, UnixTimestamp};
    use serde_json::json;

    fn block(height: u64, time: i64) -> BlockRecord {
        BlockRecord {
            hash: BlockHash::new(format!("hash-{height}")),
            height,
            size: 200 + height,
            time: UnixTimestamp(time),
            difficulty: height as f64 * 1.5,
            reward: 3.0,
            tx: vec![TxId::new(format!("tx-{height}"))],
        }
    }

    #[test]
    fn test_block_size_uses_size_column() {
        let payload = block_size(&[block(10, 1000), block(11, 1060)]);
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["name"], "Block Size");
        assert_eq!(value["data"]["json"]["height"], json!([10, 11]));
        assert_eq!(value["data"]["json"]["size"], json!([210, 211]));
        assert_eq!(value["data"]["names"]["size"], "Block size");
    }

    #[test]
    fn test_block_interval_drops_first_block() {
        let payload = block_interval(&[block(10, 1000), block(11, 1050), block(12, 1120)]);

        assert_eq!(
            payload.column("height"),
            Some(&Column::Unsigned(vec![11, 12]))
        );
        assert_eq!(
            payload.column("blockinterval"),
            Some(&Column::Signed(vec![50, 70]))
        );
        assert_eq!(payload.data.names["blockinterval"], "Block interval");
    }

    #[test]
    fn test_block_interval_keeps_negative_deltas() {
        let payload = block_interval(&[block(10, 1000), block(11, 990)]);
        assert_eq!(
            payload.column("blockinterval"),
            Some(&Column::Signed(vec![-10]))
        );
    }

    #[test]
    fn test_block_interval_of_single_block_is_empty() {
        let payload = block_interval(&[block(10, 1000)]);
        assert!(payload.is_empty());
        assert_eq!(
            payload.column("blockinterval"),
            Some(&Column::Signed(vec![]))
        );
    }

    #[test]
    fn test_difficulty_keeps_fractional_values() {
        let payload = difficulty(&[block(2, 0), block(3, 60)]);
        assert_eq!(payload.name, "Difficulty");
        assert_eq!(
            payload.column("difficulty"),
            Some(&Column::Float(vec![3.0, 4.5]))
        );
    }

    #[test]
    fn test_mining_revenue_formats_eight_decimals() {
        let revenues = [Satoshis::new(300_000_000), Satoshis::new(300_012_345)];
        let payload = mining_revenue(&[block(10, 0), block(11, 60)], &revenues);
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["name"], "Mining revenue");
        assert_eq!(
            value["data"]["json"]["revenue"],
            json!(["3.00000000", "3.00012345"])
        );
        assert_eq!(value["data"]["names"]["height"], "Height");
    }

    #[test]
    fn test_empty_window_produces_empty_columns() {
        for payload in [
            block_size(&[]),
            block_interval(&[]),
            difficulty(&[]),
            mining_revenue(&[], &[]),
        ] {
            assert!(payload.is_empty(), "{} should be empty", payload.name);
            assert_eq!(payload.data.json.len(), 2);
        }
    }
}
