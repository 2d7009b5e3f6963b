// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Registry of the charts the explorer can draw

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::errors::ChartError;

/// Supported chart types
///
/// The set is closed: adding a chart means adding a variant here and a
/// derivation in [`derive`](crate::charts::derive), which the compiler then
/// forces through every `match`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartType {
    BlockSize,
    BlockInterval,
    Difficulty,
    MiningRevenue,
}

impl ChartType {
    /// Every chart type, in catalog order
    pub const ALL: [ChartType; 4] = [
        ChartType::BlockSize,
        ChartType::BlockInterval,
        ChartType::Difficulty,
        ChartType::MiningRevenue,
    ];

    /// URL identifier, e.g. `block-size`
    pub const fn id(&self) -> &'static str {
        match self {
            ChartType::BlockSize => "block-size",
            ChartType::BlockInterval => "block-interval",
            ChartType::Difficulty => "difficulty",
            ChartType::MiningRevenue => "mining-revenue",
        }
    }

    /// Display name shown above the chart
    pub const fn display_name(&self) -> &'static str {
        match self {
            ChartType::BlockSize => "Block Size",
            ChartType::BlockInterval => "Block Interval",
            ChartType::Difficulty => "Difficulty",
            ChartType::MiningRevenue => "Mining revenue",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ChartType {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartType::ALL
            .into_iter()
            .find(|chart_type| chart_type.id() == s)
            .ok_or_else(|| ChartError::unknown_chart_type(s))
    }
}

/// Catalog entry describing one chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartEntry {
    pub name: &'static str,
}

/// Static registry of chart types and their display names
///
/// Built once at startup and never mutated.
///
/// # Examples
///
/// ```rust
/// use blockcharts::{ChartCatalog, ChartType};
///
/// let catalog = ChartCatalog::new();
/// assert!(catalog.is_valid("difficulty"));
/// assert!(!catalog.is_valid("hashrate"));
/// assert_eq!(catalog.resolve("block-size").unwrap(), ChartType::BlockSize);
/// ```
#[derive(Debug, Clone)]
pub struct ChartCatalog {
    charts: BTreeMap<ChartType, ChartEntry>,
}

impl ChartCatalog {
    pub fn new() -> Self {
        let charts = ChartType::ALL
            .into_iter()
            .map(|chart_type| {
                let name = chart_type.display_name();
                (chart_type, ChartEntry { name })
            })
            .collect();
        Self { charts }
    }

    /// All registered charts keyed by type
    pub fn list(&self) -> &BTreeMap<ChartType, ChartEntry> {
        &self.charts
    }

    /// Whether `chart_type` names a registered chart
    pub fn is_valid(&self, chart_type: &str) -> bool {
        self.resolve(chart_type).is_ok()
    }

    /// Resolves a chart identifier, failing with
    /// [`ChartError::UnknownChartType`] for anything unregistered
    pub fn resolve(&self, chart_type: &str) -> Result<ChartType, ChartError> {
        let parsed = chart_type.parse::<ChartType>()?;
        if self.charts.contains_key(&parsed) {
            Ok(parsed)
        } else {
            Err(ChartError::unknown_chart_type(chart_type))
        }
    }
}

impl Default for ChartCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lists_all_charts() {
        let catalog = ChartCatalog::new();
        let names: Vec<_> = catalog.list().values().map(|entry| entry.name).collect();
        let expected = [
            "Block Size",
            "Block Interval",
            "Difficulty",
            "Mining revenue",
        ];
        assert_eq!(names, expected);
    }

    #[test]
    fn test_identifiers_round_trip() {
        for chart_type in ChartType::ALL {
            assert_eq!(chart_type.id().parse::<ChartType>().unwrap(), chart_type);
            assert_eq!(chart_type.to_string(), chart_type.id());
        }
    }

    #[test]
    fn test_serde_uses_identifiers() {
        let json = serde_json::to_string(&ChartType::MiningRevenue).unwrap();
        assert_eq!(json, "\"mining-revenue\"");

        let listing = serde_json::to_value(ChartCatalog::new().list()).unwrap();
        assert_eq!(listing["block-interval"]["name"], "Block Interval");
    }

    #[test]
    fn test_unknown_identifiers_are_rejected() {
        let catalog = ChartCatalog::new();
        for bad in ["", "hashrate", "Block-Size", "block_size", " difficulty"] {
            assert!(!catalog.is_valid(bad), "{bad:?} should be rejected");
            assert!(matches!(
                catalog.resolve(bad),
                Err(ChartError::UnknownChartType { .. })
            ));
        }
    }
}
