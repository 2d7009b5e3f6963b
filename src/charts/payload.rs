// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Chart payloads in the columnar layout consumed by the explorer front-end
//!
//! A payload serializes as:
//!
//! ```json
//! {
//!   "name": "Block Size",
//!   "data": {
//!     "x": "height",
//!     "json": { "height": [10, 11], "size": [285, 1024] },
//!     "names": { "height": "Height", "size": "Block size" }
//!   }
//! }
//! ```

use serde::Serialize;
use std::collections::BTreeMap;

/// Key of the x-axis column shared by every chart
pub const HEIGHT_COLUMN: &str = "height";

/// Label of the x-axis column
pub const HEIGHT_LABEL: &str = "Height";

/// One column of chart values
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Column {
    Unsigned(Vec<u64>),
    Signed(Vec<i64>),
    Float(Vec<f64>),
    Text(Vec<String>),
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Column::Unsigned(values) => values.len(),
            Column::Signed(values) => values.len(),
            Column::Float(values) => values.len(),
            Column::Text(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Columnar chart series with labels
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    /// Key of the x-axis column
    pub x: String,
    /// Values keyed by column
    pub json: BTreeMap<String, Column>,
    /// Human-readable label per column
    pub names: BTreeMap<String, String>,
}

/// A finished chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPayload {
    /// Display name of the chart
    pub name: String,
    pub data: ChartData,
}

impl ChartPayload {
    /// Creates a payload without columns, keyed on height
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: ChartData {
                x: HEIGHT_COLUMN.to_string(),
                json: BTreeMap::new(),
                names: BTreeMap::new(),
            },
        }
    }

    /// Adds (or replaces) a labelled column
    pub fn with_column(
        mut self,
        key: impl Into<String>,
        label: impl Into<String>,
        values: Column,
    ) -> Self {
        let key = key.into();
        self.data.names.insert(key.clone(), label.into());
        self.data.json.insert(key, values);
        self
    }

    /// Looks up a column by key
    pub fn column(&self, key: &str) -> Option<&Column> {
        self.data.json.get(key)
    }

    /// Number of points, i.e. the length of the x-axis column
    pub fn len(&self) -> usize {
        self.column(&self.data.x).map_or(0, Column::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
