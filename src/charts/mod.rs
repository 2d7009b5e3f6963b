// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Chart catalog, derivation engine and request service
//!
//! - [`catalog`]: the closed set of chart types and their display names
//! - [`derive`]: pure block-list to payload derivations, one per chart type
//! - [`ChartGenerator`]: sequential upstream retrieval feeding the derivations
//! - [`ChartService`]: validation, window resolution and caching

pub mod catalog;
pub mod derive;
mod generator;
pub mod payload;
mod service;

pub use catalog::{ChartCatalog, ChartEntry, ChartType};
pub use generator::ChartGenerator;
pub use payload::{ChartData, ChartPayload, Column};
pub use service::ChartService;
