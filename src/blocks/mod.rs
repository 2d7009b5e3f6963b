// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Block records and chart window calculations.
//!
//! This module provides:
//! - The read-only [`BlockRecord`] handed out by block sources
//! - UTC day window computations for chart queries

pub mod record;
pub mod window;

// Re-export public API
pub use record::{BlockHash, BlockRecord, TxId};
pub use window::*;
