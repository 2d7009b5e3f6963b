// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for monetary amounts.

pub mod satoshis;

// Note: Public types are re-exported from lib.rs, not here
