// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! No-operation cache that disables caching entirely

use async_trait::async_trait;
use std::sync::Arc;

use super::{CacheKey, CacheStats, ChartCache};
use crate::charts::ChartPayload;

/// A no-operation cache that disables caching entirely
///
/// This cache backend always returns `None` for reads and ignores writes, so
/// every chart request goes to the block source.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpCache;

#[async_trait]
impl ChartCache for NoOpCache {
    async fn get(&self, _key: &CacheKey) -> Option<Arc<ChartPayload>> {
        None
    }

    async fn insert(&self, _key: CacheKey, _payload: Arc<ChartPayload>) {}

    async fn clear(&self) {}

    async fn stats(&self) -> CacheStats {
        CacheStats::default()
    }

    fn name(&self) -> &'static str {
        "NoOpCache"
    }
}
