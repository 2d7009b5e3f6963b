// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Background ticker polling
//!
//! The poller owns the snapshot. Readers get it through a
//! [`watch::Receiver`], and change notifications fan out over a
//! [`broadcast`] channel. A poll that fails or returns an identical ticker
//! leaves both untouched.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info, Instrument};

use super::{MarketInfo, TickerSource};
use crate::config::constants::DEFAULT_TICKER_POLL_INTERVAL;
use crate::errors::MarketError;
use crate::tracing::spans;

const NOTIFICATION_CAPACITY: usize = 16;

/// Polls a [`TickerSource`] and publishes ticker changes
pub struct MarketPoller<S> {
    source: S,
    interval: Duration,
    snapshot: watch::Sender<MarketInfo>,
    updates: broadcast::Sender<MarketInfo>,
}

impl<S: TickerSource + 'static> MarketPoller<S> {
    pub fn new(source: S) -> Self {
        let (snapshot, _) = watch::channel(MarketInfo::default());
        let (updates, _) = broadcast::channel(NOTIFICATION_CAPACITY);
        Self {
            source,
            interval: DEFAULT_TICKER_POLL_INTERVAL,
            snapshot,
            updates,
        }
    }

    /// Delay between polls; zero is raised to one millisecond
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval.max(Duration::from_millis(1));
        self
    }

    /// Current snapshot
    pub fn info(&self) -> MarketInfo {
        self.snapshot.borrow().clone()
    }

    /// Receiver that always sees the current snapshot
    pub fn watch(&self) -> watch::Receiver<MarketInfo> {
        self.snapshot.subscribe()
    }

    /// Receives one message per snapshot change
    pub fn subscribe(&self) -> broadcast::Receiver<MarketInfo> {
        self.updates.subscribe()
    }

    /// Runs one poll cycle, returning whether the snapshot changed
    pub async fn refresh(&self) -> Result<bool, MarketError> {
        let fresh = self.source.fetch_ticker().await?;

        let changed = self.snapshot.send_if_modified(|current| {
            if *current == fresh {
                false
            } else {
                *current = fresh.clone();
                true
            }
        });

        if changed {
            info!(
                price = fresh.price,
                volume = fresh.volume,
                "Market ticker changed"
            );
            // No subscribers is fine
            let _ = self.updates.send(fresh);
        } else {
            debug!("Market ticker unchanged");
        }

        Ok(changed)
    }

    async fn poll_once(&self) {
        let result = self
            .refresh()
            .instrument(spans::poll_ticker(self.source.name()))
            .await;

        if let Err(e) = result {
            error!(source = self.source.name(), error = %e, "Failed to poll market ticker");
        }
    }

    /// Starts polling on the current runtime: once immediately, then every
    /// interval
    ///
    /// Polling stops when the returned handle is stopped or dropped.
    pub fn spawn(self: &Arc<Self>) -> PollerHandle {
        let poller = Arc::clone(self);
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(poller.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    _ = ticker.tick() => poller.poll_once().await,
                }
            }

            debug!("Market poller stopped");
        });

        PollerHandle {
            shutdown: Some(shutdown_tx),
            task,
        }
    }
}

/// Handle to a running poller
#[derive(Debug)]
pub struct PollerHandle {
    shutdown: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl PollerHandle {
    /// Stops polling and waits for an in-flight poll to finish
    pub async fn stop(mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Err(e) = (&mut self.task).await {
            error!(error = %e, "Market poller task failed");
        }
    }
}
