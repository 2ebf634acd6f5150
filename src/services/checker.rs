//! The polling loop: fetch candidates, filter, dedup, notify, sleep.

use std::collections::HashSet;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::models::SlotId;
use crate::notify::Notifier;
use crate::services::filter;
use crate::site::SlotSource;

/// Polls the slot source on a fixed interval and notifies once per new
/// qualifying slot.
///
/// The seen-set lives on this struct and with it the dedup state: a fresh
/// service starts with an empty set, and nothing survives the process. A
/// slot is marked seen before its notification goes out, so a failed send
/// is logged but never retried.
pub struct CheckerService<S, N> {
    source: S,
    notifier: N,
    config: Config,
    seen: HashSet<SlotId>,
}

impl<S: SlotSource, N: Notifier> CheckerService<S, N> {
    pub fn new(source: S, notifier: N, config: Config) -> Self {
        Self {
            source,
            notifier,
            config,
            seen: HashSet::new(),
        }
    }

    /// Number of distinct slots notified so far in this process.
    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }

    /// Runs until `shutdown` flips to `true`.
    ///
    /// The flag is checked at the top of every iteration and the sleep is
    /// raced against it, so a stop request never waits out a long refresh
    /// interval. Work already in flight completes first.
    pub async fn run(&mut self, mut shutdown: watch::Receiver<bool>) {
        info!(
            "checking for available slots every {}s",
            self.config.refresh
        );
        loop {
            if *shutdown.borrow() {
                info!("stop requested, shutting down the checker");
                break;
            }
            self.check_once().await;
            tokio::select! {
                _ = tokio::time::sleep(Duration::from_secs(self.config.refresh)) => {}
                _ = shutdown.changed() => {}
            }
        }
    }

    /// One polling tick. Public so tests can drive ticks directly.
    pub async fn check_once(&mut self) {
        let slots = match self.source.fetch_slots().await {
            Ok(slots) => slots,
            Err(err) => {
                warn!("fetching slots failed, will retry next tick: {err}");
                return;
            }
        };
        debug!("fetched {} candidate slot(s)", slots.len());

        for slot in slots {
            if !filter::matches(&slot, &self.config) {
                continue;
            }
            if !self.seen.insert(slot.id()) {
                continue;
            }
            info!(
                "found slot: {}, {} -> {} {}",
                slot.location,
                slot.address,
                slot.date.format("%d/%m/%Y"),
                slot.time.format("%H:%M")
            );
            match self.notifier.notify(&slot).await {
                Ok(()) => info!(
                    "notification sent for {} {}",
                    slot.date.format("%d/%m/%Y"),
                    slot.time.format("%H:%M")
                ),
                Err(err) => error!(
                    "notification failed for {} {}: {err}",
                    slot.date.format("%d/%m/%Y"),
                    slot.time.format("%H:%M")
                ),
            }
        }
    }
}
