//! Batch processor
//!
//! Collects a fixed number of readings with a real-time pause between them
//! to simulate periodic sampling. The pause can be cut short by a
//! [`CancelSignal`]; the run then finishes without sleeping and reports the
//! interruption instead of failing.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, info};

use crate::generator::{Generator, RandomSource};
use crate::models::Reading;

/// Cloneable cancellation handle. Once cancelled it stays cancelled.
#[derive(Clone, Debug)]
pub struct CancelSignal {
    tx: Arc<watch::Sender<bool>>,
}

impl CancelSignal {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }

    /// Resolves once `cancel` has been called (immediately if it already was)
    pub async fn cancelled(&self) {
        let mut rx = self.tx.subscribe();
        // Sender lives in self, so wait_for cannot observe a closed channel
        let _ = rx.wait_for(|cancelled| *cancelled).await;
    }
}

impl Default for CancelSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// Readings of one batch run, in generation order
#[derive(Debug, Clone, Default)]
pub struct Batch {
    readings: Vec<Reading>,
    /// True when a delay was skipped because of cancellation
    pub interrupted: bool,
}

impl Batch {
    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

/// Generates `count` readings, pausing `delay` between successive ones.
pub async fn collect<S: RandomSource>(
    generator: &mut Generator<S>,
    count: usize,
    delay: Duration,
    cancel: &CancelSignal,
) -> Batch {
    let mut batch = Batch { readings: Vec::with_capacity(count), interrupted: false };

    for i in 0..count {
        if i > 0 && !pause(delay, cancel).await {
            if !batch.interrupted {
                info!(
                    collected = batch.len(),
                    "sampling delay interrupted, finishing without pauses"
                );
            }
            batch.interrupted = true;
        }
        batch.readings.push(generator.generate());
        debug!(index = i, "reading collected");
    }

    batch
}

/// Sleeps for `delay`; returns false if the wait was cancelled
async fn pause(delay: Duration, cancel: &CancelSignal) -> bool {
    if cancel.is_cancelled() {
        return false;
    }
    tokio::select! {
        _ = tokio::time::sleep(delay) => true,
        _ = cancel.cancelled() => false,
    }
}
