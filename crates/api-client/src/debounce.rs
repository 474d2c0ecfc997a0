//! Cancel-and-replace debouncing for search-as-you-type
//!
//! Each [`Debouncer::schedule`] call supersedes the previous one. A task runs
//! only after the interval passes without a newer schedule, and only the most
//! recent task may publish its output.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::debug;

/// Quiet period used for keystroke debouncing
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Single-slot debouncer delivering results on a channel
pub struct Debouncer<T> {
    interval: Duration,
    generation: Arc<AtomicU64>,
    pending: Mutex<Option<JoinHandle<()>>>,
    tx: UnboundedSender<T>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Create a debouncer and the receiver its results arrive on
    pub fn new(interval: Duration) -> (Self, UnboundedReceiver<T>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let debouncer = Self {
            interval,
            generation: Arc::new(AtomicU64::new(0)),
            pending: Mutex::new(None),
            tx,
        };
        (debouncer, rx)
    }

    /// Configured quiet period
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Replace any pending task with `task`
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&self, task: F)
    where
        F: Future<Output = T> + Send + 'static,
    {
        // Hold the slot while bumping so the newest generation always owns it.
        let mut slot = self.slot();
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let current = Arc::clone(&self.generation);
        let tx = self.tx.clone();
        let interval = self.interval;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(interval).await;
            let output = task.await;
            // A newer schedule or a cancel may have landed while `task` ran.
            if current.load(Ordering::SeqCst) == generation {
                // Receiver gone means nobody is listening any more.
                let _ = tx.send(output);
            } else {
                debug!(generation, "Dropping superseded result");
            }
        });

        if let Some(previous) = slot.replace(handle) {
            previous.abort();
        }
    }

    /// Drop the pending task, if any
    pub fn cancel(&self) {
        let mut slot = self.slot();
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Some(handle) = slot.take() {
            handle.abort();
        }
    }

    /// Wait for the pending task to finish and publish
    pub async fn flush(&self) {
        let handle = self.slot().take();
        if let Some(handle) = handle {
            // Cancelled tasks end with a JoinError; nothing to report.
            let _ = handle.await;
        }
    }

    /// Whether a task is waiting or running
    pub fn is_pending(&self) -> bool {
        self.slot()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    fn slot(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        let slot = self.pending.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = slot.take() {
            handle.abort();
        }
    }
}
