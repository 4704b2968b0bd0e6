use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::time::Duration;

use lesson_core::model::ProgressMap;
use storage::repository::KeyValueRepository;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::store::{ProgressStore, SubscriptionId};

/// Key the serialized progress map is stored under.
pub const PROGRESS_STORAGE_KEY: &str = "finishedItems";

/// Read the persisted progress map.
///
/// Missing, unreadable or malformed data yields an empty map. Entries with an
/// unrecognized key are dropped individually and the rest restored.
pub async fn load_progress(values: &dyn KeyValueRepository) -> ProgressMap {
    let raw = match values.get_value(PROGRESS_STORAGE_KEY).await {
        Ok(Some(raw)) => raw,
        Ok(None) => return ProgressMap::new(),
        Err(err) => {
            log::warn!("could not read saved progress, starting empty: {err}");
            return ProgressMap::new();
        }
    };

    match serde_json::from_str::<ProgressMap>(&raw) {
        Ok(map) => {
            log::debug!("restored {} progress entries", map.len());
            map
        }
        Err(err) => {
            log::warn!("ignoring malformed saved progress: {err}");
            ProgressMap::new()
        }
    }
}

/// Store listener that writes the whole map after every mutation.
///
/// Snapshots are queued to a single writer task so writes land in mutation
/// order without blocking the caller. `flush` waits for the queue to drain.
pub struct ProgressPersistence {
    subscription: SubscriptionId,
    writer: JoinHandle<()>,
    queued: Arc<AtomicU64>,
    written: Arc<WriteMark>,
}

/// Sequence number of the last snapshot the writer finished with.
#[derive(Default)]
struct WriteMark {
    seq: Mutex<u64>,
    advanced: Condvar,
}

impl WriteMark {
    fn advance(&self, seq: u64) {
        *self.seq.lock().unwrap_or_else(PoisonError::into_inner) = seq;
        self.advanced.notify_all();
    }

    fn wait_for(&self, target: u64, timeout: Duration) -> bool {
        let guard = self.seq.lock().unwrap_or_else(PoisonError::into_inner);
        let (_guard, result) = self
            .advanced
            .wait_timeout_while(guard, timeout, |seq| *seq < target)
            .unwrap_or_else(PoisonError::into_inner);
        !result.timed_out()
    }
}

impl ProgressPersistence {
    /// Subscribe to `store` and start the writer task.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    #[must_use]
    pub fn attach(store: &ProgressStore, values: Arc<dyn KeyValueRepository>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel::<(u64, String)>();
        let queued = Arc::new(AtomicU64::new(0));
        let written = Arc::new(WriteMark::default());

        let counter = Arc::clone(&queued);
        let subscription = store.subscribe(move |map| match serde_json::to_string(map) {
            Ok(json) => {
                let seq = counter.fetch_add(1, Ordering::SeqCst) + 1;
                if tx.send((seq, json)).is_err() {
                    log::warn!("progress writer stopped; change not saved");
                }
            }
            Err(err) => log::warn!("could not serialize progress: {err}"),
        });
        let writer = tokio::spawn(write_snapshots(values, rx, Arc::clone(&written)));
        Self {
            subscription,
            writer,
            queued,
            written,
        }
    }

    /// Block until every snapshot queued so far has been written, or until
    /// `timeout` passes. Returns `false` on timeout.
    ///
    /// Must not be called from a thread the writer task needs to make progress.
    #[must_use]
    pub fn flush(&self, timeout: Duration) -> bool {
        let target = self.queued.load(Ordering::SeqCst);
        self.written.wait_for(target, timeout)
    }

    /// Detach from `store` and wait for queued writes to finish.
    pub async fn shutdown(self, store: &ProgressStore) {
        store.unsubscribe(self.subscription);
        if let Err(err) = self.writer.await {
            log::warn!("progress writer ended abnormally: {err}");
        }
    }
}

async fn write_snapshots(
    values: Arc<dyn KeyValueRepository>,
    mut rx: mpsc::UnboundedReceiver<(u64, String)>,
    written: Arc<WriteMark>,
) {
    while let Some((seq, json)) = rx.recv().await {
        if let Err(err) = values.set_value(PROGRESS_STORAGE_KEY, &json).await {
            log::warn!("failed to save progress: {err}");
        }
        written.advance(seq);
    }
}
