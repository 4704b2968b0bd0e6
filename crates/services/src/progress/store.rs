use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use lesson_core::model::{LessonId, MovieId, ProgressKey, ProgressMap};

type Listener = Arc<dyn Fn(&ProgressMap) + Send + Sync>;

/// Handle returned by `ProgressStore::subscribe`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Owns the finished flags and notifies listeners after every mutation.
///
/// Listeners are called synchronously with the full map, outside the state
/// lock, in subscription order. Mutations and their notifications are
/// serialized, so listeners see snapshots in mutation order even when several
/// threads mutate at once. Listeners may read the store but must not mutate it.
pub struct ProgressStore {
    state: Mutex<ProgressMap>,
    mutation: Mutex<()>,
    listeners: Mutex<Vec<(SubscriptionId, Listener)>>,
    next_subscription: AtomicU64,
}

impl ProgressStore {
    #[must_use]
    pub fn new(initial: ProgressMap) -> Self {
        Self {
            state: Mutex::new(initial),
            mutation: Mutex::new(()),
            listeners: Mutex::new(Vec::new()),
            next_subscription: AtomicU64::new(1),
        }
    }

    /// Snapshot of the current map.
    #[must_use]
    pub fn get(&self) -> ProgressMap {
        self.state().clone()
    }

    #[must_use]
    pub fn is_finished(
        &self,
        movie_id: &MovieId,
        lesson_id: LessonId,
        dialogue_index: usize,
    ) -> bool {
        self.state()
            .is_finished(movie_id, lesson_id, dialogue_index)
    }

    /// Flip the finished flag for `key` and return the new value.
    pub fn toggle(&self, key: ProgressKey) -> bool {
        let _order = self.mutation();
        let (finished, snapshot) = {
            let mut state = self.state();
            let finished = state.toggle(key);
            (finished, state.clone())
        };
        self.notify(&snapshot);
        finished
    }

    /// Clear every flag.
    pub fn reset(&self) {
        let _order = self.mutation();
        let snapshot = {
            let mut state = self.state();
            state.clear();
            state.clone()
        };
        log::info!("progress reset");
        self.notify(&snapshot);
    }

    pub fn subscribe(
        &self,
        listener: impl Fn(&ProgressMap) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.listeners().push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners();
        let before = listeners.len();
        listeners.retain(|(sub, _)| *sub != id);
        listeners.len() != before
    }

    fn notify(&self, snapshot: &ProgressMap) {
        let listeners: Vec<Listener> = self
            .listeners()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(snapshot);
        }
    }

    fn state(&self) -> MutexGuard<'_, ProgressMap> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn mutation(&self) -> MutexGuard<'_, ()> {
        self.mutation.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn listeners(&self) -> MutexGuard<'_, Vec<(SubscriptionId, Listener)>> {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ProgressStore {
    fn default() -> Self {
        Self::new(ProgressMap::new())
    }
}
