use std::sync::Arc;
use std::time::Duration;

use lesson_core::model::{ContentStore, VocabularyItem};
use lesson_core::vocabulary::derive_vocabulary;
use storage::repository::Storage;

use crate::error::AppServicesError;
use crate::progress::{ProgressPersistence, ProgressStore, load_progress};

/// Assembles app-facing services: content, progress and its persistence.
pub struct AppServices {
    content: Arc<ContentStore>,
    progress: Arc<ProgressStore>,
    persistence: ProgressPersistence,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        content: ContentStore,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::with_storage(&storage, content).await)
    }

    /// Restore progress from `storage` and persist every later change to it.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub async fn with_storage(storage: &Storage, content: ContentStore) -> Self {
        let initial = load_progress(storage.values.as_ref()).await;
        let progress = Arc::new(ProgressStore::new(initial));
        let persistence = ProgressPersistence::attach(&progress, Arc::clone(&storage.values));

        Self {
            content: Arc::new(content),
            progress,
            persistence,
        }
    }

    #[must_use]
    pub fn content(&self) -> Arc<ContentStore> {
        Arc::clone(&self.content)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressStore> {
        Arc::clone(&self.progress)
    }

    /// Vocabulary for the current progress.
    #[must_use]
    pub fn vocabulary(&self) -> Vec<VocabularyItem> {
        derive_vocabulary(&self.progress.get(), &self.content)
    }

    /// Block until queued progress writes are stored or `timeout` passes.
    /// Returns `false` on timeout.
    #[must_use]
    pub fn flush(&self, timeout: Duration) -> bool {
        self.persistence.flush(timeout)
    }

    /// Stop persisting and wait for queued writes.
    pub async fn shutdown(self) {
        self.persistence.shutdown(&self.progress).await;
    }
}
