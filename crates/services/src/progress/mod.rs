mod persistence;
mod store;

// Public API of the progress subsystem.
pub use persistence::{PROGRESS_STORAGE_KEY, ProgressPersistence, load_progress};
pub use store::{ProgressStore, SubscriptionId};
