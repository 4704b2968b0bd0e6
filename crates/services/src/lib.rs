#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod playback;
pub mod progress;

pub use app_services::AppServices;
pub use error::AppServicesError;
pub use playback::{PlaybackService, SpeechEngine};
pub use progress::{
    PROGRESS_STORAGE_KEY, ProgressPersistence, ProgressStore, SubscriptionId, load_progress,
};
