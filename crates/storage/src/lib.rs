#![forbid(unsafe_code)]

pub mod content;
pub mod repository;
pub mod sqlite;

pub use content::{ContentError, bundled_content, load_content_dir};
pub use repository::{InMemoryRepository, KeyValueRepository, Storage, StorageError};
