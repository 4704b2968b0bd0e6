use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Durable string-keyed store for small application documents.
#[async_trait]
pub trait KeyValueRepository: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn get_value(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Insert or replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    async fn set_value(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl KeyValueRepository for InMemoryRepository {
    async fn get_value(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn set_value(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub values: Arc<dyn KeyValueRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let values: Arc<dyn KeyValueRepository> = Arc::new(InMemoryRepository::new());
        Self { values }
    }
}
