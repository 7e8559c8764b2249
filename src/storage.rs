use crate::model::HoleRecord;
use async_trait::async_trait;
use std::error::Error;
use std::fmt;

pub mod file;
pub mod keys;

#[derive(Debug, Clone)]
pub struct StoreError {
    message: String,
}

impl StoreError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for StoreError {}

impl From<String> for StoreError {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for StoreError {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone)]
pub struct PublishError {
    message: String,
}

impl PublishError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for PublishError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for PublishError {}

/// Retrieves the raw statistics page. Fetch failure aborts the run.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch(&self) -> Result<String, crate::error::CoreError>;
}

/// Persists the hole-by-hole snapshot under one well-known key. `get` and
/// `put` target the same blob, so a run loads the previous snapshot before
/// persisting the current one.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    async fn get(&self) -> Result<Option<Vec<HoleRecord>>, StoreError>;
    async fn put(&self, holes: &[HoleRecord]) -> Result<(), StoreError>;
}

/// Static mapping from a hole's identity to its destination write key.
pub trait StreamKeyResolver: Send + Sync {
    fn lookup(&self, tournament: &str, course: &str, hole: u32) -> Option<String>;
}

/// Sends one scalar value to a named stream. Calls are independent; a failed
/// publish must not block sibling publishes.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(
        &self,
        write_key: &str,
        stream_name: &str,
        value: i32,
    ) -> Result<(), PublishError>;
}
