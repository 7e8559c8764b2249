use crate::storage::{PublishError, StoreError};
use thiserror::Error;

/// Failures that abort a run. Store and publish problems during a run are
/// reported through logging instead and never surface here.
#[derive(Error, Debug, Clone)]
pub enum CoreError {
    #[error("parse error: {0}")]
    Parse(String),
    #[error("schema error: {0}")]
    Schema(String),
    #[error("incomplete data: {0}")]
    IncompleteData(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("store error: {0}")]
    Store(String),
    #[error("publish error: {0}")]
    Publish(String),
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        Self::Store(err.to_string())
    }
}

impl From<PublishError> for CoreError {
    fn from(err: PublishError) -> Self {
        Self::Publish(err.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
