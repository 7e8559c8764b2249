use crate::model::HoleRecord;
use crate::storage::{SnapshotStore, StoreError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// On-disk layout of the persisted snapshot blob.
#[derive(Serialize, Deserialize)]
struct SnapshotEnvelope {
    captured_at: DateTime<Utc>,
    holes: Vec<HoleRecord>,
}

/// Snapshot store backed by a single JSON file, the local stand-in for the
/// original's one-object blob store.
#[derive(Clone, Debug)]
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SnapshotStore for FileSnapshotStore {
    async fn get(&self) -> Result<Option<Vec<HoleRecord>>, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StoreError::new(format!(
                    "read {}: {e}",
                    self.path.display()
                )));
            }
        };

        let envelope: SnapshotEnvelope = serde_json::from_slice(&bytes)
            .map_err(|e| StoreError::new(format!("decode {}: {e}", self.path.display())))?;
        Ok(Some(envelope.holes))
    }

    async fn put(&self, holes: &[HoleRecord]) -> Result<(), StoreError> {
        let envelope = SnapshotEnvelope {
            captured_at: Utc::now(),
            holes: holes.to_vec(),
        };
        let body = serde_json::to_vec(&envelope)
            .map_err(|e| StoreError::new(format!("encode snapshot: {e}")))?;

        tokio::fs::write(&self.path, body)
            .await
            .map_err(|e| StoreError::new(format!("write {}: {e}", self.path.display())))
    }
}
