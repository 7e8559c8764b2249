use crate::storage::{StoreError, StreamKeyResolver};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Configured write keys, nested tournament → course → per-hole slots.
/// Hole N lives at slot N-1; a null slot means that hole has no stream.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct WriteKeyTable(HashMap<String, HashMap<String, Vec<Option<String>>>>);

impl WriteKeyTable {
    pub async fn load(path: &Path) -> Result<Self, StoreError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| StoreError::new(format!("read {}: {e}", path.display())))?;
        serde_json::from_slice(&bytes)
            .map_err(|e| StoreError::new(format!("decode {}: {e}", path.display())))
    }
}

impl StreamKeyResolver for WriteKeyTable {
    fn lookup(&self, tournament: &str, course: &str, hole: u32) -> Option<String> {
        let slot = (hole as usize).checked_sub(1)?;
        self.0
            .get(tournament)?
            .get(course)?
            .get(slot)?
            .clone()
    }
}
