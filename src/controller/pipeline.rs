use crate::controller::diff::diff_snapshots;
use crate::controller::extract::extract_records;
use crate::controller::parse::parse_stats_page;
use crate::error::CoreError;
use crate::storage::{EventPublisher, PageSource, SnapshotStore, StreamKeyResolver};
use futures::future::join_all;
use std::sync::Arc;
use tracing::{error, info, warn};

/// One scheduled run: fetch, parse, extract, load the previous snapshot,
/// then persist the current one while the diff and publish fan-out proceed.
/// Extraction problems are fatal and happen before any snapshot write;
/// everything downstream degrades per hole.
pub struct Pipeline {
    page: Arc<dyn PageSource>,
    store: Arc<dyn SnapshotStore>,
    keys: Arc<dyn StreamKeyResolver>,
    publisher: Arc<dyn EventPublisher>,
}

impl Pipeline {
    #[must_use]
    pub fn new(
        page: Arc<dyn PageSource>,
        store: Arc<dyn SnapshotStore>,
        keys: Arc<dyn StreamKeyResolver>,
        publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            page,
            store,
            keys,
            publisher,
        }
    }

    pub async fn run(&self) -> Result<(), CoreError> {
        let html = self.page.fetch().await?;
        let page = parse_stats_page(&html)?;
        let current = extract_records(&page)?;
        info!(
            tournament = %page.tournament,
            course = %page.course,
            holes = current.len(),
            "extracted current snapshot"
        );

        // Both operations target the same snapshot blob, so the previous
        // snapshot must be fully loaded before the overwrite starts.
        let previous = match self.store.get().await {
            Ok(previous) => previous,
            Err(e) => {
                warn!(error = %e, "snapshot load failed, treating as no previous snapshot");
                None
            }
        };

        // Persist the fresh snapshot no matter how the diff goes, so the
        // next run has a baseline. The write overlaps the diff and the
        // publish fan-out and is joined at the end of the run.
        let store = Arc::clone(&self.store);
        let to_persist = current.clone();
        let persist = tokio::spawn(async move { store.put(&to_persist).await });

        let batches = match previous {
            Some(previous) => diff_snapshots(&current, &previous, self.keys.as_ref()),
            None => {
                info!("no previous snapshot, establishing baseline only");
                Vec::new()
            }
        };

        let mut writes = Vec::new();
        for batch in batches {
            info!(
                stream = %batch.stream_name,
                events = batch.values.len(),
                "dispatching hole events"
            );
            for value in batch.values {
                let publisher = Arc::clone(&self.publisher);
                let write_key = batch.write_key.clone();
                let stream = batch.stream_name.clone();
                writes.push(async move {
                    let outcome = publisher.publish(&write_key, &stream, value).await;
                    (stream, value, outcome)
                });
            }
        }

        // Fire-and-collect: failures are reported individually and never
        // cancel sibling publishes or the persist.
        for (stream, value, outcome) in join_all(writes).await {
            if let Err(e) = outcome {
                error!(stream = %stream, value, error = %e, "publish failed");
            }
        }

        match persist.await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => error!(error = %e, "snapshot persist failed"),
            Err(e) => error!(error = %e, "snapshot persist task panicked"),
        }

        Ok(())
    }
}
