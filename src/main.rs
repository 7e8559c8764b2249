use golf_hole_stream::args;
use golf_hole_stream::client::espn::EspnPageSource;
use golf_hole_stream::client::micro::MicroStreamPublisher;
use golf_hole_stream::controller::pipeline::Pipeline;
use golf_hole_stream::storage::file::FileSnapshotStore;
use golf_hole_stream::storage::keys::WriteKeyTable;
use std::sync::Arc;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = args::args_checks();

    let keys = match &args.write_keys {
        Some(path) => WriteKeyTable::load(path).await?,
        None => {
            warn!("no write-keys file configured, every hole will skip dispatch");
            WriteKeyTable::default()
        }
    };

    let pipeline = Pipeline::new(
        Arc::new(EspnPageSource::new(args.stats_url)),
        Arc::new(FileSnapshotStore::new(args.snapshot_path)),
        Arc::new(keys),
        Arc::new(MicroStreamPublisher::new(args.api_url)),
    );

    pipeline.run().await?;
    Ok(())
}
