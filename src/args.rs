use crate::client::espn::DEFAULT_STATS_URL;
use crate::client::micro::DEFAULT_API_URL;
use clap::Parser;
use std::path::PathBuf;

pub fn args_checks() -> Args {
    Args::parse()
}

#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// URL of the hole-by-hole statistics page
    #[arg(long, env = "GOLF_STATS_URL", default_value = DEFAULT_STATS_URL)]
    pub stats_url: String,

    /// Path of the persisted snapshot blob
    #[arg(long, env = "GOLF_SNAPSHOT_PATH", default_value = "golf-hole-by-hole.json")]
    pub snapshot_path: PathBuf,

    /// JSON file mapping tournament/course/hole to stream write keys.
    /// Without it every hole is a config miss and nothing is dispatched.
    #[arg(long, env = "GOLF_WRITE_KEYS")]
    pub write_keys: Option<PathBuf>,

    /// Base URL of the stream publishing API
    #[arg(long, env = "MICROPREDICTION_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,
}
