use std::path::PathBuf;

use clap::Args;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Args)]
pub struct PriceFeedConfig {
    /// Path to the RocksDB data directory. State is kept in memory when unset.
    #[arg(long = "datadir", env = "PRICEFEED_DATADIR")]
    pub datadir: Option<PathBuf>,
}
