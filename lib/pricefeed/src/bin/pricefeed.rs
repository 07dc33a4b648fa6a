use std::{fs, path::PathBuf};

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use log::info;
use pricefeed::{
    apply_block, export_genesis, init_genesis, Block, GenesisState, Keeper, PriceFeedConfig,
    PriceFeedStore,
};

#[derive(Parser, Debug)]
#[command(version, about = "Replays oracle price submissions through the pricefeed module")]
struct Cli {
    #[command(flatten)]
    config: PriceFeedConfig,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Applies a list of blocks and prints the module state after each one
    Replay {
        /// Genesis file registering assets and oracles, applied first
        #[arg(long, value_name = "FILE")]
        genesis: Option<PathBuf>,

        /// JSON array of blocks: [{"height": 1, "messages": [...]}]
        #[arg(long, value_name = "FILE")]
        blocks: PathBuf,
    },
    /// Prints the registry and current prices held in the data directory
    Prices,
}

fn init_logging() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log::Level::Info.as_str()),
    )
    .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let store = PriceFeedStore::from_config(&cli.config)?;
    let keeper = Keeper::new(store);

    match cli.command {
        Command::Replay { genesis, blocks } => {
            if let Some(path) = genesis {
                let state = GenesisState::load(&path)
                    .with_context(|| format!("reading genesis {}", path.display()))?;
                init_genesis(&keeper, &state)?;
            }

            let raw = fs::read_to_string(&blocks)
                .with_context(|| format!("reading blocks {}", blocks.display()))?;
            let blocks: Vec<Block> = serde_json::from_str(&raw)?;
            info!("Replaying {} blocks", blocks.len());

            for block in &blocks {
                let report = apply_block(&keeper, block)?;
                println!("{}", serde_json::to_string(&report)?);
            }
            keeper.store.flush()?;
        }
        Command::Prices => {
            let genesis = export_genesis(&keeper)?;
            let prices = genesis
                .assets
                .iter()
                .map(|asset| keeper.get_current_price(&asset.price_key()))
                .collect::<pricefeed::Result<Vec<_>>>()?;
            let output = serde_json::json!({
                "assets": genesis.assets,
                "oracles": genesis.oracles,
                "prices": prices,
                "stateHash": keeper.store.state_hash()?,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
