//! Oracle price feed module.
//!
//! Registered oracles post prices for registered assets; once per block the
//! live submissions of every asset are reduced to a median current price.

pub mod aggregator;
pub mod block;
pub mod config;
pub mod consts;
pub mod error;
pub mod genesis;
pub mod handler;
pub mod keeper;
pub mod model;
pub mod msg;
mod price;
mod registry;
pub mod repository;
pub mod storage;
mod validation;

pub use aggregator::{Aggregate, Median};
pub use block::{apply_block, Block, BlockReport};
pub use config::PriceFeedConfig;
pub use error::PriceFeedError;
pub use genesis::{export_genesis, init_genesis, GenesisState};
pub use handler::{deliver_msg, end_block, Handle};
pub use keeper::{Context, Keeper};
pub use msg::{Msg, MsgPostPrice};
pub use storage::PriceFeedStore;

pub type Result<T> = std::result::Result<T, PriceFeedError>;
