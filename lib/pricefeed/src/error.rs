use std::path::PathBuf;

use pricefeed_db::DBError;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PriceFeedError {
    #[error("PriceFeed: unknown asset {0}")]
    UnknownAsset(String),
    #[error("PriceFeed: unknown oracle {0}")]
    UnknownOracle(String),
    #[error("PriceFeed: price expired at height {expiry}, current height is {height}")]
    Expired { expiry: u64, height: u64 },
    #[error("PriceFeed: asset {0} is already registered")]
    DuplicateAsset(String),
    #[error("PriceFeed: oracle {0} is already registered")]
    DuplicateOracle(String),
    #[error("PriceFeed: price must not be negative, got {0}")]
    InvalidPrice(Decimal),
    #[error("PriceFeed: invalid message: {0}")]
    InvalidMessage(String),
    #[error("PriceFeed: invalid genesis: {0}")]
    InvalidGenesis(String),
    #[error("PriceFeed: built without rocksdb support, cannot open {0:?}")]
    BackendUnavailable(PathBuf),
    #[error("PriceFeed: DBError error: {0:?}")]
    DBError(#[from] DBError),
    #[error("PriceFeed: IO error: {0:?}")]
    IOError(#[from] std::io::Error),
    #[error("PriceFeed: serde_json error: {0:?}")]
    SerdeJSONError(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
