use pricefeed_db::LedgerColumn;
use pricefeed_macros::Repository;

use super::RepositoryOps;
use crate::{
    model::Asset,
    storage::{columns, PriceFeedStore},
    Result,
};

#[derive(Repository)]
#[repository(K = "()", V = "Vec<Asset>")]
pub struct AssetRepository {
    col: LedgerColumn<columns::Assets>,
}

impl AssetRepository {
    pub fn new(store: &PriceFeedStore) -> Self {
        Self {
            col: store.column(),
        }
    }
}
