use pricefeed_db::LedgerColumn;
use pricefeed_macros::Repository;

use super::RepositoryOps;
use crate::{
    model::CurrentPrice,
    storage::{columns, PriceFeedStore},
    Result,
};

#[derive(Repository)]
#[repository(K = "String", V = "CurrentPrice")]
pub struct CurrentPriceRepository {
    col: LedgerColumn<columns::CurrentPrices>,
}

impl CurrentPriceRepository {
    pub fn new(store: &PriceFeedStore) -> Self {
        Self {
            col: store.column(),
        }
    }
}
