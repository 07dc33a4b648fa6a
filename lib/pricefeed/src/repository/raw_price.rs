use pricefeed_db::LedgerColumn;
use pricefeed_macros::Repository;

use super::RepositoryOps;
use crate::{
    model::PostedPrice,
    storage::{columns, PriceFeedStore},
    Result,
};

#[derive(Repository)]
#[repository(K = "String", V = "Vec<PostedPrice>")]
pub struct RawPriceRepository {
    col: LedgerColumn<columns::RawPrices>,
}

impl RawPriceRepository {
    pub fn new(store: &PriceFeedStore) -> Self {
        Self {
            col: store.column(),
        }
    }
}
