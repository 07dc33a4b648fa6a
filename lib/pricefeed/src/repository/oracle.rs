use pricefeed_db::LedgerColumn;
use pricefeed_macros::Repository;

use super::RepositoryOps;
use crate::{
    model::Oracle,
    storage::{columns, PriceFeedStore},
    Result,
};

#[derive(Repository)]
#[repository(K = "()", V = "Vec<Oracle>")]
pub struct OracleRepository {
    col: LedgerColumn<columns::Oracles>,
}

impl OracleRepository {
    pub fn new(store: &PriceFeedStore) -> Self {
        Self {
            col: store.column(),
        }
    }
}
