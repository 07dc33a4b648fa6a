use crate::{
    model::BlockContext,
    repository::{
        AssetRepository, CurrentPriceRepository, OracleRepository, RawPriceRepository,
    },
    storage::PriceFeedStore,
};

/// Execution context of a state transition.
#[derive(Debug, Clone, Copy, Default)]
pub struct Context {
    pub block: BlockContext,
}

impl Context {
    pub fn at_height(height: u64) -> Self {
        Self {
            block: BlockContext { height },
        }
    }
}

/// Entry point to the module's state. Every read and write goes through the
/// store handle given to `Keeper::new`.
pub struct Keeper {
    pub store: PriceFeedStore,
    pub asset: AssetRepository,
    pub oracle: OracleRepository,
    pub raw_price: RawPriceRepository,
    pub current_price: CurrentPriceRepository,
}

impl Keeper {
    pub fn new(store: PriceFeedStore) -> Self {
        Self {
            asset: AssetRepository::new(&store),
            oracle: OracleRepository::new(&store),
            raw_price: RawPriceRepository::new(&store),
            current_price: CurrentPriceRepository::new(&store),
            store,
        }
    }
}
