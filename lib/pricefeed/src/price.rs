use log::{debug, trace};
use rust_decimal::Decimal;

use crate::{
    keeper::{Context, Keeper},
    model::{Asset, CurrentPrice, PostedPrice},
    repository::RepositoryOps,
    PriceFeedError, Result,
};

impl Keeper {
    /// Raw submissions stored under `price_key`, in submission order.
    pub fn get_raw_prices(&self, price_key: &str) -> Result<Vec<PostedPrice>> {
        Ok(self
            .raw_price
            .get(&price_key.to_string())?
            .unwrap_or_default())
    }

    /// Records `oracle_address`'s price for `asset`, replacing that oracle's
    /// previous submission in place. Rejects a price whose expiry is already
    /// behind the current block.
    pub fn set_price(
        &self,
        ctx: &Context,
        asset: &Asset,
        oracle_address: &str,
        price: Decimal,
        expiry: u64,
    ) -> Result<PostedPrice> {
        let height = ctx.block.height;
        if expiry < height {
            return Err(PriceFeedError::Expired { expiry, height });
        }

        let price_key = asset.price_key();
        let mut prices = self.get_raw_prices(&price_key)?;
        let posted = PostedPrice {
            asset_code: asset.code.clone(),
            oracle_address: oracle_address.to_string(),
            price,
            expiry,
        };

        match prices
            .iter_mut()
            .find(|p| p.oracle_address == oracle_address)
        {
            Some(previous) => {
                trace!(
                    "Replacing {} price {} of {}",
                    price_key,
                    previous.price,
                    oracle_address
                );
                *previous = posted.clone();
            }
            None => prices.push(posted.clone()),
        }

        self.raw_price.put(&price_key, &prices)?;
        debug!(
            "Posted {} = {} by {} until height {}",
            price_key, price, oracle_address, expiry
        );
        Ok(posted)
    }

    /// Last aggregated price under `price_key`, zero when never aggregated.
    pub fn get_current_price(&self, price_key: &str) -> Result<CurrentPrice> {
        Ok(self
            .current_price
            .get(&price_key.to_string())?
            .unwrap_or_else(|| CurrentPrice::zero(price_key)))
    }

    pub(crate) fn set_current_price(&self, price_key: &str, price: &CurrentPrice) -> Result<()> {
        self.current_price.put(&price_key.to_string(), price)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::storage::PriceFeedStore;

    fn setup() -> (Keeper, Asset) {
        let keeper = Keeper::new(PriceFeedStore::in_memory().unwrap());
        let asset = Asset::fungible("xrp", "Ripple", "");
        keeper.add_asset(asset.clone()).unwrap();
        (keeper, asset)
    }

    #[test]
    fn test_expiry_at_current_height_is_accepted() {
        let (keeper, asset) = setup();
        let ctx = Context::at_height(10);

        let posted = keeper
            .set_price(&ctx, &asset, "cosmos1a", dec!(0.33), 10)
            .unwrap();
        assert_eq!(posted.expiry, 10);
        assert_eq!(keeper.get_raw_prices("xrp").unwrap(), vec![posted]);
    }

    #[test]
    fn test_expiry_below_current_height_is_rejected() {
        let (keeper, asset) = setup();
        let ctx = Context::at_height(10);

        assert!(matches!(
            keeper.set_price(&ctx, &asset, "cosmos1a", dec!(0.33), 9),
            Err(PriceFeedError::Expired {
                expiry: 9,
                height: 10
            })
        ));
        assert!(keeper.get_raw_prices("xrp").unwrap().is_empty());
    }

    #[test]
    fn test_resubmission_replaces_in_place() {
        let (keeper, asset) = setup();
        let ctx = Context::at_height(1);

        keeper
            .set_price(&ctx, &asset, "cosmos1a", dec!(1), 100)
            .unwrap();
        keeper
            .set_price(&ctx, &asset, "cosmos1b", dec!(2), 100)
            .unwrap();
        keeper
            .set_price(&ctx, &asset, "cosmos1a", dec!(3), 200)
            .unwrap();

        let prices = keeper.get_raw_prices("xrp").unwrap();
        assert_eq!(prices.len(), 2);
        assert_eq!(prices[0].oracle_address, "cosmos1a");
        assert_eq!(prices[0].price, dec!(3));
        assert_eq!(prices[0].expiry, 200);
        assert_eq!(prices[1].oracle_address, "cosmos1b");
    }

    #[test]
    fn test_current_price_defaults_to_zero() {
        let (keeper, _) = setup();
        let current = keeper.get_current_price("xrp").unwrap();
        assert_eq!(current, CurrentPrice::zero("xrp"));
        assert!(current.is_zero());
    }
}
