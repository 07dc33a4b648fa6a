use log::debug;

use crate::{
    keeper::Keeper,
    model::{Asset, Oracle},
    repository::RepositoryOps,
    PriceFeedError, Result,
};

impl Keeper {
    /// Registered assets in registration order.
    pub fn get_assets(&self) -> Result<Vec<Asset>> {
        Ok(self.asset.get(&())?.unwrap_or_default())
    }

    pub fn get_asset(&self, asset_code: &str) -> Result<Option<Asset>> {
        Ok(self
            .get_assets()?
            .into_iter()
            .find(|asset| asset.code == asset_code))
    }

    pub fn add_asset(&self, asset: Asset) -> Result<()> {
        let mut assets = self.get_assets()?;
        if assets.iter().any(|a| a.code == asset.code) {
            return Err(PriceFeedError::DuplicateAsset(asset.code));
        }
        // prices are stored by price key, two assets must never share one
        let price_key = asset.price_key();
        if assets.iter().any(|a| a.price_key() == price_key) {
            return Err(PriceFeedError::DuplicateAsset(price_key));
        }
        debug!("Registering asset {} ({:?})", asset.code, asset.kind);
        assets.push(asset);
        self.asset.put(&(), &assets)
    }

    /// Registered oracles in registration order.
    pub fn get_oracles(&self) -> Result<Vec<Oracle>> {
        Ok(self.oracle.get(&())?.unwrap_or_default())
    }

    pub fn get_oracle(&self, address: &str) -> Result<Option<Oracle>> {
        Ok(self
            .get_oracles()?
            .into_iter()
            .find(|oracle| oracle.address == address))
    }

    pub fn add_oracle(&self, address: &str) -> Result<()> {
        let mut oracles = self.get_oracles()?;
        if oracles.iter().any(|o| o.address == address) {
            return Err(PriceFeedError::DuplicateOracle(address.to_string()));
        }
        debug!("Registering oracle {address}");
        oracles.push(Oracle {
            address: address.to_string(),
        });
        self.oracle.put(&(), &oracles)
    }
}
