use crate::{keeper::Keeper, model::Asset, PriceFeedError, Result};

impl Keeper {
    /// Admission check for a price submission: both the asset and the
    /// submitting oracle must be registered. Returns the asset so the caller
    /// can derive its price key.
    pub fn validate_submission(&self, asset_code: &str, oracle_address: &str) -> Result<Asset> {
        let asset = self
            .get_asset(asset_code)?
            .ok_or_else(|| PriceFeedError::UnknownAsset(asset_code.to_string()))?;
        if self.get_oracle(oracle_address)?.is_none() {
            return Err(PriceFeedError::UnknownOracle(oracle_address.to_string()));
        }
        Ok(asset)
    }
}
