use std::{collections::HashSet, fs, path::Path};

use log::info;
use serde::{Deserialize, Serialize};

use crate::{
    keeper::Keeper,
    model::{Asset, Oracle},
    PriceFeedError, Result,
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenesisState {
    #[serde(default)]
    pub assets: Vec<Asset>,
    #[serde(default)]
    pub oracles: Vec<Oracle>,
}

impl GenesisState {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn validate(&self) -> Result<()> {
        let mut codes = HashSet::new();
        let mut price_keys = HashSet::new();
        for asset in &self.assets {
            if asset.code.is_empty() {
                return Err(PriceFeedError::InvalidGenesis(
                    "asset with empty code".to_string(),
                ));
            }
            if !codes.insert(asset.code.as_str()) {
                return Err(PriceFeedError::InvalidGenesis(format!(
                    "duplicate asset {}",
                    asset.code
                )));
            }
            if !price_keys.insert(asset.price_key()) {
                return Err(PriceFeedError::InvalidGenesis(format!(
                    "asset {} shares price key {} with another asset",
                    asset.code,
                    asset.price_key()
                )));
            }
        }

        let mut addresses = HashSet::new();
        for oracle in &self.oracles {
            if oracle.address.is_empty() {
                return Err(PriceFeedError::InvalidGenesis(
                    "oracle with empty address".to_string(),
                ));
            }
            if !addresses.insert(oracle.address.as_str()) {
                return Err(PriceFeedError::InvalidGenesis(format!(
                    "duplicate oracle {}",
                    oracle.address
                )));
            }
        }
        Ok(())
    }
}

/// Registers the genesis assets and oracles, in file order.
pub fn init_genesis(keeper: &Keeper, state: &GenesisState) -> Result<()> {
    state.validate()?;
    for asset in &state.assets {
        keeper.add_asset(asset.clone())?;
    }
    for oracle in &state.oracles {
        keeper.add_oracle(&oracle.address)?;
    }
    info!(
        "Initialized pricefeed genesis with {} assets and {} oracles",
        state.assets.len(),
        state.oracles.len()
    );
    Ok(())
}

pub fn export_genesis(keeper: &Keeper) -> Result<GenesisState> {
    Ok(GenesisState {
        assets: keeper.get_assets()?,
        oracles: keeper.get_oracles()?,
    })
}
