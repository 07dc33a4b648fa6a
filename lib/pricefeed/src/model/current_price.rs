use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Consensus price of an asset, rewritten by every aggregation pass.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CurrentPrice {
    pub asset_code: String,
    pub price: Decimal,
    pub expiry: u64,
}

impl CurrentPrice {
    /// No consensus: either never aggregated or no live submission.
    pub fn zero(asset_code: &str) -> Self {
        Self {
            asset_code: asset_code.to_string(),
            price: Decimal::ZERO,
            expiry: 0,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.price.is_zero() && self.expiry == 0
    }
}
