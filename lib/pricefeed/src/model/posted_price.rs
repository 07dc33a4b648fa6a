use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Latest raw submission of one oracle for one asset.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PostedPrice {
    pub asset_code: String,
    pub oracle_address: String,
    pub price: Decimal,
    pub expiry: u64,
}

impl PostedPrice {
    /// Inclusive: a price expiring at `height` still counts in that block.
    pub fn is_live(&self, height: u64) -> bool {
        self.expiry >= height
    }
}
