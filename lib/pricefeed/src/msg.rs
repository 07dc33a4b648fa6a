use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{PriceFeedError, Result};

/// Price submission transaction sent by an oracle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MsgPostPrice {
    pub from: String,
    pub asset_code: String,
    pub price: Decimal,
    pub expiry: u64,
}

impl MsgPostPrice {
    /// Stateless checks, run before the message touches the store.
    pub fn validate_basic(&self) -> Result<()> {
        if self.from.is_empty() {
            return Err(PriceFeedError::InvalidMessage("missing sender".to_string()));
        }
        if self.asset_code.is_empty() {
            return Err(PriceFeedError::InvalidMessage(
                "missing asset code".to_string(),
            ));
        }
        if self.price.is_sign_negative() && !self.price.is_zero() {
            return Err(PriceFeedError::InvalidPrice(self.price));
        }
        Ok(())
    }
}

/// Messages routed to the module.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Msg {
    PostPrice(MsgPostPrice),
}
