use serde::{Deserialize, Serialize};

use crate::consts::NFT_ID_SEPARATOR;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum AssetKind {
    Fungible,
    NonFungible { id: String },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub code: String,
    pub name: String,
    pub kind: AssetKind,
    pub description: String,
}

impl Asset {
    pub fn fungible(code: &str, name: &str, description: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            kind: AssetKind::Fungible,
            description: description.to_string(),
        }
    }

    /// Key under which the raw and current prices of this asset are stored.
    /// A non-fungible asset is priced per token id.
    pub fn price_key(&self) -> String {
        match &self.kind {
            AssetKind::Fungible => self.code.clone(),
            AssetKind::NonFungible { id } => format!("{}{}{}", self.code, NFT_ID_SEPARATOR, id),
        }
    }
}
