/// Name of the module, also the column family every key of the module lives in.
pub const MODULE_NAME: &str = "pricefeed";

pub const STORE_KEY: &str = MODULE_NAME;

/// Key of the registered asset list
pub const ASSET_KEY: &str = "assets";

/// Key of the registered oracle list
pub const ORACLE_KEY: &str = "oracles";

/// Prefix of the raw submissions of an asset
pub const RAW_PRICE_FEED_PREFIX: &str = "raw:";

/// Prefix of the aggregated price of an asset
pub const CURRENT_PRICE_PREFIX: &str = "currentprice:";

/// Joins a non-fungible asset code with its token id in price keys
pub const NFT_ID_SEPARATOR: &str = "++";
