use pricefeed_db::{Column, ColumnName, Result, TypedColumn};

use crate::{
    consts::{ASSET_KEY, CURRENT_PRICE_PREFIX, ORACLE_KEY, RAW_PRICE_FEED_PREFIX, STORE_KEY},
    model::{Asset, CurrentPrice, Oracle, PostedPrice},
};

#[derive(Debug)]
/// Registered assets, one list under a single key
pub struct Assets;

#[derive(Debug)]
/// Registered oracles, one list under a single key
pub struct Oracles;

#[derive(Debug)]
/// Raw submissions per price key
pub struct RawPrices;

#[derive(Debug)]
/// Aggregated price per price key
pub struct CurrentPrices;

#[derive(Debug)]
/// Store configuration such as the schema version
pub struct Metadata;

//
// ColumnName impl. Every column shares the module namespace; keys tell them apart.
//
impl ColumnName for Assets {
    const NAME: &'static str = STORE_KEY;
}

impl ColumnName for Oracles {
    const NAME: &'static str = STORE_KEY;
}

impl ColumnName for RawPrices {
    const NAME: &'static str = STORE_KEY;
}

impl ColumnName for CurrentPrices {
    const NAME: &'static str = STORE_KEY;
}

impl ColumnName for Metadata {
    const NAME: &'static str = STORE_KEY;
}

pub const COLUMN_NAMES: [&str; 1] = [STORE_KEY];

//
// Column trait impl
//
impl Column for Assets {
    type Index = ();

    fn key(_: &Self::Index) -> Result<Vec<u8>> {
        Ok(ASSET_KEY.as_bytes().to_vec())
    }
}

impl Column for Oracles {
    type Index = ();

    fn key(_: &Self::Index) -> Result<Vec<u8>> {
        Ok(ORACLE_KEY.as_bytes().to_vec())
    }
}

impl Column for RawPrices {
    type Index = String;

    fn key(index: &Self::Index) -> Result<Vec<u8>> {
        Ok(format!("{RAW_PRICE_FEED_PREFIX}{index}").into_bytes())
    }
}

impl Column for CurrentPrices {
    type Index = String;

    fn key(index: &Self::Index) -> Result<Vec<u8>> {
        Ok(format!("{CURRENT_PRICE_PREFIX}{index}").into_bytes())
    }
}

impl Column for Metadata {
    type Index = String;

    fn key(index: &Self::Index) -> Result<Vec<u8>> {
        Ok(index.as_bytes().to_vec())
    }
}

//
// TypedColumn impl
//
impl TypedColumn for Assets {
    type Type = Vec<Asset>;
}

impl TypedColumn for Oracles {
    type Type = Vec<Oracle>;
}

impl TypedColumn for RawPrices {
    type Type = Vec<PostedPrice>;
}

impl TypedColumn for CurrentPrices {
    type Type = CurrentPrice;
}

impl TypedColumn for Metadata {
    type Type = u32;
}
