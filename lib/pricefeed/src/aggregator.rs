//! Reduction of raw submissions to one consensus price per asset.
//!
//! Aggregation runs once per block on every validating node, so it must be a
//! pure function of the stored submissions and the block height: no map
//! iteration order, no clock, no randomness.

use log::{debug, info};
use rust_decimal::Decimal;

use crate::{
    keeper::{Context, Keeper},
    model::{Asset, CurrentPrice, PostedPrice},
    Result,
};

/// Turns the raw submissions of one asset into its current price.
///
/// Implementations must not fail: an asset without usable data yields
/// `CurrentPrice::zero` so that block execution carries on.
pub trait Aggregate {
    fn aggregate(&self, asset: &Asset, prices: &[PostedPrice], height: u64) -> CurrentPrice;
}

/// Median of the live submissions. The expiry follows the submission(s)
/// the median was taken from.
#[derive(Debug, Default, Clone, Copy)]
pub struct Median;

impl Aggregate for Median {
    fn aggregate(&self, asset: &Asset, prices: &[PostedPrice], height: u64) -> CurrentPrice {
        let mut live: Vec<&PostedPrice> = prices.iter().filter(|p| p.is_live(height)).collect();

        let (price, expiry) = match live.len() {
            0 => (Decimal::ZERO, 0),
            1 => (live[0].price, live[0].expiry),
            l => {
                // stable, equal prices keep submission order
                live.sort_by(|a, b| a.price.cmp(&b.price));
                if l % 2 == 0 {
                    let (lower, upper) = (live[l / 2 - 1], live[l / 2]);
                    (
                        mean(lower.price, upper.price),
                        floor_mean(lower.expiry, upper.expiry),
                    )
                } else {
                    (live[l / 2].price, live[l / 2].expiry)
                }
            }
        };

        CurrentPrice {
            asset_code: asset.code.clone(),
            price,
            expiry,
        }
    }
}

/// `lower <= upper`. The sum only overflows when both share a sign, in which
/// case their difference cannot.
fn mean(lower: Decimal, upper: Decimal) -> Decimal {
    match lower.checked_add(upper) {
        Some(sum) => sum / Decimal::TWO,
        None => lower + (upper - lower) / Decimal::TWO,
    }
}

fn floor_mean(a: u64, b: u64) -> u64 {
    a / 2 + b / 2 + (a % 2 + b % 2) / 2
}

impl Keeper {
    /// Recomputes and overwrites the current price of every registered asset.
    pub fn set_current_prices<A: Aggregate>(&self, ctx: &Context, aggregator: &A) -> Result<()> {
        let height = ctx.block.height;
        let assets = self.get_assets()?;

        for asset in &assets {
            let price_key = asset.price_key();
            let prices = self.get_raw_prices(&price_key)?;
            let current = aggregator.aggregate(asset, &prices, height);
            if current.is_zero() {
                debug!("No valid price for {price_key} at height {height}");
            }
            self.set_current_price(&price_key, &current)?;
        }

        info!(
            "Aggregated prices of {} assets at height {}",
            assets.len(),
            height
        );
        Ok(())
    }
}
