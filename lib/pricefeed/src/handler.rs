use log::{debug, warn};

use crate::{
    aggregator::Median,
    keeper::{Context, Keeper},
    model::PostedPrice,
    msg::{Msg, MsgPostPrice},
    Result,
};

pub trait Handle {
    type Output;

    fn handle(&self, keeper: &Keeper, ctx: &Context) -> Result<Self::Output>;
}

impl Handle for MsgPostPrice {
    type Output = PostedPrice;

    fn handle(&self, keeper: &Keeper, ctx: &Context) -> Result<PostedPrice> {
        self.validate_basic()?;
        let asset = keeper.validate_submission(&self.asset_code, &self.from)?;
        keeper.set_price(ctx, &asset, &self.from, self.price, self.expiry)
    }
}

/// Routes `msg` to its handler. A failed message leaves the store untouched.
pub fn deliver_msg(keeper: &Keeper, ctx: &Context, msg: &Msg) -> Result<()> {
    match msg {
        Msg::PostPrice(data) => {
            let posted = data.handle(keeper, ctx).map_err(|e| {
                warn!(
                    "Rejected price of {} for {}: {}",
                    data.from, data.asset_code, e
                );
                e
            })?;
            debug!("Accepted {:?}", posted);
        }
    }
    Ok(())
}

/// Block lifecycle hook, run once after every transaction of the block was delivered.
pub fn end_block(keeper: &Keeper, ctx: &Context) -> Result<()> {
    keeper.set_current_prices(ctx, &Median)
}
