use log::info;
use serde::{Deserialize, Serialize};

use crate::{
    handler::{deliver_msg, end_block},
    keeper::{Context, Keeper},
    model::CurrentPrice,
    msg::Msg,
    Result,
};

/// Transactions of one block, as fed to `apply_block`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub height: u64,
    #[serde(default)]
    pub messages: Vec<Msg>,
}

/// State of the module after a block was applied.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BlockReport {
    pub height: u64,
    pub accepted: usize,
    pub rejected: usize,
    pub prices: Vec<CurrentPrice>,
    pub state_hash: String,
}

/// Delivers every message of `block`, then runs the end-block aggregation.
///
/// A rejected message only affects itself; the remaining messages and the
/// aggregation still run. Store failures abort the block.
pub fn apply_block(keeper: &Keeper, block: &Block) -> Result<BlockReport> {
    let ctx = Context::at_height(block.height);
    let mut accepted = 0;
    let mut rejected = 0;

    for msg in &block.messages {
        match deliver_msg(keeper, &ctx, msg) {
            Ok(()) => accepted += 1,
            Err(e) if is_tx_error(&e) => rejected += 1,
            Err(e) => return Err(e),
        }
    }

    end_block(keeper, &ctx)?;

    let prices = keeper
        .get_assets()?
        .iter()
        .map(|asset| keeper.get_current_price(&asset.price_key()))
        .collect::<Result<Vec<_>>>()?;
    let state_hash = keeper.store.state_hash()?;

    info!(
        "Applied block {} ({} accepted, {} rejected)",
        block.height, accepted, rejected
    );

    Ok(BlockReport {
        height: block.height,
        accepted,
        rejected,
        prices,
        state_hash,
    })
}

fn is_tx_error(e: &crate::PriceFeedError) -> bool {
    use crate::PriceFeedError::*;

    matches!(
        e,
        UnknownAsset(_) | UnknownOracle(_) | Expired { .. } | InvalidPrice(_) | InvalidMessage(_)
    )
}
