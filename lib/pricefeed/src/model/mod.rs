mod asset;
mod current_price;
mod oracle;
mod posted_price;

pub use asset::*;
pub use current_price::*;
pub use oracle::*;
pub use posted_price::*;

use serde::{Deserialize, Serialize};

/// Block the module is currently executing in, supplied by the consensus engine.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlockContext {
    pub height: u64,
}
