pub mod asset;
pub mod error;
pub mod host;
pub mod instruction;
pub mod math;
pub mod pool;

pub use crate::asset::AssetInfo;
pub use crate::error::PoolError;
pub use crate::host::{Clock, PoolView};
pub use crate::instruction::Instruction;
pub use crate::math::{get_amount_in, get_amount_out, isqrt, quote, PRICE_SCALE};
pub use crate::pool::{
    Contribution, ContributeRequest, Direction, MintPolicy, Pool, Reserves, Swap,
    SwapExactInRequest, SwapExactOutRequest, WithdrawRequest, Withdrawal,
};
