use cosmwasm_std::{Timestamp, Uint128};

use crate::asset::AssetInfo;
use crate::error::PoolError;

/// Read-only view of the facts the pool does not own.
///
/// Both methods are called once per operation; implementations must return a
/// consistent snapshot for the duration of that operation.
pub trait PoolView {
    /// Current custody balance of `asset`, excluding any input of the
    /// operation in flight.
    fn balance_of(&self, asset: &AssetInfo) -> Result<Uint128, PoolError>;

    /// Outstanding shares across all holders.
    fn total_shares(&self) -> Result<Uint128, PoolError>;
}

pub trait Clock {
    fn now(&self) -> Timestamp;
}
