use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::Item;
use pool_ledger::Pool;

use crate::error::ContractError;

#[cw_serde]
pub struct PoolConfig {
    pub pool: Pool,
    /// Set once by the LP token instantiate reply.
    pub lp_token_addr: Option<Addr>,
}

impl PoolConfig {
    pub fn lp_token(&self) -> Result<&Addr, ContractError> {
        self.lp_token_addr
            .as_ref()
            .ok_or(ContractError::NotInitialized {})
    }
}

pub const POOL_CONFIG: Item<PoolConfig> = Item::new("pool_config");

pub const INSTANTIATE_LP_REPLY_ID: u64 = 1; // Local reply ID for this contract

pub const CONTRACT_NAME: &str = "crates.io:cw-pool-constant-product";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");
