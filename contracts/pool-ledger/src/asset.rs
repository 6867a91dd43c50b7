use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;

use crate::error::PoolError;

/// One side of a pool: a bank denom or a cw20 token contract.
#[cw_serde]
pub enum AssetInfo {
    NativeToken { denom: String },
    Token { contract_addr: Addr },
}

impl AssetInfo {
    pub fn native(denom: impl Into<String>) -> Self {
        AssetInfo::NativeToken {
            denom: denom.into(),
        }
    }

    pub fn cw20(contract_addr: Addr) -> Self {
        AssetInfo::Token { contract_addr }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, AssetInfo::NativeToken { .. })
    }

    /// Canonical key: the denom or the contract address.
    pub fn key(&self) -> &str {
        match self {
            AssetInfo::NativeToken { denom } => denom,
            AssetInfo::Token { contract_addr } => contract_addr.as_str(),
        }
    }
}

impl fmt::Display for AssetInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Checks that `first` and `second` are distinct and already in canonical
/// (ascending key) order. A reversed pair is an error, never swapped.
pub fn ensure_canonical_pair(first: &AssetInfo, second: &AssetInfo) -> Result<(), PoolError> {
    if first.key() == second.key() {
        return Err(PoolError::IdenticalAssets {});
    }
    if first.key() > second.key() {
        return Err(PoolError::UnorderedAssets {
            first: first.to_string(),
            second: second.to_string(),
        });
    }
    Ok(())
}
