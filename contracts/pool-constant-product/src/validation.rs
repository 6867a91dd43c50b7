use crate::error::ContractError;
use cosmwasm_std::{Addr, Api, Coin, MessageInfo, StdError, StdResult, Uint128};
use pool_ledger::{AssetInfo, Pool};

/// Validates that every attached coin is one of the pool's native assets.
pub(crate) fn validate_funds(info: &MessageInfo, pool: &Pool) -> Result<(), ContractError> {
    for coin in info.funds.iter() {
        let asset = AssetInfo::native(coin.denom.as_str());
        if !pool.contains(&asset) {
            return Err(ContractError::InvalidFundsDenom {
                denom: coin.denom.clone(),
            });
        }
    }
    Ok(())
}

/// Amount of `denom` among `funds`, zero when absent.
pub(crate) fn funds_amount(funds: &[Coin], denom: &str) -> Uint128 {
    funds
        .iter()
        .filter(|c| c.denom == denom)
        .map(|c| c.amount)
        .sum()
}

/// Validates an asset identifier supplied at instantiation.
pub(crate) fn validate_asset(api: &dyn Api, asset: AssetInfo) -> StdResult<AssetInfo> {
    match asset {
        AssetInfo::NativeToken { denom } => {
            if denom.trim().is_empty() {
                return Err(StdError::generic_err("Native denom cannot be empty"));
            }
            Ok(AssetInfo::NativeToken { denom })
        }
        AssetInfo::Token { contract_addr } => Ok(AssetInfo::Token {
            contract_addr: api.addr_validate(contract_addr.as_str())?,
        }),
    }
}

/// Resolves an optional recipient, falling back to `default`.
pub(crate) fn validate_recipient(
    api: &dyn Api,
    recipient: Option<String>,
    default: &Addr,
) -> StdResult<Addr> {
    match recipient {
        Some(addr) => api.addr_validate(&addr),
        None => Ok(default.clone()),
    }
}
