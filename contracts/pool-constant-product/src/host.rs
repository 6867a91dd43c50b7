use cosmwasm_std::{Addr, Coin, Deps, Env, StdResult, Timestamp, Uint128};
use cw20::{BalanceResponse, Cw20QueryMsg, TokenInfoResponse};
use pool_ledger::{AssetInfo, Clock, PoolError, PoolView};

use crate::validation::funds_amount;

/// The chain as seen by the pool ledger during one message.
pub(crate) struct ContractHost<'a> {
    deps: Deps<'a>,
    env: &'a Env,
    /// Coins attached to the message being executed. The bank module credits
    /// them before the contract runs, so they are excluded from reserves.
    funds: &'a [Coin],
    lp_token: &'a Addr,
}

impl<'a> ContractHost<'a> {
    pub(crate) fn new(deps: Deps<'a>, env: &'a Env, funds: &'a [Coin], lp_token: &'a Addr) -> Self {
        ContractHost {
            deps,
            env,
            funds,
            lp_token,
        }
    }

    /// Host for queries, where no deposit is in flight.
    pub(crate) fn read_only(deps: Deps<'a>, env: &'a Env, lp_token: &'a Addr) -> Self {
        Self::new(deps, env, &[], lp_token)
    }
}

impl PoolView for ContractHost<'_> {
    fn balance_of(&self, asset: &AssetInfo) -> Result<Uint128, PoolError> {
        let contract_addr = &self.env.contract.address;
        match asset {
            AssetInfo::NativeToken { denom } => {
                let balance = query_bank_balance(self.deps, contract_addr, denom)?;
                Ok(balance.checked_sub(funds_amount(self.funds, denom))?)
            }
            AssetInfo::Token { contract_addr: token } => {
                Ok(query_cw20_balance(self.deps, token, contract_addr)?)
            }
        }
    }

    fn total_shares(&self) -> Result<Uint128, PoolError> {
        Ok(query_cw20_total_supply(self.deps, self.lp_token)?)
    }
}

impl Clock for ContractHost<'_> {
    fn now(&self) -> Timestamp {
        self.env.block.time
    }
}

/// Helper function to query bank balance using query_balance method.
fn query_bank_balance(deps: Deps, contract_addr: &Addr, denom: &str) -> StdResult<Uint128> {
    let balance: Coin = deps.querier.query_balance(contract_addr, denom)?;
    Ok(balance.amount)
}

fn query_cw20_balance(deps: Deps, token_addr: &Addr, holder: &Addr) -> StdResult<Uint128> {
    let resp: BalanceResponse = deps.querier.query_wasm_smart(
        token_addr,
        &Cw20QueryMsg::Balance {
            address: holder.to_string(),
        },
    )?;
    Ok(resp.balance)
}

/// Helper function to query CW20 total supply using a WasmQuery.
fn query_cw20_total_supply(deps: Deps, token_addr: &Addr) -> StdResult<Uint128> {
    let token_info: TokenInfoResponse =
        deps.querier.query_wasm_smart(token_addr, &Cw20QueryMsg::TokenInfo {})?;
    Ok(token_info.total_supply)
}
