use crate::error::ContractError;
use crate::host::ContractHost;
use crate::msg::{
    ConfigResponse, PoolStateResponse, PriceResponse, ShareResponse, SimulationResponse,
};
use crate::state::POOL_CONFIG;
use cosmwasm_std::{to_json_binary, Binary, Deps, Env, Uint128};
use pool_ledger::{AssetInfo, PoolView};

// --- Query Handler Implementations ---

pub(crate) fn query_pool_state(deps: Deps, env: Env) -> Result<Binary, ContractError> {
    let cfg = POOL_CONFIG.load(deps.storage)?;
    let lp_token = cfg.lp_token()?;

    let host = ContractHost::read_only(deps, &env, lp_token);
    let reserves = cfg.pool.reserves(&host)?;
    let total_shares = host.total_shares()?;

    let resp = PoolStateResponse {
        asset_a: cfg.pool.asset_a().clone(),
        asset_b: cfg.pool.asset_b().clone(),
        reserve_a: reserves.a,
        reserve_b: reserves.b,
        total_lp_shares: total_shares,
        lp_token_address: lp_token.clone(),
    };
    Ok(to_json_binary(&resp)?)
}

pub(crate) fn query_config(deps: Deps) -> Result<Binary, ContractError> {
    let cfg = POOL_CONFIG.load(deps.storage)?;
    Ok(to_json_binary(&ConfigResponse {
        asset_a: cfg.pool.asset_a().clone(),
        asset_b: cfg.pool.asset_b().clone(),
        mint_policy: cfg.pool.mint_policy(),
        lp_token_address: cfg.lp_token_addr,
    })?)
}

pub(crate) fn query_price(
    deps: Deps,
    env: Env,
    base: AssetInfo,
    quote: AssetInfo,
) -> Result<Binary, ContractError> {
    let cfg = POOL_CONFIG.load(deps.storage)?;
    let lp_token = cfg.lp_token()?;
    let host = ContractHost::read_only(deps, &env, lp_token);
    let price = cfg.pool.price(&host, &base, &quote)?;
    Ok(to_json_binary(&PriceResponse { price })?)
}

pub(crate) fn query_amount_out(
    deps: Deps,
    env: Env,
    amount_in: Uint128,
    path: Vec<AssetInfo>,
) -> Result<Binary, ContractError> {
    let cfg = POOL_CONFIG.load(deps.storage)?;
    let lp_token = cfg.lp_token()?;
    let host = ContractHost::read_only(deps, &env, lp_token);
    let amount_out = cfg.pool.amount_out(&host, amount_in, &path)?;
    Ok(to_json_binary(&SimulationResponse {
        amount_in,
        amount_out,
    })?)
}

pub(crate) fn query_amount_in(
    deps: Deps,
    env: Env,
    amount_out: Uint128,
    path: Vec<AssetInfo>,
) -> Result<Binary, ContractError> {
    let cfg = POOL_CONFIG.load(deps.storage)?;
    let lp_token = cfg.lp_token()?;
    let host = ContractHost::read_only(deps, &env, lp_token);
    let amount_in = cfg.pool.amount_in(&host, amount_out, &path)?;
    Ok(to_json_binary(&SimulationResponse {
        amount_in,
        amount_out,
    })?)
}

pub(crate) fn query_share(deps: Deps, env: Env, amount: Uint128) -> Result<Binary, ContractError> {
    let cfg = POOL_CONFIG.load(deps.storage)?;
    let lp_token = cfg.lp_token()?;
    let host = ContractHost::read_only(deps, &env, lp_token);
    let (amount_a, amount_b) = cfg.pool.redeem(&host, amount)?;
    Ok(to_json_binary(&ShareResponse { amount_a, amount_b })?)
}
