use crate::execute::{
    execute_add_liquidity, execute_cw20_receive, execute_swap_exact_in, execute_swap_exact_out,
};
use crate::query::{
    query_amount_in, query_amount_out, query_config, query_pool_state, query_price, query_share,
};
use crate::reply::handle_lp_instantiate_reply;
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response};

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};

// --- Entry Points ---

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    crate::execute::execute_instantiate(deps, env, info, msg)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::AddLiquidity {
            amount_a_desired,
            amount_b_desired,
            amount_a_min,
            amount_b_min,
            deadline,
            recipient,
            assets,
        } => execute_add_liquidity(
            deps,
            env,
            info,
            amount_a_desired,
            amount_b_desired,
            amount_a_min,
            amount_b_min,
            deadline,
            recipient,
            assets,
        ),
        ExecuteMsg::SwapExactTokensForTokens {
            amount_in,
            amount_out_min,
            path,
            deadline,
            recipient,
        } => execute_swap_exact_in(
            deps,
            env,
            info,
            amount_in,
            amount_out_min,
            path,
            deadline,
            recipient,
        ),
        ExecuteMsg::SwapTokensForExactTokens {
            amount_out,
            amount_in_max,
            path,
            deadline,
            recipient,
        } => execute_swap_exact_out(
            deps,
            env,
            info,
            amount_out,
            amount_in_max,
            path,
            deadline,
            recipient,
        ),
        ExecuteMsg::Receive(cw20_msg) => execute_cw20_receive(deps, env, info, cw20_msg),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    match msg {
        QueryMsg::PoolState {} => query_pool_state(deps, env),
        QueryMsg::Config {} => query_config(deps),
        QueryMsg::Price { base, quote } => query_price(deps, env, base, quote),
        QueryMsg::AmountOut { amount_in, path } => query_amount_out(deps, env, amount_in, path),
        QueryMsg::AmountIn { amount_out, path } => query_amount_in(deps, env, amount_out, path),
        QueryMsg::Share { amount } => query_share(deps, env, amount),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    handle_lp_instantiate_reply(deps, msg)
}
