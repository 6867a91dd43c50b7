// contracts/pool-constant-product/src/execute.rs

use cosmwasm_std::{
    from_json, Addr, CosmosMsg, DepsMut, Env, MessageInfo, Response, Timestamp, Uint128,
};
use cw20::Cw20ReceiveMsg;
use cw_utils::nonpayable;
use pool_ledger::{
    AssetInfo, ContributeRequest, Pool, Swap, SwapExactInRequest, SwapExactOutRequest,
    WithdrawRequest,
};

use crate::error::ContractError;
use crate::events::{LiquidityAddedEvent, LiquidityRemovedEvent, SwapEvent};
use crate::host::ContractHost;
use crate::msg::{Cw20HookMsg, InstantiateMsg};
use crate::state::{PoolConfig, CONTRACT_NAME, CONTRACT_VERSION, POOL_CONFIG};

// Import helpers from other modules for this contract
use crate::messaging::*;
use crate::validation::*;

// --- Instantiate Handler ---
pub(crate) fn execute_instantiate(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let asset_a = validate_asset(deps.api, msg.asset_a)?;
    let asset_b = validate_asset(deps.api, msg.asset_b)?;
    let pool = Pool::new(asset_a, asset_b, msg.mint_policy.unwrap_or_default())?;

    let sub_msg = create_lp_instantiate_submsg(
        msg.lp_token_code_id,
        &env,
        pool.asset_a(),
        pool.asset_b(),
    )?;

    let response = Response::new()
        .add_submessage(sub_msg)
        .add_attribute("action", "instantiate_pool_contract")
        .add_attribute("asset_a", pool.asset_a().to_string())
        .add_attribute("asset_b", pool.asset_b().to_string())
        .add_attribute("mint_policy", format!("{:?}", pool.mint_policy()))
        .add_attribute("lp_token_code_id", msg.lp_token_code_id.to_string());

    let cfg = PoolConfig {
        pool,
        lp_token_addr: None,
    };
    POOL_CONFIG.save(deps.storage, &cfg)?;
    cw2::set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(response)
}

// --- Execute Handler Implementations ---

#[allow(clippy::too_many_arguments)]
pub(crate) fn execute_add_liquidity(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount_a_desired: Uint128,
    amount_b_desired: Uint128,
    amount_a_min: Uint128,
    amount_b_min: Uint128,
    deadline: Timestamp,
    recipient: Option<String>,
    assets: Option<[AssetInfo; 2]>,
) -> Result<Response, ContractError> {
    let cfg = POOL_CONFIG.load(deps.storage)?;
    let lp_token = cfg.lp_token()?;
    let recipient = validate_recipient(deps.api, recipient, &info.sender)?;

    let host = ContractHost::new(deps.as_ref(), &env, &info.funds, lp_token);
    let contribution = cfg.pool.contribute(
        &host,
        ContributeRequest {
            amount_a_desired,
            amount_b_desired,
            amount_a_min,
            amount_b_min,
            deadline,
            sender: info.sender.clone(),
            recipient: recipient.clone(),
            assets,
        },
    )?;
    validate_funds(&info, &cfg.pool)?;
    let messages = settle(
        &contribution.instructions,
        &env,
        lp_token,
        &info.funds,
        &info.sender,
    )?;

    deps.api.debug(&format!(
        "[add_liquidity] accepted {}/{} minting {} shares",
        contribution.amount_a, contribution.amount_b, contribution.shares
    ));

    let event = LiquidityAddedEvent {
        sender: info.sender.clone(),
        recipient,
        asset_a: cfg.pool.asset_a().clone(),
        asset_b: cfg.pool.asset_b().clone(),
        amount_a_deposited: contribution.amount_a,
        amount_b_deposited: contribution.amount_b,
        shares_minted: contribution.shares,
    };

    Ok(Response::new()
        .add_messages(messages)
        .add_event(event)
        .add_attribute("action", "add_liquidity")
        .add_attribute("sender", info.sender.to_string())
        .add_attribute("amount_a_deposited", contribution.amount_a.to_string())
        .add_attribute("amount_b_deposited", contribution.amount_b.to_string())
        .add_attribute("shares_minted", contribution.shares.to_string()))
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn execute_swap_exact_in(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount_in: Uint128,
    amount_out_min: Uint128,
    path: Vec<AssetInfo>,
    deadline: Timestamp,
    recipient: Option<String>,
) -> Result<Response, ContractError> {
    let cfg = POOL_CONFIG.load(deps.storage)?;
    let lp_token = cfg.lp_token()?;
    let recipient = validate_recipient(deps.api, recipient, &info.sender)?;

    let host = ContractHost::new(deps.as_ref(), &env, &info.funds, lp_token);
    let swap = cfg.pool.swap_exact_in(
        &host,
        SwapExactInRequest {
            amount_in,
            amount_out_min,
            path,
            deadline,
            sender: info.sender.clone(),
            recipient: recipient.clone(),
        },
    )?;
    validate_funds(&info, &cfg.pool)?;
    let messages = settle(&swap.instructions, &env, lp_token, &info.funds, &info.sender)?;

    swap_response(&deps, info.sender, recipient, swap, messages, "swap_exact_in")
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn execute_swap_exact_out(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount_out: Uint128,
    amount_in_max: Uint128,
    path: Vec<AssetInfo>,
    deadline: Timestamp,
    recipient: Option<String>,
) -> Result<Response, ContractError> {
    let cfg = POOL_CONFIG.load(deps.storage)?;
    let lp_token = cfg.lp_token()?;
    let recipient = validate_recipient(deps.api, recipient, &info.sender)?;

    let host = ContractHost::new(deps.as_ref(), &env, &info.funds, lp_token);
    let swap = cfg.pool.swap_exact_out(
        &host,
        SwapExactOutRequest {
            amount_out,
            amount_in_max,
            path,
            deadline,
            sender: info.sender.clone(),
            recipient: recipient.clone(),
        },
    )?;
    validate_funds(&info, &cfg.pool)?;
    // Native overpayment beyond the computed input is refunded
    let messages = settle(&swap.instructions, &env, lp_token, &info.funds, &info.sender)?;

    swap_response(&deps, info.sender, recipient, swap, messages, "swap_exact_out")
}

fn swap_response(
    deps: &DepsMut,
    sender: Addr,
    recipient: Addr,
    swap: Swap,
    messages: Vec<CosmosMsg>,
    action: &str,
) -> Result<Response, ContractError> {
    deps.api.debug(&format!(
        "[{}] {}{} for {}{}",
        action, swap.amount_in, swap.asset_in, swap.amount_out, swap.asset_out
    ));

    let event = SwapEvent {
        sender: sender.clone(),
        recipient,
        offer_asset: swap.asset_in.clone(),
        ask_asset: swap.asset_out.clone(),
        offer_amount: swap.amount_in,
        return_amount: swap.amount_out,
    };

    Ok(Response::new()
        .add_messages(messages)
        .add_event(event)
        .add_attribute("action", action)
        .add_attribute("sender", sender.to_string())
        .add_attribute("offer_asset", swap.asset_in.to_string())
        .add_attribute("ask_asset", swap.asset_out.to_string())
        .add_attribute("offer_amount", swap.amount_in.to_string())
        .add_attribute("return_amount", swap.amount_out.to_string()))
}

pub(crate) fn execute_cw20_receive(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    cw20_msg: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let cfg = POOL_CONFIG.load(deps.storage)?;
    let lp_token = cfg.lp_token()?;
    if info.sender != *lp_token {
        return Err(ContractError::UnauthorizedLpToken {
            expected: lp_token.clone(),
        });
    }

    match from_json(&cw20_msg.msg)? {
        Cw20HookMsg::WithdrawLiquidity {
            amount_a_min,
            amount_b_min,
            deadline,
            recipient,
            assets,
        } => {
            let owner = deps.api.addr_validate(&cw20_msg.sender)?;
            let recipient = validate_recipient(deps.api, recipient, &owner)?;

            // The shares already sit in the pool's own LP balance, still counted in supply
            let host = ContractHost::read_only(deps.as_ref(), &env, lp_token);
            let withdrawal = cfg.pool.withdraw(
                &host,
                WithdrawRequest {
                    shares: cw20_msg.amount,
                    amount_a_min,
                    amount_b_min,
                    deadline,
                    holder: env.contract.address.clone(),
                    recipient: recipient.clone(),
                    assets,
                },
            )?;
            let messages = settle(&withdrawal.instructions, &env, lp_token, &[], &owner)?;

            deps.api.debug(&format!(
                "[withdraw_liquidity] burning {} shares for {}/{}",
                cw20_msg.amount, withdrawal.amount_a, withdrawal.amount_b
            ));

            let event = LiquidityRemovedEvent {
                sender: owner,
                recipient: recipient.clone(),
                lp_token_contract: lp_token.clone(),
                withdrawn_share: cw20_msg.amount,
                return_a: withdrawal.amount_a,
                return_b: withdrawal.amount_b,
            };

            Ok(Response::new()
                .add_messages(messages)
                .add_event(event)
                .add_attribute("action", "withdraw_liquidity")
                .add_attribute("sender", cw20_msg.sender)
                .add_attribute("recipient", recipient.to_string()) // User receiving funds
                .add_attribute("lp_token_contract", info.sender.to_string()) // LP token burned
                .add_attribute("withdrawn_share", cw20_msg.amount.to_string())
                .add_attribute("return_a", withdrawal.amount_a.to_string())
                .add_attribute("return_b", withdrawal.amount_b.to_string()))
        }
    }
}
