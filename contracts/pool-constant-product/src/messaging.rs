use crate::error::ContractError;
use crate::state::INSTANTIATE_LP_REPLY_ID;
use cosmwasm_std::{
    coins, to_json_binary, Addr, BankMsg, Coin, CosmosMsg, Env, StdResult, SubMsg, Uint128,
    WasmMsg,
};
use cw20::{Cw20ExecuteMsg, MinterResponse};
use pool_ledger::{AssetInfo, Instruction};

/// Creates a WasmMsg to execute the Mint message on the LP token contract.
pub(crate) fn create_mint_message(
    lp_token_addr: &Addr,
    recipient: String,
    amount: Uint128,
) -> StdResult<CosmosMsg> {
    create_cw20_message(lp_token_addr, &Cw20ExecuteMsg::Mint { recipient, amount })
}

/// Creates a WasmMsg to execute the Burn message on the LP token contract.
pub(crate) fn create_burn_message(lp_token_addr: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
    create_cw20_message(lp_token_addr, &Cw20ExecuteMsg::Burn { amount })
}

/// Pays `amount` of `asset` out of the pool's own balance.
pub(crate) fn create_transfer_message(
    asset: &AssetInfo,
    recipient: &Addr,
    amount: Uint128,
) -> StdResult<CosmosMsg> {
    match asset {
        AssetInfo::NativeToken { denom } => Ok(BankMsg::Send {
            to_address: recipient.to_string(),
            amount: coins(amount.u128(), denom),
        }
        .into()),
        AssetInfo::Token { contract_addr } => create_cw20_message(
            contract_addr,
            &Cw20ExecuteMsg::Transfer {
                recipient: recipient.to_string(),
                amount,
            },
        ),
    }
}

/// Pulls `amount` of a cw20 asset from `owner` using the pool's allowance.
pub(crate) fn create_transfer_from_message(
    token_addr: &Addr,
    owner: &Addr,
    env: &Env,
    amount: Uint128,
) -> StdResult<CosmosMsg> {
    create_cw20_message(
        token_addr,
        &Cw20ExecuteMsg::TransferFrom {
            owner: owner.to_string(),
            recipient: env.contract.address.to_string(),
            amount,
        },
    )
}

fn create_cw20_message(token_addr: &Addr, msg: &Cw20ExecuteMsg) -> StdResult<CosmosMsg> {
    Ok(WasmMsg::Execute {
        contract_addr: token_addr.to_string(),
        msg: to_json_binary(msg)?,
        funds: vec![],
    }
    .into())
}

/// Turns pool instructions into messages, in order.
///
/// Native deposits are drawn from `funds`, which the bank has already credited
/// to the contract; whatever remains afterwards is sent back to `refund_to`.
/// Zero-amount instructions are dropped since neither bank nor cw20 accept them.
pub(crate) fn settle(
    instructions: &[Instruction],
    env: &Env,
    lp_token_addr: &Addr,
    funds: &[Coin],
    refund_to: &Addr,
) -> Result<Vec<CosmosMsg>, ContractError> {
    let mut remaining: Vec<Coin> = funds.to_vec();
    let mut messages = Vec::with_capacity(instructions.len() + 1);

    for instruction in instructions {
        if instruction.amount().is_zero() {
            continue;
        }
        match instruction {
            Instruction::TransferIn {
                asset: AssetInfo::NativeToken { denom },
                amount,
                ..
            } => draw_funds(&mut remaining, denom, *amount)?,
            Instruction::TransferIn {
                asset: AssetInfo::Token { contract_addr },
                from,
                amount,
            } => messages.push(create_transfer_from_message(
                contract_addr,
                from,
                env,
                *amount,
            )?),
            Instruction::TransferOut { asset, to, amount } => {
                messages.push(create_transfer_message(asset, to, *amount)?)
            }
            Instruction::MintShares { recipient, amount } => messages.push(create_mint_message(
                lp_token_addr,
                recipient.to_string(),
                *amount,
            )?),
            // Withdrawals arrive through the LP token's Send, so shares sit with the pool
            Instruction::BurnShares { amount, .. } => {
                messages.push(create_burn_message(lp_token_addr, *amount)?)
            }
        }
    }

    remaining.retain(|c| !c.amount.is_zero());
    if !remaining.is_empty() {
        messages.push(
            BankMsg::Send {
                to_address: refund_to.to_string(),
                amount: remaining,
            }
            .into(),
        );
    }
    Ok(messages)
}

fn draw_funds(remaining: &mut [Coin], denom: &str, required: Uint128) -> Result<(), ContractError> {
    let coin = remaining.iter_mut().find(|c| c.denom == denom);
    let sent = coin.as_ref().map(|c| c.amount).unwrap_or_default();
    match coin {
        Some(coin) if coin.amount >= required => {
            coin.amount -= required;
            Ok(())
        }
        _ => Err(ContractError::InsufficientFunds {
            denom: denom.to_string(),
            sent,
            required,
        }),
    }
}

/// Creates the SubMsg used to instantiate the LP token contract.
pub(crate) fn create_lp_instantiate_submsg(
    lp_token_code_id: u64,
    env: &Env,
    asset_a: &AssetInfo,
    asset_b: &AssetInfo,
) -> StdResult<SubMsg> {
    // cw20-base caps names at 50 characters
    let short_name = |asset: &AssetInfo| asset.key().chars().take(20).collect::<String>();
    let token_name = format!("{}-{} LP", short_name(asset_a), short_name(asset_b));

    // Up to 4 letters of each asset; cw20-base only allows letters and '-'
    let format_token_symbol = |asset: &AssetInfo| {
        let cleaned = asset.key().trim_start_matches('u'); // Remove common 'u' prefix if present
        cleaned
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .take(4)
            .collect::<String>()
            .to_uppercase()
    };

    let token_symbol = format!(
        "LP-{}-{}",
        format_token_symbol(asset_a),
        format_token_symbol(asset_b)
    );

    let decimals = 6u8;
    let lp_instantiate_msg = cw20_base::msg::InstantiateMsg {
        name: token_name,
        symbol: token_symbol,
        decimals,
        initial_balances: vec![],
        mint: Some(MinterResponse {
            minter: env.contract.address.to_string(),
            cap: None,
        }),
        marketing: None,
    };
    let submsg = WasmMsg::Instantiate {
        admin: Some(env.contract.address.to_string()),
        code_id: lp_token_code_id,
        msg: to_json_binary(&lp_instantiate_msg)?,
        funds: vec![],
        label: format!("DEX LP {}-{}", asset_a, asset_b),
    };
    Ok(SubMsg::reply_on_success(submsg, INSTANTIATE_LP_REPLY_ID))
}
