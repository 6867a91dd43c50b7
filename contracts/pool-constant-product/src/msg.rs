use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Timestamp, Uint128, Uint256};
use cw20::Cw20ReceiveMsg;
use pool_ledger::{AssetInfo, MintPolicy};

#[cw_serde]
pub struct InstantiateMsg {
    pub asset_a: AssetInfo,
    pub asset_b: AssetInfo,
    pub lp_token_code_id: u64, // Code ID for the LP token this pool should use
    /// Defaults to `MintPolicy::ProRata`.
    pub mint_policy: Option<MintPolicy>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Deposit both assets along the current reserve ratio. Native assets are
    /// attached as funds (surplus is refunded), cw20 assets are pulled with
    /// `TransferFrom` and need an allowance for the pool.
    AddLiquidity {
        amount_a_desired: Uint128,
        amount_b_desired: Uint128,
        amount_a_min: Uint128,
        amount_b_min: Uint128,
        deadline: Timestamp,
        recipient: Option<String>,
        /// Optional assertion of the pool pair, in pool order.
        assets: Option<[AssetInfo; 2]>,
    },
    SwapExactTokensForTokens {
        amount_in: Uint128,
        amount_out_min: Uint128,
        path: Vec<AssetInfo>,
        deadline: Timestamp,
        recipient: Option<String>,
    },
    SwapTokensForExactTokens {
        amount_out: Uint128,
        amount_in_max: Uint128,
        path: Vec<AssetInfo>,
        deadline: Timestamp,
        recipient: Option<String>,
    },
    Receive(Cw20ReceiveMsg),
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(PoolStateResponse)]
    PoolState {},
    #[returns(ConfigResponse)]
    Config {},
    /// Price of `base` in `quote` units, scaled by 10^18.
    #[returns(PriceResponse)]
    Price { base: AssetInfo, quote: AssetInfo },
    #[returns(SimulationResponse)]
    AmountOut {
        amount_in: Uint128,
        path: Vec<AssetInfo>,
    },
    #[returns(SimulationResponse)]
    AmountIn {
        amount_out: Uint128,
        path: Vec<AssetInfo>,
    },
    /// What `amount` shares redeem for right now.
    #[returns(ShareResponse)]
    Share { amount: Uint128 },
}

#[cw_serde]
pub struct PoolStateResponse {
    pub asset_a: AssetInfo,
    pub asset_b: AssetInfo,
    pub reserve_a: Uint128,
    pub reserve_b: Uint128,
    pub total_lp_shares: Uint128,
    pub lp_token_address: Addr,
}

#[cw_serde]
pub struct ConfigResponse {
    pub asset_a: AssetInfo,
    pub asset_b: AssetInfo,
    pub mint_policy: MintPolicy,
    pub lp_token_address: Option<Addr>,
}

#[cw_serde]
pub struct PriceResponse {
    pub price: Uint256,
}

#[cw_serde]
pub struct SimulationResponse {
    pub amount_in: Uint128,
    pub amount_out: Uint128,
}

#[cw_serde]
pub struct ShareResponse {
    pub amount_a: Uint128,
    pub amount_b: Uint128,
}

// Hook message for receiving LP tokens
#[cw_serde]
pub enum Cw20HookMsg {
    WithdrawLiquidity {
        amount_a_min: Uint128,
        amount_b_min: Uint128,
        deadline: Timestamp,
        recipient: Option<String>,
        assets: Option<[AssetInfo; 2]>,
    },
}
