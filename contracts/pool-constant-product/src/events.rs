use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Event, Uint128};
use pool_ledger::AssetInfo;

// Events specific to this pool contract

#[cw_serde]
pub struct LiquidityAddedEvent {
    pub sender: Addr,
    pub recipient: Addr,
    pub asset_a: AssetInfo,
    pub asset_b: AssetInfo,
    pub amount_a_deposited: Uint128,
    pub amount_b_deposited: Uint128,
    pub shares_minted: Uint128,
}

impl From<LiquidityAddedEvent> for Event {
    fn from(val: LiquidityAddedEvent) -> Self {
        Event::new("liquidity_added")
            .add_attribute("sender", val.sender.into_string())
            .add_attribute("recipient", val.recipient.into_string())
            .add_attribute("asset_a", val.asset_a.to_string())
            .add_attribute("asset_b", val.asset_b.to_string())
            .add_attribute("amount_a_deposited", val.amount_a_deposited.to_string())
            .add_attribute("amount_b_deposited", val.amount_b_deposited.to_string())
            .add_attribute("shares_minted", val.shares_minted.to_string())
    }
}

#[cw_serde]
pub struct LiquidityRemovedEvent {
    pub sender: Addr,            // Holder who sent the LP tokens
    pub recipient: Addr,         // User receiving funds
    pub lp_token_contract: Addr, // LP token contract that was burned from
    pub withdrawn_share: Uint128,
    pub return_a: Uint128,
    pub return_b: Uint128,
}

impl From<LiquidityRemovedEvent> for Event {
    fn from(val: LiquidityRemovedEvent) -> Self {
        Event::new("liquidity_removed")
            .add_attribute("sender", val.sender.into_string())
            .add_attribute("recipient", val.recipient.into_string())
            .add_attribute("lp_token_contract", val.lp_token_contract.into_string())
            .add_attribute("withdrawn_share", val.withdrawn_share.to_string())
            .add_attribute("return_a", val.return_a.to_string())
            .add_attribute("return_b", val.return_b.to_string())
    }
}

#[cw_serde]
pub struct SwapEvent {
    pub sender: Addr,
    pub recipient: Addr,
    pub offer_asset: AssetInfo,
    pub ask_asset: AssetInfo,
    pub offer_amount: Uint128,
    pub return_amount: Uint128,
}

impl From<SwapEvent> for Event {
    fn from(val: SwapEvent) -> Self {
        Event::new("swap")
            .add_attribute("sender", val.sender.into_string())
            .add_attribute("recipient", val.recipient.into_string())
            .add_attribute("offer_asset", val.offer_asset.to_string())
            .add_attribute("ask_asset", val.ask_asset.to_string())
            .add_attribute("offer_amount", val.offer_amount.to_string())
            .add_attribute("return_amount", val.return_amount.to_string())
    }
}

#[cw_serde]
pub struct LpTokenInstantiatedEvent {
    pub lp_token_address: Addr,
}

impl From<LpTokenInstantiatedEvent> for Event {
    fn from(val: LpTokenInstantiatedEvent) -> Self {
        Event::new("lp_token_instantiated")
            .add_attribute("lp_token_address", val.lp_token_address.into_string())
    }
}
