use cosmwasm_std::{
    CheckedMultiplyRatioError, ConversionOverflowError, OverflowError, StdError, Timestamp,
    Uint128,
};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum PoolError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    OverflowError(#[from] OverflowError),

    #[error("{0}")]
    CheckedMultiplyRatioError(#[from] CheckedMultiplyRatioError),

    #[error("{0}")]
    ConversionOverflowError(#[from] ConversionOverflowError),

    #[error("Deadline {deadline} has passed (now: {now})")]
    Expired { deadline: Timestamp, now: Timestamp },

    #[error("Swap path must contain exactly 2 assets, got {len}")]
    InvalidPath { len: usize },

    #[error("Assets do not match the pool pair")]
    InvalidAssetPair {},

    #[error("Pool assets must be different")]
    IdenticalAssets {},

    #[error("Pool assets must be given in ascending order: {first} sorts after {second}")]
    UnorderedAssets { first: String, second: String },

    #[error("Optimal amount of asset A {optimal} below minimum {min}")]
    InsufficientA { optimal: Uint128, min: Uint128 },

    #[error("Optimal amount of asset B {optimal} below minimum {min}")]
    InsufficientB { optimal: Uint128, min: Uint128 },

    #[error("Amount of {asset} {amount} below minimum {min}")]
    BelowMinimum {
        asset: String,
        amount: Uint128,
        min: Uint128,
    },

    #[error("Output amount {output} less than minimum requested {min}")]
    OutputBelowMinimum { output: Uint128, min: Uint128 },

    #[error("Required input {input} exceeds maximum {max}")]
    InputAboveMaximum { input: Uint128, max: Uint128 },

    #[error("Requested output {requested} must be below reserve {reserve}")]
    ExcessiveOutput {
        requested: Uint128,
        reserve: Uint128,
    },

    #[error("Pool has no liquidity")]
    NoLiquidity {},

    #[error("Input amount must be positive")]
    ZeroInput {},

    #[error("Cannot redeem {shares} shares out of {total} outstanding")]
    SharesExceedSupply { shares: Uint128, total: Uint128 },

    #[error("Contribution too small to mint shares")]
    InsufficientLiquidityMinted {},
}
