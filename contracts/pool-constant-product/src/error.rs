use cosmwasm_std::{Addr, StdError, Uint128};
use cw_utils::{ParseReplyError, PaymentError};
use pool_ledger::PoolError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Pool(#[from] PoolError),

    #[error(
        "Unauthorized (expected LP token: {expected}) - Only own LP token can trigger withdraw"
    )]
    UnauthorizedLpToken { expected: Addr },

    #[error("Pool is not initialized with LP token address yet")]
    NotInitialized {},

    #[error("LP token address already set")]
    LpTokenAlreadySet {},

    #[error("Invalid denom received: {denom}")]
    InvalidFundsDenom { denom: String },

    #[error("Attached {sent}{denom} does not cover required {required}{denom}")]
    InsufficientFunds {
        denom: String,
        sent: Uint128,
        required: Uint128,
    },

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("Unknown reply id: {id}")]
    UnknownReplyId { id: u64 },

    #[error("Missing reply data")]
    MissingReplyData {},

    #[error("Error parsing instantiate reply: {0}")]
    ParseInstantiateReplyError(#[from] ParseReplyError),
}
