use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};

use crate::asset::AssetInfo;

/// A mutation the host must perform for an operation to take effect.
///
/// Operations return these in execution order; the host applies all of them
/// or none.
#[cw_serde]
pub enum Instruction {
    TransferIn {
        asset: AssetInfo,
        from: Addr,
        amount: Uint128,
    },
    TransferOut {
        asset: AssetInfo,
        to: Addr,
        amount: Uint128,
    },
    MintShares {
        recipient: Addr,
        amount: Uint128,
    },
    BurnShares {
        holder: Addr,
        amount: Uint128,
    },
}

impl Instruction {
    pub fn amount(&self) -> Uint128 {
        match self {
            Instruction::TransferIn { amount, .. }
            | Instruction::TransferOut { amount, .. }
            | Instruction::MintShares { amount, .. }
            | Instruction::BurnShares { amount, .. } => *amount,
        }
    }
}
