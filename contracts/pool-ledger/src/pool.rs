use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128, Uint256};

use crate::asset::{ensure_canonical_pair, AssetInfo};
use crate::error::PoolError;
use crate::host::{Clock, PoolView};
use crate::instruction::Instruction;
use crate::math::{
    geometric_shares, get_amount_in, get_amount_out, get_price, pro_rata_shares,
    redeem_amounts,
};

/// How shares are minted once the pool already has liquidity.
#[cw_serde]
#[derive(Copy, Default, Eq)]
pub enum MintPolicy {
    /// `min(a * total / reserve_a, b * total / reserve_b)`.
    #[default]
    ProRata,
    /// `isqrt(a * b)` on the accepted amounts, the same formula as the first
    /// deposit. Over-mints whenever `sqrt(reserve_a * reserve_b)` exceeds the
    /// outstanding shares.
    Geometric,
}

/// Balances of both pool assets read in one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reserves {
    pub a: Uint128,
    pub b: Uint128,
}

impl Reserves {
    pub fn product(&self) -> Uint256 {
        Uint256::from(self.a) * Uint256::from(self.b)
    }
}

/// Direction of a two-asset swap path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    AToB,
    BToA,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContributeRequest {
    pub amount_a_desired: Uint128,
    pub amount_b_desired: Uint128,
    pub amount_a_min: Uint128,
    pub amount_b_min: Uint128,
    pub deadline: Timestamp,
    pub sender: Addr,
    pub recipient: Addr,
    pub assets: Option<[AssetInfo; 2]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WithdrawRequest {
    pub shares: Uint128,
    pub amount_a_min: Uint128,
    pub amount_b_min: Uint128,
    pub deadline: Timestamp,
    pub holder: Addr,
    pub recipient: Addr,
    pub assets: Option<[AssetInfo; 2]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwapExactInRequest {
    pub amount_in: Uint128,
    pub amount_out_min: Uint128,
    pub path: Vec<AssetInfo>,
    pub deadline: Timestamp,
    pub sender: Addr,
    pub recipient: Addr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwapExactOutRequest {
    pub amount_out: Uint128,
    pub amount_in_max: Uint128,
    pub path: Vec<AssetInfo>,
    pub deadline: Timestamp,
    pub sender: Addr,
    pub recipient: Addr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Contribution {
    pub amount_a: Uint128,
    pub amount_b: Uint128,
    pub shares: Uint128,
    pub instructions: Vec<Instruction>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Withdrawal {
    pub amount_a: Uint128,
    pub amount_b: Uint128,
    pub instructions: Vec<Instruction>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Swap {
    pub asset_in: AssetInfo,
    pub asset_out: AssetInfo,
    pub amount_in: Uint128,
    pub amount_out: Uint128,
    pub instructions: Vec<Instruction>,
}

/// The pricing and accounting rules of one asset pair.
///
/// A `Pool` holds no balances. Every operation reads reserves and the share
/// supply from the host, computes, and returns the instructions that realise
/// the result; nothing is mutated on either success or failure.
#[cw_serde]
pub struct Pool {
    asset_a: AssetInfo,
    asset_b: AssetInfo,
    mint_policy: MintPolicy,
}

impl Pool {
    /// `asset_a` must sort before `asset_b`; a reversed pair is rejected.
    pub fn new(
        asset_a: AssetInfo,
        asset_b: AssetInfo,
        mint_policy: MintPolicy,
    ) -> Result<Self, PoolError> {
        ensure_canonical_pair(&asset_a, &asset_b)?;
        Ok(Pool {
            asset_a,
            asset_b,
            mint_policy,
        })
    }

    pub fn asset_a(&self) -> &AssetInfo {
        &self.asset_a
    }

    pub fn asset_b(&self) -> &AssetInfo {
        &self.asset_b
    }

    pub fn mint_policy(&self) -> MintPolicy {
        self.mint_policy
    }

    pub fn contains(&self, asset: &AssetInfo) -> bool {
        *asset == self.asset_a || *asset == self.asset_b
    }

    pub fn reserves(&self, view: &impl PoolView) -> Result<Reserves, PoolError> {
        Ok(Reserves {
            a: view.balance_of(&self.asset_a)?,
            b: view.balance_of(&self.asset_b)?,
        })
    }

    /// Checks an optional caller-supplied pair against the pool's own order.
    pub fn assert_pair(&self, assets: Option<&[AssetInfo; 2]>) -> Result<(), PoolError> {
        match assets {
            Some([a, b]) if *a != self.asset_a || *b != self.asset_b => {
                Err(PoolError::InvalidAssetPair {})
            }
            _ => Ok(()),
        }
    }

    /// Resolves a swap path into a direction over this pool.
    pub fn direction(&self, path: &[AssetInfo]) -> Result<Direction, PoolError> {
        let [offer, ask] = path else {
            return Err(PoolError::InvalidPath { len: path.len() });
        };
        if *offer == self.asset_a && *ask == self.asset_b {
            Ok(Direction::AToB)
        } else if *offer == self.asset_b && *ask == self.asset_a {
            Ok(Direction::BToA)
        } else {
            Err(PoolError::InvalidAssetPair {})
        }
    }

    fn oriented(&self, direction: Direction) -> (&AssetInfo, &AssetInfo) {
        match direction {
            Direction::AToB => (&self.asset_a, &self.asset_b),
            Direction::BToA => (&self.asset_b, &self.asset_a),
        }
    }

    pub fn contribute<H: PoolView + Clock>(
        &self,
        host: &H,
        req: ContributeRequest,
    ) -> Result<Contribution, PoolError> {
        ensure_not_expired(host, req.deadline)?;
        self.assert_pair(req.assets.as_ref())?;

        let total_shares = host.total_shares()?;
        let (amount_a, amount_b, shares) = if total_shares.is_zero() {
            let shares = geometric_shares(req.amount_a_desired, req.amount_b_desired)?;
            (req.amount_a_desired, req.amount_b_desired, shares)
        } else {
            let reserves = self.reserves(host)?;
            if reserves.a.is_zero() || reserves.b.is_zero() {
                return Err(PoolError::NoLiquidity {});
            }
            let (amount_a, amount_b) = optimal_amounts(&req, reserves)?;
            let shares = match self.mint_policy {
                MintPolicy::ProRata => {
                    pro_rata_shares(amount_a, amount_b, reserves.a, reserves.b, total_shares)?
                }
                MintPolicy::Geometric => geometric_shares(amount_a, amount_b)?,
            };
            (amount_a, amount_b, shares)
        };

        ensure_minimum(&self.asset_a, amount_a, req.amount_a_min)?;
        ensure_minimum(&self.asset_b, amount_b, req.amount_b_min)?;
        if shares.is_zero() {
            return Err(PoolError::InsufficientLiquidityMinted {});
        }

        let instructions = vec![
            Instruction::TransferIn {
                asset: self.asset_a.clone(),
                from: req.sender.clone(),
                amount: amount_a,
            },
            Instruction::TransferIn {
                asset: self.asset_b.clone(),
                from: req.sender,
                amount: amount_b,
            },
            Instruction::MintShares {
                recipient: req.recipient,
                amount: shares,
            },
        ];
        Ok(Contribution {
            amount_a,
            amount_b,
            shares,
            instructions,
        })
    }

    pub fn withdraw<H: PoolView + Clock>(
        &self,
        host: &H,
        req: WithdrawRequest,
    ) -> Result<Withdrawal, PoolError> {
        ensure_not_expired(host, req.deadline)?;
        self.assert_pair(req.assets.as_ref())?;
        if req.shares.is_zero() {
            return Err(PoolError::ZeroInput {});
        }

        let (amount_a, amount_b) = self.redeem(host, req.shares)?;
        ensure_minimum(&self.asset_a, amount_a, req.amount_a_min)?;
        ensure_minimum(&self.asset_b, amount_b, req.amount_b_min)?;

        let instructions = vec![
            Instruction::BurnShares {
                holder: req.holder,
                amount: req.shares,
            },
            Instruction::TransferOut {
                asset: self.asset_a.clone(),
                to: req.recipient.clone(),
                amount: amount_a,
            },
            Instruction::TransferOut {
                asset: self.asset_b.clone(),
                to: req.recipient,
                amount: amount_b,
            },
        ];
        Ok(Withdrawal {
            amount_a,
            amount_b,
            instructions,
        })
    }

    pub fn swap_exact_in<H: PoolView + Clock>(
        &self,
        host: &H,
        req: SwapExactInRequest,
    ) -> Result<Swap, PoolError> {
        ensure_not_expired(host, req.deadline)?;
        let direction = self.direction(&req.path)?;
        let (reserve_in, reserve_out) = oriented_reserves(self.reserves(host)?, direction);
        let amount_out = get_amount_out(req.amount_in, reserve_in, reserve_out)?;
        if amount_out < req.amount_out_min {
            return Err(PoolError::OutputBelowMinimum {
                output: amount_out,
                min: req.amount_out_min,
            });
        }
        Ok(self.settle_swap(
            direction,
            req.amount_in,
            amount_out,
            req.sender,
            req.recipient,
        ))
    }

    pub fn swap_exact_out<H: PoolView + Clock>(
        &self,
        host: &H,
        req: SwapExactOutRequest,
    ) -> Result<Swap, PoolError> {
        ensure_not_expired(host, req.deadline)?;
        let direction = self.direction(&req.path)?;
        let (reserve_in, reserve_out) = oriented_reserves(self.reserves(host)?, direction);
        let amount_in = get_amount_in(req.amount_out, reserve_in, reserve_out)?;
        if amount_in > req.amount_in_max {
            return Err(PoolError::InputAboveMaximum {
                input: amount_in,
                max: req.amount_in_max,
            });
        }
        Ok(self.settle_swap(
            direction,
            amount_in,
            req.amount_out,
            req.sender,
            req.recipient,
        ))
    }

    /// Output of selling `amount_in` of `path[0]` for `path[1]`.
    pub fn amount_out(
        &self,
        view: &impl PoolView,
        amount_in: Uint128,
        path: &[AssetInfo],
    ) -> Result<Uint128, PoolError> {
        let direction = self.direction(path)?;
        let (reserve_in, reserve_out) = oriented_reserves(self.reserves(view)?, direction);
        get_amount_out(amount_in, reserve_in, reserve_out)
    }

    /// Input of `path[0]` needed to buy exactly `amount_out` of `path[1]`.
    pub fn amount_in(
        &self,
        view: &impl PoolView,
        amount_out: Uint128,
        path: &[AssetInfo],
    ) -> Result<Uint128, PoolError> {
        let direction = self.direction(path)?;
        let (reserve_in, reserve_out) = oriented_reserves(self.reserves(view)?, direction);
        get_amount_in(amount_out, reserve_in, reserve_out)
    }

    /// Price of `base` in units of `quote`, scaled by `PRICE_SCALE`.
    pub fn price(
        &self,
        view: &impl PoolView,
        base: &AssetInfo,
        quote: &AssetInfo,
    ) -> Result<Uint256, PoolError> {
        let direction = self.direction(&[base.clone(), quote.clone()])?;
        let (reserve_base, reserve_quote) = oriented_reserves(self.reserves(view)?, direction);
        get_price(reserve_base, reserve_quote)
    }

    /// Amounts of A and B that `shares` currently redeem for.
    pub fn redeem(
        &self,
        view: &impl PoolView,
        shares: Uint128,
    ) -> Result<(Uint128, Uint128), PoolError> {
        let total_shares = view.total_shares()?;
        let reserves = self.reserves(view)?;
        redeem_amounts(shares, reserves.a, reserves.b, total_shares)
    }

    fn settle_swap(
        &self,
        direction: Direction,
        amount_in: Uint128,
        amount_out: Uint128,
        sender: Addr,
        recipient: Addr,
    ) -> Swap {
        let (asset_in, asset_out) = self.oriented(direction);
        let (asset_in, asset_out) = (asset_in.clone(), asset_out.clone());
        let instructions = vec![
            Instruction::TransferIn {
                asset: asset_in.clone(),
                from: sender,
                amount: amount_in,
            },
            Instruction::TransferOut {
                asset: asset_out.clone(),
                to: recipient,
                amount: amount_out,
            },
        ];
        Swap {
            asset_in,
            asset_out,
            amount_in,
            amount_out,
            instructions,
        }
    }
}

fn ensure_not_expired(clock: &impl Clock, deadline: Timestamp) -> Result<(), PoolError> {
    let now = clock.now();
    if now > deadline {
        return Err(PoolError::Expired { deadline, now });
    }
    Ok(())
}

fn ensure_minimum(asset: &AssetInfo, amount: Uint128, min: Uint128) -> Result<(), PoolError> {
    if amount < min {
        return Err(PoolError::BelowMinimum {
            asset: asset.to_string(),
            amount,
            min,
        });
    }
    Ok(())
}

/// Accepted amounts along the current reserve ratio, reducing whichever side
/// the caller over-supplied.
fn optimal_amounts(
    req: &ContributeRequest,
    reserves: Reserves,
) -> Result<(Uint128, Uint128), PoolError> {
    // Wide so an optimum above Uint128::MAX still compares as over-supplied
    let amount_b_optimal = ratio_amount(req.amount_a_desired, reserves.a, reserves.b);
    if amount_b_optimal <= Uint256::from(req.amount_b_desired) {
        let amount_b_optimal = Uint128::try_from(amount_b_optimal)?;
        if amount_b_optimal < req.amount_b_min {
            return Err(PoolError::InsufficientB {
                optimal: amount_b_optimal,
                min: req.amount_b_min,
            });
        }
        return Ok((req.amount_a_desired, amount_b_optimal));
    }
    let amount_a_optimal =
        Uint128::try_from(ratio_amount(req.amount_b_desired, reserves.b, reserves.a))?;
    if amount_a_optimal < req.amount_a_min {
        return Err(PoolError::InsufficientA {
            optimal: amount_a_optimal,
            min: req.amount_a_min,
        });
    }
    Ok((amount_a_optimal, req.amount_b_desired))
}

/// `floor(amount * reserve_to / reserve_from)` without the Uint128 ceiling.
/// Callers guarantee `reserve_from` is non-zero.
fn ratio_amount(amount: Uint128, reserve_from: Uint128, reserve_to: Uint128) -> Uint256 {
    Uint256::from(amount) * Uint256::from(reserve_to) / Uint256::from(reserve_from)
}

fn oriented_reserves(reserves: Reserves, direction: Direction) -> (Uint128, Uint128) {
    match direction {
        Direction::AToB => (reserves.a, reserves.b),
        Direction::BToA => (reserves.b, reserves.a),
    }
}
