use crate::error::PoolError;
use cosmwasm_std::{Uint128, Uint256};

/// Fixed-point scale of prices returned by [`get_price`].
pub const PRICE_SCALE: Uint128 = Uint128::new(1_000_000_000_000_000_000);

/// Integer square root, rounded down.
///
/// Babylonian iteration seeded at `y / 2 + 1`; every iterate stays at or above
/// the true root, so the loop stops on the first non-decreasing step.
pub fn isqrt(y: Uint256) -> Uint256 {
    if y > Uint256::from(3u128) {
        let mut z = y;
        let mut x = (y >> 1) + Uint256::one();
        while x < z {
            z = x;
            x = ((y / x) + x) >> 1;
        }
        z
    } else if !y.is_zero() {
        Uint256::one()
    } else {
        Uint256::zero()
    }
}

/// Shares for the first deposit: the geometric mean of both amounts.
pub fn geometric_shares(amount_a: Uint128, amount_b: Uint128) -> Result<Uint128, PoolError> {
    let prod = Uint256::from(amount_a) * Uint256::from(amount_b);
    Ok(Uint128::try_from(isqrt(prod))?)
}

/// Shares proportional to the smaller of the two reserve fractions contributed.
pub fn pro_rata_shares(
    amount_a: Uint128,
    amount_b: Uint128,
    reserve_a: Uint128,
    reserve_b: Uint128,
    total_shares: Uint128,
) -> Result<Uint128, PoolError> {
    if reserve_a.is_zero() || reserve_b.is_zero() {
        return Err(PoolError::NoLiquidity {});
    }
    let share_a = amount_a.checked_multiply_ratio(total_shares, reserve_a)?;
    let share_b = amount_b.checked_multiply_ratio(total_shares, reserve_b)?;
    Ok(std::cmp::min(share_a, share_b))
}

/// Amount of B worth `amount_a` of A at the current reserve ratio.
pub fn quote(
    amount_a: Uint128,
    reserve_a: Uint128,
    reserve_b: Uint128,
) -> Result<Uint128, PoolError> {
    if amount_a.is_zero() {
        return Err(PoolError::ZeroInput {});
    }
    if reserve_a.is_zero() || reserve_b.is_zero() {
        return Err(PoolError::NoLiquidity {});
    }
    Ok(amount_a.checked_multiply_ratio(reserve_b, reserve_a)?)
}

/// Constant-product output for an exact input, no fee.
pub fn get_amount_out(
    amount_in: Uint128,
    reserve_in: Uint128,
    reserve_out: Uint128,
) -> Result<Uint128, PoolError> {
    if amount_in.is_zero() {
        return Err(PoolError::ZeroInput {});
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(PoolError::NoLiquidity {});
    }
    let denominator = reserve_in.checked_add(amount_in)?;
    Ok(reserve_out.checked_multiply_ratio(amount_in, denominator)?)
}

/// Smallest input that buys exactly `amount_out`, no fee.
pub fn get_amount_in(
    amount_out: Uint128,
    reserve_in: Uint128,
    reserve_out: Uint128,
) -> Result<Uint128, PoolError> {
    if amount_out.is_zero() {
        return Err(PoolError::ZeroInput {});
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(PoolError::NoLiquidity {});
    }
    if amount_out >= reserve_out {
        return Err(PoolError::ExcessiveOutput {
            requested: amount_out,
            reserve: reserve_out,
        });
    }
    let remaining_out = reserve_out.checked_sub(amount_out)?;
    let amount_in = reserve_in.checked_multiply_ratio(amount_out, remaining_out)?;
    Ok(amount_in.checked_add(Uint128::one())?)
}

/// Price of `base` in units of `quote`, scaled by [`PRICE_SCALE`].
pub fn get_price(reserve_base: Uint128, reserve_quote: Uint128) -> Result<Uint256, PoolError> {
    if reserve_base.is_zero() || reserve_quote.is_zero() {
        return Err(PoolError::NoLiquidity {});
    }
    let scaled = Uint256::from(reserve_quote).checked_mul(Uint256::from(PRICE_SCALE))?;
    Ok(scaled / Uint256::from(reserve_base))
}

/// Amounts of A and B redeemed by `shares`, floored in favour of the pool.
pub fn redeem_amounts(
    shares: Uint128,
    reserve_a: Uint128,
    reserve_b: Uint128,
    total_shares: Uint128,
) -> Result<(Uint128, Uint128), PoolError> {
    if total_shares.is_zero() {
        return Err(PoolError::NoLiquidity {});
    }
    if shares > total_shares {
        return Err(PoolError::SharesExceedSupply {
            shares,
            total: total_shares,
        });
    }
    let return_a = reserve_a.checked_multiply_ratio(shares, total_shares)?;
    let return_b = reserve_b.checked_multiply_ratio(shares, total_shares)?;
    Ok((return_a, return_b))
}
