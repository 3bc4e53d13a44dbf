use accrual::{
    constants::{ MAX_EMISSION_RATE, SCALE, YEAR },
    error::AccrualResult,
    math::{
        casting::Cast,
        helpers::{ mul3_div, mul_div, saturating_square_add },
        safe_math::SafeMath,
        sqrt::integer_sqrt,
    },
};
use soroban_sdk::Env;

use crate::storage::SigmoidParams;

/// Emission realised on a deposit over `elapsed` seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accrual {
    pub elapsed: u64,
    /// Emission at the maximum rate
    pub total: i128,
    /// Part of `total` credited to the depositor
    pub user_share: i128,
}

impl Accrual {
    /// What is left of `total` once the depositor is paid; goes to liquidity providers.
    pub fn lp_share(&self, env: &Env) -> AccrualResult<i128> {
        self.total.safe_sub(self.user_share, env)
    }
}

/// Scarcity component of the rate: grows with the share of supply that is staked.
///
/// Reaches its cap of `MAX_EMISSION_RATE / 2` once `total_staked` hits
/// `total_supply * supply_factor / SCALE`. A zero threshold switches it off.
pub fn supply_based_rate(
    env: &Env,
    total_supply: i128,
    total_staked: i128,
    supply_factor: i128
) -> AccrualResult<i128> {
    let threshold = mul_div(
        env,
        total_supply.cast::<u128>(env)?,
        supply_factor.cast::<u128>(env)?,
        SCALE.cast::<u128>(env)?
    )?;
    if threshold == 0 {
        return Ok(0);
    }

    let half_max = MAX_EMISSION_RATE / 2;
    let total_staked = total_staked.cast::<u128>(env)?;
    if total_staked >= threshold {
        return Ok(half_max);
    }

    mul_div(env, half_max.cast::<u128>(env)?, total_staked, threshold)?.cast::<i128>(env)
}

/// Time component of the rate, `a * u / sqrt(u^2 + c)` with `u = elapsed - b`.
pub fn time_based_rate(env: &Env, elapsed: u64, sigmoid: &SigmoidParams) -> AccrualResult<i128> {
    let shifted = (elapsed as i128).safe_sub(sigmoid.b as i128, env)?;
    if shifted <= 0 {
        return Ok(0);
    }

    let u = shifted.cast::<u128>(env)?;
    let denominator = integer_sqrt(saturating_square_add(u, sigmoid.c.cast::<u128>(env)?));
    let rate = mul_div(env, sigmoid.a.cast::<u128>(env)?, u, denominator)?.cast::<i128>(env)?;

    Ok(rate.min(sigmoid.a))
}

/// `amount * rate * elapsed / (SCALE * YEAR)`, rounded down.
pub fn accrued_emission(env: &Env, amount: i128, elapsed: u64, rate: i128) -> AccrualResult<i128> {
    let denominator = SCALE.cast::<u128>(env)?.safe_mul(YEAR as u128, env)?;

    mul3_div(
        env,
        amount.cast::<u128>(env)?,
        rate.cast::<u128>(env)?,
        elapsed as u128,
        denominator
    )?.cast::<i128>(env)
}

/// Emission at the maximum rate and the depositor's part of it at `user_rate`.
pub fn accrued_split(
    env: &Env,
    amount: i128,
    elapsed: u64,
    user_rate: i128
) -> AccrualResult<Accrual> {
    if amount == 0 || elapsed == 0 {
        return Ok(Accrual { elapsed, ..Default::default() });
    }

    let total = accrued_emission(env, amount, elapsed, MAX_EMISSION_RATE)?;
    let user_share = accrued_emission(env, amount, elapsed, user_rate)?;

    Ok(Accrual { elapsed, total, user_share })
}
