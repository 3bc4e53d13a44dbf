pub mod deposit;
pub mod governance;
pub mod reserve;
pub mod withdrawal;

use accrual::{ error::AccrualResult, math::safe_math::SafeMath };
use soroban_sdk::Env;

use crate::{
    interfaces::staking_token::StakingTokenClient,
    math::emission::{ accrued_split, supply_based_rate, time_based_rate, Accrual },
    storage::{ get_sigmoid, get_supply_factor, get_total_staked, Config },
};

/// Emission on `amount` staked since `since`, at the rates in force now.
///
/// Nothing accrues on an empty amount or a deposit that never started, and the
/// token is not queried in those cases.
pub fn accrue(env: &Env, config: &Config, since: u64, amount: i128) -> AccrualResult<Accrual> {
    let now = env.ledger().timestamp();
    let elapsed = now.saturating_sub(since);
    if since == 0 || amount == 0 || elapsed == 0 {
        return Ok(Accrual::default());
    }

    let total_supply = StakingTokenClient::new(env, &config.token).total_supply();
    let user_rate = time_based_rate(env, elapsed, &get_sigmoid(env))?.safe_add(
        supply_based_rate(env, total_supply, get_total_staked(env), get_supply_factor(env))?,
        env
    )?;

    accrued_split(env, amount, elapsed, user_rate)
}
