use accrual::{
    constants::{ MAX_EMISSION_RATE, ONE_HOUR, PARAM_UPDATE_DELAY, SCALE, THIRTY_DAYS },
    error::{ AccrualResult, ErrorCode },
    validate,
};
use soroban_sdk::{ log, Address, Env, IntoVal, TryFromVal, Val };

use crate::{
    events::StakingEvents,
    storage::{ get_config, get_parameter, save_parameter, Parameter, SigmoidParams },
};

pub fn validate_fee(env: &Env, fee: i128) -> AccrualResult {
    validate!(
        env,
        (0..=SCALE).contains(&fee),
        ErrorCode::InvalidParameterRange,
        "Staking: Fee: must be between 0 and 1",
        fee
    )
}

pub fn validate_withdrawal_lock_duration(env: &Env, duration: u64) -> AccrualResult {
    validate!(
        env,
        duration <= THIRTY_DAYS,
        ErrorCode::InvalidParameterRange,
        "Staking: Withdrawal lock: must not exceed 30 days",
        duration
    )
}

pub fn validate_withdrawal_unlock_duration(env: &Env, duration: u64) -> AccrualResult {
    validate!(
        env,
        (ONE_HOUR..=THIRTY_DAYS).contains(&duration),
        ErrorCode::InvalidParameterRange,
        "Staking: Withdrawal unlock: must be between 1 hour and 30 days",
        duration
    )
}

pub fn validate_supply_factor(env: &Env, supply_factor: i128) -> AccrualResult {
    validate!(
        env,
        (0..=SCALE).contains(&supply_factor),
        ErrorCode::InvalidParameterRange,
        "Staking: Supply factor: must be between 0 and 1",
        supply_factor
    )
}

pub fn validate_sigmoid(env: &Env, sigmoid: &SigmoidParams) -> AccrualResult {
    validate!(
        env,
        (0..=MAX_EMISSION_RATE / 2).contains(&sigmoid.a),
        ErrorCode::InvalidParameterRange,
        "Staking: Sigmoid: a must be between 0 and half the max rate",
        sigmoid.a
    )?;
    validate!(
        env,
        sigmoid.c > 0,
        ErrorCode::InvalidParameterRange,
        "Staking: Sigmoid: c must be positive",
        sigmoid.c
    )
}

pub fn validate_lp_reward_address(env: &Env, lp_reward_address: &Address) -> AccrualResult {
    validate!(
        env,
        *lp_reward_address != env.current_contract_address(),
        ErrorCode::InvalidRecipient,
        "Staking: LP reward address: cannot be the ledger itself"
    )
}

fn require_admin(env: &Env, sender: &Address) -> AccrualResult {
    if *sender != get_config(env).admin {
        log!(env, "Staking: Governance: you are not authorized!");
        return Err(ErrorCode::Unauthorized);
    }
    Ok(())
}

/// Stages `value` for `param`; it takes effect once the update delay has passed.
fn stage<T>(env: &Env, sender: &Address, param: Parameter, value: T) -> AccrualResult
    where
        T: Clone + IntoVal<Env, Val>,
        (T, T, u64): TryFromVal<Env, Val> + IntoVal<Env, Val>
{
    let mut parameter = get_parameter::<T>(env, param);
    parameter.stage(value.clone(), env.ledger().timestamp(), PARAM_UPDATE_DELAY);
    save_parameter(env, param, parameter);

    StakingEvents::parameter_staged(env, param, value, sender.clone());

    Ok(())
}

pub fn set_fee(env: &Env, sender: &Address, fee: i128) -> AccrualResult {
    require_admin(env, sender)?;
    validate_fee(env, fee)?;
    stage(env, sender, Parameter::Fee, fee)
}

pub fn set_withdrawal_lock_duration(env: &Env, sender: &Address, duration: u64) -> AccrualResult {
    require_admin(env, sender)?;
    validate_withdrawal_lock_duration(env, duration)?;
    stage(env, sender, Parameter::WithdrawalLockDuration, duration)
}

pub fn set_withdrawal_unlock_duration(
    env: &Env,
    sender: &Address,
    duration: u64
) -> AccrualResult {
    require_admin(env, sender)?;
    validate_withdrawal_unlock_duration(env, duration)?;
    stage(env, sender, Parameter::WithdrawalUnlockDuration, duration)
}

pub fn set_supply_factor(env: &Env, sender: &Address, supply_factor: i128) -> AccrualResult {
    require_admin(env, sender)?;
    validate_supply_factor(env, supply_factor)?;
    stage(env, sender, Parameter::SupplyFactor, supply_factor)
}

pub fn set_sigmoid_parameters(
    env: &Env,
    sender: &Address,
    sigmoid: SigmoidParams
) -> AccrualResult {
    require_admin(env, sender)?;
    validate_sigmoid(env, &sigmoid)?;
    stage(env, sender, Parameter::Sigmoid, sigmoid)
}

pub fn set_lp_reward_address(
    env: &Env,
    sender: &Address,
    lp_reward_address: Address
) -> AccrualResult {
    require_admin(env, sender)?;
    validate_lp_reward_address(env, &lp_reward_address)?;
    stage(env, sender, Parameter::LpRewardAddress, lp_reward_address)
}
