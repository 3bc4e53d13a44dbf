use accrual::{ error::{ AccrualResult, ErrorCode }, math::safe_math::SafeMath, validate };
use soroban_sdk::{ log, token, Address, Env };

use crate::{
    events::StakingEvents,
    interfaces::staking_token::StakingTokenClient,
    storage::{ get_config, get_total_staked, Config },
};

/// Staked token held by the ledger above what depositors own.
///
/// `unaccounted` is subtracted as well, for tokens that already arrived but are
/// not yet booked as principal.
pub fn available_reserve(env: &Env, config: &Config, unaccounted: i128) -> AccrualResult<i128> {
    let held = StakingTokenClient::new(env, &config.token).balance(&env.current_contract_address());

    held.safe_sub(get_total_staked(env), env)?.safe_sub(unaccounted, env)
}

pub fn ensure_covered(
    env: &Env,
    config: &Config,
    required: i128,
    unaccounted: i128
) -> AccrualResult {
    let reserve = available_reserve(env, config, unaccounted)?;

    validate!(
        env,
        reserve >= required,
        ErrorCode::InsufficientFunds,
        "Staking: Reserve: not enough to cover emission",
        reserve,
        required
    )
}

pub fn deposit_reserve(env: &Env, sender: &Address, amount: i128) -> AccrualResult {
    validate!(env, amount > 0, ErrorCode::ZeroAmount, "Staking: Deposit reserve: zero amount")?;

    let config = get_config(env);
    StakingTokenClient::new(env, &config.token).transfer(
        sender,
        &env.current_contract_address(),
        &amount
    );

    StakingEvents::reserve_deposited(env, sender.clone(), amount);

    Ok(())
}

pub fn claim_tokens(
    env: &Env,
    sender: &Address,
    token: &Address,
    to: &Address,
    amount: i128
) -> AccrualResult {
    let config = get_config(env);

    if *sender != config.admin {
        log!(env, "Staking: Claim tokens: you are not authorized!");
        return Err(ErrorCode::Unauthorized);
    }

    validate!(env, amount > 0, ErrorCode::ZeroAmount, "Staking: Claim tokens: zero amount")?;
    validate!(
        env,
        *to != env.current_contract_address(),
        ErrorCode::InvalidRecipient,
        "Staking: Claim tokens: cannot claim to the ledger itself"
    )?;

    if *token == config.token {
        ensure_covered(env, &config, amount, 0)?;
    }

    token::Client::new(env, token).transfer(&env.current_contract_address(), to, &amount);

    StakingEvents::tokens_claimed(env, token.clone(), to.clone(), amount);

    Ok(())
}
