use accrual::{
    constants::SCALE,
    error::{ AccrualResult, ErrorCode },
    math::{ casting::Cast, helpers::mul_div, safe_math::SafeMath },
    validate,
};
use soroban_sdk::{ log, Address, Env };

use crate::{
    controller::{ accrue, reserve::ensure_covered },
    events::StakingEvents,
    interfaces::staking_token::StakingTokenClient,
    storage::{
        get_active_deposit,
        get_config,
        get_fee,
        get_lp_reward_address,
        get_total_staked,
        get_withdrawal_lock_duration,
        get_withdrawal_request,
        get_withdrawal_unlock_duration,
        remove_deposit,
        remove_withdrawal_request,
        save_deposit,
        save_total_staked,
        save_withdrawal_request,
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WithdrawalKind {
    /// Immediate, charged the fee
    Forced,
    /// Inside the unlock window after a request, fee free
    Requested,
}

pub fn request_withdrawal(env: &Env, sender: &Address, deposit_id: u64) -> AccrualResult {
    get_active_deposit(env, sender, deposit_id)?;

    let now = env.ledger().timestamp();
    save_withdrawal_request(env, sender, deposit_id, now);

    StakingEvents::withdrawal_requested(env, sender.clone(), deposit_id, now);

    Ok(())
}

pub fn make_requested_withdrawal(
    env: &Env,
    sender: &Address,
    deposit_id: u64,
    amount: i128
) -> AccrualResult<i128> {
    let requested_at = match get_withdrawal_request(env, sender, deposit_id) {
        Some(requested_at) => requested_at,
        None => {
            log!(env, "Staking: Requested withdrawal: no request for deposit", deposit_id);
            return Err(ErrorCode::WithdrawalNotRequested);
        }
    };

    let now = env.ledger().timestamp();
    let opens_at = requested_at.safe_add(get_withdrawal_lock_duration(env), env)?;
    let closes_at = opens_at.safe_add(get_withdrawal_unlock_duration(env), env)?;

    validate!(
        env,
        now >= opens_at,
        ErrorCode::TooEarly,
        "Staking: Requested withdrawal: lock has not passed",
        opens_at
    )?;
    validate!(
        env,
        now <= closes_at,
        ErrorCode::TooLate,
        "Staking: Requested withdrawal: unlock window closed",
        closes_at
    )?;

    withdraw(env, sender, deposit_id, amount, WithdrawalKind::Requested)
}

pub fn make_forced_withdrawal(
    env: &Env,
    sender: &Address,
    deposit_id: u64,
    amount: i128
) -> AccrualResult<i128> {
    withdraw(env, sender, deposit_id, amount, WithdrawalKind::Forced)
}

/// Takes `amount` of principal (everything when 0) plus its emission out of a
/// deposit and returns what the depositor received.
fn withdraw(
    env: &Env,
    sender: &Address,
    deposit_id: u64,
    amount: i128,
    kind: WithdrawalKind
) -> AccrualResult<i128> {
    validate!(env, amount >= 0, ErrorCode::ZeroAmount, "Staking: Withdraw: negative amount")?;

    let config = get_config(env);
    let mut deposit = get_active_deposit(env, sender, deposit_id)?;

    let amount = if amount == 0 { deposit.principal } else { amount };
    validate!(
        env,
        amount <= deposit.principal,
        ErrorCode::InsufficientFunds,
        "Staking: Withdraw: amount exceeds principal",
        amount,
        deposit.principal
    )?;

    let accrual = accrue(env, &config, deposit.timestamp, amount)?;
    if accrual.total > 0 {
        ensure_covered(env, &config, accrual.total, 0)?;
    }

    let payout = amount.safe_add(accrual.user_share, env)?;
    let fee = match kind {
        WithdrawalKind::Forced =>
            mul_div(
                env,
                payout.cast::<u128>(env)?,
                get_fee(env).cast::<u128>(env)?,
                SCALE.cast::<u128>(env)?
            )?.cast::<i128>(env)?,
        WithdrawalKind::Requested => 0,
    };
    let to_sender = payout.safe_sub(fee, env)?;
    let to_lp = fee.safe_add(accrual.lp_share(env)?, env)?;

    deposit.principal = deposit.principal.safe_sub(amount, env)?;
    save_total_staked(env, get_total_staked(env).safe_sub(amount, env)?);
    if deposit.principal == 0 {
        remove_deposit(env, sender, deposit_id);
        remove_withdrawal_request(env, sender, deposit_id);
    } else {
        save_deposit(env, sender, deposit_id, &deposit);
        if kind == WithdrawalKind::Requested {
            remove_withdrawal_request(env, sender, deposit_id);
        }
    }

    let token = StakingTokenClient::new(env, &config.token);
    if to_sender > 0 {
        token.transfer(&env.current_contract_address(), sender, &to_sender);
    }
    if to_lp > 0 {
        token.transfer(&env.current_contract_address(), &get_lp_reward_address(env), &to_lp);
    }

    if accrual.total > 0 {
        StakingEvents::accrued(
            env,
            sender.clone(),
            deposit_id,
            accrual.elapsed,
            accrual.total,
            accrual.user_share
        );
    }
    StakingEvents::withdrawn(env, sender.clone(), deposit_id, payout, fee, deposit.principal);

    Ok(to_sender)
}
