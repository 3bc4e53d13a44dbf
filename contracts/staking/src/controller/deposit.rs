use accrual::{ error::{ AccrualResult, ErrorCode }, math::safe_math::SafeMath, validate };
use soroban_sdk::{ log, Address, Env };

use crate::{
    controller::{ accrue, reserve::ensure_covered },
    events::StakingEvents,
    interfaces::staking_token::StakingTokenClient,
    storage::{
        get_active_deposit,
        get_config,
        get_last_deposit_id,
        get_lp_reward_address,
        get_sigmoid,
        get_supply_factor,
        get_total_staked,
        save_deposit,
        save_last_deposit_id,
        save_total_staked,
        Deposit,
    },
};

/// Where the deposited tokens come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Funding {
    /// Pulled from the sender once bookkeeping is written
    Pull,
    /// Already moved to the ledger by the token before the call
    Received,
}

/// Opens deposit `deposit_id == 0` or tops up an existing one, returning its id.
///
/// A top-up first realises the emission on the current principal: the
/// depositor's share is compounded into the principal and the liquidity
/// providers' share is paid out.
pub fn deposit(
    env: &Env,
    sender: &Address,
    deposit_id: u64,
    amount: i128,
    funding: Funding
) -> AccrualResult<u64> {
    validate!(env, amount > 0, ErrorCode::ZeroAmount, "Staking: Deposit: zero amount")?;

    let config = get_config(env);
    let now = env.ledger().timestamp();

    let (deposit_id, mut deposit) = if deposit_id == 0 {
        let id = get_last_deposit_id(env, sender).safe_add(1, env)?;
        save_last_deposit_id(env, sender, id);
        (id, Deposit::default())
    } else {
        (deposit_id, get_active_deposit(env, sender, deposit_id)?)
    };

    let accrual = accrue(env, &config, deposit.timestamp, deposit.principal)?;
    let lp_share = accrual.lp_share(env)?;
    if accrual.total > 0 {
        let unaccounted = match funding {
            Funding::Pull => 0,
            Funding::Received => amount,
        };
        ensure_covered(env, &config, accrual.total, unaccounted)?;
    }

    let added = amount.safe_add(accrual.user_share, env)?;
    deposit.principal = deposit.principal.safe_add(added, env)?;
    deposit.timestamp = now;
    save_deposit(env, sender, deposit_id, &deposit);
    save_total_staked(env, get_total_staked(env).safe_add(added, env)?);

    let token = StakingTokenClient::new(env, &config.token);
    if funding == Funding::Pull {
        token.transfer(sender, &env.current_contract_address(), &amount);
    }
    if lp_share > 0 {
        token.transfer(&env.current_contract_address(), &get_lp_reward_address(env), &lp_share);
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
    StakingEvents::deposited(env, sender.clone(), deposit_id, amount, deposit.principal, now);

    Ok(deposit_id)
}

/// Books tokens the staked token already moved to the ledger.
///
/// Only the configured token may call this. The host forbids re-entering the
/// token from inside its own call, so only fresh deposits (or top-ups with
/// nothing accrued yet) succeed through this path.
pub fn on_token_transfer(
    env: &Env,
    token: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
    deposit_id: u64
) -> AccrualResult<u64> {
    let config = get_config(env);

    if *token != config.token {
        log!(env, "Staking: Token transfer: caller is not the staked token");
        return Err(ErrorCode::Unauthorized);
    }
    validate!(env, amount > 0, ErrorCode::ZeroAmount, "Staking: Token transfer: zero amount")?;
    validate!(
        env,
        *to == env.current_contract_address(),
        ErrorCode::InvalidRecipient,
        "Staking: Token transfer: tokens were not sent to the ledger"
    )?;
    validate!(
        env,
        get_sigmoid(env).a != 0 || get_supply_factor(env) != 0,
        ErrorCode::EmissionStopped,
        "Staking: Token transfer: emission is stopped"
    )?;

    token.require_auth();

    deposit(env, from, deposit_id, amount, Funding::Received)
}
