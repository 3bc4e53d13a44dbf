use accrual::{
    constants::{ INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD },
    delayed::DelayedParameter,
    error::ErrorCode,
};
use soroban_sdk::{ contract, contractimpl, contractmeta, log, Address, Env };

use crate::{
    controller::{ self, deposit::Funding },
    events::StakingEvents,
    interfaces::staking_token::StakingTokenClient,
    math::emission::supply_based_rate,
    msg::{ ConfigResponse, ParametersResponse },
    staking::StakingTrait,
    storage::{
        self,
        get_config,
        get_deposit,
        get_last_deposit_id,
        get_total_staked,
        get_withdrawal_request,
        is_initialized,
        save_config,
        save_parameter,
        save_total_staked,
        set_initialized,
        Config,
        Parameter,
        SigmoidParams,
    },
};

contractmeta!(
    key = "Description",
    val = "Staking ledger paying time and supply based emission on deposits"
);

#[contract]
pub struct Staking;

fn bump_instance(env: &Env) {
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

#[contractimpl]
impl StakingTrait for Staking {
    // ################################################################
    //                             ADMIN
    // ################################################################

    #[allow(clippy::too_many_arguments)]
    fn initialize(
        env: Env,
        admin: Address,
        token: Address,
        lp_reward_address: Address,
        fee: i128,
        withdrawal_lock_duration: u64,
        withdrawal_unlock_duration: u64,
        supply_factor: i128,
        sigmoid: SigmoidParams
    ) -> Result<(), ErrorCode> {
        if is_initialized(&env) {
            log!(&env, "Staking: Initialize: initializing contract twice is not allowed");
            return Err(ErrorCode::AlreadyInitialized);
        }

        controller::governance::validate_fee(&env, fee)?;
        controller::governance::validate_withdrawal_lock_duration(&env, withdrawal_lock_duration)?;
        controller::governance::validate_withdrawal_unlock_duration(
            &env,
            withdrawal_unlock_duration
        )?;
        controller::governance::validate_supply_factor(&env, supply_factor)?;
        controller::governance::validate_sigmoid(&env, &sigmoid)?;
        controller::governance::validate_lp_reward_address(&env, &lp_reward_address)?;

        set_initialized(&env);

        save_config(&env, Config {
            admin: admin.clone(),
            token: token.clone(),
        });
        save_total_staked(&env, 0);

        let now = env.ledger().timestamp();
        save_parameter(&env, Parameter::Fee, DelayedParameter::new(fee, now));
        save_parameter(
            &env,
            Parameter::WithdrawalLockDuration,
            DelayedParameter::new(withdrawal_lock_duration, now)
        );
        save_parameter(
            &env,
            Parameter::WithdrawalUnlockDuration,
            DelayedParameter::new(withdrawal_unlock_duration, now)
        );
        save_parameter(&env, Parameter::SupplyFactor, DelayedParameter::new(supply_factor, now));
        save_parameter(&env, Parameter::Sigmoid, DelayedParameter::new(sigmoid, now));
        save_parameter(
            &env,
            Parameter::LpRewardAddress,
            DelayedParameter::new(lp_reward_address, now)
        );

        bump_instance(&env);

        StakingEvents::initialize(&env, admin, token);

        Ok(())
    }

    fn set_fee(env: Env, sender: Address, fee: i128) -> Result<(), ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        controller::governance::set_fee(&env, &sender, fee)
    }

    fn set_withdrawal_lock_duration(
        env: Env,
        sender: Address,
        duration: u64
    ) -> Result<(), ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        controller::governance::set_withdrawal_lock_duration(&env, &sender, duration)
    }

    fn set_withdrawal_unlock_duration(
        env: Env,
        sender: Address,
        duration: u64
    ) -> Result<(), ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        controller::governance::set_withdrawal_unlock_duration(&env, &sender, duration)
    }

    fn set_supply_factor(env: Env, sender: Address, supply_factor: i128) -> Result<(), ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        controller::governance::set_supply_factor(&env, &sender, supply_factor)
    }

    fn set_sigmoid_parameters(
        env: Env,
        sender: Address,
        sigmoid: SigmoidParams
    ) -> Result<(), ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        controller::governance::set_sigmoid_parameters(&env, &sender, sigmoid)
    }

    fn set_lp_reward_address(
        env: Env,
        sender: Address,
        lp_reward_address: Address
    ) -> Result<(), ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        controller::governance::set_lp_reward_address(&env, &sender, lp_reward_address)
    }

    fn claim_tokens(
        env: Env,
        sender: Address,
        token: Address,
        to: Address,
        amount: i128
    ) -> Result<(), ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        controller::reserve::claim_tokens(&env, &sender, &token, &to, amount)
    }

    // ################################################################
    //                             USER
    // ################################################################

    fn deposit(env: Env, sender: Address, deposit_id: u64, amount: i128) -> Result<u64, ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        controller::deposit::deposit(&env, &sender, deposit_id, amount, Funding::Pull)
    }

    fn on_token_transfer(
        env: Env,
        token: Address,
        from: Address,
        to: Address,
        amount: i128,
        deposit_id: u64
    ) -> Result<u64, ErrorCode> {
        bump_instance(&env);

        controller::deposit::on_token_transfer(&env, &token, &from, &to, amount, deposit_id)
    }

    fn request_withdrawal(env: Env, sender: Address, deposit_id: u64) -> Result<(), ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        controller::withdrawal::request_withdrawal(&env, &sender, deposit_id)
    }

    fn make_requested_withdrawal(
        env: Env,
        sender: Address,
        deposit_id: u64,
        amount: i128
    ) -> Result<i128, ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        controller::withdrawal::make_requested_withdrawal(&env, &sender, deposit_id, amount)
    }

    fn make_forced_withdrawal(
        env: Env,
        sender: Address,
        deposit_id: u64,
        amount: i128
    ) -> Result<i128, ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        controller::withdrawal::make_forced_withdrawal(&env, &sender, deposit_id, amount)
    }

    fn deposit_reserve(env: Env, sender: Address, amount: i128) -> Result<(), ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        controller::reserve::deposit_reserve(&env, &sender, amount)
    }

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn balances(env: Env, account: Address, deposit_id: u64) -> i128 {
        get_deposit(&env, &account, deposit_id).principal
    }

    fn deposit_dates(env: Env, account: Address, deposit_id: u64) -> u64 {
        get_deposit(&env, &account, deposit_id).timestamp
    }

    fn last_deposit_id(env: Env, account: Address) -> u64 {
        get_last_deposit_id(&env, &account)
    }

    fn total_staked(env: Env) -> i128 {
        get_total_staked(&env)
    }

    fn withdrawal_requests_dates(env: Env, account: Address, deposit_id: u64) -> u64 {
        get_withdrawal_request(&env, &account, deposit_id).unwrap_or(0)
    }

    fn get_supply_based_emission_rate(env: Env) -> Result<i128, ErrorCode> {
        let config = get_config(&env);
        let total_supply = StakingTokenClient::new(&env, &config.token).total_supply();

        supply_based_rate(
            &env,
            total_supply,
            get_total_staked(&env),
            storage::get_supply_factor(&env)
        )
    }

    fn get_accrued_emission(
        env: Env,
        timestamp: u64,
        amount: i128
    ) -> Result<(u64, i128, i128), ErrorCode> {
        let config = get_config(&env);
        let accrual = controller::accrue(&env, &config, timestamp, amount)?;

        Ok((accrual.elapsed, accrual.total, accrual.user_share))
    }

    fn query_config(env: Env) -> ConfigResponse {
        ConfigResponse {
            config: get_config(&env),
        }
    }

    fn query_parameters(env: Env) -> ParametersResponse {
        ParametersResponse {
            fee: storage::get_fee(&env),
            withdrawal_lock_duration: storage::get_withdrawal_lock_duration(&env),
            withdrawal_unlock_duration: storage::get_withdrawal_unlock_duration(&env),
            supply_factor: storage::get_supply_factor(&env),
            sigmoid: storage::get_sigmoid(&env),
            lp_reward_address: storage::get_lp_reward_address(&env),
        }
    }

    fn get_fee(env: Env) -> i128 {
        storage::get_fee(&env)
    }

    fn get_withdrawal_lock_duration(env: Env) -> u64 {
        storage::get_withdrawal_lock_duration(&env)
    }

    fn get_withdrawal_unlock_duration(env: Env) -> u64 {
        storage::get_withdrawal_unlock_duration(&env)
    }

    fn get_supply_factor(env: Env) -> i128 {
        storage::get_supply_factor(&env)
    }

    fn get_sigmoid_parameters(env: Env) -> SigmoidParams {
        storage::get_sigmoid(&env)
    }

    fn get_lp_reward_address(env: Env) -> Address {
        storage::get_lp_reward_address(&env)
    }
}
