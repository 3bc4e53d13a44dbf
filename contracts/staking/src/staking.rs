use accrual::error::ErrorCode;
use soroban_sdk::{ Address, Env };

use crate::{ msg::{ ConfigResponse, ParametersResponse }, storage::SigmoidParams };

pub trait StakingTrait {
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
    ) -> Result<(), ErrorCode>;

    fn set_fee(env: Env, sender: Address, fee: i128) -> Result<(), ErrorCode>;

    fn set_withdrawal_lock_duration(
        env: Env,
        sender: Address,
        duration: u64
    ) -> Result<(), ErrorCode>;

    fn set_withdrawal_unlock_duration(
        env: Env,
        sender: Address,
        duration: u64
    ) -> Result<(), ErrorCode>;

    fn set_supply_factor(env: Env, sender: Address, supply_factor: i128) -> Result<(), ErrorCode>;

    fn set_sigmoid_parameters(
        env: Env,
        sender: Address,
        sigmoid: SigmoidParams
    ) -> Result<(), ErrorCode>;

    fn set_lp_reward_address(
        env: Env,
        sender: Address,
        lp_reward_address: Address
    ) -> Result<(), ErrorCode>;

    /// Sends `amount` of any token held by the ledger to `to`. The staked token can only be
    /// claimed out of the reserve.
    fn claim_tokens(
        env: Env,
        sender: Address,
        token: Address,
        to: Address,
        amount: i128
    ) -> Result<(), ErrorCode>;

    // ################################################################
    //                             USER
    // ################################################################

    /// Opens a deposit when `deposit_id` is 0, tops up an existing one otherwise.
    /// Returns the id of the deposit.
    fn deposit(env: Env, sender: Address, deposit_id: u64, amount: i128) -> Result<u64, ErrorCode>;

    /// Called by the staked token after it moved `amount` from `from` to the ledger.
    fn on_token_transfer(
        env: Env,
        token: Address,
        from: Address,
        to: Address,
        amount: i128,
        deposit_id: u64
    ) -> Result<u64, ErrorCode>;

    fn request_withdrawal(env: Env, sender: Address, deposit_id: u64) -> Result<(), ErrorCode>;

    /// Fee free withdrawal inside the unlock window that follows a request.
    fn make_requested_withdrawal(
        env: Env,
        sender: Address,
        deposit_id: u64,
        amount: i128
    ) -> Result<i128, ErrorCode>;

    /// Immediate withdrawal that pays the fee. An `amount` of 0 withdraws everything.
    fn make_forced_withdrawal(
        env: Env,
        sender: Address,
        deposit_id: u64,
        amount: i128
    ) -> Result<i128, ErrorCode>;

    /// Adds tokens that back emission payouts without opening a deposit.
    fn deposit_reserve(env: Env, sender: Address, amount: i128) -> Result<(), ErrorCode>;

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn balances(env: Env, account: Address, deposit_id: u64) -> i128;

    fn deposit_dates(env: Env, account: Address, deposit_id: u64) -> u64;

    fn last_deposit_id(env: Env, account: Address) -> u64;

    fn total_staked(env: Env) -> i128;

    fn withdrawal_requests_dates(env: Env, account: Address, deposit_id: u64) -> u64;

    fn get_supply_based_emission_rate(env: Env) -> Result<i128, ErrorCode>;

    /// `(elapsed, total, user_share)` for `amount` deposited at `timestamp`.
    fn get_accrued_emission(
        env: Env,
        timestamp: u64,
        amount: i128
    ) -> Result<(u64, i128, i128), ErrorCode>;

    fn query_config(env: Env) -> ConfigResponse;

    fn query_parameters(env: Env) -> ParametersResponse;

    fn get_fee(env: Env) -> i128;

    fn get_withdrawal_lock_duration(env: Env) -> u64;

    fn get_withdrawal_unlock_duration(env: Env) -> u64;

    fn get_supply_factor(env: Env) -> i128;

    fn get_sigmoid_parameters(env: Env) -> SigmoidParams;

    fn get_lp_reward_address(env: Env) -> Address;
}
