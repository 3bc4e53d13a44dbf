use soroban_sdk::{ Address, Env, IntoVal, Symbol, Val };

use crate::storage::Parameter;

pub struct StakingEvents {}

impl StakingEvents {
    /// Emitted when the ledger is initialized
    ///
    /// - topics - `["initialize", admin: Address]`
    /// - data - `token: Address`
    pub fn initialize(env: &Env, admin: Address, token: Address) {
        let topics = (Symbol::new(env, "initialize"), admin);
        env.events().publish(topics, token);
    }

    /// Emitted when a deposit is opened or topped up
    ///
    /// - topics - `["deposited", sender: Address, deposit_id: u64]`
    /// - data - `[amount: i128, principal: i128, ts: u64]`
    pub fn deposited(
        env: &Env,
        sender: Address,
        deposit_id: u64,
        amount: i128,
        principal: i128,
        ts: u64
    ) {
        let topics = (Symbol::new(env, "deposited"), sender, deposit_id);
        env.events().publish(topics, (amount, principal, ts));
    }

    /// Emitted when emission on a deposit is realised
    ///
    /// - topics - `["accrued", sender: Address, deposit_id: u64]`
    /// - data - `[elapsed: u64, total: i128, user_share: i128]`
    pub fn accrued(
        env: &Env,
        sender: Address,
        deposit_id: u64,
        elapsed: u64,
        total: i128,
        user_share: i128
    ) {
        let topics = (Symbol::new(env, "accrued"), sender, deposit_id);
        env.events().publish(topics, (elapsed, total, user_share));
    }

    /// - topics - `["withdrawal_requested", sender: Address, deposit_id: u64]`
    /// - data - `requested_at: u64`
    pub fn withdrawal_requested(env: &Env, sender: Address, deposit_id: u64, requested_at: u64) {
        let topics = (Symbol::new(env, "withdrawal_requested"), sender, deposit_id);
        env.events().publish(topics, requested_at);
    }

    /// Emitted when tokens leave a deposit
    ///
    /// - topics - `["withdrawn", sender: Address, deposit_id: u64]`
    /// - data - `[payout: i128, fee: i128, principal: i128]`
    pub fn withdrawn(
        env: &Env,
        sender: Address,
        deposit_id: u64,
        payout: i128,
        fee: i128,
        principal: i128
    ) {
        let topics = (Symbol::new(env, "withdrawn"), sender, deposit_id);
        env.events().publish(topics, (payout, fee, principal));
    }

    /// - topics - `["reserve_deposited", sender: Address]`
    /// - data - `amount: i128`
    pub fn reserve_deposited(env: &Env, sender: Address, amount: i128) {
        let topics = (Symbol::new(env, "reserve_deposited"), sender);
        env.events().publish(topics, amount);
    }

    /// - topics - `["tokens_claimed", token: Address, to: Address]`
    /// - data - `amount: i128`
    pub fn tokens_claimed(env: &Env, token: Address, to: Address, amount: i128) {
        let topics = (Symbol::new(env, "tokens_claimed"), token, to);
        env.events().publish(topics, amount);
    }

    /// Emitted when a governance value is staged
    ///
    /// - topics - `["param_staged", name: Symbol]`
    /// - data - `[value, sender: Address]`
    pub fn parameter_staged<T>(env: &Env, param: Parameter, value: T, sender: Address)
        where T: IntoVal<Env, Val>
    {
        let topics = (Symbol::new(env, "param_staged"), Symbol::new(env, param.name()));
        let value: Val = value.into_val(env);
        env.events().publish(topics, (value, sender));
    }
}
