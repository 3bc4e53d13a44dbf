use accrual::{
    constants::{ PARAM_UPDATE_DELAY, PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD },
    delayed::DelayedParameter,
    error::{ AccrualResult, ErrorCode },
};
use soroban_sdk::{
    contracttype,
    log,
    panic_with_error,
    Address,
    Env,
    IntoVal,
    TryFromVal,
    Val,
};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Initialized,
    Config,
    TotalStaked,
    Parameter(Parameter),
    LastDepositId(Address),
    Deposit(Address, u64),
    WithdrawalRequest(Address, u64),
}

// ################################################################
//                             CONFIG
// ################################################################

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub admin: Address,
    /// Token that is staked and paid out as emission
    pub token: Address,
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().get(&DataKey::Initialized).unwrap_or(false)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&DataKey::Initialized, &true);
}

pub fn save_config(env: &Env, config: Config) {
    env.storage().instance().set(&DataKey::Config, &config);
}

pub fn get_config(env: &Env) -> Config {
    match env.storage().instance().get(&DataKey::Config) {
        Some(config) => config,
        None => {
            log!(env, "Staking: Config: contract is not initialized");
            panic_with_error!(env, ErrorCode::NotInitialized);
        }
    }
}

pub fn get_total_staked(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::TotalStaked).unwrap_or(0)
}

pub fn save_total_staked(env: &Env, total_staked: i128) {
    env.storage().instance().set(&DataKey::TotalStaked, &total_staked);
}

// ################################################################
//                           PARAMETERS
// ################################################################

#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum Parameter {
    Fee = 0,
    WithdrawalLockDuration = 1,
    WithdrawalUnlockDuration = 2,
    SupplyFactor = 3,
    Sigmoid = 4,
    LpRewardAddress = 5,
}

impl Parameter {
    pub fn name(&self) -> &'static str {
        match self {
            Parameter::Fee => "fee",
            Parameter::WithdrawalLockDuration => "withdrawal_lock",
            Parameter::WithdrawalUnlockDuration => "withdrawal_unlock",
            Parameter::SupplyFactor => "supply_factor",
            Parameter::Sigmoid => "sigmoid",
            Parameter::LpRewardAddress => "lp_reward_address",
        }
    }
}

/// Shape of the time based emission curve `a * u / sqrt(u^2 + c)` with `u = elapsed - b`.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SigmoidParams {
    /// Asymptotic rate, scaled by `SCALE`
    pub a: i128,
    /// Shift in seconds before the curve starts rising
    pub b: i64,
    /// Steepness; must be positive
    pub c: i128,
}

pub fn get_parameter<T>(env: &Env, param: Parameter) -> DelayedParameter<T>
    where T: Clone, (T, T, u64): TryFromVal<Env, Val>
{
    match env.storage().instance().get::<_, (T, T, u64)>(&DataKey::Parameter(param)) {
        Some(parts) => DelayedParameter::from_parts(parts),
        None => {
            log!(env, "Staking: Parameter: contract is not initialized");
            panic_with_error!(env, ErrorCode::NotInitialized);
        }
    }
}

pub fn save_parameter<T>(env: &Env, param: Parameter, value: DelayedParameter<T>)
    where T: Clone, (T, T, u64): IntoVal<Env, Val>
{
    env.storage().instance().set(&DataKey::Parameter(param), &value.into_parts());
}

/// Value of `param` in force right now.
pub fn effective<T>(env: &Env, param: Parameter) -> T
    where T: Clone, (T, T, u64): TryFromVal<Env, Val>
{
    get_parameter::<T>(env, param).value(env.ledger().timestamp(), PARAM_UPDATE_DELAY)
}

pub fn get_fee(env: &Env) -> i128 {
    effective(env, Parameter::Fee)
}

pub fn get_withdrawal_lock_duration(env: &Env) -> u64 {
    effective(env, Parameter::WithdrawalLockDuration)
}

pub fn get_withdrawal_unlock_duration(env: &Env) -> u64 {
    effective(env, Parameter::WithdrawalUnlockDuration)
}

pub fn get_supply_factor(env: &Env) -> i128 {
    effective(env, Parameter::SupplyFactor)
}

pub fn get_sigmoid(env: &Env) -> SigmoidParams {
    effective(env, Parameter::Sigmoid)
}

pub fn get_lp_reward_address(env: &Env) -> Address {
    effective(env, Parameter::LpRewardAddress)
}

// ################################################################
//                            DEPOSITS
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deposit {
    /// Staked amount including compounded emission
    pub principal: i128,
    /// Last time the deposit clock was reset
    pub timestamp: u64,
}

pub fn get_last_deposit_id(env: &Env, account: &Address) -> u64 {
    let key = DataKey::LastDepositId(account.clone());
    let last_id = env.storage().persistent().get(&key).unwrap_or(0);
    if last_id > 0 {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    }
    last_id
}

pub fn save_last_deposit_id(env: &Env, account: &Address, id: u64) {
    let key = DataKey::LastDepositId(account.clone());
    env.storage().persistent().set(&key, &id);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Deposit under `(account, id)`, or the zeroed default if it was never opened or is retired.
pub fn get_deposit(env: &Env, account: &Address, id: u64) -> Deposit {
    let key = DataKey::Deposit(account.clone(), id);
    match env.storage().persistent().get(&key) {
        Some(deposit) => {
            env.storage()
                .persistent()
                .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
            deposit
        }
        None => Deposit::default(),
    }
}

pub fn get_active_deposit(env: &Env, account: &Address, id: u64) -> AccrualResult<Deposit> {
    let deposit = get_deposit(env, account, id);
    if id == 0 || deposit.principal == 0 {
        log!(env, "Staking: Deposit: wrong deposit id", id);
        return Err(ErrorCode::WrongDepositId);
    }
    Ok(deposit)
}

pub fn save_deposit(env: &Env, account: &Address, id: u64, deposit: &Deposit) {
    let key = DataKey::Deposit(account.clone(), id);
    env.storage().persistent().set(&key, deposit);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn remove_deposit(env: &Env, account: &Address, id: u64) {
    env.storage().persistent().remove(&DataKey::Deposit(account.clone(), id));
}

// ################################################################
//                       WITHDRAWAL REQUESTS
// ################################################################

pub fn get_withdrawal_request(env: &Env, account: &Address, id: u64) -> Option<u64> {
    let key = DataKey::WithdrawalRequest(account.clone(), id);
    let requested_at = env.storage().persistent().get(&key);
    if requested_at.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    }
    requested_at
}

pub fn save_withdrawal_request(env: &Env, account: &Address, id: u64, requested_at: u64) {
    let key = DataKey::WithdrawalRequest(account.clone(), id);
    env.storage().persistent().set(&key, &requested_at);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn remove_withdrawal_request(env: &Env, account: &Address, id: u64) {
    env.storage().persistent().remove(&DataKey::WithdrawalRequest(account.clone(), id));
}
