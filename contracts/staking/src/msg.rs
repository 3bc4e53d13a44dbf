use soroban_sdk::{ contracttype, Address };

use crate::storage::{ Config, SigmoidParams };

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfigResponse {
    pub config: Config,
}

/// Governance values in force at the time of the query.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParametersResponse {
    pub fee: i128,
    pub withdrawal_lock_duration: u64,
    pub withdrawal_unlock_duration: u64,
    pub supply_factor: i128,
    pub sigmoid: SigmoidParams,
    pub lp_reward_address: Address,
}
