use soroban_sdk::{ contractclient, Address, Env };

/// The parts of the staked token the ledger calls into.
#[contractclient(name = "StakingTokenClient")]
pub trait StakingTokenInterface {
    fn balance(env: Env, id: Address) -> i128;

    fn transfer(env: Env, from: Address, to: Address, amount: i128);

    fn total_supply(env: Env) -> i128;
}
