use accrual::constants::{ ONE_DAY, ONE_HOUR };
use soroban_sdk::{ testutils::{ Address as _, Ledger }, Address, Env };

use super::token::{ MockToken, MockTokenClient };
use crate::{ contract::{ Staking, StakingClient }, storage::SigmoidParams };

/// 3%
pub const FEE: i128 = 30_000_000_000_000_000;
pub const WITHDRAWAL_LOCK: u64 = 12 * ONE_HOUR;
pub const WITHDRAWAL_UNLOCK: u64 = 12 * ONE_HOUR;
/// 50%
pub const SUPPLY_FACTOR: i128 = 500_000_000_000_000_000;
/// 7.5%, half the max rate
pub const SIGMOID_A: i128 = 75_000_000_000_000_000;

/// Ledger time the tests start at.
pub const START: u64 = ONE_DAY;

/// With `c == 1` the time based rate is `a` for any positive elapsed time.
pub fn flat_sigmoid() -> SigmoidParams {
    SigmoidParams {
        a: SIGMOID_A,
        b: 0,
        c: 1,
    }
}

pub fn deploy_token_contract<'a>(env: &Env) -> MockTokenClient<'a> {
    MockTokenClient::new(env, &env.register(MockToken, ()))
}

pub fn deploy_staking_contract<'a>(
    env: &Env,
    admin: &Address,
    token: &Address,
    lp_reward_address: &Address
) -> StakingClient<'a> {
    let staking = StakingClient::new(env, &env.register(Staking, ()));

    staking.initialize(
        admin,
        token,
        lp_reward_address,
        &FEE,
        &WITHDRAWAL_LOCK,
        &WITHDRAWAL_UNLOCK,
        &SUPPLY_FACTOR,
        &flat_sigmoid()
    );
    staking
}

pub struct Setup<'a> {
    pub env: Env,
    pub admin: Address,
    pub lp: Address,
    pub token: MockTokenClient<'a>,
    pub staking: StakingClient<'a>,
}

impl<'a> Setup<'a> {
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.cost_estimate().budget().reset_unlimited();
        env.ledger().with_mut(|li| {
            li.timestamp = START;
        });

        let admin = Address::generate(&env);
        let lp = Address::generate(&env);
        let token = deploy_token_contract(&env);
        let staking = deploy_staking_contract(&env, &admin, &token.address, &lp);

        Setup { env, admin, lp, token, staking }
    }

    /// New account holding `amount` of the staked token.
    pub fn funded_user(&self, amount: i128) -> Address {
        let user = Address::generate(&self.env);
        self.token.mint(&user, &amount);
        user
    }

    /// Mints `amount` to the admin and moves it all into the reserve.
    pub fn fund_reserve(&self, amount: i128) {
        self.token.mint(&self.admin, &amount);
        self.staking.deposit_reserve(&self.admin, &amount);
    }

    pub fn jump(&self, seconds: u64) {
        self.env.ledger().with_mut(|li| {
            li.timestamp += seconds;
        });
    }

    pub fn now(&self) -> u64 {
        self.env.ledger().timestamp()
    }
}
