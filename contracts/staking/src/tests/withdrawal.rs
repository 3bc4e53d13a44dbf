use accrual::{ constants::YEAR, error::ErrorCode };
use pretty_assertions::assert_eq;
use soroban_sdk::Address;

use super::setup::{ Setup, START, WITHDRAWAL_LOCK, WITHDRAWAL_UNLOCK };

const AMOUNT: i128 = 1_000_000_000;
const SUPPLY: i128 = 10_000_000_000;

/// One deposit of `AMOUNT` at `START` with a reserve that brings supply to `SUPPLY`.
fn staked() -> (Setup<'static>, Address) {
    let setup = Setup::new();
    let user = setup.funded_user(AMOUNT);
    setup.fund_reserve(SUPPLY - AMOUNT);
    setup.staking.deposit(&user, &0, &AMOUNT);
    (setup, user)
}

#[test]
fn forced_withdrawal_of_everything() {
    let (setup, user) = staked();
    setup.jump(YEAR / 8);

    // payout 1_011_250_000, fee 3% of it
    let received = setup.staking.make_forced_withdrawal(&user, &1, &0);

    assert_eq!(received, 980_912_500);
    assert_eq!(setup.token.balance(&user), 980_912_500);
    assert_eq!(setup.token.balance(&setup.lp), 30_337_500 + 7_500_000);
    assert_eq!(setup.staking.balances(&user, &1), 0);
    assert_eq!(setup.staking.deposit_dates(&user, &1), 0);
    assert_eq!(setup.staking.total_staked(), 0);
}

#[test]
fn partial_forced_withdrawal_keeps_clock() {
    let (setup, user) = staked();
    setup.jump(YEAR / 8);

    let received = setup.staking.make_forced_withdrawal(&user, &1, &(AMOUNT / 2));

    // payout 505_625_000, fee 15_168_750
    assert_eq!(received, 490_456_250);
    assert_eq!(setup.token.balance(&setup.lp), 15_168_750 + 3_750_000);
    assert_eq!(setup.staking.balances(&user, &1), AMOUNT / 2);
    assert_eq!(setup.staking.deposit_dates(&user, &1), START);
    assert_eq!(setup.staking.total_staked(), AMOUNT / 2);
}

#[test]
fn forced_withdrawal_without_elapsed_time_only_pays_fee() {
    let (setup, user) = staked();

    let received = setup.staking.make_forced_withdrawal(&user, &1, &0);

    assert_eq!(received, AMOUNT - AMOUNT * 3 / 100);
    assert_eq!(setup.token.balance(&setup.lp), AMOUNT * 3 / 100);
}

#[test]
fn withdrawing_more_than_principal_fails() {
    let (setup, user) = staked();

    assert_eq!(
        setup.staking.try_make_forced_withdrawal(&user, &1, &(AMOUNT + 1)),
        Err(Ok(ErrorCode::InsufficientFunds))
    );
    assert_eq!(
        setup.staking.try_make_forced_withdrawal(&user, &1, &-1),
        Err(Ok(ErrorCode::ZeroAmount))
    );
    assert_eq!(
        setup.staking.try_make_forced_withdrawal(&user, &2, &0),
        Err(Ok(ErrorCode::WrongDepositId))
    );
}

#[test]
fn withdrawal_fails_without_reserve() {
    let setup = Setup::new();
    let user = setup.funded_user(AMOUNT);
    setup.staking.deposit(&user, &0, &AMOUNT);
    setup.jump(YEAR / 8);

    assert_eq!(
        setup.staking.try_make_forced_withdrawal(&user, &1, &0),
        Err(Ok(ErrorCode::InsufficientFunds))
    );
    assert_eq!(setup.staking.balances(&user, &1), AMOUNT);
    assert_eq!(setup.staking.total_staked(), AMOUNT);
}

#[test]
fn requested_withdrawal_is_fee_free() {
    let (setup, user) = staked();
    setup.jump(YEAR / 8 - WITHDRAWAL_LOCK);

    setup.staking.request_withdrawal(&user, &1);
    assert_eq!(setup.staking.withdrawal_requests_dates(&user, &1), setup.now());

    setup.jump(WITHDRAWAL_LOCK);
    let received = setup.staking.make_requested_withdrawal(&user, &1, &0);

    assert_eq!(received, 1_011_250_000);
    assert_eq!(setup.token.balance(&setup.lp), 7_500_000);
    assert_eq!(setup.staking.balances(&user, &1), 0);
    assert_eq!(setup.staking.withdrawal_requests_dates(&user, &1), 0);
}

#[test]
fn requested_withdrawal_window_bounds() {
    let (setup, user) = staked();
    setup.staking.request_withdrawal(&user, &1);

    setup.jump(WITHDRAWAL_LOCK - 1);
    assert_eq!(
        setup.staking.try_make_requested_withdrawal(&user, &1, &0),
        Err(Ok(ErrorCode::TooEarly))
    );

    setup.jump(WITHDRAWAL_UNLOCK + 2);
    assert_eq!(
        setup.staking.try_make_requested_withdrawal(&user, &1, &0),
        Err(Ok(ErrorCode::TooLate))
    );

    // the last second of the window still counts
    setup.staking.request_withdrawal(&user, &1);
    setup.jump(WITHDRAWAL_LOCK + WITHDRAWAL_UNLOCK);
    setup.staking.make_requested_withdrawal(&user, &1, &(AMOUNT / 4));

    assert_eq!(setup.staking.balances(&user, &1), AMOUNT * 3 / 4);
    assert_eq!(setup.staking.deposit_dates(&user, &1), START);
    assert_eq!(setup.staking.withdrawal_requests_dates(&user, &1), 0);
}

#[test]
fn requested_withdrawal_needs_request() {
    let (setup, user) = staked();

    assert_eq!(
        setup.staking.try_make_requested_withdrawal(&user, &1, &0),
        Err(Ok(ErrorCode::WithdrawalNotRequested))
    );
    assert_eq!(
        setup.staking.try_request_withdrawal(&user, &2),
        Err(Ok(ErrorCode::WrongDepositId))
    );
}

#[test]
fn new_request_resets_the_clock() {
    let (setup, user) = staked();
    setup.staking.request_withdrawal(&user, &1);

    setup.jump(WITHDRAWAL_LOCK / 2);
    setup.staking.request_withdrawal(&user, &1);
    assert_eq!(setup.staking.withdrawal_requests_dates(&user, &1), setup.now());

    setup.jump(WITHDRAWAL_LOCK / 2);
    assert_eq!(
        setup.staking.try_make_requested_withdrawal(&user, &1, &0),
        Err(Ok(ErrorCode::TooEarly))
    );
}

#[test]
fn full_forced_withdrawal_clears_request() {
    let (setup, user) = staked();
    setup.staking.request_withdrawal(&user, &1);

    setup.staking.make_forced_withdrawal(&user, &1, &0);

    assert_eq!(setup.staking.withdrawal_requests_dates(&user, &1), 0);
}

#[test]
fn total_staked_matches_sum_of_principals() {
    let setup = Setup::new();
    setup.fund_reserve(1_000_000_000_000_000);
    let users = [
        setup.funded_user(1_000_000_000_000),
        setup.funded_user(1_000_000_000_000),
        setup.funded_user(1_000_000_000_000),
    ];

    let mut seed: u64 = 42;
    let mut next = move || {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        seed >> 33
    };

    for _ in 0..60 {
        let user = &users[(next() % 3) as usize];
        let last_id = setup.staking.last_deposit_id(user);
        let amount = ((next() % 1_000_000) + 1) as i128;

        match next() % 3 {
            0 => {
                setup.staking.deposit(user, &0, &amount);
            }
            1 if last_id > 0 => {
                let id = (next() % last_id) + 1;
                if setup.staking.balances(user, &id) > 0 {
                    setup.staking.deposit(user, &id, &amount);
                }
            }
            _ if last_id > 0 => {
                let id = (next() % last_id) + 1;
                let principal = setup.staking.balances(user, &id);
                if principal > 0 {
                    let take = if next() % 2 == 0 { 0 } else { (amount % principal) + 1 };
                    setup.staking.make_forced_withdrawal(user, &id, &take);
                }
            }
            _ => {}
        }

        setup.jump(next() % (YEAR / 12));

        let mut sum = 0;
        for account in users.iter() {
            for id in 1..=setup.staking.last_deposit_id(account) {
                let principal = setup.staking.balances(account, &id);
                assert_eq!(principal == 0, setup.staking.deposit_dates(account, &id) == 0);
                sum += principal;
            }
        }
        assert_eq!(setup.staking.total_staked(), sum);
    }
}
