use soroban_sdk::Env;

use crate::{error::AccrualResult, math_error};

use super::bn::U256;

/// `a * b / denominator` rounded down, with a 256-bit intermediate product.
pub fn mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> AccrualResult<u128> {
    if denominator == 0 {
        let err = math_error!(env);
        return Err(err());
    }

    U256::from(a)
        .checked_mul(U256::from(b))
        .ok_or_else(math_error!(env))?
        .checked_div(U256::from(denominator))
        .ok_or_else(math_error!(env))?
        .try_to_u128(env)
}

/// `a * b * c / denominator` rounded down.
pub fn mul3_div(env: &Env, a: u128, b: u128, c: u128, denominator: u128) -> AccrualResult<u128> {
    if denominator == 0 {
        let err = math_error!(env);
        return Err(err());
    }

    U256::from(a)
        .checked_mul(U256::from(b))
        .ok_or_else(math_error!(env))?
        .checked_mul(U256::from(c))
        .ok_or_else(math_error!(env))?
        .checked_div(U256::from(denominator))
        .ok_or_else(math_error!(env))?
        .try_to_u128(env)
}

/// `x * x + y`, pinned to `u128::MAX` instead of overflowing.
pub fn saturating_square_add(x: u128, y: u128) -> u128 {
    x.saturating_mul(x).saturating_add(y)
}
