#![no_std]

mod contract;
mod controller;
mod events;
mod interfaces;
mod math;
pub mod msg;
mod staking;
pub mod storage;

pub use contract::{Staking, StakingClient};

#[cfg(test)]
mod tests;
