#![no_std]

pub mod constants;
pub mod delayed;
pub mod error;
pub mod macros;
pub mod math;
