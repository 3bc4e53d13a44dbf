// ################################################################
//                          Fixed point
// ################################################################

/// Precision of rates, the fee and the supply factor (18 decimals).
pub const SCALE: i128 = 1_000_000_000_000_000_000;

/// Highest yearly emission rate a deposit can earn (15%).
pub const MAX_EMISSION_RATE: i128 = 150_000_000_000_000_000;

// ################################################################
//                             Time
// ################################################################

pub const ONE_HOUR: u64 = 3_600;
pub const ONE_DAY: u64 = 24 * ONE_HOUR;
pub const THIRTY_DAYS: u64 = 30 * ONE_DAY;
pub const YEAR: u64 = 365 * ONE_DAY;

/// Time a staged governance value waits before it becomes effective.
pub const PARAM_UPDATE_DELAY: u64 = 7 * ONE_DAY;

// ################################################################
//                              TTL
// ################################################################

pub const DAY_IN_LEDGERS: u32 = 17280;

pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;
