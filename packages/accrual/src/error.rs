use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    #[doc = "Fee, duration, supply factor or sigmoid value outside its allowed range"]
    InvalidParameterRange = 4,
    #[doc = "Recipient is the ledger itself"]
    InvalidRecipient = 5,
    ZeroAmount = 6,
    #[doc = "Deposit id was never issued or has been retired"]
    WrongDepositId = 7,
    #[doc = "Withdraw or claim exceeds the available principal or reserve"]
    InsufficientFunds = 8,
    WithdrawalNotRequested = 9,
    TooEarly = 10,
    TooLate = 11,
    #[doc = "Both emission components are switched off"]
    EmissionStopped = 12,
    MathError = 13,
    CastingFailure = 14,
}

pub type AccrualResult<T = ()> = core::result::Result<T, ErrorCode>;
