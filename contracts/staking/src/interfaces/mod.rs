pub mod staking_token;
