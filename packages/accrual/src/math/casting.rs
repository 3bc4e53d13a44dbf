use soroban_sdk::{log, Env};

use crate::error::{AccrualResult, ErrorCode};

pub trait Cast: Sized {
    #[track_caller]
    #[inline(always)]
    fn cast<T: TryFrom<Self>>(self, env: &Env) -> AccrualResult<T> {
        match T::try_from(self) {
            Ok(result) => Ok(result),
            Err(_) => {
                log!(env, "Casting error thrown at line {}", line!());
                Err(ErrorCode::CastingFailure)
            }
        }
    }
}

impl Cast for u128 {}
impl Cast for u64 {}
impl Cast for u32 {}
impl Cast for i128 {}
impl Cast for i64 {}

#[cfg(test)]
mod test {
    use super::Cast;
    use crate::error::ErrorCode;
    use soroban_sdk::Env;

    #[test]
    fn cast() {
        let env = Env::default();
        assert_eq!(5_i128.cast::<u128>(&env), Ok(5));
        assert_eq!((-1_i128).cast::<u128>(&env), Err(ErrorCode::CastingFailure));
        assert_eq!(u128::MAX.cast::<i128>(&env), Err(ErrorCode::CastingFailure));
        assert_eq!(u64::MAX.cast::<i128>(&env), Ok(u64::MAX as i128));
    }
}
