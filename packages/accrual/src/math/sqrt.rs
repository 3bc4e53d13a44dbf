/// Integer square root, rounded down.
///
/// Newton iteration seeded from `x / 2`. The averaging step is split so no
/// intermediate sum can overflow for inputs close to `u128::MAX`.
pub fn integer_sqrt(x: u128) -> u128 {
    if x < 2 {
        return x;
    }

    let mut a = x / 2 + (x & 1);
    loop {
        let b = x / a;
        if b >= a {
            return a;
        }
        a = a / 2 + b / 2 + (a & b & 1);
    }
}
