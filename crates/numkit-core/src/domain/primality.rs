//! Primality testing by trial division

/// Check whether `n` is prime
///
/// Returns `false` for `n <= 1`. Otherwise tries every divisor `i` with
/// `i * i <= n`, using the bound `i <= n / i` so that the check stays in
/// integer arithmetic and never overflows.
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }

    let mut i = 2;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }

    true
}
