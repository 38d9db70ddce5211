//! Prime divisors and prime factorization
//!
//! [`distinct_prime_divisors_of`] keeps each prime divisor once
//! (72 = 2^3 * 3^2 gives `[2, 3]`). Use [`prime_factorization`] when
//! the multiplicity matters (`[2, 2, 2, 3, 3]`).

use crate::domain::divisors::divisors_of;
use crate::domain::primality::is_prime;
use crate::error::{Result, require_positive};

/// List the distinct primes dividing `n`, ascending
///
/// This is `divisors_of(n)` filtered by `is_prime`. It does not repeat
/// primes that divide `n` more than once.
///
/// # Errors
/// `NumericError::InvalidArgument` if `n <= 0`.
pub fn distinct_prime_divisors_of(n: i64) -> Result<Vec<i64>> {
    require_positive("distinct_prime_divisors_of", n)?;

    let primes = divisors_of(n)?
        .into_iter()
        .filter(|&d| is_prime(d))
        .collect();

    Ok(primes)
}

/// Factor `n` into primes with multiplicity, ascending
///
/// The product of the result equals `n`; `prime_factorization(1)` is empty.
///
/// # Errors
/// `NumericError::InvalidArgument` if `n <= 0`.
pub fn prime_factorization(n: i64) -> Result<Vec<i64>> {
    require_positive("prime_factorization", n)?;

    let mut factors = Vec::new();
    let mut rest = n;
    let mut p = 2;

    while p <= rest / p {
        while rest % p == 0 {
            factors.push(p);
            rest /= p;
        }
        p += 1;
    }
    if rest > 1 {
        factors.push(rest);
    }

    Ok(factors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NumericError;

    #[test]
    fn test_distinct_reference_values() {
        assert_eq!(distinct_prime_divisors_of(2).unwrap(), vec![2]);
        assert_eq!(distinct_prime_divisors_of(19).unwrap(), vec![19]);
        assert_eq!(distinct_prime_divisors_of(72).unwrap(), vec![2, 3]);
        assert_eq!(distinct_prime_divisors_of(196).unwrap(), vec![2, 7]);
    }

    #[test]
    fn test_distinct_of_one_is_empty() {
        assert_eq!(distinct_prime_divisors_of(1).unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn test_factorization_with_multiplicity() {
        assert_eq!(prime_factorization(72).unwrap(), vec![2, 2, 2, 3, 3]);
        assert_eq!(prime_factorization(196).unwrap(), vec![2, 2, 7, 7]);
        assert_eq!(prime_factorization(19).unwrap(), vec![19]);
        assert_eq!(prime_factorization(1).unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn test_factorization_large_prime_remainder() {
        // 2 * 1_000_000_007
        assert_eq!(
            prime_factorization(2_000_000_014).unwrap(),
            vec![2, 1_000_000_007]
        );
    }

    #[test]
    fn test_factorization_dedup_matches_distinct() {
        for n in 1..300 {
            let mut factors = prime_factorization(n).unwrap();
            factors.dedup();
            assert_eq!(factors, distinct_prime_divisors_of(n).unwrap(), "n = {}", n);
        }
    }

    #[test]
    fn test_non_positive_rejected() {
        assert!(matches!(
            distinct_prime_divisors_of(0),
            Err(NumericError::InvalidArgument {
                operation: "distinct_prime_divisors_of",
                value: 0,
                ..
            })
        ));
        assert!(matches!(
            prime_factorization(-12),
            Err(NumericError::InvalidArgument {
                operation: "prime_factorization",
                value: -12,
                ..
            })
        ));
    }
}
