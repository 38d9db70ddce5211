//! Divisor enumeration

use crate::error::{Result, require_positive};

/// List every positive divisor of `n` in ascending order
///
/// Candidates `1..=n/2` are tested, then `n` itself is appended,
/// so `divisors_of(1)` is `[1]`.
///
/// # Errors
/// `NumericError::InvalidArgument` if `n <= 0`.
pub fn divisors_of(n: i64) -> Result<Vec<i64>> {
    require_positive("divisors_of", n)?;

    let mut divisors: Vec<i64> = (1..=n / 2).filter(|d| n % d == 0).collect();
    divisors.push(n);

    Ok(divisors)
}
