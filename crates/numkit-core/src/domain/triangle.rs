//! Pascal's triangle construction

use crate::error::{NumericError, Result};

/// Build the first `n` rows of Pascal's triangle
///
/// Row `i` has `i + 1` entries; both ends are 1 and each interior entry is
/// the sum of the two entries above it. `n = 0` gives an empty table.
///
/// # Errors
/// * `NumericError::InvalidArgument` if `n < 0`
/// * `NumericError::Overflow` if an entry exceeds `i64` (from `n = 68` on)
pub fn pascals_triangle(n: i64) -> Result<Vec<Vec<i64>>> {
    if n < 0 {
        return Err(NumericError::InvalidArgument {
            operation: "pascals_triangle",
            value: n,
            requirement: "must not be negative",
        });
    }

    let overflow = NumericError::Overflow {
        operation: "pascals_triangle",
        value: n,
    };
    let rows = usize::try_from(n).map_err(|_| overflow.clone())?;

    let mut triangle: Vec<Vec<i64>> = Vec::with_capacity(rows.min(128));
    for i in 0..rows {
        let mut row = vec![1i64; i + 1];
        if let Some(prev) = triangle.last() {
            for j in 1..i {
                row[j] = prev[j - 1]
                    .checked_add(prev[j])
                    .ok_or_else(|| overflow.clone())?;
            }
        }
        triangle.push(row);
    }

    Ok(triangle)
}
