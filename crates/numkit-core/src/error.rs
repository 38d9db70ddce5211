//! Error type shared by the fallible operations

/// Errors raised by numeric operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumericError {
    /// Input outside the operation's domain
    #[error("invalid argument to {operation}: {value} ({requirement})")]
    InvalidArgument {
        operation: &'static str,
        value: i64,
        requirement: &'static str,
    },

    /// Result does not fit in `i64`
    #[error("{operation}({value}) overflows i64")]
    Overflow { operation: &'static str, value: i64 },
}

pub type Result<T> = std::result::Result<T, NumericError>;

/// Reject `n <= 0` for operations defined on positive integers
pub(crate) fn require_positive(operation: &'static str, n: i64) -> Result<()> {
    if n <= 0 {
        return Err(NumericError::InvalidArgument {
            operation,
            value: n,
            requirement: "must be at least 1",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_positive() {
        assert!(require_positive("op", 1).is_ok());
        assert!(require_positive("op", i64::MAX).is_ok());
        assert_eq!(
            require_positive("op", 0),
            Err(NumericError::InvalidArgument {
                operation: "op",
                value: 0,
                requirement: "must be at least 1",
            })
        );
        assert!(require_positive("op", i64::MIN).is_err());
    }

    #[test]
    fn test_error_display() {
        let err = NumericError::InvalidArgument {
            operation: "divisors_of",
            value: -3,
            requirement: "must be at least 1",
        };
        assert_eq!(
            err.to_string(),
            "invalid argument to divisors_of: -3 (must be at least 1)"
        );

        let err = NumericError::Overflow {
            operation: "pascals_triangle",
            value: 68,
        };
        assert_eq!(err.to_string(), "pascals_triangle(68) overflows i64");
    }
}
