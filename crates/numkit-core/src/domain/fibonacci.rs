//! Fibonacci sequence generation
//!
//! Terms follow F(0) = 0, F(1) = 1, F(n) = F(n-1) + F(n-2).

/// Iterator over the Fibonacci sequence
///
/// Yields F(0), F(1), ... and ends after F(92), the last term that fits in `i64`.
#[derive(Clone, Debug)]
pub struct Fibonacci {
    current: Option<i64>,
    next: Option<i64>,
}

impl Fibonacci {
    /// Create an iterator starting at F(0)
    pub fn new() -> Self {
        Self {
            current: Some(0),
            next: Some(1),
        }
    }
}

impl Default for Fibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Fibonacci {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let current = self.current?;
        // None once the following term no longer fits
        let following = self.next.and_then(|next| current.checked_add(next));
        self.current = self.next;
        self.next = following;
        Some(current)
    }
}

impl std::iter::FusedIterator for Fibonacci {}

/// Collect Fibonacci terms while the term is `<= limit`
///
/// Returns an empty vector for negative limits; otherwise the result starts with 0.
pub fn fibonacci_up_to(limit: i64) -> Vec<i64> {
    Fibonacci::new().take_while(|&term| term <= limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FIBONACCI_I64_TERMS;

    #[test]
    fn test_first_terms() {
        let terms: Vec<i64> = Fibonacci::new().take(10).collect();
        assert_eq!(terms, vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
    }

    #[test]
    fn test_up_to_small_limits() {
        assert_eq!(fibonacci_up_to(-1), Vec::<i64>::new());
        assert_eq!(fibonacci_up_to(i64::MIN), Vec::<i64>::new());
        assert_eq!(fibonacci_up_to(0), vec![0]);
        assert_eq!(fibonacci_up_to(1), vec![0, 1, 1]);
        assert_eq!(fibonacci_up_to(4), vec![0, 1, 1, 2, 3]);
        assert_eq!(fibonacci_up_to(5), vec![0, 1, 1, 2, 3, 5]);
    }

    #[test]
    fn test_up_to_demo_limit() {
        let terms = fibonacci_up_to(4_000_000);
        assert_eq!(terms.len(), 34);
        assert_eq!(*terms.last().unwrap(), 3_524_578);
    }

    #[test]
    fn test_iterator_ends_before_overflow() {
        let terms: Vec<i64> = Fibonacci::new().collect();
        assert_eq!(terms.len(), FIBONACCI_I64_TERMS);
        assert_eq!(*terms.last().unwrap(), 7_540_113_804_746_346_429);
    }

    #[test]
    fn test_up_to_max_limit() {
        let terms = fibonacci_up_to(i64::MAX);
        assert_eq!(terms.len(), FIBONACCI_I64_TERMS);
    }

    #[test]
    fn test_fused() {
        let mut fib = Fibonacci::new();
        for _ in 0..FIBONACCI_I64_TERMS {
            assert!(fib.next().is_some());
        }
        assert_eq!(fib.next(), None);
        assert_eq!(fib.next(), None);
    }
}
