//! Demo inputs and numeric limits
//!
//! The demo values reproduce the inputs of the original self-test run.

// =============================================================================
// Demo inputs
// =============================================================================

/// Values classified by the sign demo
pub const CLASSIFY_DEMO_INPUTS: [i64; 4] = [1, -1, 0, 5];

/// Sequence rendered by the print demo
pub const PRINT_VECTOR_DEMO: [i64; 5] = [1, 2, 3, 4, 5];

/// Upper bound for the Fibonacci demo
pub const FIBONACCI_DEMO_LIMIT: i64 = 4_000_000;

/// Values checked by the primality demo
pub const PRIME_DEMO_INPUTS: [i64; 3] = [2, 10, 17];

/// Values factorized by the divisor and prime divisor demos
pub const FACTOR_DEMO_INPUTS: [i64; 4] = [2, 19, 72, 196];

/// Row count for the Pascal's triangle demo
pub const PASCAL_DEMO_ROWS: i64 = 5;

// =============================================================================
// Limits
// =============================================================================

/// Largest row count whose entries all fit in `i64`
///
/// Row index 66 peaks at C(66, 33) = 7,219,428,434,016,265,740.
/// Row index 67 would need C(67, 33) ≈ 1.42e19, past `i64::MAX`.
pub const PASCAL_MAX_ROWS: i64 = 67;

/// Number of Fibonacci terms representable in `i64` (F(0) through F(92))
pub const FIBONACCI_I64_TERMS: usize = 93;
