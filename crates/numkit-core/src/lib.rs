//! numkit-core - Small integer utilities
//!
//! This crate provides pure functions over `i64` for:
//! - Sign classification
//! - Rendering integer sequences as text
//! - Fibonacci generation up to a bound
//! - Primality testing, divisor enumeration and prime divisors
//! - Pascal's triangle construction

pub mod constants;
pub mod domain;
pub mod error;

// Re-export commonly used types
pub use domain::divisors::divisors_of;
pub use domain::factorize::{distinct_prime_divisors_of, prime_factorization};
pub use domain::fibonacci::{Fibonacci, fibonacci_up_to};
pub use domain::primality::is_prime;
pub use domain::sequence::{render_sequence, render_triangle, write_sequence};
pub use domain::sign::{Sign, classify, describe};
pub use domain::triangle::pascals_triangle;
pub use error::{NumericError, Result};
