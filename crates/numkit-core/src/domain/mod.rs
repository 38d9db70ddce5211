//! Domain layer - Pure computational logic
//!
//! This module contains pure functions without I/O dependencies,
//! apart from the writer-based sequence renderer.

pub mod divisors;
pub mod factorize;
pub mod fibonacci;
pub mod primality;
pub mod sequence;
pub mod sign;
pub mod triangle;
