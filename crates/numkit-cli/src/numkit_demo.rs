//! Self-test demo for every numkit operation
//!
//! Usage: numkit_demo [options]
//!
//! Prints one labeled section per operation. Inputs default to the values in
//! `numkit_core::constants`; each list option may be repeated to replace them.
//! A case that fails is reported and the run moves on to the next one.
//!
//! Example:
//!   numkit_demo --factor 72 --factor 0 --rows 8

mod logging;

use clap::Parser;
use numkit_core::constants::{
    CLASSIFY_DEMO_INPUTS, FACTOR_DEMO_INPUTS, FIBONACCI_DEMO_LIMIT, PASCAL_DEMO_ROWS,
    PRIME_DEMO_INPUTS, PRINT_VECTOR_DEMO,
};
use numkit_core::{
    NumericError, describe, distinct_prime_divisors_of, divisors_of, fibonacci_up_to, is_prime,
    pascals_triangle, render_triangle, write_sequence,
};
use std::io::{self, Write};

#[derive(Parser)]
#[command(name = "numkit_demo", about = "Run the labeled numkit self-tests")]
struct Cli {
    /// Values for the sign classification test
    #[arg(long = "classify", allow_hyphen_values = true)]
    classify: Vec<i64>,

    /// Upper bound for the Fibonacci test
    #[arg(long, default_value_t = FIBONACCI_DEMO_LIMIT, allow_hyphen_values = true)]
    fib_limit: i64,

    /// Values for the primality test
    #[arg(long = "prime", allow_hyphen_values = true)]
    primes: Vec<i64>,

    /// Values for the divisor and prime divisor tests
    #[arg(long = "factor", allow_hyphen_values = true)]
    factors: Vec<i64>,

    /// Row count for the Pascal's triangle test
    #[arg(long, default_value_t = PASCAL_DEMO_ROWS, allow_hyphen_values = true)]
    rows: i64,
}

/// Inputs after applying defaults for omitted list options
struct DemoInputs {
    classify: Vec<i64>,
    fib_limit: i64,
    primes: Vec<i64>,
    factors: Vec<i64>,
    rows: i64,
}

impl From<Cli> for DemoInputs {
    fn from(cli: Cli) -> Self {
        fn or_default(values: Vec<i64>, default: &[i64]) -> Vec<i64> {
            if values.is_empty() {
                default.to_vec()
            } else {
                values
            }
        }

        Self {
            classify: or_default(cli.classify, &CLASSIFY_DEMO_INPUTS),
            fib_limit: cli.fib_limit,
            primes: or_default(cli.primes, &PRIME_DEMO_INPUTS),
            factors: or_default(cli.factors, &FACTOR_DEMO_INPUTS),
            rows: cli.rows,
        }
    }
}

fn report_failure(case: &str, err: &NumericError) {
    tracing::warn!(case, error = %err, "demo case failed");
    eprintln!("Error in {}: {}", case, err);
}

fn run<W: Write>(out: &mut W, inputs: &DemoInputs) -> io::Result<usize> {
    let mut failures = 0;

    writeln!(out, "Testing all functions:")?;

    writeln!(out, "\nTesting conditionalStatements:")?;
    for &x in &inputs.classify {
        writeln!(out, "Input: {}, Output: {}", x, describe(x))?;
    }

    writeln!(out, "\nTesting print_vector:")?;
    write!(out, "The vector contains: ")?;
    write_sequence(out, &PRINT_VECTOR_DEMO)?;

    writeln!(out, "\nTesting fibonacci_sequence:")?;
    writeln!(out, "Fibonacci sequence terms up to {}:", inputs.fib_limit)?;
    write_sequence(out, &fibonacci_up_to(inputs.fib_limit))?;

    writeln!(out, "\nTesting isprime:")?;
    for &n in &inputs.primes {
        writeln!(out, "isprime({}) = {}", n, is_prime(n))?;
    }

    writeln!(out, "\nTesting factorize:")?;
    for &n in &inputs.factors {
        match divisors_of(n) {
            Ok(divisors) => {
                write!(out, "Factors of {}: ", n)?;
                write_sequence(out, &divisors)?;
            }
            Err(e) => {
                report_failure("factorize", &e);
                failures += 1;
            }
        }
    }

    writeln!(out, "\nTesting prime_factorize:")?;
    for &n in &inputs.factors {
        match distinct_prime_divisors_of(n) {
            Ok(primes) => {
                write!(out, "Prime factors of {}: ", n)?;
                write_sequence(out, &primes)?;
            }
            Err(e) => {
                report_failure("prime_factorize", &e);
                failures += 1;
            }
        }
    }

    writeln!(out, "\nTesting print_pascals_triangle:")?;
    writeln!(out, "Pascal's Triangle with {} rows:", inputs.rows)?;
    match pascals_triangle(inputs.rows) {
        Ok(triangle) => write!(out, "{}", render_triangle(&triangle))?,
        Err(e) => {
            report_failure("pascal_triangle", &e);
            failures += 1;
        }
    }

    Ok(failures)
}

fn main() {
    logging::init();
    let inputs = DemoInputs::from(Cli::parse());

    let stdout = io::stdout();
    let mut writer = stdout.lock();

    match run(&mut writer, &inputs) {
        Ok(0) => {}
        Ok(failures) => tracing::info!(failures, "demo finished with failed cases"),
        Err(e) => {
            tracing::error!(error = %e, "failed to write demo output");
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
