//! Interactive sign classifier
//!
//! Usage: numkit_classify [--once <X>]
//!
//! Without `--once`, prompts for numbers until 'q' (or 'quit') is entered.
//!
//! Example:
//!   numkit_classify
//!   Enter a number: -3
//!   -3 is negative.

mod logging;

use clap::Parser;
use numkit_core::{classify, describe};
use std::io::{self, BufRead, Write};

const PROMPT: &str = "Enter a number: ";

#[derive(Parser)]
#[command(name = "numkit_classify", about = "Classify integers as positive, negative or zero")]
struct Cli {
    /// Classify a single value and exit
    #[arg(long, allow_hyphen_values = true)]
    once: Option<i64>,
}

/// Prompt on `out` and classify each line of `reader` until quit or EOF
///
/// Lines that are not integers are reported on stderr and skipped.
fn run_interactive<R: BufRead, W: Write>(reader: R, out: &mut W) -> io::Result<()> {
    let mut lines = reader.lines();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;
        let input = line.trim();

        if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
            writeln!(out, "Goodbye!")?;
            break;
        }

        match input.parse::<i64>() {
            Ok(x) => {
                tracing::debug!(x, sign = %classify(x), "classified");
                writeln!(out, "{}.", describe(x))?;
            }
            Err(e) => {
                tracing::warn!(input, error = %e, "rejected input");
                eprintln!("Error: '{}' is not an integer. Please try again.", input);
            }
        }
    }

    Ok(())
}

fn main() {
    logging::init();
    let cli = Cli::parse();

    if let Some(x) = cli.once {
        println!("{}.", describe(x));
        return;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut writer = stdout.lock();

    if let Err(e) = run_interactive(stdin.lock(), &mut writer) {
        tracing::error!(error = %e, "terminal I/O failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
