//! # Radix CLI
//!
//! Command-line front end for the conversion engine.
//!
//! ## Usage
//! ```bash
//! # Convert a decimal value
//! radix --value 255 --base 10
//!
//! # Convert a Roman numeral
//! radix --value XIV --base roman
//!
//! # Machine-readable output
//! radix --value FF --base 16 --json
//! ```
//!
//! ## Output
//! On success, one labeled line per notation (or a JSON object with
//! `--json`); values outside the Roman domain show the range sentinel in
//! the Roman line. On failure, a message on stderr and exit code 1.
//!
//! The core supplies only the error kind and triggering notation; turning
//! those into user prose is this layer's job.

use std::process::ExitCode;

use clap::Parser;
use radix_core::{convert, ConversionError, ConversionResult, ErrorKind, Notation};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Convert a number between binary, octal, decimal, hexadecimal, and
/// Roman notation.
#[derive(Debug, Parser)]
#[command(name = "radix", version)]
struct Args {
    /// The number to convert, written in the selected base
    #[arg(short, long)]
    value: String,

    /// Source notation: 2, 8, 10, 16, or roman
    #[arg(short, long)]
    base: Notation,

    /// Emit the result as JSON instead of labeled lines
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    // RUST_LOG controls verbosity; silent unless asked.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    debug!(value = %args.value, base = %args.base, "conversion requested");

    match convert(&args.value, args.base) {
        Ok(result) => {
            if args.json {
                match serde_json::to_string_pretty(&result) {
                    Ok(json) => println!("{json}"),
                    Err(err) => {
                        eprintln!("failed to serialize result: {err}");
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                print!("{}", render_lines(&result));
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            debug!(kind = ?err.kind(), "conversion failed");
            eprintln!("{}", user_message(&err));
            ExitCode::FAILURE
        }
    }
}

/// Renders the five notations as aligned, labeled lines.
fn render_lines(result: &ConversionResult) -> String {
    let mut out = String::new();
    for notation in Notation::ALL {
        out.push_str(&format!("{:<12} {}\n", notation.name(), result.get(notation)));
    }
    out
}

/// Maps an error kind to the prose shown to the user.
fn user_message(err: &ConversionError) -> String {
    match err.kind() {
        ErrorKind::EmptyInput => "Please enter a number".to_string(),
        ErrorKind::InvalidRoman => "Invalid Roman numeral".to_string(),
        ErrorKind::InvalidDigit => match err.notation() {
            Some(notation) => format!("Invalid {} number", notation.name()),
            None => "Invalid number".to_string(),
        },
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
