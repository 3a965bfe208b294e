//! zc: command-line front end for the z-chain transformation.
//!
//! Two entry modes, matching the service's interactive and scripted use:
//! with a positional argument the result sequence is printed directly; with
//! no argument the tool prompts for one line on stdin.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use zc_transform::transform;

/// Convert a string into its z-chain result sequence.
#[derive(Parser, Debug)]
#[command(name = "zc")]
#[command(about = "Process a string into sums with the z-chain rules")]
struct Args {
    /// The string to process, e.g. 'dz_a_aazzaaa'. Omit to be prompted.
    input_string: Option<String>,

    /// Show the transformation stages (groups, values, raw sums)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(io::stderr)
        .init();

    match args.input_string {
        Some(input) => println!("{}", format_sequence(&transform(&input))),
        None => interactive_prompt()?,
    }

    Ok(())
}

/// Prompt for one line on stdin and print its labeled result.
fn interactive_prompt() -> Result<()> {
    print!("Enter the string: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let input = line.trim_end_matches(['\r', '\n']);

    println!("Result: {}", format_sequence(&transform(input)));
    Ok(())
}

fn format_sequence(values: &[u64]) -> String {
    let rendered: Vec<String> = values.iter().map(u64::to_string).collect();
    format!("[{}]", rendered.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_sequence() {
        assert_eq!(format_sequence(&[28, 53, 1]), "[28, 53, 1]");
        assert_eq!(format_sequence(&[]), "[]");
    }
}
