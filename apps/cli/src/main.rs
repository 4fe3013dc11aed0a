//! # Numeral CLI
//!
//! Command-line front end for the Roman numeral converter.
//!
//! ## Usage
//! ```bash
//! # Integer to Roman numeral
//! numeral --mode int-to-roman 1994
//! # MCMXCIV
//!
//! # Roman numeral to integer (case-insensitive)
//! numeral --mode roman-to-int mcmxciv
//! # 1994
//!
//! # Machine-readable output
//! numeral --mode roman-to-int --json IIII
//! # {"code":"NON_CANONICAL","message":"'IIII' is not a canonical Roman numeral"}
//!
//! # Read the value from stdin when no positional argument is given
//! echo 3999 | numeral --mode int-to-roman
//! ```
//!
//! Exit codes: 0 on success, 1 on conversion failure, 2 on usage errors.
//! Logs go to stderr so stdout stays pipeable.

mod commands;
mod error;

use std::env;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use numeral_core::Direction;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use crate::commands::convert;

/// Parsed command-line options.
struct Options {
    direction: Direction,
    input: Option<String>,
    json: bool,
}

fn main() -> ExitCode {
    // Initialize tracing; events go to stderr, results to stdout
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let options = match parse_args(env::args().skip(1)) {
        Ok(Some(options)) => options,
        Ok(None) => return ExitCode::SUCCESS, // --help
        Err(message) => {
            eprintln!("error: {}", message);
            eprintln!("Run with --help for usage.");
            return ExitCode::from(2);
        }
    };

    // No positional value: read a single line from stdin
    let raw = match options.input {
        Some(raw) => raw,
        None => {
            let mut line = String::new();
            if let Err(e) = io::stdin().lock().read_line(&mut line) {
                eprintln!("error: failed to read stdin: {}", e);
                return ExitCode::from(2);
            }
            line.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    info!(mode = %options.direction, "starting conversion");

    match convert(options.direction, &raw) {
        Ok(report) => {
            if options.json {
                println!("{}", serde_json::to_string(&report).expect("report serializes"));
            } else {
                // The output is a JSON string for int→roman and a JSON
                // number for roman→int; render both bare
                match report.output.as_str() {
                    Some(numeral) => println!("{}", numeral),
                    None => println!("{}", report.output),
                }
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            if options.json {
                println!("{}", serde_json::to_string(&err).expect("error serializes"));
            } else {
                eprintln!("error: {}", err.message);
            }
            ExitCode::FAILURE
        }
    }
}

/// Parses command-line arguments.
///
/// Returns `Ok(None)` when `--help` was requested.
fn parse_args(args: impl Iterator<Item = String>) -> Result<Option<Options>, String> {
    let mut direction: Option<Direction> = None;
    let mut input: Option<String> = None;
    let mut json = false;

    let args: Vec<String> = args.collect();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--mode" | "-m" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| "--mode requires a value".to_string())?;
                direction = Some(value.parse()?);
                i += 1;
            }
            "--json" | "-j" => {
                json = true;
            }
            "--help" | "-h" => {
                print_help();
                return Ok(None);
            }
            flag if flag.starts_with('-') && flag.len() > 1 && !is_negative_number(flag) => {
                return Err(format!("unknown option '{}'", flag));
            }
            positional => {
                if input.is_some() {
                    return Err("expected exactly one value to convert".to_string());
                }
                input = Some(positional.to_string());
            }
        }
        i += 1;
    }

    let direction =
        direction.ok_or_else(|| "--mode is required (int-to-roman or roman-to-int)".to_string())?;

    Ok(Some(Options {
        direction,
        input,
        json,
    }))
}

/// Negative numbers look like flags; let them through as positionals so
/// `numeral -m int-to-roman -- -5` is not needed to see the range error.
fn is_negative_number(arg: &str) -> bool {
    arg.len() > 1 && arg[1..].chars().all(|c| c.is_ascii_digit() || c == '.')
}

fn print_help() {
    let mut out = io::stdout().lock();
    let _ = writeln!(out, "Numeral - Roman numeral converter");
    let _ = writeln!(out);
    let _ = writeln!(out, "Usage: numeral --mode <MODE> [OPTIONS] [VALUE]");
    let _ = writeln!(out);
    let _ = writeln!(out, "Modes:");
    let _ = writeln!(out, "  int-to-roman   Convert an integer (1-3999) to a Roman numeral");
    let _ = writeln!(out, "  roman-to-int   Convert a Roman numeral to an integer");
    let _ = writeln!(out);
    let _ = writeln!(out, "Options:");
    let _ = writeln!(out, "  -m, --mode <MODE>  Conversion direction (required)");
    let _ = writeln!(out, "  -j, --json         Emit machine-readable JSON output");
    let _ = writeln!(out, "  -h, --help         Show this help message");
    let _ = writeln!(out);
    let _ = writeln!(out, "Reads VALUE from stdin when no positional argument is given.");
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Option<Options>, String> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_mode_and_value() {
        let options = parse(&["--mode", "int-to-roman", "1994"]).unwrap().unwrap();
        assert_eq!(options.direction, Direction::IntToRoman);
        assert_eq!(options.input.as_deref(), Some("1994"));
        assert!(!options.json);
    }

    #[test]
    fn test_parse_short_flags_and_json() {
        let options = parse(&["-m", "roman-to-int", "-j", "XIV"]).unwrap().unwrap();
        assert_eq!(options.direction, Direction::RomanToInt);
        assert!(options.json);
    }

    #[test]
    fn test_missing_mode_is_usage_error() {
        assert!(parse(&["1994"]).is_err());
    }

    #[test]
    fn test_unknown_mode_is_usage_error() {
        assert!(parse(&["--mode", "sideways", "1"]).is_err());
    }

    #[test]
    fn test_negative_value_is_positional_not_flag() {
        let options = parse(&["-m", "int-to-roman", "-5"]).unwrap().unwrap();
        assert_eq!(options.input.as_deref(), Some("-5"));
    }

    #[test]
    fn test_extra_positional_rejected() {
        assert!(parse(&["-m", "roman-to-int", "IX", "XI"]).is_err());
    }

    #[test]
    fn test_missing_value_falls_back_to_stdin() {
        let options = parse(&["-m", "roman-to-int"]).unwrap().unwrap();
        assert!(options.input.is_none());
    }
}
