//! # Conversion Commands
//!
//! The dispatch layer between raw user input and numeral-core.
//!
//! ## Responsibilities
//! - Turn the raw command-line text into the dynamically-typed value the
//!   core's JSON entry points expect (a number when the text parses as
//!   one, the text itself otherwise, so a non-numeric encode input is
//!   classified as `TypeMismatch` rather than swallowed here)
//! - Emit structured usage and error-category events via `tracing`
//! - Map core errors into [`AppError`]
//!
//! Inputs are never logged verbatim on the success path beyond the value
//! converted; error events log only the category, keeping the event
//! stream anonymized.

use numeral_core::{decode_value, encode_value, int_to_roman_f64, Direction};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::error::AppError;

/// Outcome of a successful conversion, rendered as-is in `--json` mode.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport {
    /// Which way the conversion ran
    pub direction: Direction,

    /// The raw input as the user supplied it
    pub input: String,

    /// Integer or numeral result, depending on direction
    pub output: Value,
}

/// Runs one conversion in the requested direction.
///
/// ## Example
/// ```text
/// convert(Direction::IntToRoman, "1994")  → output "MCMXCIV"
/// convert(Direction::RomanToInt, "xiv")   → output 14
/// convert(Direction::IntToRoman, "IIII")  → TypeMismatch (not a number)
/// convert(Direction::RomanToInt, "IIII")  → NonCanonical
/// ```
pub fn convert(direction: Direction, raw: &str) -> Result<ConversionReport, AppError> {
    let outcome = match direction {
        Direction::IntToRoman => {
            // Numeric text (including "NaN" and "inf", which f64 parsing
            // accepts) goes through the typed float path; anything else
            // stays a string and fails the core's type check, mirroring a
            // dynamically-typed caller handing over whatever it was given
            match raw.trim().parse::<f64>() {
                Ok(n) => int_to_roman_f64(n).map(|numeral| json!(numeral)),
                Err(_) => encode_value(&json!(raw)).map(|numeral| json!(numeral)),
            }
        }
        Direction::RomanToInt => decode_value(&json!(raw)).map(|n| json!(n)),
    };

    match outcome {
        Ok(output) => {
            info!(
                mode = %direction,
                result = %output,
                "conversion succeeded"
            );
            Ok(ConversionReport {
                direction,
                input: raw.to_string(),
                output,
            })
        }
        Err(err) => {
            warn!(
                mode = %direction,
                category = ?err.kind(),
                "conversion failed"
            );
            Err(err.into())
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use numeral_core::ErrorKind;

    #[test]
    fn test_int_to_roman_dispatch() {
        let report = convert(Direction::IntToRoman, "1994").unwrap();
        assert_eq!(report.output, json!("MCMXCIV"));
        assert_eq!(report.input, "1994");
    }

    #[test]
    fn test_roman_to_int_dispatch() {
        let report = convert(Direction::RomanToInt, "xiv").unwrap();
        assert_eq!(report.output, json!(14));
    }

    #[test]
    fn test_numeric_text_with_surrounding_spaces_encodes() {
        // The encode direction trims before parsing; the decode
        // direction deliberately does not
        let report = convert(Direction::IntToRoman, " 42 ").unwrap();
        assert_eq!(report.output, json!("XLII"));
    }

    #[test]
    fn test_non_numeric_encode_input_is_type_mismatch() {
        let err = convert(Direction::IntToRoman, "MCMXCIV").unwrap_err();
        assert_eq!(err.code, ErrorKind::TypeMismatch);
    }

    #[test]
    fn test_fractional_encode_input_is_not_integer() {
        let err = convert(Direction::IntToRoman, "2.5").unwrap_err();
        assert_eq!(err.code, ErrorKind::NotInteger);
    }

    #[test]
    fn test_nan_and_infinity_text_are_not_integer() {
        // f64 parsing accepts these spellings, so they reach the
        // finiteness check rather than the type check
        for raw in ["NaN", "inf", "-inf", "infinity"] {
            let err = convert(Direction::IntToRoman, raw).unwrap_err();
            assert_eq!(err.code, ErrorKind::NotInteger, "input {:?}", raw);
        }
    }

    #[test]
    fn test_out_of_range_encode_input() {
        let err = convert(Direction::IntToRoman, "4000").unwrap_err();
        assert_eq!(err.code, ErrorKind::OutOfRange);
    }

    #[test]
    fn test_decode_errors_keep_their_category() {
        let err = convert(Direction::RomanToInt, "IIII").unwrap_err();
        assert_eq!(err.code, ErrorKind::NonCanonical);

        let err = convert(Direction::RomanToInt, "I I").unwrap_err();
        assert_eq!(err.code, ErrorKind::InvalidCharacters);

        let err = convert(Direction::RomanToInt, "  ").unwrap_err();
        assert_eq!(err.code, ErrorKind::EmptyInput);
    }

    #[test]
    fn test_report_serializes_for_json_mode() {
        let report = convert(Direction::RomanToInt, "CDXLIV").unwrap();
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["direction"], "romanToInt");
        assert_eq!(value["input"], "CDXLIV");
        assert_eq!(value["output"], 444);
    }
}
