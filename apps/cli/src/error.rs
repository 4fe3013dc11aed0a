//! # App Error Type
//!
//! Unified error type for the CLI.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Error Flow in Numeral                              │
//! │                                                                         │
//! │  User input                  numeral-core                               │
//! │  ──────────                  ────────────                               │
//! │                                                                         │
//! │  "IIII" ──► convert() ──► ConvertError::NonCanonical                    │
//! │                                │                                        │
//! │                                ▼                                        │
//! │                            AppError { code, message }                   │
//! │                                │                                        │
//! │              ┌─────────────────┴─────────────────┐                      │
//! │              ▼                                   ▼                      │
//! │  text mode: "error: 'IIII' is not    --json mode:                       │
//! │  a canonical Roman numeral"          {"code":"NON_CANONICAL",           │
//! │                                       "message":"..."}                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `code` is the core's [`ErrorKind`] unchanged, so scripts consuming
//! `--json` output classify failures with the same categories the library
//! exposes.

use numeral_core::{ConvertError, ErrorKind};
use serde::Serialize;

/// Error rendered to the user when a conversion fails.
///
/// ## Serialization
/// ```json
/// {
///   "code": "OUT_OF_RANGE",
///   "message": "the number must be between 1 and 3999, got 4000"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct AppError {
    /// Machine-readable error category for programmatic handling
    pub code: ErrorKind,

    /// Human-readable error message for display
    pub message: String,
}

impl From<ConvertError> for AppError {
    fn from(err: ConvertError) -> Self {
        AppError {
            code: err.kind(),
            message: err.to_string(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;
    use numeral_core::roman_to_int;

    #[test]
    fn test_preserves_core_kind_and_message() {
        let err: AppError = roman_to_int("IIII").unwrap_err().into();
        assert_eq!(err.code, ErrorKind::NonCanonical);
        assert_eq!(err.message, "'IIII' is not a canonical Roman numeral");
    }

    #[test]
    fn test_serializes_code_and_message() {
        let err: AppError = roman_to_int("").unwrap_err().into();
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "EMPTY_INPUT");
        assert!(json["message"].as_str().unwrap().contains("non-empty"));
    }
}
