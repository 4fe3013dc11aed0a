//! # Error Types
//!
//! Domain-specific error types for numeral-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  numeral-core errors (this file)                                       │
//! │  └── ConvertError     - Conversion input validation failures           │
//! │                                                                         │
//! │  CLI errors (apps/cli)                                                 │
//! │  └── AppError         - What the user sees (code + message)            │
//! │                                                                         │
//! │  Flow: ConvertError → AppError → rendered text / JSON                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending value in error messages
//! 3. Errors are enum variants, never String
//! 4. Each variant maps to exactly one [`ErrorKind`] category so callers
//!    can classify failures without string matching

use serde::Serialize;
use thiserror::Error;
use ts_rs::TS;

use crate::{MAX_NUMERAL_VALUE, MIN_NUMERAL_VALUE};

// =============================================================================
// Convert Error
// =============================================================================

/// Conversion errors.
///
/// Every failure either function can produce is a local validation
/// failure: there is nothing to retry and nothing is fatal to the host
/// process. The caller surfaces the message (or [`ErrorKind`]) directly.
///
/// ## Fail-Fast Order
/// ```text
/// encode:  type ──► finiteness/integrality ──► range
/// decode:  type/emptiness ──► character set ──► canonical round-trip
/// ```
/// The first violated precondition wins; no partial results are returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    /// Input is not the expected primitive type.
    ///
    /// ## When This Occurs
    /// Only at the dynamically-typed JSON boundary
    /// ([`encode_value`](crate::encode::encode_value) /
    /// [`decode_value`](crate::decode::decode_value)). The typed entry
    /// points cannot construct this variant.
    #[error("input must be a {expected}, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// Numeric input is NaN, infinite, or has a fractional part.
    #[error("input must be a finite integer, got {value}")]
    NotInteger { value: f64 },

    /// Integer input is outside the representable range.
    #[error("the number must be between {MIN_NUMERAL_VALUE} and {MAX_NUMERAL_VALUE}, got {value}")]
    OutOfRange { value: i64 },

    /// Decode input is empty or whitespace-only.
    #[error("input must be a non-empty Roman numeral")]
    EmptyInput,

    /// Decode input contains characters outside {I, V, X, L, C, D, M}.
    ///
    /// Whitespace counts: the decoder never trims, so `" IX "` lands here.
    #[error("'{input}' contains characters that are not Roman numeral symbols")]
    InvalidCharacters { input: String },

    /// Decode input parses to a total but is not the canonical encoding
    /// of that total.
    ///
    /// ## When This Occurs
    /// - Over-repeated symbols: "IIII", "MMMM"
    /// - Doubled halves: "VV", "LL", "DD"
    /// - Illegal subtractive pairs: "IC", "XM"
    /// - Out-of-order or redundant forms: "MCMC", "XIIX"
    #[error("'{input}' is not a canonical Roman numeral")]
    NonCanonical { input: String },
}

impl ConvertError {
    /// Returns the machine-readable category of this error.
    ///
    /// ## Example
    /// ```rust
    /// use numeral_core::{roman_to_int, ErrorKind};
    ///
    /// let err = roman_to_int("IIII").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::NonCanonical);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            ConvertError::NotInteger { .. } => ErrorKind::NotInteger,
            ConvertError::OutOfRange { .. } => ErrorKind::OutOfRange,
            ConvertError::EmptyInput => ErrorKind::EmptyInput,
            ConvertError::InvalidCharacters { .. } => ErrorKind::InvalidCharacters,
            ConvertError::NonCanonical { .. } => ErrorKind::NonCanonical,
        }
    }
}

// =============================================================================
// Error Kind
// =============================================================================

/// Error categories for programmatic handling.
///
/// ## Serialization
/// Serialized as SCREAMING_SNAKE_CASE strings so the CLI's JSON output
/// (and any frontend consuming the generated TypeScript type) can switch
/// on a stable code:
/// ```json
/// { "code": "NON_CANONICAL", "message": "'IIII' is not a canonical Roman numeral" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum ErrorKind {
    /// Input is not the expected primitive type (number for encode,
    /// string for decode)
    TypeMismatch,

    /// Numeric input is NaN, infinite, or fractional
    NotInteger,

    /// Integer input outside [1, 3999]
    OutOfRange,

    /// Decode input empty or whitespace-only
    EmptyInput,

    /// Decode input contains non-symbol characters
    InvalidCharacters,

    /// Decode input is parseable but not canonical
    NonCanonical,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ConvertError.
pub type ConvertResult<T> = Result<T, ConvertError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ConvertError::OutOfRange { value: 4000 };
        assert_eq!(
            err.to_string(),
            "the number must be between 1 and 3999, got 4000"
        );

        let err = ConvertError::NonCanonical {
            input: "IIII".to_string(),
        };
        assert_eq!(err.to_string(), "'IIII' is not a canonical Roman numeral");
    }

    #[test]
    fn test_every_variant_has_a_kind() {
        let cases = [
            (
                ConvertError::TypeMismatch {
                    expected: "number",
                    actual: "string",
                },
                ErrorKind::TypeMismatch,
            ),
            (
                ConvertError::NotInteger { value: 2.5 },
                ErrorKind::NotInteger,
            ),
            (ConvertError::OutOfRange { value: 0 }, ErrorKind::OutOfRange),
            (ConvertError::EmptyInput, ErrorKind::EmptyInput),
            (
                ConvertError::InvalidCharacters {
                    input: "ABC".to_string(),
                },
                ErrorKind::InvalidCharacters,
            ),
            (
                ConvertError::NonCanonical {
                    input: "VV".to_string(),
                },
                ErrorKind::NonCanonical,
            ),
        ];

        for (err, kind) in cases {
            assert_eq!(err.kind(), kind);
        }
    }

    #[test]
    fn test_kind_serializes_screaming_snake() {
        let json = serde_json::to_string(&ErrorKind::NonCanonical).unwrap();
        assert_eq!(json, "\"NON_CANONICAL\"");

        let json = serde_json::to_string(&ErrorKind::InvalidCharacters).unwrap();
        assert_eq!(json, "\"INVALID_CHARACTERS\"");
    }
}
