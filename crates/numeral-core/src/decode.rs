//! # Numeral → Integer Decoder
//!
//! Converts a Roman numeral string to its integer value, validating
//! canonical form by re-encoding and comparing.
//!
//! ## Validation Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  roman_to_int("mcmxciv")                                                │
//! │       │                                                                 │
//! │       ├── empty/blank? ───────────────► EmptyInput                      │
//! │       │                                                                 │
//! │       ▼ uppercase → "MCMXCIV"                                           │
//! │       ├── non-symbol chars? ──────────► InvalidCharacters               │
//! │       │                                                                 │
//! │       ▼ right-to-left subtractive scan → 1994                           │
//! │       ├── int_to_roman(1994) ≠ input? ► NonCanonical                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Ok(1994)                                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why Round-Trip Instead of Grammar Rules?
//! Validating canonical grammar directly (symbol-repetition limits, legal
//! subtractive pairs, ordering) is error-prone and hard to prove complete
//! (e.g. "MCMC" passes most hand-rolled rule sets). The encoder is a total
//! bijection from [1, 3999] onto the canonical numerals, so re-encoding
//! the computed total and requiring byte equality is a complete and
//! minimal correctness check. Preserve it; do not replace it with
//! pattern rules.

use serde_json::Value;

use crate::encode::{int_to_roman, json_type_name};
use crate::error::{ConvertError, ConvertResult};
use crate::symbols::symbol_value;

// =============================================================================
// Typed Entry Point
// =============================================================================

/// Converts a Roman numeral string to its integer value.
///
/// ## Rules
/// - Must not be empty or whitespace-only
/// - Case-insensitive: input is uppercased before any validation
/// - Every character must be one of {I, V, X, L, C, D, M}. Whitespace is
///   never trimmed away, so `" IX "` and `"I I"` are rejected
/// - Must be the canonical encoding of its own value: "IIII" parses to 4
///   but is rejected because the canonical form of 4 is "IV"
///
/// ## Example
/// ```rust
/// use numeral_core::roman_to_int;
///
/// assert_eq!(roman_to_int("IX").unwrap(), 9);
/// assert_eq!(roman_to_int("mcmxciv").unwrap(), 1994);
/// assert!(roman_to_int("IIII").is_err());
/// assert!(roman_to_int("IC").is_err());
/// ```
pub fn roman_to_int(roman: &str) -> ConvertResult<i64> {
    // Trimming here is for the emptiness test only; the character-set
    // check below still sees the original surrounding whitespace.
    if roman.trim().is_empty() {
        return Err(ConvertError::EmptyInput);
    }

    let upper = roman.to_uppercase();

    let mut values = Vec::with_capacity(upper.len());
    for c in upper.chars() {
        match symbol_value(c) {
            Some(v) => values.push(v),
            None => {
                return Err(ConvertError::InvalidCharacters {
                    input: roman.to_string(),
                })
            }
        }
    }

    // Right-to-left subtractive scan: a symbol strictly smaller than its
    // right neighbor subtracts, everything else adds. Correct for any
    // well-formed numeral, canonical or not.
    let mut total = 0;
    let mut previous = 0;
    for &current in values.iter().rev() {
        if current < previous {
            total -= current;
        } else {
            total += current;
        }
        previous = current;
    }

    // Canonical-form check: the encoder is the sole source of truth.
    // Totals the encoder rejects outright (e.g. "MMMM" → 4000) are
    // non-canonical by the same token.
    match int_to_roman(total) {
        Ok(canonical) if canonical == upper => Ok(total),
        _ => Err(ConvertError::NonCanonical {
            input: roman.to_string(),
        }),
    }
}

// =============================================================================
// JSON Boundary
// =============================================================================

/// Converts a dynamically-typed JSON value to an integer via decode.
///
/// Non-string values fail with `TypeMismatch`; strings flow through
/// [`roman_to_int`] unchanged.
///
/// ## Example
/// ```rust
/// use numeral_core::{decode_value, ErrorKind};
/// use serde_json::json;
///
/// assert_eq!(decode_value(&json!("XIV")).unwrap(), 14);
///
/// let err = decode_value(&json!(14)).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::TypeMismatch);
/// ```
pub fn decode_value(value: &Value) -> ConvertResult<i64> {
    match value {
        Value::String(s) => roman_to_int(s),
        other => Err(ConvertError::TypeMismatch {
            expected: "string",
            actual: json_type_name(other),
        }),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
