//! # Integer → Numeral Encoder
//!
//! Converts a validated integer in [1, 3999] to its canonical Roman
//! numeral string.
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Greedy threshold consumption                                           │
//! │                                                                         │
//! │  int_to_roman(1994)                                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1994 ≥ 1000 → "M"     remainder 994                                    │
//! │   994 ≥  900 → "CM"    remainder  94                                    │
//! │    94 ≥   90 → "XC"    remainder   4                                    │
//! │     4 ≥    4 → "IV"    remainder   0                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  "MCMXCIV"                                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! One pass over all 13 table entries; the remainder provably reaches 0
//! because the threshold set is a complete greedy-representable system
//! for [1, 3999]. The encoder is a total bijection from that range onto
//! the canonical numerals, which is what lets the decoder use it as the
//! sole canonical-form oracle.

use serde_json::Value;

use crate::error::{ConvertError, ConvertResult};
use crate::symbols::THRESHOLDS;
use crate::{MAX_NUMERAL_VALUE, MIN_NUMERAL_VALUE};

// =============================================================================
// Typed Entry Points
// =============================================================================

/// Converts an integer to its canonical Roman numeral.
///
/// ## Rules
/// - Must be within [1, 3999] ([`MIN_NUMERAL_VALUE`], [`MAX_NUMERAL_VALUE`])
///
/// ## Example
/// ```rust
/// use numeral_core::int_to_roman;
///
/// assert_eq!(int_to_roman(1).unwrap(), "I");
/// assert_eq!(int_to_roman(3999).unwrap(), "MMMCMXCIX");
/// assert!(int_to_roman(0).is_err());
/// assert!(int_to_roman(4000).is_err());
/// ```
pub fn int_to_roman(value: i64) -> ConvertResult<String> {
    if !(MIN_NUMERAL_VALUE..=MAX_NUMERAL_VALUE).contains(&value) {
        return Err(ConvertError::OutOfRange { value });
    }

    let mut remainder = value;
    // Canonical numerals never exceed 15 chars (3888 = "MMMDCCCLXXXVIII")
    let mut result = String::with_capacity(15);

    for (threshold, symbol) in THRESHOLDS {
        while remainder >= threshold {
            result.push_str(symbol);
            remainder -= threshold;
        }
    }

    debug_assert_eq!(remainder, 0);
    Ok(result)
}

/// Converts a float-typed value to its canonical Roman numeral.
///
/// ## Rules
/// - Must be finite (not NaN, not ±∞)
/// - Must have no fractional part
/// - Must be within [1, 3999]
///
/// ## Example
/// ```rust
/// use numeral_core::int_to_roman_f64;
///
/// assert_eq!(int_to_roman_f64(14.0).unwrap(), "XIV");
/// assert!(int_to_roman_f64(2.5).is_err());
/// assert!(int_to_roman_f64(f64::NAN).is_err());
/// ```
pub fn int_to_roman_f64(value: f64) -> ConvertResult<String> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(ConvertError::NotInteger { value });
    }

    int_to_roman(value as i64)
}

// =============================================================================
// JSON Boundary
// =============================================================================

/// Converts a dynamically-typed JSON value to a Roman numeral.
///
/// This is the loosely-typed seam for callers that hand over raw JSON
/// (the CLI's `--json` mode, a frontend bridge): the type check the
/// typed entry points get for free from the compiler happens here.
///
/// ## Check Order
/// type → finiteness/integrality → range
///
/// ## Example
/// ```rust
/// use numeral_core::{encode_value, ErrorKind};
/// use serde_json::json;
///
/// assert_eq!(encode_value(&json!(1994)).unwrap(), "MCMXCIV");
///
/// let err = encode_value(&json!("1994")).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::TypeMismatch);
/// ```
pub fn encode_value(value: &Value) -> ConvertResult<String> {
    let number = match value {
        Value::Number(n) => n,
        other => {
            return Err(ConvertError::TypeMismatch {
                expected: "number",
                actual: json_type_name(other),
            })
        }
    };

    match number.as_i64() {
        Some(n) => int_to_roman(n),
        // JSON floats (including integral ones like 1994.0) and numbers
        // beyond i64 range land here; the f64 path reports 2.5 as
        // NotInteger and 1e300 as OutOfRange via the saturating cast
        None => match number.as_f64() {
            Some(f) => int_to_roman_f64(f),
            None => Err(ConvertError::NotInteger { value: f64::NAN }),
        },
    }
}

/// Human-readable JSON type name for error messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
