//! # Shared Boundary Types
//!
//! Types that cross the core/caller boundary. Kept here so every front
//! end (CLI today, a web bridge tomorrow) agrees on the same shapes and
//! the generated TypeScript bindings stay in one place.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

// =============================================================================
// Conversion Direction
// =============================================================================

/// Which way a conversion runs.
///
/// ## Serialization
/// Serialized as `"intToRoman"` / `"romanToInt"`, the mode identifiers
/// the front end uses when selecting a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum Direction {
    /// Integer in, canonical Roman numeral out
    IntToRoman,

    /// Roman numeral in, integer out
    RomanToInt,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::IntToRoman => write!(f, "intToRoman"),
            Direction::RomanToInt => write!(f, "romanToInt"),
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    /// Accepts both the serialized mode identifiers and the kebab-case
    /// spellings used on the command line.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "intToRoman" | "int-to-roman" | "int" => Ok(Direction::IntToRoman),
            "romanToInt" | "roman-to-int" | "roman" => Ok(Direction::RomanToInt),
            other => Err(format!(
                "unknown conversion mode '{}' (expected int-to-roman or roman-to-int)",
                other
            )),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_serializes_as_mode_identifier() {
        assert_eq!(
            serde_json::to_string(&Direction::IntToRoman).unwrap(),
            "\"intToRoman\""
        );
        assert_eq!(
            serde_json::to_string(&Direction::RomanToInt).unwrap(),
            "\"romanToInt\""
        );
    }

    #[test]
    fn test_direction_parses_cli_spellings() {
        assert_eq!(
            "int-to-roman".parse::<Direction>().unwrap(),
            Direction::IntToRoman
        );
        assert_eq!(
            "romanToInt".parse::<Direction>().unwrap(),
            Direction::RomanToInt
        );
        assert!("sideways".parse::<Direction>().is_err());
    }
}
