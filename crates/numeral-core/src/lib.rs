//! # numeral-core: Pure Conversion Logic for Numeral
//!
//! This crate is the **heart** of Numeral. It contains the bidirectional
//! Roman numeral conversion logic as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Numeral Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      apps/cli (Caller)                          │   │
//! │  │    read raw input ──► pick direction ──► render result/error   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ numeral-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  symbols  │  │  encode   │  │  decode   │  │   error   │  │   │
//! │  │   │ THRESHOLDS│  │ int→roman │  │ roman→int │  │  taxonomy │  │   │
//! │  │   │ value map │  │  greedy   │  │ scan+check│  │   kinds   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO SHARED STATE • PURE FUNCTIONS       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`symbols`] - Constant symbol tables (threshold table, value map)
//! - [`encode`] - Integer → Roman numeral encoder
//! - [`decode`] - Roman numeral → integer decoder
//! - [`error`] - Conversion error taxonomy
//! - [`types`] - Shared boundary types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Reading input, logging, and rendering belong to the caller
//! 3. **Explicit Errors**: All errors are typed, never strings or panics
//! 4. **Canonical by Round-Trip**: The decoder proves a numeral canonical by
//!    re-encoding its value and comparing, rather than by grammar rules
//!
//! ## Example Usage
//!
//! ```rust
//! use numeral_core::{int_to_roman, roman_to_int};
//!
//! assert_eq!(int_to_roman(1994).unwrap(), "MCMXCIV");
//! assert_eq!(roman_to_int("MCMXCIV").unwrap(), 1994);
//!
//! // Non-canonical numerals are rejected even though they parse
//! assert!(roman_to_int("IIII").is_err());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod decode;
pub mod encode;
pub mod error;
pub mod symbols;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use numeral_core::int_to_roman` instead of
// `use numeral_core::encode::int_to_roman`

pub use decode::{decode_value, roman_to_int};
pub use encode::{encode_value, int_to_roman, int_to_roman_f64};
pub use error::{ConvertError, ConvertResult, ErrorKind};
pub use types::Direction;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Smallest integer representable as a Roman numeral.
///
/// ## Why a constant?
/// Classical Roman notation has no symbol for zero or negatives; every
/// range check in the crate refers to this bound rather than a literal.
pub const MIN_NUMERAL_VALUE: i64 = 1;

/// Largest integer representable as a Roman numeral.
///
/// ## Why 3999?
/// Standard subtractive notation caps at MMMCMXCIX. Larger values need
/// overline (vinculum) notation, which is out of scope for this system.
pub const MAX_NUMERAL_VALUE: i64 = 3999;
