//! # Symbol Tables
//!
//! The two constant tables that drive both conversion directions.
//!
//! ## The Tables
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THRESHOLDS (encoder)              symbol_value (decoder)              │
//! │                                                                         │
//! │  1000 → M     90 → XC              M → 1000    L → 50                  │
//! │   900 → CM    50 → L               D →  500    X → 10                  │
//! │   500 → D     40 → XL              C →  100    V →  5                  │
//! │   400 → CD    10 → X               I →    1                            │
//! │   100 → C      9 → IX                                                   │
//! │    90 → XC     5 → V               Seven plain symbols; the six        │
//! │    ...         4 → IV              subtractive pairs (CM, CD, XC,      │
//! │     1 → I                          XL, IX, IV) exist only in the       │
//! │                                    encoder's threshold table.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both tables are immutable process-wide constants: created once at
//! compile time, read-only thereafter, safe for unlimited concurrent
//! readers.

// =============================================================================
// Threshold Table
// =============================================================================

/// Ordered (threshold, symbol) pairs driving the greedy encoder.
///
/// ## Invariant
/// Strictly descending by threshold. The greedy scan over this table is a
/// complete representation system for [1, 3999]: consuming each pair while
/// the remainder allows it always drives the remainder to exactly 0.
pub const THRESHOLDS: [(i64, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

// =============================================================================
// Single-Letter Value Map
// =============================================================================

/// Returns the integer value of a single Roman numeral symbol.
///
/// Returns `None` for any character outside {I, V, X, L, C, D, M}, which
/// doubles as the decoder's character-set membership test.
///
/// ## Example
/// ```rust
/// use numeral_core::symbols::symbol_value;
///
/// assert_eq!(symbol_value('M'), Some(1000));
/// assert_eq!(symbol_value('Q'), None);
/// ```
#[inline]
pub const fn symbol_value(c: char) -> Option<i64> {
    match c {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_strictly_descending() {
        for pair in THRESHOLDS.windows(2) {
            assert!(pair[0].0 > pair[1].0, "{:?} not descending", pair);
        }
    }

    #[test]
    fn test_threshold_symbols_agree_with_value_map() {
        // Every table entry's symbol must evaluate to its threshold under
        // the right-to-left subtractive reading used by the decoder.
        for (value, symbol) in THRESHOLDS {
            let chars: Vec<i64> = symbol
                .chars()
                .map(|c| symbol_value(c).expect("table symbol"))
                .collect();
            let total = match chars.as_slice() {
                [v] => *v,
                [small, large] => large - small,
                _ => panic!("table symbols are one or two characters"),
            };
            assert_eq!(total, value, "symbol {} mismatch", symbol);
        }
    }

    #[test]
    fn test_symbol_value_rejects_non_symbols() {
        assert_eq!(symbol_value('A'), None);
        assert_eq!(symbol_value('i'), None); // lowercase is not canonical
        assert_eq!(symbol_value(' '), None);
        assert_eq!(symbol_value('1'), None);
    }
}
