// ============================================================================
// Integer to Numeral
// Greedy largest-magnitude-first encoding
// ============================================================================

use super::errors::{RomanError, RomanResult};
use super::symbol::NUMERAL_TABLE;
use super::{MAX_VALUE, MIN_VALUE};

/// Convert an integer in `1..=3999` to its canonical Roman numeral.
///
/// # Errors
/// Returns `OutOfRange` for zero, negative values and anything above 3999.
///
/// # Example
/// ```
/// use roman_numeral::numeral::integer_to_numeral;
///
/// assert_eq!(integer_to_numeral(1987).unwrap(), "MCMLXXXVII");
/// assert!(integer_to_numeral(0).is_err());
/// ```
pub fn integer_to_numeral(value: i64) -> RomanResult<String> {
    if !(MIN_VALUE..=MAX_VALUE).contains(&value) {
        tracing::debug!(value, "integer out of numeral range");
        return Err(RomanError::OutOfRange { value });
    }

    let numeral = integer_to_numeral_lenient(value);
    tracing::trace!(value, numeral = %numeral, "encoded integer");
    Ok(numeral)
}

/// Convert any integer using the unchecked greedy algorithm.
///
/// Zero and negative values produce an empty string since no table entry
/// matches. Values above 3999 repeat `M` for every extra thousand.
pub fn integer_to_numeral_lenient(value: i64) -> String {
    let mut remaining = value;
    let mut numeral = String::new();

    for (magnitude, group) in NUMERAL_TABLE {
        let magnitude = i64::from(magnitude);
        while remaining >= magnitude {
            numeral.push_str(group);
            remaining -= magnitude;
        }
    }

    numeral
}
