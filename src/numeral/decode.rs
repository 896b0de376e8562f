// ============================================================================
// Numeral to Integer
// Right-to-left subtractive reading with canonical-form validation
// ============================================================================

use super::encode::integer_to_numeral_lenient;
use super::errors::{MalformedReason, RomanError, RomanResult};
use super::symbol::Symbol;
use super::{MAX_VALUE, MIN_VALUE};
use smallvec::SmallVec;

/// Enough for the longest canonical numeral (MMMDCCCLXXXVIII)
type SymbolBuf = SmallVec<[Symbol; 16]>;

/// Parse a canonical uppercase Roman numeral.
///
/// # Errors
/// Returns `MalformedNumeral` when the input is empty, contains anything other
/// than `I V X L C D M`, or is not the canonical spelling of its value
/// (`IIII`, `VX`, `IC`, ...).
///
/// # Example
/// ```
/// use roman_numeral::numeral::numeral_to_integer;
///
/// assert_eq!(numeral_to_integer("MCMLXXXVII").unwrap(), 1987);
/// assert!(numeral_to_integer("IIII").is_err());
/// ```
pub fn numeral_to_integer(numeral: &str) -> RomanResult<u16> {
    decode_strict(numeral, Symbol::from_char)
}

/// Same as [`numeral_to_integer`] but accepts lowercase symbols.
pub fn numeral_to_integer_ignore_case(numeral: &str) -> RomanResult<u16> {
    decode_strict(numeral, Symbol::from_char_ignore_case)
}

/// Read any string with the unchecked right-to-left rule.
///
/// Unrecognized characters (including lowercase letters) count as zero and
/// malformed sequences are evaluated as-is. The empty string reads as zero.
pub fn numeral_to_integer_lenient(numeral: &str) -> i64 {
    evaluate(
        numeral
            .chars()
            .map(|c| Symbol::from_char(c).map_or(0, Symbol::value)),
    )
}

fn decode_strict(numeral: &str, parse: impl Fn(char) -> Option<Symbol>) -> RomanResult<u16> {
    let symbols = lex(numeral, parse)?;
    let value = evaluate(symbols.iter().map(|s| s.value()));

    if !(MIN_VALUE..=MAX_VALUE).contains(&value) {
        return Err(malformed(numeral, MalformedReason::NonCanonical { canonical: None }));
    }

    let canonical = integer_to_numeral_lenient(value);
    if !symbols.iter().map(|s| s.as_char()).eq(canonical.chars()) {
        return Err(malformed(
            numeral,
            MalformedReason::NonCanonical {
                canonical: Some(canonical),
            },
        ));
    }

    let value = u16::try_from(value)
        .map_err(|_| malformed(numeral, MalformedReason::NonCanonical { canonical: None }))?;

    tracing::trace!(numeral, value, "decoded numeral");
    Ok(value)
}

fn lex(numeral: &str, parse: impl Fn(char) -> Option<Symbol>) -> RomanResult<SymbolBuf> {
    if numeral.is_empty() {
        return Err(malformed(numeral, MalformedReason::Empty));
    }

    numeral
        .chars()
        .enumerate()
        .map(|(position, c)| {
            parse(c).ok_or_else(|| {
                malformed(
                    numeral,
                    MalformedReason::InvalidSymbol {
                        symbol: c,
                        position,
                    },
                )
            })
        })
        .collect()
}

/// Walk from the last symbol to the first. A symbol smaller than the one to
/// its right is subtracted, anything else is added.
fn evaluate(values: impl DoubleEndedIterator<Item = u16>) -> i64 {
    let mut total: i64 = 0;
    let mut previous: u16 = 0;

    for value in values.rev() {
        if value >= previous {
            total += i64::from(value);
        } else {
            total -= i64::from(value);
        }
        previous = value;
    }

    total
}

fn malformed(numeral: &str, reason: MalformedReason) -> RomanError {
    tracing::debug!(numeral, %reason, "rejected numeral");
    RomanError::MalformedNumeral {
        numeral: numeral.to_string(),
        reason,
    }
}
