// ============================================================================
// Roman Value
// Paired numeral/integer representation, fixed at construction
// ============================================================================

use super::config::{ConversionConfig, ConversionMode};
use crate::numeral::{
    integer_to_numeral, integer_to_numeral_lenient, numeral_to_integer,
    numeral_to_integer_ignore_case, numeral_to_integer_lenient, RomanError, RomanResult,
};
use std::cmp::Ordering;
use std::fmt;
use std::io;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A quantity held as both a Roman numeral and an integer.
///
/// Both sides are derived once by a constructor and cannot be changed
/// afterwards. The default value is the empty numeral paired with zero.
///
/// # Example
/// ```
/// use roman_numeral::prelude::*;
///
/// let year = RomanValue::from_integer(1987)?;
/// assert_eq!(year.numeral(), "MCMLXXXVII");
///
/// let twelve: RomanValue = "XII".parse()?;
/// assert_eq!(twelve.integer(), 12);
/// # Ok::<(), RomanError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RomanValueRepr"))]
pub struct RomanValue {
    numeral: String,
    integer: i64,
}

impl RomanValue {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Build from a numeral, keeping the string verbatim.
    ///
    /// # Errors
    /// Returns `MalformedNumeral` if the string is not a canonical numeral.
    pub fn from_numeral(numeral: &str) -> RomanResult<Self> {
        Self::from_numeral_with(numeral, &ConversionConfig::default())
    }

    /// Build from an integer, keeping the integer verbatim.
    ///
    /// # Errors
    /// Returns `OutOfRange` unless `1 <= value <= 3999`.
    pub fn from_integer(value: i64) -> RomanResult<Self> {
        Self::from_integer_with(value, &ConversionConfig::default())
    }

    /// Build from a numeral under an explicit policy.
    ///
    /// Case-insensitive reading stores the numeral uppercased. Lenient
    /// construction never fails.
    pub fn from_numeral_with(numeral: &str, config: &ConversionConfig) -> RomanResult<Self> {
        let stored = if config.case_insensitive {
            numeral.to_ascii_uppercase()
        } else {
            numeral.to_string()
        };

        let integer = match (config.mode, config.case_insensitive) {
            (ConversionMode::Strict, false) => i64::from(numeral_to_integer(numeral)?),
            (ConversionMode::Strict, true) => i64::from(numeral_to_integer_ignore_case(numeral)?),
            (ConversionMode::Lenient, _) => numeral_to_integer_lenient(&stored),
        };

        Ok(Self {
            numeral: stored,
            integer,
        })
    }

    /// Build from an integer under an explicit policy.
    ///
    /// Lenient construction never fails.
    pub fn from_integer_with(value: i64, config: &ConversionConfig) -> RomanResult<Self> {
        let numeral = if config.is_strict() {
            integer_to_numeral(value)?
        } else {
            integer_to_numeral_lenient(value)
        };

        Ok(Self {
            numeral,
            integer: value,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn integer(&self) -> i64 {
        self.integer
    }

    #[inline]
    pub fn numeral(&self) -> &str {
        &self.numeral
    }

    /// True for the default "no value" state.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.numeral.is_empty() && self.integer == 0
    }

    // ========================================================================
    // Output
    // ========================================================================

    /// Write `Integer Value: <n>` followed by a newline.
    pub fn print_integer<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Integer Value: {}", self.integer)
    }

    /// Write `Roman Numeral: <numeral>` followed by a newline.
    pub fn print_numeral<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Roman Numeral: {}", self.numeral)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl PartialOrd for RomanValue {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RomanValue {
    /// Orders by integer value; the numeral only breaks ties between
    /// leniently built values.
    fn cmp(&self, other: &Self) -> Ordering {
        self.integer
            .cmp(&other.integer)
            .then_with(|| self.numeral.cmp(&other.numeral))
    }
}

impl fmt::Display for RomanValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.numeral)
    }
}

impl FromStr for RomanValue {
    type Err = RomanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_numeral(s)
    }
}

impl TryFrom<i64> for RomanValue {
    type Error = RomanError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_integer(value)
    }
}

// ============================================================================
// Deserialization
// ============================================================================

/// Wire shape checked against the numeral before it becomes a `RomanValue`.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RomanValueRepr {
    numeral: String,
    integer: i64,
}

/// Accepts any pair some constructor can build: reading the numeral
/// leniently gives the integer, or encoding the integer leniently gives the
/// numeral. Strict pairs and the default satisfy both.
#[cfg(feature = "serde")]
impl TryFrom<RomanValueRepr> for RomanValue {
    type Error = RomanError;

    fn try_from(repr: RomanValueRepr) -> Result<Self, Self::Error> {
        if numeral_to_integer_lenient(&repr.numeral) == repr.integer
            || encodes_to(repr.integer, &repr.numeral)
        {
            return Ok(Self {
                numeral: repr.numeral,
                integer: repr.integer,
            });
        }

        tracing::debug!(numeral = %repr.numeral, integer = repr.integer, "rejected serialized pair");
        Err(RomanError::MalformedNumeral {
            numeral: repr.numeral,
            reason: crate::numeral::MalformedReason::NonCanonical {
                canonical: integer_to_numeral(repr.integer).ok(),
            },
        })
    }
}

#[cfg(feature = "serde")]
fn encodes_to(integer: i64, numeral: &str) -> bool {
    // The greedy encoding starts with one M per thousand
    let max_thousands = i64::try_from(numeral.len()).unwrap_or(i64::MAX);
    if integer / 1000 > max_thousands {
        return false;
    }
    integer_to_numeral_lenient(integer) == numeral
}

// ============================================================================
// Tests
// ============================================================================
