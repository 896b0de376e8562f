// ============================================================================
// Numeral Errors
// Error types for Roman numeral conversion
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Why a numeral string was rejected by the strict decoder.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MalformedReason {
    /// Input contained no symbols
    Empty,
    /// Character outside {I, V, X, L, C, D, M}
    InvalidSymbol {
        /// The offending character
        symbol: char,
        /// Character index within the input
        position: usize,
    },
    /// Symbols are valid but do not spell the canonical numeral for their value
    NonCanonical {
        /// Canonical spelling of the computed value, if it is in range
        canonical: Option<String>,
    },
}

/// Errors that can occur while converting between integers and numerals.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RomanError {
    /// Integer is not in 1..=3999
    OutOfRange {
        /// The rejected input
        value: i64,
    },
    /// Numeral string is not a well-formed canonical Roman numeral
    MalformedNumeral {
        /// The rejected input
        numeral: String,
        /// What was wrong with it
        reason: MalformedReason,
    },
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedReason::Empty => write!(f, "numeral is empty"),
            MalformedReason::InvalidSymbol { symbol, position } => {
                write!(f, "invalid symbol {:?} at position {}", symbol, position)
            },
            MalformedReason::NonCanonical {
                canonical: Some(canonical),
            } => write!(f, "not in canonical form (expected {})", canonical),
            MalformedReason::NonCanonical { canonical: None } => {
                write!(f, "not in canonical form")
            },
        }
    }
}

impl fmt::Display for RomanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RomanError::OutOfRange { value } => write!(
                f,
                "value out of range: {} is not between {} and {}",
                value,
                super::MIN_VALUE,
                super::MAX_VALUE
            ),
            RomanError::MalformedNumeral { numeral, reason } => {
                write!(f, "malformed numeral {:?}: {}", numeral, reason)
            },
        }
    }
}

impl std::error::Error for RomanError {}

/// Result type alias for numeral conversions
pub type RomanResult<T> = Result<T, RomanError>;
