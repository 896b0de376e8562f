// ============================================================================
// Roman Numeral Library
// Bidirectional conversion between Roman numerals and integers
// ============================================================================

//! # Roman Numeral
//!
//! Conversion between Roman numeral strings and integers in the classical
//! range `1..=3999`.
//!
//! ## Features
//!
//! - **Canonical encoding** using the greedy largest-magnitude-first table
//! - **Validating decoding** that rejects unknown symbols and non-canonical
//!   spellings such as `IIII` or `VX`
//! - **Lenient mode** reproducing the unchecked algorithms for callers that
//!   want garbage-in, garbage-out
//! - **RomanValue**, an immutable pair of both representations
//!
//! ## Example
//!
//! ```rust
//! use roman_numeral::prelude::*;
//!
//! let twelve = RomanValue::from_numeral("XII").unwrap();
//! assert_eq!(twelve.integer(), 12);
//!
//! let year = RomanValue::from_integer(1987).unwrap();
//! assert_eq!(year.numeral(), "MCMLXXXVII");
//!
//! // Strict by default
//! assert!(RomanValue::from_integer(0).is_err());
//!
//! // Lenient on request
//! let zero = RomanValue::from_integer_with(0, &ConversionConfig::lenient()).unwrap();
//! assert_eq!(zero.numeral(), "");
//!
//! let mut out = Vec::new();
//! year.print_numeral(&mut out).unwrap();
//! assert_eq!(out, b"Roman Numeral: MCMLXXXVII\n");
//! ```

pub mod domain;
pub mod numeral;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{ConversionConfig, ConversionMode, RomanValue};
    pub use crate::numeral::{
        integer_to_numeral, numeral_to_integer, MalformedReason, RomanError, RomanResult,
    };
}
