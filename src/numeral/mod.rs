// ============================================================================
// Numeral Module
// Pure conversions between integers and Roman numeral strings
// ============================================================================
//
// This module provides:
// - integer_to_numeral / numeral_to_integer: validating conversions
// - *_lenient variants: the unchecked greedy / right-to-left algorithms
// - Symbol and NUMERAL_TABLE: read-only reference data
// - RomanError: Error types for rejected input
//
// Design principles:
// - No allocation beyond the output string
// - Validating variants return Result (no panics)
// - Lenient variants never fail and never validate

mod decode;
mod encode;
mod errors;
mod symbol;

pub use decode::{numeral_to_integer, numeral_to_integer_ignore_case, numeral_to_integer_lenient};
pub use encode::{integer_to_numeral, integer_to_numeral_lenient};
pub use errors::{MalformedReason, RomanError, RomanResult};
pub use symbol::{Symbol, NUMERAL_TABLE};

/// Smallest value with a classical numeral
pub const MIN_VALUE: i64 = 1;

/// Largest value with a classical numeral
pub const MAX_VALUE: i64 = 3999;
