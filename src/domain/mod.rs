// ============================================================================
// Domain Models Module
// The paired numeral/integer value and its construction policy
// ============================================================================

pub mod config;
pub mod roman_value;

pub use config::{ConversionConfig, ConversionMode};
pub use roman_value::RomanValue;
