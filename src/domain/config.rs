// ============================================================================
// Conversion Configuration
// Validation policy used when constructing values
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How constructors treat input the classical notation cannot express.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConversionMode {
    /// Reject out-of-range integers and malformed numerals
    #[default]
    Strict,

    /// Never fail: unknown characters read as zero, out-of-range integers
    /// produce the raw greedy output
    Lenient,
}

/// Options for building a [`RomanValue`](super::RomanValue).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConversionConfig {
    /// Validation policy
    pub mode: ConversionMode,

    /// Accept lowercase symbols when reading numerals
    pub case_insensitive: bool,
}

impl ConversionConfig {
    /// Create a configuration with the given mode
    pub fn new(mode: ConversionMode) -> Self {
        Self {
            mode,
            case_insensitive: false,
        }
    }

    /// Validating configuration (the default)
    pub fn strict() -> Self {
        Self::new(ConversionMode::Strict)
    }

    /// Permissive configuration
    pub fn lenient() -> Self {
        Self::new(ConversionMode::Lenient)
    }

    /// Builder method: Accept lowercase numerals
    pub fn with_case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    /// True when out-of-range and malformed input is rejected
    pub fn is_strict(&self) -> bool {
        self.mode == ConversionMode::Strict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_strict() {
        let config = ConversionConfig::default();
        assert_eq!(config.mode, ConversionMode::Strict);
        assert!(config.is_strict());
        assert!(!config.case_insensitive);
        assert_eq!(config, ConversionConfig::strict());
    }

    #[test]
    fn test_builder() {
        let config = ConversionConfig::lenient().with_case_insensitive(true);
        assert_eq!(config.mode, ConversionMode::Lenient);
        assert!(!config.is_strict());
        assert!(config.case_insensitive);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let config = ConversionConfig::lenient().with_case_insensitive(true);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"mode":"Lenient","case_insensitive":true}"#);
        let back: ConversionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
