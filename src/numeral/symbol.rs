// ============================================================================
// Roman Symbols
// The seven base symbols and the ordered encoding table
// ============================================================================

use std::fmt;

/// One of the seven Roman numeral symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    I,
    V,
    X,
    L,
    C,
    D,
    M,
}

impl Symbol {
    /// Base value of the symbol.
    #[inline]
    pub const fn value(self) -> u16 {
        match self {
            Symbol::I => 1,
            Symbol::V => 5,
            Symbol::X => 10,
            Symbol::L => 50,
            Symbol::C => 100,
            Symbol::D => 500,
            Symbol::M => 1000,
        }
    }

    /// Uppercase character for the symbol.
    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            Symbol::I => 'I',
            Symbol::V => 'V',
            Symbol::X => 'X',
            Symbol::L => 'L',
            Symbol::C => 'C',
            Symbol::D => 'D',
            Symbol::M => 'M',
        }
    }

    /// Parse an uppercase symbol character.
    ///
    /// Lowercase letters are not symbols; see [`Symbol::from_char_ignore_case`].
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(Symbol::I),
            'V' => Some(Symbol::V),
            'X' => Some(Symbol::X),
            'L' => Some(Symbol::L),
            'C' => Some(Symbol::C),
            'D' => Some(Symbol::D),
            'M' => Some(Symbol::M),
            _ => None,
        }
    }

    /// Parse a symbol character in either case.
    #[inline]
    pub const fn from_char_ignore_case(c: char) -> Option<Self> {
        Self::from_char(c.to_ascii_uppercase())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Encoding table, strictly descending by magnitude.
///
/// Each subtractive pair sits directly above the additive symbol it replaces
/// repetitions of; reordering it makes the greedy encoder non-canonical.
pub const NUMERAL_TABLE: [(u16, &str); 13] = [
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

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Symbol; 7] = [
        Symbol::I,
        Symbol::V,
        Symbol::X,
        Symbol::L,
        Symbol::C,
        Symbol::D,
        Symbol::M,
    ];

    #[test]
    fn test_symbol_values() {
        let values: Vec<u16> = ALL.iter().map(|s| s.value()).collect();
        assert_eq!(values, vec![1, 5, 10, 50, 100, 500, 1000]);
    }

    #[test]
    fn test_char_mapping() {
        for symbol in ALL {
            assert_eq!(Symbol::from_char(symbol.as_char()), Some(symbol));
            assert_eq!(symbol.to_string(), symbol.as_char().to_string());
        }
        assert_eq!(Symbol::from_char('A'), None);
        assert_eq!(Symbol::from_char('x'), None);
        assert_eq!(Symbol::from_char_ignore_case('x'), Some(Symbol::X));
        assert_eq!(Symbol::from_char_ignore_case('m'), Some(Symbol::M));
        assert_eq!(Symbol::from_char_ignore_case('q'), None);
    }

    #[test]
    fn test_table_strictly_descending() {
        for pair in NUMERAL_TABLE.windows(2) {
            assert!(pair[0].0 > pair[1].0, "{:?} before {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_table_groups_spell_their_magnitude() {
        for (magnitude, group) in NUMERAL_TABLE {
            let symbols: Vec<u16> = group
                .chars()
                .map(|c| Symbol::from_char(c).map(Symbol::value).unwrap_or(0))
                .collect();
            let spelled = match symbols.as_slice() {
                [single] => *single,
                [smaller, larger] => larger - smaller,
                other => panic!("unexpected group {:?}", other),
            };
            assert_eq!(spelled, magnitude);
        }
    }
}
