use crate::error::{DammError, Result};
use std::str::FromStr;

/// Bijection between accepted symbol bytes and table indices `0..size`.
///
/// `to_symbol` and `from_symbol` must be mutual inverses over `0..size`, and
/// `size` must match a registered quasigroup order (10 or 16) for the
/// alphabet to be usable with the checksum engine.
pub trait Alphabet {
    /// Number of distinct symbols
    fn size(&self) -> u8;

    /// Symbol for an index in `0..size`
    fn to_symbol(&self, index: u8) -> u8;

    /// Index of a symbol, or [`DammError::InvalidSymbol`] if it is not in the alphabet
    fn from_symbol(&self, symbol: u8) -> Result<u8>;
}

impl<T: Alphabet + ?Sized> Alphabet for &T {
    fn size(&self) -> u8 {
        (**self).size()
    }

    fn to_symbol(&self, index: u8) -> u8 {
        (**self).to_symbol(index)
    }

    fn from_symbol(&self, symbol: u8) -> Result<u8> {
        (**self).from_symbol(symbol)
    }
}

impl<T: Alphabet + ?Sized> Alphabet for Box<T> {
    fn size(&self) -> u8 {
        (**self).size()
    }

    fn to_symbol(&self, index: u8) -> u8 {
        (**self).to_symbol(index)
    }

    fn from_symbol(&self, symbol: u8) -> Result<u8> {
        (**self).from_symbol(symbol)
    }
}

/// Decimal digits `0`-`9`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Digit;

impl Alphabet for Digit {
    fn size(&self) -> u8 {
        10
    }

    fn to_symbol(&self, index: u8) -> u8 {
        b'0' + index
    }

    fn from_symbol(&self, symbol: u8) -> Result<u8> {
        match symbol {
            b'0'..=b'9' => Ok(symbol - b'0'),
            _ => Err(DammError::InvalidSymbol {
                symbol,
                expected: "[0-9]",
            }),
        }
    }
}

/// Upper-case hexadecimal `0`-`9`, `A`-`F`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpperHex;

impl Alphabet for UpperHex {
    fn size(&self) -> u8 {
        16
    }

    fn to_symbol(&self, index: u8) -> u8 {
        hex_symbol(index, b'A')
    }

    fn from_symbol(&self, symbol: u8) -> Result<u8> {
        match symbol {
            b'0'..=b'9' => Ok(symbol - b'0'),
            b'A'..=b'F' => Ok(symbol - b'A' + 10),
            _ => Err(DammError::InvalidSymbol {
                symbol,
                expected: "[0-9A-F]",
            }),
        }
    }
}

/// Lower-case hexadecimal `0`-`9`, `a`-`f`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LowerHex;

impl Alphabet for LowerHex {
    fn size(&self) -> u8 {
        16
    }

    fn to_symbol(&self, index: u8) -> u8 {
        hex_symbol(index, b'a')
    }

    fn from_symbol(&self, symbol: u8) -> Result<u8> {
        match symbol {
            b'0'..=b'9' => Ok(symbol - b'0'),
            b'a'..=b'f' => Ok(symbol - b'a' + 10),
            _ => Err(DammError::InvalidSymbol {
                symbol,
                expected: "[0-9a-f]",
            }),
        }
    }
}

fn hex_symbol(index: u8, letter_base: u8) -> u8 {
    if index < 10 {
        b'0' + index
    } else {
        letter_base + (index - 10)
    }
}

/// Selector over the built-in alphabets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlphabetKind {
    /// Decimal digits (size 10)
    #[default]
    Digit,
    /// Upper-case hexadecimal (size 16)
    UpperHex,
    /// Lower-case hexadecimal (size 16)
    LowerHex,
}

impl AlphabetKind {
    /// All built-in alphabets
    pub const ALL: [AlphabetKind; 3] = [
        AlphabetKind::Digit,
        AlphabetKind::UpperHex,
        AlphabetKind::LowerHex,
    ];

    /// Canonical name, as accepted by `FromStr`
    pub fn name(&self) -> &'static str {
        match self {
            AlphabetKind::Digit => "digit",
            AlphabetKind::UpperHex => "upper-hex",
            AlphabetKind::LowerHex => "lower-hex",
        }
    }

    /// The built-in alphabet this kind selects
    pub fn as_alphabet(&self) -> &'static dyn Alphabet {
        match self {
            AlphabetKind::Digit => &Digit,
            AlphabetKind::UpperHex => &UpperHex,
            AlphabetKind::LowerHex => &LowerHex,
        }
    }
}

impl Alphabet for AlphabetKind {
    fn size(&self) -> u8 {
        self.as_alphabet().size()
    }

    fn to_symbol(&self, index: u8) -> u8 {
        self.as_alphabet().to_symbol(index)
    }

    fn from_symbol(&self, symbol: u8) -> Result<u8> {
        self.as_alphabet().from_symbol(symbol)
    }
}

impl FromStr for AlphabetKind {
    type Err = DammError;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        #[allow(clippy::enum_glob_use)]
        use AlphabetKind::*;
        match value.to_lowercase().as_str() {
            "digit" | "digits" | "dec" | "decimal" => Ok(Digit),
            "upper-hex" | "upperhex" | "upper" | "hex" => Ok(UpperHex),
            "lower-hex" | "lowerhex" | "lower" => Ok(LowerHex),
            invalid => Err(DammError::UnknownAlphabet(invalid.to_string())),
        }
    }
}

impl TryFrom<String> for AlphabetKind {
    type Error = DammError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        Self::from_str(value.as_str())
    }
}

impl std::fmt::Display for AlphabetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (size {})", self.name(), self.size())
    }
}
