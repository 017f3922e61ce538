//! Damm check symbols for decimal and hexadecimal identifiers.
//!
//! ```
//! use damm::{check_digit, is_valid_digit};
//!
//! let check = check_digit(b"572").unwrap();
//! assert_eq!(check, b'4');
//! assert!(is_valid_digit(b"5724").unwrap());
//! ```

pub mod alphabet;
pub mod checksum;
pub mod error;
pub mod quasigroup;


pub use alphabet::{Alphabet, AlphabetKind, Digit, LowerHex, UpperHex};
pub use checksum::{append_check_symbol, check_symbol, fold, is_valid, Damm};
pub use error::{DammError, Result};
pub use quasigroup::QuasigroupTable;

/// Check digit for a decimal sequence
pub fn check_digit(symbols: &[u8]) -> Result<u8> {
    check_symbol(&Digit, symbols)
}

/// Check symbol for an upper-case hexadecimal sequence
pub fn check_upper_hex(symbols: &[u8]) -> Result<u8> {
    check_symbol(&UpperHex, symbols)
}

/// Check symbol for a lower-case hexadecimal sequence
pub fn check_lower_hex(symbols: &[u8]) -> Result<u8> {
    check_symbol(&LowerHex, symbols)
}

/// Validate a decimal sequence ending in its check digit
pub fn is_valid_digit(symbols: &[u8]) -> Result<bool> {
    is_valid(&Digit, symbols)
}

/// Validate an upper-case hexadecimal sequence ending in its check symbol
pub fn is_valid_upper_hex(symbols: &[u8]) -> Result<bool> {
    is_valid(&UpperHex, symbols)
}

/// Validate a lower-case hexadecimal sequence ending in its check symbol
pub fn is_valid_lower_hex(symbols: &[u8]) -> Result<bool> {
    is_valid(&LowerHex, symbols)
}

pub fn append_digit(symbols: &[u8]) -> Result<Vec<u8>> {
    append_check_symbol(&Digit, symbols)
}

pub fn append_upper_hex(symbols: &[u8]) -> Result<Vec<u8>> {
    append_check_symbol(&UpperHex, symbols)
}

pub fn append_lower_hex(symbols: &[u8]) -> Result<Vec<u8>> {
    append_check_symbol(&LowerHex, symbols)
}
