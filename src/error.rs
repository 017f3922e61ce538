use thiserror::Error;

/// Result type for Damm checksum operations
pub type Result<T> = std::result::Result<T, DammError>;

/// Error types for check symbol computation and validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DammError {
    /// A byte outside the alphabet's accepted range
    #[error("got invalid character '0x{symbol:02x}', must be {expected}")]
    InvalidSymbol { symbol: u8, expected: &'static str },

    /// No quasigroup table is registered for the alphabet size
    #[error("unsupported alphabet size: {0}")]
    UnsupportedAlphabetSize(u8),

    /// Alphabet name not recognized when parsing a selector
    #[error("unknown alphabet: {0} (expected digit, upper-hex or lower-hex)")]
    UnknownAlphabet(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_symbol_message() {
        let err = DammError::InvalidSymbol {
            symbol: b'a',
            expected: "[0-9]",
        };
        assert_eq!(err.to_string(), "got invalid character '0x61', must be [0-9]");
    }

    #[test]
    fn test_invalid_symbol_message_pads_hex() {
        let err = DammError::InvalidSymbol {
            symbol: 0x07,
            expected: "[0-9A-F]",
        };
        assert_eq!(err.to_string(), "got invalid character '0x07', must be [0-9A-F]");
    }

    #[test]
    fn test_unsupported_size_message() {
        assert_eq!(
            DammError::UnsupportedAlphabetSize(7).to_string(),
            "unsupported alphabet size: 7"
        );
    }
}
