//! Error types for the NLCA library.

use thiserror::Error;

/// Errors produced by the NLCA library.
///
/// A wrong key is deliberately *not* an error: the wire format carries no
/// integrity check or key-check value, so an incorrect key decrypts to
/// garbage with no detectable failure. Callers that need tamper detection
/// must layer it on top of the payload.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NlcaError {
    /// Decrypt received ciphertext whose length is not a multiple of 16.
    #[error("ciphertext length {len} is not a multiple of the 16-byte block size")]
    InvalidInputLength {
        /// Length of the rejected ciphertext.
        len: usize,
    },
    /// Hex text has an odd number of digits.
    #[error("hex text length {len} is odd")]
    OddHexLength {
        /// Length of the rejected hex text.
        len: usize,
    },
    /// Hex text contains a character outside `[0-9a-fA-F]`.
    #[error("invalid hex digit 0x{byte:02x} at offset {offset}")]
    InvalidHexDigit {
        /// The offending byte.
        byte: u8,
        /// Byte offset of the first offending character.
        offset: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_input_length() {
        let err = NlcaError::InvalidInputLength { len: 17 };
        assert_eq!(
            format!("{}", err),
            "ciphertext length 17 is not a multiple of the 16-byte block size"
        );
    }

    #[test]
    fn test_display_odd_hex_length() {
        let err = NlcaError::OddHexLength { len: 3 };
        assert_eq!(format!("{}", err), "hex text length 3 is odd");
    }

    #[test]
    fn test_display_invalid_hex_digit() {
        let err = NlcaError::InvalidHexDigit {
            byte: b'g',
            offset: 4,
        };
        assert_eq!(format!("{}", err), "invalid hex digit 0x67 at offset 4");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            NlcaError::InvalidInputLength { len: 8 },
            NlcaError::InvalidInputLength { len: 8 }
        );
        assert_ne!(
            NlcaError::InvalidInputLength { len: 8 },
            NlcaError::OddHexLength { len: 8 }
        );
    }

    #[test]
    fn test_error_clone() {
        let err = NlcaError::InvalidHexDigit {
            byte: b'z',
            offset: 0,
        };
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }

    #[test]
    fn test_error_is_std_error() {
        let err: &dyn std::error::Error = &NlcaError::OddHexLength { len: 1 };
        assert!(err.source().is_none());
    }
}
