//! Codec errors

use thiserror::Error;

/// Calldata encode/decode error.
///
/// Every variant is a caller or schema defect: none are retriable and no
/// partial payload is produced alongside them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AbiError {
    /// Argument count differs from the descriptor's inputs
    #[error("expected {expected} arguments, got {got}")]
    Arity {
        /// Declared input count
        expected: usize,
        /// Supplied argument count
        got: usize,
    },

    /// Address text is not 40 hex digits
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// Fixed-size hex input has the wrong digit count
    #[error("invalid length: expected {expected} hex digits, got {got}")]
    InvalidLength {
        /// Expected digit count
        expected: usize,
        /// Actual digit count
        got: usize,
    },

    /// Integer does not fit in 256 bits
    #[error("integer overflow: {0}")]
    Overflow(String),

    /// Integer text is not a non-negative number
    #[error("invalid integer: {0}")]
    InvalidInteger(String),

    /// Type tag outside the supported catalogue
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    /// Signature text is not `name(type,...)`
    #[error("invalid signature: {0}")]
    InvalidSignature(String),

    /// Argument kind does not match the declared type
    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch {
        /// Declared type tag
        expected: String,
        /// Supplied argument kind
        got: String,
    },

    /// Decode needs bytes past the end of the payload
    #[error("truncated data: need {needed} bytes, have {available}")]
    Truncated {
        /// Bytes required
        needed: usize,
        /// Payload length
        available: usize,
    },

    /// String content is not UTF-8
    #[error("invalid UTF-8: {0}")]
    InvalidUtf8(String),

    /// Payload text is not hex
    #[error("invalid hex: {0}")]
    InvalidHex(String),
}

impl From<hex::FromHexError> for AbiError {
    fn from(e: hex::FromHexError) -> Self {
        AbiError::InvalidHex(e.to_string())
    }
}
