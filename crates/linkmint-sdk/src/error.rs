//! SDK error types

use linkmint_primitives::{HashError, PrimitiveError};
use thiserror::Error;

use crate::abi::AbiError;

/// SDK error type
#[derive(Debug, Error)]
pub enum SdkError {
    /// Transport/network error
    #[error("Transport error: {0}")]
    Transport(String),

    /// RPC error from node
    #[error("RPC error: {code} - {message}")]
    Rpc {
        /// Error code
        code: i64,
        /// Error message
        message: String,
    },

    /// Calldata encode/decode error
    #[error("ABI error: {0}")]
    Abi(#[from] AbiError),

    /// Invalid address format
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Invalid hex string
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    /// Invalid fixed-size value length
    #[error("Invalid length: {0}")]
    InvalidLength(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Integer text that is not a non-negative 256-bit value
    #[error("Invalid integer: {0}")]
    InvalidInteger(String),

    /// Function not present on the contract
    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    /// Malformed decimal amount or unsupported decimals
    #[error("Invalid units: {0}")]
    InvalidUnits(String),
}

impl From<hex::FromHexError> for SdkError {
    fn from(e: hex::FromHexError) -> Self {
        SdkError::InvalidHex(e.to_string())
    }
}

impl From<serde_json::Error> for SdkError {
    fn from(e: serde_json::Error) -> Self {
        SdkError::Serialization(e.to_string())
    }
}

impl From<PrimitiveError> for SdkError {
    fn from(e: PrimitiveError) -> Self {
        match e {
            PrimitiveError::Address(e) => SdkError::InvalidAddress(e.to_string()),
            PrimitiveError::Hash(e @ HashError::InvalidLength { .. }) => {
                SdkError::InvalidLength(e.to_string())
            }
            PrimitiveError::Hash(e @ HashError::InvalidHex(_)) => SdkError::InvalidHex(e.to_string()),
            PrimitiveError::Uint(e) => SdkError::InvalidInteger(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkmint_primitives::{parse_u256, Address, H256};

    #[test]
    fn test_primitive_errors_keep_their_kind() {
        let address = Address::from_hex("0x12").map_err(PrimitiveError::from).unwrap_err();
        assert!(matches!(SdkError::from(address), SdkError::InvalidAddress(_)));

        let short = H256::from_hex("0x12").map_err(PrimitiveError::from).unwrap_err();
        assert!(matches!(SdkError::from(short), SdkError::InvalidLength(_)));

        let bad_hex = H256::from_hex(&"zz".repeat(32)).map_err(PrimitiveError::from).unwrap_err();
        assert!(matches!(SdkError::from(bad_hex), SdkError::InvalidHex(_)));

        let negative = parse_u256("-1").map_err(PrimitiveError::from).unwrap_err();
        assert!(matches!(SdkError::from(negative), SdkError::InvalidInteger(_)));
    }
}
