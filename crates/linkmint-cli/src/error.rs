//! CLI error types

use thiserror::Error;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid address format
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Invalid hex string
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// SDK error
    #[error(transparent)]
    Sdk(#[from] linkmint_sdk::SdkError),

    /// Calldata error
    #[error("ABI error: {0}")]
    Abi(#[from] linkmint_sdk::abi::AbiError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Config error
    #[error("Config error: {0}")]
    Config(String),
}

impl From<hex::FromHexError> for CliError {
    fn from(e: hex::FromHexError) -> Self {
        CliError::InvalidHex(e.to_string())
    }
}

impl From<linkmint_primitives::AddressError> for CliError {
    fn from(e: linkmint_primitives::AddressError) -> Self {
        CliError::InvalidAddress(e.to_string())
    }
}
