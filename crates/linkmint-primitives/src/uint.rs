//! Bounds-checked text to `U256` parsing

use primitive_types::U256;
use thiserror::Error;

use crate::hex_util;

/// Integer parsing error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UintError {
    /// No digits
    #[error("empty integer")]
    Empty,
    /// Minus sign on an unsigned value
    #[error("negative value: {0}")]
    Negative(String),
    /// Character outside the radix
    #[error("invalid digit {0:?}")]
    InvalidDigit(char),
    /// Value does not fit in 256 bits
    #[error("value exceeds 2^256 - 1: {0}")]
    Overflow(String),
}

/// Parse a non-negative integer from decimal text or `0x`-prefixed hex.
///
/// Values above `2^256 - 1` are rejected, never wrapped.
pub fn parse_u256(text: &str) -> Result<U256, UintError> {
    let text = text.trim();
    if text.starts_with('-') {
        return Err(UintError::Negative(text.to_string()));
    }
    let is_hex = text.starts_with("0x") || text.starts_with("0X");
    let (digits, radix) = if is_hex {
        (hex_util::strip_prefix(text), 16u32)
    } else {
        (text, 10u32)
    };
    if digits.is_empty() {
        return Err(UintError::Empty);
    }

    digits.chars().try_fold(U256::zero(), |acc, ch| {
        let digit = ch.to_digit(radix).ok_or(UintError::InvalidDigit(ch))?;
        acc.checked_mul(U256::from(radix))
            .and_then(|v| v.checked_add(U256::from(digit)))
            .ok_or_else(|| UintError::Overflow(text.to_string()))
    })
}
