//! Text to `bytes32` conversion

use linkmint_crypto::keccak256;
use linkmint_primitives::H256;

use crate::SdkError;

/// Convert user text into a `bytes32` word.
///
/// Empty text is the zero word, `0x`-prefixed hex is left-padded to 32 bytes
/// and anything else is hashed as UTF-8.
pub fn to_bytes32(value: &str) -> Result<H256, SdkError> {
    if value.is_empty() {
        return Ok(H256::ZERO);
    }
    let Some(digits) = value.strip_prefix("0x") else {
        return Ok(keccak256(value.as_bytes()));
    };
    if digits.len() > H256::LEN * 2 {
        return Err(SdkError::InvalidLength(format!(
            "{} hex digits exceed bytes32",
            digits.len()
        )));
    }

    let padded = format!("{:0>64}", digits);
    let mut bytes = [0u8; 32];
    hex::decode_to_slice(&padded, &mut bytes)?;
    Ok(H256::from_bytes(bytes))
}
