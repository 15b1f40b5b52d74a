//! Keccak-256 digests

use linkmint_primitives::{hex_util, H256};

use crate::keccak::keccak;

/// Compute the Keccak-256 digest of `data`
pub fn keccak256(data: &[u8]) -> H256 {
    let mut digest = [0u8; H256::LEN];
    keccak(data, &mut digest);
    H256::from_bytes(digest)
}

/// Keccak-256 of the concatenation of `parts`
pub fn keccak256_concat(parts: &[&[u8]]) -> H256 {
    keccak256(&parts.concat())
}

/// Keccak-256 rendered as `0x` + 64 lowercase hex digits
pub fn keccak256_hex(data: &[u8]) -> String {
    hex_util::to_prefixed(keccak256(data))
}

/// Hex digest of the UTF-8 bytes of `text`
pub fn keccak256_text(text: &str) -> String {
    keccak256_hex(text.as_bytes())
}
