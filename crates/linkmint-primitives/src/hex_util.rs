//! Hex string helpers

/// Strip an optional `0x` / `0X` prefix
pub fn strip_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

/// Render bytes as lowercase hex with a `0x` prefix
pub fn to_prefixed(bytes: impl AsRef<[u8]>) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Decode hex text (prefix optional, any case) into bytes
pub fn decode(s: &str) -> Result<Vec<u8>, hex::FromHexError> {
    hex::decode(strip_prefix(s))
}
