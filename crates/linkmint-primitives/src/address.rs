//! Contract account address (20 bytes)

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::hex_util;

/// Address parsing error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// Invalid hex string
    #[error("invalid hex string: {0}")]
    InvalidHex(String),
    /// Wrong number of hex digits after the optional prefix
    #[error("invalid address length: expected 40 hex digits, got {0}")]
    InvalidLength(usize),
}

/// 20-byte account address
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Address([u8; 20]);

impl Address {
    /// Size of address in bytes
    pub const LEN: usize = 20;

    /// Zero address (0x0000...0000)
    pub const ZERO: Address = Address([0u8; 20]);

    /// Create address from bytes
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Address(bytes)
    }

    /// Create address from a 20-byte slice
    pub fn from_slice(slice: &[u8]) -> Result<Self, AddressError> {
        let bytes: [u8; 20] = slice
            .try_into()
            .map_err(|_| AddressError::InvalidLength(slice.len() * 2))?;
        Ok(Address(bytes))
    }

    /// Parse address from hex (prefix optional, any case, exactly 40 digits)
    pub fn from_hex(s: &str) -> Result<Self, AddressError> {
        let digits = hex_util::strip_prefix(s);
        if digits.len() != Self::LEN * 2 {
            return Err(AddressError::InvalidLength(digits.len()));
        }
        let mut bytes = [0u8; 20];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|e| AddressError::InvalidHex(e.to_string()))?;
        Ok(Address(bytes))
    }

    /// Take the low 20 bytes of a 32-byte word
    pub fn from_word(word: &[u8; 32]) -> Self {
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&word[12..]);
        Address(bytes)
    }

    /// Left-pad into a 32-byte word
    pub fn to_word(&self) -> [u8; 32] {
        let mut word = [0u8; 32];
        word[12..].copy_from_slice(&self.0);
        word
    }

    /// Get as byte array
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Check if this is the zero address
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }

    /// Convert to lowercase hex string with 0x prefix
    pub fn to_hex(&self) -> String {
        hex_util::to_prefixed(self.0)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_hex())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Address(bytes)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::*;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Address {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.to_hex())
        }
    }

    impl<'de> Deserialize<'de> for Address {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let s = String::deserialize(deserializer)?;
            Address::from_hex(&s).map_err(de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "0x742d35Cc6634C0532925a3b844Bc9e7595f0aB3d";

    #[test]
    fn test_address_from_hex_prefix_optional() {
        let with = Address::from_hex(SAMPLE).unwrap();
        let without = Address::from_hex(&SAMPLE[2..]).unwrap();
        assert_eq!(with, without);
        assert!(!with.is_zero());
    }

    #[test]
    fn test_address_case_insensitive() {
        let lower = Address::from_hex(&SAMPLE.to_lowercase()).unwrap();
        let upper = Address::from_hex(&SAMPLE[2..].to_uppercase()).unwrap();
        let mixed = Address::from_hex(SAMPLE).unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower, mixed);
        assert_eq!(mixed.to_hex(), "0x742d35cc6634c0532925a3b844bc9e7595f0ab3d");
    }

    #[test]
    fn test_address_wrong_digit_count() {
        // 39 digits
        assert_eq!(
            Address::from_hex("0x742d35Cc6634C0532925a3b844Bc9e7595f0aB3"),
            Err(AddressError::InvalidLength(39))
        );
        // 42 digits
        assert_eq!(
            Address::from_hex("0x742d35Cc6634C0532925a3b844Bc9e7595f0aB3d00"),
            Err(AddressError::InvalidLength(42))
        );
        assert_eq!(Address::from_hex("0x"), Err(AddressError::InvalidLength(0)));
        assert_eq!(Address::from_hex(""), Err(AddressError::InvalidLength(0)));
    }

    #[test]
    fn test_address_invalid_chars() {
        match Address::from_hex("0x742d35Cc6634C0532925a3b844Bc9e7595f0aGGG") {
            Err(AddressError::InvalidHex(_)) => {}
            other => panic!("Expected InvalidHex error, got {:?}", other),
        }
    }

    #[test]
    fn test_address_word_roundtrip() {
        let addr = Address::from_hex(SAMPLE).unwrap();
        let word = addr.to_word();
        assert_eq!(&word[..12], &[0u8; 12]);
        assert_eq!(Address::from_word(&word), addr);
    }

    #[test]
    fn test_address_from_word_ignores_high_bytes() {
        let mut word = [0xffu8; 32];
        word[12..].copy_from_slice(&[0x11; 20]);
        assert_eq!(Address::from_word(&word), Address::from_bytes([0x11; 20]));
    }

    #[test]
    fn test_address_from_slice() {
        assert!(Address::from_slice(&[0xab; 20]).is_ok());
        assert_eq!(
            Address::from_slice(&[0u8; 19]),
            Err(AddressError::InvalidLength(38))
        );
    }

    #[test]
    fn test_address_display_and_parse() {
        let addr: Address = SAMPLE.parse().unwrap();
        assert_eq!(
            format!("{}", addr),
            "0x742d35cc6634c0532925a3b844bc9e7595f0ab3d"
        );
        assert!(format!("{:?}", addr).starts_with("Address(0x742d"));
    }

    #[test]
    fn test_address_serde_as_hex_string() {
        let addr = Address::from_hex(SAMPLE).unwrap();
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, "\"0x742d35cc6634c0532925a3b844bc9e7595f0ab3d\"");
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, addr);
        assert!(serde_json::from_str::<Address>("\"0x1234\"").is_err());
    }
}
