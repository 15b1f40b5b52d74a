//! Codec type definitions

use std::fmt;
use std::str::FromStr;

use linkmint_primitives::{Address, H256, U256};
use serde::{Deserialize, Serialize};

use super::encode::function_selector;
use super::error::AbiError;

/// Supported parameter types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbiType {
    /// 256-bit unsigned integer
    #[serde(rename = "uint256")]
    Uint256,
    /// 32 raw bytes
    #[serde(rename = "bytes32")]
    Bytes32,
    /// 20-byte address
    #[serde(rename = "address")]
    Address,
    /// Boolean
    #[serde(rename = "bool")]
    Bool,
    /// UTF-8 string
    #[serde(rename = "string")]
    String,
    /// Dynamic array of addresses
    #[serde(rename = "address[]")]
    AddressArray,
}

impl AbiType {
    /// Canonical type tag as it appears in signatures
    pub fn as_str(&self) -> &'static str {
        match self {
            AbiType::Uint256 => "uint256",
            AbiType::Bytes32 => "bytes32",
            AbiType::Address => "address",
            AbiType::Bool => "bool",
            AbiType::String => "string",
            AbiType::AddressArray => "address[]",
        }
    }

    /// Dynamic types store an offset in the head and their data in the tail
    pub fn is_dynamic(&self) -> bool {
        match self {
            AbiType::String | AbiType::AddressArray => true,
            AbiType::Uint256 | AbiType::Bytes32 | AbiType::Address | AbiType::Bool => false,
        }
    }
}

impl fmt::Display for AbiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AbiType {
    type Err = AbiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "uint256" => Ok(AbiType::Uint256),
            "bytes32" => Ok(AbiType::Bytes32),
            "address" => Ok(AbiType::Address),
            "bool" => Ok(AbiType::Bool),
            "string" => Ok(AbiType::String),
            "address[]" => Ok(AbiType::AddressArray),
            other => Err(AbiError::UnsupportedType(other.to_string())),
        }
    }
}

/// Parse a comma-separated type list, e.g. `"address,uint256"`
pub fn parse_types(list: &str) -> Result<Vec<AbiType>, AbiError> {
    if list.trim().is_empty() {
        return Ok(Vec::new());
    }
    list.split(',').map(str::parse).collect()
}

/// Typed value, as produced by decoding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AbiValue {
    /// `uint256`
    Uint(U256),
    /// `bytes32`
    Bytes32(H256),
    /// `address`
    Address(Address),
    /// `bool`
    Bool(bool),
    /// `string`
    String(String),
    /// `address[]`
    AddressArray(Vec<Address>),
}

impl AbiValue {
    /// Type this value encodes as
    pub fn abi_type(&self) -> AbiType {
        match self {
            AbiValue::Uint(_) => AbiType::Uint256,
            AbiValue::Bytes32(_) => AbiType::Bytes32,
            AbiValue::Address(_) => AbiType::Address,
            AbiValue::Bool(_) => AbiType::Bool,
            AbiValue::String(_) => AbiType::String,
            AbiValue::AddressArray(_) => AbiType::AddressArray,
        }
    }

    /// Get the integer, if this is a `uint256`
    pub fn as_uint(&self) -> Option<U256> {
        match self {
            AbiValue::Uint(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the address, if this is an `address`
    pub fn as_address(&self) -> Option<Address> {
        match self {
            AbiValue::Address(a) => Some(*a),
            _ => None,
        }
    }

    /// Get the flag, if this is a `bool`
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AbiValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for AbiValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbiValue::Uint(v) => write!(f, "{}", v),
            AbiValue::Bytes32(h) => write!(f, "{}", h),
            AbiValue::Address(a) => write!(f, "{}", a),
            AbiValue::Bool(b) => write!(f, "{}", b),
            AbiValue::String(s) => f.write_str(s),
            AbiValue::AddressArray(addrs) => {
                let items: Vec<String> = addrs.iter().map(Address::to_hex).collect();
                write!(f, "[{}]", items.join(","))
            }
        }
    }
}

/// Encode-side argument.
///
/// Either an already typed [`AbiValue`], or text that is validated against
/// the declared type at encode time (hex for `address`/`bytes32`, decimal or
/// `0x` hex for `uint256`, `true`/`false` for `bool`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbiArg {
    /// Typed value
    Value(AbiValue),
    /// Single text value
    Text(String),
    /// List of texts, for `address[]`
    TextList(Vec<String>),
}

impl AbiArg {
    /// Short description of the argument kind, for mismatch errors
    pub(crate) fn kind(&self) -> String {
        match self {
            AbiArg::Value(v) => v.abi_type().to_string(),
            AbiArg::Text(_) => "text".to_string(),
            AbiArg::TextList(_) => "text list".to_string(),
        }
    }
}

impl From<AbiValue> for AbiArg {
    fn from(v: AbiValue) -> Self {
        AbiArg::Value(v)
    }
}

impl From<U256> for AbiArg {
    fn from(v: U256) -> Self {
        AbiArg::Value(AbiValue::Uint(v))
    }
}

impl From<u64> for AbiArg {
    fn from(v: u64) -> Self {
        AbiArg::Value(AbiValue::Uint(U256::from(v)))
    }
}

impl From<u128> for AbiArg {
    fn from(v: u128) -> Self {
        AbiArg::Value(AbiValue::Uint(U256::from(v)))
    }
}

impl From<bool> for AbiArg {
    fn from(v: bool) -> Self {
        AbiArg::Value(AbiValue::Bool(v))
    }
}

impl From<Address> for AbiArg {
    fn from(v: Address) -> Self {
        AbiArg::Value(AbiValue::Address(v))
    }
}

impl From<H256> for AbiArg {
    fn from(v: H256) -> Self {
        AbiArg::Value(AbiValue::Bytes32(v))
    }
}

impl From<Vec<Address>> for AbiArg {
    fn from(v: Vec<Address>) -> Self {
        AbiArg::Value(AbiValue::AddressArray(v))
    }
}

impl From<&str> for AbiArg {
    fn from(v: &str) -> Self {
        AbiArg::Text(v.to_string())
    }
}

impl From<String> for AbiArg {
    fn from(v: String) -> Self {
        AbiArg::Text(v)
    }
}

impl From<Vec<&str>> for AbiArg {
    fn from(v: Vec<&str>) -> Self {
        AbiArg::TextList(v.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<String>> for AbiArg {
    fn from(v: Vec<String>) -> Self {
        AbiArg::TextList(v)
    }
}

/// Function descriptor.
///
/// `signature` is the only input to selector derivation and must read
/// exactly `name(type1,type2,...)` with no spaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiFunction {
    /// Function name
    pub name: String,
    /// Canonical signature text
    pub signature: String,
    /// Ordered input types
    pub inputs: Vec<AbiType>,
    /// Ordered output types
    pub outputs: Vec<AbiType>,
}

impl AbiFunction {
    /// Create a descriptor
    pub fn new(
        name: impl Into<String>,
        signature: impl Into<String>,
        inputs: Vec<AbiType>,
        outputs: Vec<AbiType>,
    ) -> Self {
        Self {
            name: name.into(),
            signature: signature.into(),
            inputs,
            outputs,
        }
    }

    /// Build a descriptor from `name(type,...)`, deriving name and inputs
    pub fn from_signature(signature: &str, outputs: Vec<AbiType>) -> Result<Self, AbiError> {
        let invalid = || AbiError::InvalidSignature(signature.to_string());
        let (name, rest) = signature.split_once('(').ok_or_else(invalid)?;
        let params = rest.strip_suffix(')').ok_or_else(invalid)?;
        if name.is_empty() || signature.contains(char::is_whitespace) {
            return Err(invalid());
        }
        Ok(Self::new(name, signature, parse_types(params)?, outputs))
    }

    /// 4-byte selector of the signature
    pub fn selector(&self) -> [u8; 4] {
        function_selector(&self.signature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abi_type_is_dynamic() {
        assert!(!AbiType::Uint256.is_dynamic());
        assert!(!AbiType::Bytes32.is_dynamic());
        assert!(!AbiType::Address.is_dynamic());
        assert!(!AbiType::Bool.is_dynamic());
        assert!(AbiType::String.is_dynamic());
        assert!(AbiType::AddressArray.is_dynamic());
    }

    #[test]
    fn test_abi_type_parse() {
        assert_eq!("uint256".parse::<AbiType>().unwrap(), AbiType::Uint256);
        assert_eq!("address[]".parse::<AbiType>().unwrap(), AbiType::AddressArray);
        assert_eq!(
            "int256".parse::<AbiType>(),
            Err(AbiError::UnsupportedType("int256".to_string()))
        );
        assert!("bytes".parse::<AbiType>().is_err());
        assert!("uint8".parse::<AbiType>().is_err());
    }

    #[test]
    fn test_abi_type_display_roundtrip() {
        for ty in [
            AbiType::Uint256,
            AbiType::Bytes32,
            AbiType::Address,
            AbiType::Bool,
            AbiType::String,
            AbiType::AddressArray,
        ] {
            assert_eq!(ty.to_string().parse::<AbiType>().unwrap(), ty);
        }
    }

    #[test]
    fn test_parse_types() {
        assert!(parse_types("").unwrap().is_empty());
        assert_eq!(
            parse_types("address,uint256").unwrap(),
            vec![AbiType::Address, AbiType::Uint256]
        );
        assert!(parse_types("address,tuple").is_err());
    }

    #[test]
    fn test_descriptor_literal_format() {
        let json = r#"{
            "name": "claimBatch",
            "signature": "claimBatch(address[],address)",
            "inputs": ["address[]", "address"],
            "outputs": ["uint256"]
        }"#;
        let function: AbiFunction = serde_json::from_str(json).unwrap();
        assert_eq!(function.inputs, vec![AbiType::AddressArray, AbiType::Address]);
        assert_eq!(function.outputs, vec![AbiType::Uint256]);

        let back = serde_json::to_value(&function).unwrap();
        assert_eq!(back["inputs"][0], "address[]");
    }

    #[test]
    fn test_descriptor_rejects_unknown_tag() {
        let json = r#"{"name":"f","signature":"f(int8)","inputs":["int8"],"outputs":[]}"#;
        assert!(serde_json::from_str::<AbiFunction>(json).is_err());
    }

    #[test]
    fn test_from_signature() {
        let function = AbiFunction::from_signature("transfer(address,uint256)", vec![]).unwrap();
        assert_eq!(function.name, "transfer");
        assert_eq!(function.inputs, vec![AbiType::Address, AbiType::Uint256]);
        assert_eq!(function.selector(), [0xa9, 0x05, 0x9c, 0xbb]);

        let empty = AbiFunction::from_signature("tokenPrice()", vec![AbiType::Uint256]).unwrap();
        assert!(empty.inputs.is_empty());

        assert!(matches!(
            AbiFunction::from_signature("transfer(address, uint256)", vec![]),
            Err(AbiError::InvalidSignature(_))
        ));
        assert!(AbiFunction::from_signature("transfer", vec![]).is_err());
        assert!(AbiFunction::from_signature("(address)", vec![]).is_err());
    }

    #[test]
    fn test_value_display() {
        assert_eq!(AbiValue::Uint(U256::from(42u64)).to_string(), "42");
        assert_eq!(AbiValue::Bool(true).to_string(), "true");
        assert_eq!(
            AbiValue::AddressArray(vec![Address::ZERO]).to_string(),
            "[0x0000000000000000000000000000000000000000]"
        );
    }
}
