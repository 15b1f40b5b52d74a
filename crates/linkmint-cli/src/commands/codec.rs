//! Offline commands: hashing, selectors, calldata and link ids

use linkmint_crypto::keccak256;
use linkmint_primitives::{hex_util, parse_u256, PrimitiveError};
use linkmint_sdk::abi::{
    decode_output_hex, encode_call_hex, parse_types, selector_hex, AbiFunction,
};
use linkmint_sdk::contracts::ContractAddresses;
use linkmint_sdk::{link, units, SdkError};

use super::{contract, to_args, values_json, values_text};
use crate::{output::Output, CliError};

/// Keccak-256 of UTF-8 text or of hex-encoded bytes
pub fn hash(text: Option<&str>, hex: Option<&str>, json: bool) -> Result<Output, CliError> {
    let bytes = match (text, hex) {
        (_, Some(hex)) => hex_util::decode(hex)?,
        (Some(text), None) => text.as_bytes().to_vec(),
        (None, None) => {
            return Err(CliError::InvalidInput(
                "Provide text or --hex <bytes>".to_string(),
            ))
        }
    };
    let digest = keccak256(&bytes).to_hex();
    Ok(Output::new(json).field("hash", &digest).message(&digest))
}

/// Selector of a canonical signature
pub fn selector(signature: &str, json: bool) -> Result<Output, CliError> {
    let function = AbiFunction::from_signature(signature, Vec::new())?;
    let selector = selector_hex(&function.signature);
    Ok(Output::new(json)
        .field("signature", &function.signature)
        .field("selector", &selector)
        .message(&selector))
}

/// Calldata for a signature or a catalogue function
pub fn encode(
    signature: Option<&str>,
    function: Option<&str>,
    addresses: &ContractAddresses,
    args: &[String],
    json: bool,
) -> Result<Output, CliError> {
    let function = match (signature, function) {
        (Some(signature), None) => AbiFunction::from_signature(signature, Vec::new())?,
        (None, Some(name)) => contract::resolve(addresses, name, None)?.1,
        _ => {
            return Err(CliError::InvalidInput(
                "Provide exactly one of --signature or --function".to_string(),
            ))
        }
    };
    let data = encode_call_hex(&function, &to_args(&function.inputs, args))?;
    Ok(Output::new(json)
        .field("signature", &function.signature)
        .field("data", &data)
        .message(&data))
}

/// Decode return data against a comma-separated output type list
pub fn decode(outputs: &str, data: &str, json: bool) -> Result<Output, CliError> {
    let function = AbiFunction::new("output", "output()", Vec::new(), parse_types(outputs)?);
    let values = decode_output_hex(&function, data)?;
    Ok(Output::new(json)
        .field_value("values", values_json(&values))
        .message(&values_text(&values)))
}

/// Canonical form and id of a link
pub fn link_id(url: &str, json: bool) -> Result<Output, CliError> {
    let link = link::link_id_from_raw(url);
    let link_id = link.link_id.to_hex();
    Ok(Output::new(json)
        .field("canonical", &link.canonical)
        .field("link_id", &link_id)
        .message(&format!("{}\n{}", link.canonical, link_id)))
}

/// Base units to a decimal amount
pub fn format_units(
    value: &str,
    decimals: u32,
    precision: usize,
    json: bool,
) -> Result<Output, CliError> {
    let value = parse_u256(value).map_err(|e| SdkError::from(PrimitiveError::from(e)))?;
    let amount = units::format_units(value, decimals, precision)?;
    Ok(Output::new(json).field("amount", &amount).message(&amount))
}

/// Decimal amount to base units
pub fn parse_units(amount: &str, decimals: u32, json: bool) -> Result<Output, CliError> {
    let value = units::parse_units(amount, decimals)?.to_string();
    Ok(Output::new(json).field("value", &value).message(&value))
}
