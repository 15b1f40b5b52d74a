//! Subcommand implementations
//!
//! Each command builds an [`Output`](crate::output::Output) so it can be
//! checked without capturing stdout.

pub mod codec;
pub mod contract;

use linkmint_sdk::abi::{AbiArg, AbiType, AbiValue};
use serde_json::Value;

/// Pair raw command-line arguments with their declared types.
///
/// `address[]` arguments are comma-separated lists. Surplus arguments stay
/// text so the encoder reports the arity mismatch.
pub fn to_args(types: &[AbiType], raw: &[String]) -> Vec<AbiArg> {
    raw.iter()
        .enumerate()
        .map(|(i, text)| match types.get(i) {
            Some(AbiType::AddressArray) => AbiArg::TextList(
                text.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect(),
            ),
            _ => AbiArg::Text(text.clone()),
        })
        .collect()
}

/// JSON form of decoded values; integers as decimal strings
pub fn values_json(values: &[AbiValue]) -> Value {
    Value::Array(values.iter().map(value_json).collect())
}

fn value_json(value: &AbiValue) -> Value {
    match value {
        AbiValue::Bool(b) => Value::Bool(*b),
        AbiValue::AddressArray(addrs) => {
            Value::Array(addrs.iter().map(|a| Value::String(a.to_hex())).collect())
        }
        other => Value::String(other.to_string()),
    }
}

/// One value per line
pub fn values_text(values: &[AbiValue]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
