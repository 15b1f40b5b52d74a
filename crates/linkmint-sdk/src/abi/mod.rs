//! Calldata codec for the supported contract-interface types
//!
//! Payloads use the head/tail layout: one 32-byte head word per argument
//! (static values inline, dynamic values as a byte offset from the start of
//! the head), followed by the dynamic tail segments in argument order.
//!
//! # Example
//!
//! ```rust
//! use linkmint_sdk::abi::{decode_values, encode_call_hex, AbiFunction, AbiType, AbiValue};
//!
//! let transfer = AbiFunction::from_signature("transfer(address,uint256)", vec![AbiType::Bool])?;
//! let data = encode_call_hex(
//!     &transfer,
//!     &["0x742d35Cc6634C0532925a3b844Bc9e7595f0aB3d".into(), 1000u64.into()],
//! )?;
//! assert!(data.starts_with("0xa9059cbb"));
//!
//! let mut word = [0u8; 32];
//! word[31] = 1;
//! let values = decode_values(&transfer.outputs, &word)?;
//! assert_eq!(values, vec![AbiValue::Bool(true)]);
//! # Ok::<(), linkmint_sdk::abi::AbiError>(())
//! ```

mod decode;
mod encode;
mod error;
mod types;

pub use decode::{decode_output, decode_output_hex, decode_values};
pub use encode::{encode_args, encode_call, encode_call_hex, function_selector, selector_hex};
pub use error::AbiError;
pub use types::{parse_types, AbiArg, AbiFunction, AbiType, AbiValue};
