//! # linkmint-primitives
//!
//! Fixed-size value types shared by the hashing, codec and SDK crates.
//!
//! All hex rendering is lowercase with a `0x` prefix; all hex parsing
//! accepts input with or without the prefix and in any letter case.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod address;
mod error;
mod hash;
pub mod hex_util;
mod uint;

pub use address::{Address, AddressError};
pub use error::PrimitiveError;
pub use hash::{HashError, H256};
pub use uint::{parse_u256, UintError};

// 256-bit unsigned integer used for `uint256` values
pub use primitive_types::{U256, U512};

/// Size of an ABI word in bytes
pub const WORD_SIZE: usize = 32;
