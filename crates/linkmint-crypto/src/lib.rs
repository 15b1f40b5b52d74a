//! # linkmint-crypto
//!
//! Keccak-256 for linkmint.
//!
//! - Keccak-f\[1600\] permutation over 25 64-bit lanes
//! - Sponge with rate 136 bytes and original Keccak padding (`0x01 .. 0x80`,
//!   not the SHA-3 `0x06` suffix)
//! - Digest helpers returning [`H256`](linkmint_primitives::H256) or
//!   `0x`-prefixed lowercase hex

#![warn(missing_docs)]
#![warn(clippy::all)]

mod hash;
mod keccak;

pub use hash::{keccak256, keccak256_concat, keccak256_hex, keccak256_text};
pub use keccak::{keccak, keccak_f, RATE};
