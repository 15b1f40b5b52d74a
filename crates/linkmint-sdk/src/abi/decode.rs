//! Calldata decoding

use linkmint_primitives::{hex_util, Address, H256, U256, WORD_SIZE};

use super::error::AbiError;
use super::types::{AbiFunction, AbiType, AbiValue};

/// Decode values laid out as `head || tail`.
///
/// An empty payload decodes to no values regardless of `types`, which is
/// how calls without a return value come back.
pub fn decode_values(types: &[AbiType], data: &[u8]) -> Result<Vec<AbiValue>, AbiError> {
    if data.is_empty() {
        return Ok(Vec::new());
    }
    types
        .iter()
        .enumerate()
        .map(|(index, ty)| decode_slot(*ty, data, index * WORD_SIZE))
        .collect()
}

/// Decode a function's return data
pub fn decode_output(function: &AbiFunction, data: &[u8]) -> Result<Vec<AbiValue>, AbiError> {
    let values = decode_values(&function.outputs, data)?;
    tracing::debug!(
        function = %function.name,
        bytes = data.len(),
        values = values.len(),
        "decoded output"
    );
    Ok(values)
}

/// Decode hex return data (`0x` prefix optional; `""` and `"0x"` are empty)
pub fn decode_output_hex(function: &AbiFunction, data: &str) -> Result<Vec<AbiValue>, AbiError> {
    let bytes = hex_util::decode(data.trim())?;
    decode_output(function, &bytes)
}

fn decode_slot(ty: AbiType, data: &[u8], head_offset: usize) -> Result<AbiValue, AbiError> {
    let word = read_word(data, head_offset)?;
    match ty {
        AbiType::Uint256 => Ok(AbiValue::Uint(U256::from_big_endian(word))),
        AbiType::Bool => Ok(AbiValue::Bool(word[31] & 1 == 1)),
        AbiType::Address => Ok(AbiValue::Address(Address::from_word(word))),
        AbiType::Bytes32 => Ok(AbiValue::Bytes32(H256::from_bytes(*word))),
        AbiType::String => decode_string(data, word_to_offset(word, data)?).map(AbiValue::String),
        AbiType::AddressArray => {
            decode_address_array(data, word_to_offset(word, data)?).map(AbiValue::AddressArray)
        }
    }
}

fn decode_string(data: &[u8], offset: usize) -> Result<String, AbiError> {
    let len = word_to_offset(read_word(data, offset)?, data)?;
    let start = offset + WORD_SIZE;
    let bytes = read_range(data, start, len)?;
    String::from_utf8(bytes.to_vec()).map_err(|e| AbiError::InvalidUtf8(e.to_string()))
}

fn decode_address_array(data: &[u8], offset: usize) -> Result<Vec<Address>, AbiError> {
    let count = word_to_offset(read_word(data, offset)?, data)?;
    let size = count.checked_mul(WORD_SIZE).ok_or(AbiError::Truncated {
        needed: usize::MAX,
        available: data.len(),
    })?;
    let body = read_range(data, offset + WORD_SIZE, size)?;

    Ok(body
        .chunks_exact(WORD_SIZE)
        .map(|chunk| {
            let mut word = [0u8; 32];
            word.copy_from_slice(chunk);
            Address::from_word(&word)
        })
        .collect())
}

/// Borrow `len` bytes at `start`, failing if any lie past the end
fn read_range(data: &[u8], start: usize, len: usize) -> Result<&[u8], AbiError> {
    let end = start.checked_add(len).ok_or(AbiError::Truncated {
        needed: usize::MAX,
        available: data.len(),
    })?;
    data.get(start..end).ok_or(AbiError::Truncated {
        needed: end,
        available: data.len(),
    })
}

fn read_word(data: &[u8], offset: usize) -> Result<&[u8; 32], AbiError> {
    let bytes = read_range(data, offset, WORD_SIZE)?;
    bytes.try_into().map_err(|_| AbiError::Truncated {
        needed: offset + WORD_SIZE,
        available: data.len(),
    })
}

/// Interpret a word as a byte offset/length; anything beyond `usize`
/// cannot lie inside the payload.
fn word_to_offset(word: &[u8; 32], data: &[u8]) -> Result<usize, AbiError> {
    let value = U256::from_big_endian(word);
    let too_large = AbiError::Truncated {
        needed: usize::MAX,
        available: data.len(),
    };
    if value.bits() > 64 {
        return Err(too_large);
    }
    usize::try_from(value.low_u64()).map_err(|_| too_large)
}
