//! Calldata encoding

use linkmint_crypto::keccak256;
use linkmint_primitives::{hex_util, parse_u256, Address, HashError, UintError, H256, U256, WORD_SIZE};

use super::error::AbiError;
use super::types::{AbiArg, AbiFunction, AbiType, AbiValue};

/// Encoded form of one argument
enum Slot {
    /// One inline head word
    Static([u8; 32]),
    /// Tail segment referenced by an offset word
    Dynamic(Vec<u8>),
}

/// Compute function selector (first 4 bytes of keccak256(signature))
pub fn function_selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    let mut selector = [0u8; 4];
    selector.copy_from_slice(&hash.as_bytes()[..4]);
    selector
}

/// Selector rendered as `0x` + 8 hex digits
pub fn selector_hex(signature: &str) -> String {
    hex_util::to_prefixed(function_selector(signature))
}

/// Encode arguments as `head || tail`, without a selector.
///
/// Dynamic offsets count bytes from the start of the head region.
pub fn encode_args(types: &[AbiType], args: &[AbiArg]) -> Result<Vec<u8>, AbiError> {
    if args.len() != types.len() {
        return Err(AbiError::Arity {
            expected: types.len(),
            got: args.len(),
        });
    }

    let head_size = WORD_SIZE * types.len();
    let (mut head, tail) = types.iter().zip(args).try_fold(
        (Vec::with_capacity(head_size), Vec::new()),
        |(mut head, mut tail): (Vec<u8>, Vec<u8>), (ty, arg)| {
            match encode_slot(*ty, arg)? {
                Slot::Static(word) => head.extend_from_slice(&word),
                Slot::Dynamic(segment) => {
                    // running offset: whole head plus every earlier tail segment
                    let offset = head_size + tail.len();
                    head.extend_from_slice(&usize_word(offset));
                    tail.extend_from_slice(&segment);
                }
            }
            Ok::<_, AbiError>((head, tail))
        },
    )?;

    head.extend_from_slice(&tail);
    Ok(head)
}

/// Encode a function call: `selector || head || tail`
pub fn encode_call(function: &AbiFunction, args: &[AbiArg]) -> Result<Vec<u8>, AbiError> {
    let body = encode_args(&function.inputs, args)?;
    let mut payload = Vec::with_capacity(4 + body.len());
    payload.extend_from_slice(&function.selector());
    payload.extend_from_slice(&body);

    tracing::debug!(
        signature = %function.signature,
        bytes = payload.len(),
        "encoded call"
    );
    Ok(payload)
}

/// [`encode_call`] rendered as `0x` + lowercase hex
pub fn encode_call_hex(function: &AbiFunction, args: &[AbiArg]) -> Result<String, AbiError> {
    encode_call(function, args).map(hex_util::to_prefixed)
}

fn encode_slot(ty: AbiType, arg: &AbiArg) -> Result<Slot, AbiError> {
    match ty {
        AbiType::Uint256 => Ok(Slot::Static(u256_word(&to_uint(arg)?))),
        AbiType::Bool => {
            let mut word = [0u8; 32];
            word[31] = u8::from(to_bool(arg)?);
            Ok(Slot::Static(word))
        }
        AbiType::Address => Ok(Slot::Static(to_address(arg)?.to_word())),
        AbiType::Bytes32 => Ok(Slot::Static(*to_bytes32(arg)?.as_bytes())),
        AbiType::String => Ok(Slot::Dynamic(encode_string(to_text(arg)?))),
        AbiType::AddressArray => Ok(Slot::Dynamic(encode_address_array(&to_addresses(arg)?))),
    }
}

/// Length word + bytes zero-padded to a word boundary
fn encode_string(s: &str) -> Vec<u8> {
    let bytes = s.as_bytes();
    let padded_len = bytes.len().div_ceil(WORD_SIZE) * WORD_SIZE;
    let mut segment = Vec::with_capacity(WORD_SIZE + padded_len);
    segment.extend_from_slice(&usize_word(bytes.len()));
    segment.extend_from_slice(bytes);
    segment.resize(WORD_SIZE + padded_len, 0);
    segment
}

/// Count word + one padded word per address
fn encode_address_array(addrs: &[Address]) -> Vec<u8> {
    let mut segment = Vec::with_capacity(WORD_SIZE * (addrs.len() + 1));
    segment.extend_from_slice(&usize_word(addrs.len()));
    for addr in addrs {
        segment.extend_from_slice(&addr.to_word());
    }
    segment
}

fn u256_word(value: &U256) -> [u8; 32] {
    let mut word = [0u8; 32];
    value.to_big_endian(&mut word);
    word
}

fn usize_word(n: usize) -> [u8; 32] {
    u256_word(&U256::from(n))
}

fn mismatch(ty: AbiType, arg: &AbiArg) -> AbiError {
    AbiError::TypeMismatch {
        expected: ty.to_string(),
        got: arg.kind(),
    }
}

fn to_uint(arg: &AbiArg) -> Result<U256, AbiError> {
    match arg {
        AbiArg::Value(AbiValue::Uint(v)) => Ok(*v),
        AbiArg::Text(s) => parse_u256(s).map_err(|e| match e {
            UintError::Overflow(text) => AbiError::Overflow(text),
            other => AbiError::InvalidInteger(other.to_string()),
        }),
        other => Err(mismatch(AbiType::Uint256, other)),
    }
}

fn to_bool(arg: &AbiArg) -> Result<bool, AbiError> {
    match arg {
        AbiArg::Value(AbiValue::Bool(b)) => Ok(*b),
        AbiArg::Text(s) => match s.trim() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(mismatch(AbiType::Bool, arg)),
        },
        other => Err(mismatch(AbiType::Bool, other)),
    }
}

fn parse_address(text: &str) -> Result<Address, AbiError> {
    Address::from_hex(text).map_err(|_| AbiError::InvalidAddress(text.to_string()))
}

fn to_address(arg: &AbiArg) -> Result<Address, AbiError> {
    match arg {
        AbiArg::Value(AbiValue::Address(a)) => Ok(*a),
        AbiArg::Text(s) => parse_address(s),
        other => Err(mismatch(AbiType::Address, other)),
    }
}

fn to_bytes32(arg: &AbiArg) -> Result<H256, AbiError> {
    match arg {
        AbiArg::Value(AbiValue::Bytes32(h)) => Ok(*h),
        AbiArg::Text(s) => H256::from_hex(s).map_err(|e| match e {
            HashError::InvalidLength { expected, got } => AbiError::InvalidLength { expected, got },
            HashError::InvalidHex(msg) => AbiError::InvalidHex(msg),
        }),
        other => Err(mismatch(AbiType::Bytes32, other)),
    }
}

fn to_text(arg: &AbiArg) -> Result<&str, AbiError> {
    match arg {
        AbiArg::Value(AbiValue::String(s)) | AbiArg::Text(s) => Ok(s),
        other => Err(mismatch(AbiType::String, other)),
    }
}

fn to_addresses(arg: &AbiArg) -> Result<Vec<Address>, AbiError> {
    match arg {
        AbiArg::Value(AbiValue::AddressArray(addrs)) => Ok(addrs.clone()),
        AbiArg::TextList(items) => items.iter().map(|s| parse_address(s)).collect(),
        other => Err(mismatch(AbiType::AddressArray, other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE: &str = "0x742d35Cc6634C0532925a3b844Bc9e7595f0aB3d";
    const BOB: &str = "0x0000000000000000000000000000000000000b0b";

    fn word_at(data: &[u8], index: usize) -> &[u8] {
        &data[index * 32..(index + 1) * 32]
    }

    fn word_value(data: &[u8], index: usize) -> U256 {
        U256::from_big_endian(word_at(data, index))
    }

    #[test]
    fn test_function_selector() {
        assert_eq!(function_selector("transfer(address,uint256)"), [0xa9, 0x05, 0x9c, 0xbb]);
        assert_eq!(function_selector("balanceOf(address)"), [0x70, 0xa0, 0x82, 0x31]);
        assert_eq!(selector_hex("transfer(address,uint256)"), "0xa9059cbb");
        assert_eq!(selector_hex("approve(address,uint256)"), "0x095ea7b3");
    }

    #[test]
    fn test_encode_uint_big_endian() {
        let encoded = encode_args(&[AbiType::Uint256], &[AbiArg::from(1000u64)]).unwrap();
        assert_eq!(encoded.len(), 32);
        assert_eq!(&encoded[30..], &[0x03, 0xe8]);
        assert!(encoded[..30].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_encode_uint_text() {
        let from_dec = encode_args(&[AbiType::Uint256], &["255".into()]).unwrap();
        let from_hex = encode_args(&[AbiType::Uint256], &["0xff".into()]).unwrap();
        assert_eq!(from_dec, from_hex);
        assert_eq!(from_dec[31], 0xff);
    }

    #[test]
    fn test_encode_uint_overflow_rejected() {
        let too_big = format!("0x1{}", "0".repeat(64));
        let result = encode_args(&[AbiType::Uint256], &[too_big.into()]);
        assert!(matches!(result, Err(AbiError::Overflow(_))));

        let max = encode_args(&[AbiType::Uint256], &[AbiArg::from(U256::MAX)]).unwrap();
        assert_eq!(max, vec![0xff; 32]);
    }

    #[test]
    fn test_encode_uint_rejects_negative_and_garbage() {
        assert!(matches!(
            encode_args(&[AbiType::Uint256], &["-5".into()]),
            Err(AbiError::InvalidInteger(_))
        ));
        assert!(matches!(
            encode_args(&[AbiType::Uint256], &["12abc".into()]),
            Err(AbiError::InvalidInteger(_))
        ));
    }

    #[test]
    fn test_encode_bool() {
        let encoded = encode_args(
            &[AbiType::Bool, AbiType::Bool, AbiType::Bool],
            &[true.into(), false.into(), "true".into()],
        )
        .unwrap();
        assert_eq!(word_value(&encoded, 0), U256::one());
        assert_eq!(word_value(&encoded, 1), U256::zero());
        assert_eq!(word_value(&encoded, 2), U256::one());
    }

    #[test]
    fn test_encode_address_left_padded() {
        let encoded = encode_args(&[AbiType::Address], &[ALICE.into()]).unwrap();
        assert_eq!(&encoded[..12], &[0u8; 12]);
        assert_eq!(&encoded[12..], Address::from_hex(ALICE).unwrap().as_bytes());
    }

    #[test]
    fn test_encode_address_prefix_and_case_tolerant() {
        let with_prefix = encode_args(&[AbiType::Address], &[ALICE.into()]).unwrap();
        let bare_upper = encode_args(&[AbiType::Address], &[ALICE[2..].to_uppercase().into()]).unwrap();
        assert_eq!(with_prefix, bare_upper);
    }

    #[test]
    fn test_encode_address_invalid() {
        for bad in ["0x1234", "", "0x742d35Cc6634C0532925a3b844Bc9e7595f0aB3d00", "0xzz2d35Cc6634C0532925a3b844Bc9e7595f0aB3d"] {
            assert!(
                matches!(
                    encode_args(&[AbiType::Address], &[bad.into()]),
                    Err(AbiError::InvalidAddress(_))
                ),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_encode_bytes32_raw() {
        let value = format!("0x{}", "ab".repeat(32));
        let encoded = encode_args(&[AbiType::Bytes32], &[value.as_str().into()]).unwrap();
        assert_eq!(encoded, vec![0xab; 32]);

        let bare = encode_args(&[AbiType::Bytes32], &["AB".repeat(32).into()]).unwrap();
        assert_eq!(bare, encoded);
    }

    #[test]
    fn test_encode_bytes32_wrong_length() {
        let result = encode_args(&[AbiType::Bytes32], &["0xabcd".into()]);
        assert_eq!(result, Err(AbiError::InvalidLength { expected: 64, got: 4 }));
    }

    #[test]
    fn test_encode_string_padding() {
        let encoded = encode_args(&[AbiType::String], &["hello".into()]).unwrap();
        // offset + length + one padded data word
        assert_eq!(encoded.len(), 96);
        assert_eq!(word_value(&encoded, 0), U256::from(32u64));
        assert_eq!(word_value(&encoded, 1), U256::from(5u64));
        assert_eq!(&encoded[64..69], b"hello");
        assert!(encoded[69..].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_encode_empty_string() {
        let encoded = encode_args(&[AbiType::String], &["".into()]).unwrap();
        assert_eq!(encoded.len(), 64);
        assert_eq!(word_value(&encoded, 1), U256::zero());
    }

    #[test]
    fn test_encode_string_exact_word() {
        let s = "a".repeat(32);
        let encoded = encode_args(&[AbiType::String], &[s.into()]).unwrap();
        assert_eq!(encoded.len(), 96);
    }

    #[test]
    fn test_encode_string_utf8_byte_length() {
        // 2 chars, 4 bytes
        let encoded = encode_args(&[AbiType::String], &["éé".into()]).unwrap();
        assert_eq!(word_value(&encoded, 1), U256::from(4u64));
    }

    #[test]
    fn test_encode_dynamic_offsets() {
        let encoded = encode_args(
            &[AbiType::String, AbiType::AddressArray],
            &["hello".into(), vec![ALICE, BOB].into()],
        )
        .unwrap();

        assert_eq!(word_value(&encoded, 0), U256::from(64u64));
        assert_eq!(word_value(&encoded, 1), U256::from(128u64));
        // string segment
        assert_eq!(word_value(&encoded, 2), U256::from(5u64));
        // array segment
        assert_eq!(word_value(&encoded, 4), U256::from(2u64));
        assert_eq!(word_at(&encoded, 5), &Address::from_hex(ALICE).unwrap().to_word()[..]);
        assert_eq!(word_at(&encoded, 6), &Address::from_hex(BOB).unwrap().to_word()[..]);
        assert_eq!(encoded.len(), 7 * 32);
    }

    #[test]
    fn test_encode_tail_in_argument_order() {
        // dynamic, static, dynamic: tails follow argument order
        let encoded = encode_args(
            &[AbiType::AddressArray, AbiType::Uint256, AbiType::String],
            &[Vec::<Address>::new().into(), 7u64.into(), "x".into()],
        )
        .unwrap();
        assert_eq!(word_value(&encoded, 0), U256::from(96u64));
        assert_eq!(word_value(&encoded, 1), U256::from(7u64));
        // empty array tail is a single count word
        assert_eq!(word_value(&encoded, 2), U256::from(128u64));
        assert_eq!(word_value(&encoded, 3), U256::zero());
    }

    #[test]
    fn test_encode_call_static_length() {
        let function = AbiFunction::new(
            "transfer",
            "transfer(address,uint256)",
            vec![AbiType::Address, AbiType::Uint256],
            vec![AbiType::Bool],
        );
        let encoded = encode_call(&function, &[ALICE.into(), 1000u64.into()]).unwrap();
        assert_eq!(encoded.len(), 4 + 2 * 32);
        assert_eq!(&encoded[..4], &[0xa9, 0x05, 0x9c, 0xbb]);
    }

    #[test]
    fn test_encode_call_hex_lowercase() {
        let function = AbiFunction::new("balanceOf", "balanceOf(address)", vec![AbiType::Address], vec![]);
        let hex = encode_call_hex(&function, &[ALICE.to_uppercase().replace("0X", "0x").into()]).unwrap();
        assert_eq!(
            hex,
            "0x70a08231000000000000000000000000742d35cc6634c0532925a3b844bc9e7595f0ab3d"
        );
    }

    #[test]
    fn test_encode_arity_error() {
        let function = AbiFunction::new("f", "f(uint256)", vec![AbiType::Uint256], vec![]);
        assert_eq!(
            encode_call(&function, &[]),
            Err(AbiError::Arity { expected: 1, got: 0 })
        );
        assert_eq!(
            encode_call(&function, &[1u64.into(), 2u64.into()]),
            Err(AbiError::Arity { expected: 1, got: 2 })
        );
    }

    #[test]
    fn test_encode_type_mismatch() {
        let result = encode_args(&[AbiType::Address], &[AbiArg::from(true)]);
        assert_eq!(
            result,
            Err(AbiError::TypeMismatch {
                expected: "address".to_string(),
                got: "bool".to_string()
            })
        );
        assert!(matches!(
            encode_args(&[AbiType::AddressArray], &[ALICE.into()]),
            Err(AbiError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_encode_invalid_array_element() {
        let result = encode_args(&[AbiType::AddressArray], &[vec![ALICE, "0xdead"].into()]);
        assert_eq!(result, Err(AbiError::InvalidAddress("0xdead".to_string())));
    }
}
