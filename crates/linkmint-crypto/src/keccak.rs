//! Keccak-f[1600] permutation and sponge

/// Bytes absorbed/squeezed per permutation call (1088 bits)
pub const RATE: usize = 136;

const LANES: usize = 25;
const ROUNDS: usize = 24;

/// Iota constants, one per round
const ROUND_CONSTANTS: [u64; ROUNDS] = [
    0x0000_0000_0000_0001,
    0x0000_0000_0000_8082,
    0x8000_0000_0000_808a,
    0x8000_0000_8000_8000,
    0x0000_0000_0000_808b,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8009,
    0x0000_0000_0000_008a,
    0x0000_0000_0000_0088,
    0x0000_0000_8000_8009,
    0x0000_0000_8000_000a,
    0x0000_0000_8000_808b,
    0x8000_0000_0000_008b,
    0x8000_0000_0000_8089,
    0x8000_0000_0000_8003,
    0x8000_0000_0000_8002,
    0x8000_0000_0000_0080,
    0x0000_0000_0000_800a,
    0x8000_0000_8000_000a,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8080,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8008,
];

/// Rho offsets, indexed by lane `x + 5 * y`
const ROTATION_OFFSETS: [u32; LANES] = [
    0, 1, 62, 28, 27, //
    36, 44, 6, 55, 20, //
    3, 10, 43, 25, 39, //
    41, 45, 15, 21, 8, //
    18, 2, 61, 56, 14,
];

/// Apply the 24-round Keccak-f[1600] permutation in place.
///
/// Lane `(x, y)` lives at `state[x + 5 * y]`.
pub fn keccak_f(state: &mut [u64; LANES]) {
    let mut parity = [0u64; 5];
    let mut moved = [0u64; LANES];

    for rc in ROUND_CONSTANTS {
        // Theta
        for (x, c) in parity.iter_mut().enumerate() {
            *c = state[x] ^ state[x + 5] ^ state[x + 10] ^ state[x + 15] ^ state[x + 20];
        }
        for x in 0..5 {
            let d = parity[(x + 4) % 5] ^ parity[(x + 1) % 5].rotate_left(1);
            for y in 0..5 {
                state[x + 5 * y] ^= d;
            }
        }

        // Rho + Pi: (x, y) -> (y, 2x + 3y)
        for y in 0..5 {
            for x in 0..5 {
                let src = x + 5 * y;
                let dst = y + 5 * ((2 * x + 3 * y) % 5);
                moved[dst] = state[src].rotate_left(ROTATION_OFFSETS[src]);
            }
        }

        // Chi
        for y in 0..5 {
            let row = 5 * y;
            for x in 0..5 {
                state[row + x] =
                    moved[row + x] ^ (!moved[row + (x + 1) % 5] & moved[row + (x + 2) % 5]);
            }
        }

        // Iota
        state[0] ^= rc;
    }
}

/// Pad to a whole number of blocks: `0x01`, zero fill, `0x80` into the last byte.
///
/// At least one padding byte is always added, so input that is already
/// block-aligned gains a full block.
fn pad(input: &[u8]) -> Vec<u8> {
    let padded_len = (input.len() / RATE + 1) * RATE;
    let mut padded = vec![0u8; padded_len];
    padded[..input.len()].copy_from_slice(input);
    padded[input.len()] = 0x01;
    padded[padded_len - 1] ^= 0x80;
    padded
}

/// XOR one block into the first 17 lanes (little-endian) and permute.
fn absorb_block(state: &mut [u64; LANES], block: &[u8]) {
    for (lane, bytes) in state.iter_mut().zip(block.chunks_exact(8)) {
        let mut word = [0u8; 8];
        word.copy_from_slice(bytes);
        *lane ^= u64::from_le_bytes(word);
    }
    keccak_f(state);
}

/// Emit output rate-sized chunk by chunk, permuting between chunks.
fn squeeze(state: &mut [u64; LANES], output: &mut [u8]) {
    let mut chunks = output.chunks_mut(RATE).peekable();
    while let Some(chunk) = chunks.next() {
        for (i, byte) in chunk.iter_mut().enumerate() {
            *byte = (state[i / 8] >> (8 * (i % 8))) as u8;
        }
        if chunks.peek().is_some() {
            keccak_f(state);
        }
    }
}

/// Run the Keccak sponge over `input`, filling `output` entirely.
///
/// Output of any length is supported; digests longer than [`RATE`]
/// trigger additional permutations during squeezing.
pub fn keccak(input: &[u8], output: &mut [u8]) {
    let mut state = [0u64; LANES];
    for block in pad(input).chunks_exact(RATE) {
        absorb_block(&mut state, block);
    }
    squeeze(&mut state, output);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permutation_of_zero_state() {
        // Keccak-f[1600] reference: first lanes after permuting the all-zero state
        let mut state = [0u64; LANES];
        keccak_f(&mut state);
        assert_eq!(state[0], 0xf1258f7940e1dde7);
        assert_eq!(state[1], 0x84d5ccf933c0478a);
        assert_eq!(state[2], 0xd598261ea65aa9ee);
    }

    #[test]
    fn test_pad_empty() {
        let padded = pad(&[]);
        assert_eq!(padded.len(), RATE);
        assert_eq!(padded[0], 0x01);
        assert_eq!(padded[RATE - 1], 0x80);
        assert!(padded[1..RATE - 1].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_pad_single_byte_suffix() {
        // 135 bytes: the pad byte and the final bit share one byte
        let padded = pad(&[0xaa; RATE - 1]);
        assert_eq!(padded.len(), RATE);
        assert_eq!(padded[RATE - 1], 0x81);
    }

    #[test]
    fn test_pad_block_aligned_adds_block() {
        let padded = pad(&[0xaa; RATE]);
        assert_eq!(padded.len(), 2 * RATE);
        assert_eq!(padded[RATE], 0x01);
        assert_eq!(padded[2 * RATE - 1], 0x80);
    }

    #[test]
    fn test_rotation_offsets_distinct_mod_64() {
        let mut seen = ROTATION_OFFSETS.to_vec();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), LANES);
        assert!(ROTATION_OFFSETS.iter().all(|r| *r < 64));
    }

    #[test]
    fn test_long_squeeze_extends_short_digest() {
        let mut short = [0u8; 32];
        let mut long = [0u8; 2 * RATE];
        keccak(b"abc", &mut short);
        keccak(b"abc", &mut long);
        assert_eq!(&long[..32], &short[..]);
        // Second chunk comes from a fresh permutation, not a repeat of the first
        assert_ne!(&long[RATE..RATE + 32], &long[..32]);
    }
}
