//! SHA-1 core hashing functions.
//!
//! Mirrors the structure of `hash::sha256::core`: a block compressor plus
//! a complete hashing function that handles Merkle-Damgård padding for
//! arbitrary-length input.

use crate::hash::sha1::H160_INIT;
use crate::hash::sha1::computations::all_rounds;

/// Compresses a single 512-bit message block.
pub fn compress(block: &[u8; 64], state: &mut [u32; 5]) {
    let mut w = [0u32; 16];

    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(4)).take(16) {
        *slot = u32::from_be_bytes(chunk.try_into().unwrap());
    }

    all_rounds(state, w);
}

/// Computes the SHA-1 hash of the given input, returning the 20-octet digest.
pub fn sha1(input: &[u8]) -> [u8; 20] {
    let mut state = H160_INIT;

    let mut i = 0;
    let len = input.len();

    while i + 64 <= len {
        let block: &[u8; 64] = input[i..i + 64].try_into().unwrap();
        compress(block, &mut state);
        i += 64;
    }

    let mut block = [0u8; 64];
    let rem = len - i;

    block[..rem].copy_from_slice(&input[i..]);
    block[rem] = 0x80;

    if rem > 55 {
        compress(&block, &mut state);
        block = [0; 64];
    }

    let bit_len = (len as u64) << 3;
    block[56..64].copy_from_slice(&bit_len.to_be_bytes());

    compress(&block, &mut state);

    let mut out = [0u8; 20];
    for (chunk, word) in out.chunks_exact_mut(4).zip(state.iter()) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::sha1;

    #[test]
    fn empty_input() {
        let digest = sha1(b"");
        assert_eq!(
            digest,
            [
                0xda, 0x39, 0xa3, 0xee, 0x5e, 0x6b, 0x4b, 0x0d, 0x32, 0x55, 0xbf, 0xef, 0x95, 0x60,
                0x18, 0x90, 0xaf, 0xd8, 0x07, 0x09,
            ]
        );
    }

    #[test]
    fn abc() {
        let digest = sha1(b"abc");
        assert_eq!(
            digest,
            [
                0xa9, 0x99, 0x3e, 0x36, 0x47, 0x06, 0x81, 0x6a, 0xba, 0x3e, 0x25, 0x71, 0x78, 0x50,
                0xc2, 0x6c, 0x9c, 0xd0, 0xd8, 0x9d,
            ]
        );
    }

    #[test]
    fn longer_than_one_block() {
        let input = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";
        let digest = sha1(input);
        assert_eq!(
            digest,
            [
                0x84, 0x98, 0x3e, 0x44, 0x1c, 0x3b, 0xd2, 0x6e, 0xba, 0xae, 0x4a, 0xa1, 0xf9, 0x51,
                0x29, 0xe5, 0xe5, 0x46, 0x70, 0xf1,
            ]
        );
    }
}
