//! Cross-checks the crate's own hand-rolled SHA-256 against the `sha2`
//! reference crate, over a range of input sizes that exercise both
//! single-block and multi-block, padded and unpadded message schedules.

use nebula_tss::hash::sha256::core::sha256;
use sha2::{Digest, Sha256};

fn reference_sha256(input: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(input);
    hasher.finalize().into()
}

#[test]
fn sha256_matches_reference_across_input_sizes() {
    for len in [0usize, 1, 55, 56, 57, 64, 65, 119, 120, 1000] {
        let input = vec![0xA5u8; len];
        let ours: [u8; 32] = sha256(&input).into();
        assert_eq!(ours, reference_sha256(&input), "mismatch at len={len}");
    }
}

#[test]
fn sha256_matches_reference_for_known_vectors() {
    let cases: [&[u8]; 3] = [b"", b"abc", b"the quick brown fox jumps over the lazy dog"];
    for case in cases {
        let ours: [u8; 32] = sha256(case).into();
        assert_eq!(ours, reference_sha256(case));
    }
}
