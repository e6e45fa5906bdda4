//! RTSS digest registry.
//!
//! draft-mcgrew-tss-03 identifies the digest algorithm embedded in a share
//! set by a single octet, `hash_id`. This module is the closed registry
//! mapping that octet to an algorithm, its digest size, and the function
//! that computes it.
//!
//! The digests themselves (`hash::sha1`, `hash::sha256`) are the crate's
//! own dependency-free implementations; this module only wires them into
//! the RTSS-specific code/name/size table and the constant-time digest
//! comparison the combiner uses to avoid a timing oracle on
//! reconstruction.

use crate::hash::{sha1, sha256};
use crate::recovery::tss::error::TssError;

/// A digest algorithm registered in the RTSS hash registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HashAlgorithm {
    /// No digest embedded; `hash_id = 0`.
    None,
    /// SHA-1, `hash_id = 1`, 20-octet digest.
    Sha1,
    /// SHA-256, `hash_id = 2`, 32-octet digest.
    Sha256,
}

impl HashAlgorithm {
    /// The one-octet RTSS code for this algorithm.
    pub fn code(self) -> u8 {
        match self {
            HashAlgorithm::None => 0,
            HashAlgorithm::Sha1 => 1,
            HashAlgorithm::Sha256 => 2,
        }
    }

    /// Looks up an algorithm by its RTSS code.
    ///
    /// # Errors
    ///
    /// Returns [`TssError::Argument`] if `code` is not one of the
    /// registered values `0`, `1`, `2`.
    pub fn from_code(code: u8) -> Result<Self, TssError> {
        match code {
            0 => Ok(HashAlgorithm::None),
            1 => Ok(HashAlgorithm::Sha1),
            2 => Ok(HashAlgorithm::Sha256),
            other => Err(TssError::Argument(format!("unknown hash code {other}"))),
        }
    }

    /// Looks up an algorithm by its registry name (`"none"`, `"sha1"`,
    /// `"sha256"`, case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`TssError::Argument`] if `name` is not registered.
    pub fn from_name(name: &str) -> Result<Self, TssError> {
        match name.to_ascii_lowercase().as_str() {
            "none" => Ok(HashAlgorithm::None),
            "sha1" => Ok(HashAlgorithm::Sha1),
            "sha256" => Ok(HashAlgorithm::Sha256),
            other => Err(TssError::Argument(format!("unknown hash name {other}"))),
        }
    }

    /// The registry name for this algorithm.
    pub fn name(self) -> &'static str {
        match self {
            HashAlgorithm::None => "none",
            HashAlgorithm::Sha1 => "sha1",
            HashAlgorithm::Sha256 => "sha256",
        }
    }

    /// The digest size in octets (`0` for `None`).
    pub fn bytesize(self) -> usize {
        match self {
            HashAlgorithm::None => 0,
            HashAlgorithm::Sha1 => 20,
            HashAlgorithm::Sha256 => 32,
        }
    }

    /// Computes the digest of `bytes` under this algorithm.
    ///
    /// Returns an empty vector for [`HashAlgorithm::None`].
    pub fn digest(self, bytes: &[u8]) -> Vec<u8> {
        match self {
            HashAlgorithm::None => Vec::new(),
            HashAlgorithm::Sha1 => sha1(bytes).to_vec(),
            HashAlgorithm::Sha256 => <[u8; 32]>::from(sha256(bytes)).to_vec(),
        }
    }

    /// The RTSS codes that carry an actual digest (`{1, 2}`).
    pub fn codes_with_hash() -> &'static [u8] {
        &[1, 2]
    }
}

/// Constant-time byte-slice equality, used to compare an embedded digest
/// against a freshly recomputed one without leaking timing information
/// about where the first mismatching byte occurs.
pub(crate) fn ct_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut diff = 0u8;
    for (&x, &y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }

    diff == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_code() {
        for algo in [HashAlgorithm::None, HashAlgorithm::Sha1, HashAlgorithm::Sha256] {
            assert_eq!(HashAlgorithm::from_code(algo.code()).unwrap(), algo);
        }
    }

    #[test]
    fn rejects_unknown_code() {
        assert!(HashAlgorithm::from_code(3).is_err());
    }

    #[test]
    fn digest_sizes_match_registry() {
        assert_eq!(HashAlgorithm::Sha1.digest(b"x").len(), 20);
        assert_eq!(HashAlgorithm::Sha256.digest(b"x").len(), 32);
        assert_eq!(HashAlgorithm::None.digest(b"x").len(), 0);
    }

    #[test]
    fn ct_eq_matches_naive_equality() {
        assert!(ct_eq(b"abcdef", b"abcdef"));
        assert!(!ct_eq(b"abcdef", b"abcxef"));
        assert!(!ct_eq(b"abc", b"abcd"));
    }
}
