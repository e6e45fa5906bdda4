//! SHA-1 (FIPS 180-4, legacy).
//!
//! SHA-1 is cryptographically broken for collision resistance and is not
//! recommended for new designs, but draft-mcgrew-tss-03's RTSS digest
//! registry names it as hash code `1` for interoperability with shares
//! produced by other implementations of the draft. It is implemented here
//! in the same explicit, from-scratch style as [`crate::hash::sha256`]
//! rather than pulled in from an external hash crate, matching this
//! crate's existing convention of hand-rolling the digests it needs.

pub mod computations;
pub mod core;

/// SHA-1 initial hash value (FIPS 180-4 §5.3.1).
pub(crate) const H160_INIT: [u32; 5] = [0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476, 0xC3D2E1F0];

/// Re-export of the SHA-1 convenience function.
pub use core::sha1;
