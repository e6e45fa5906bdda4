//! Hash algorithms exposed by the crate.
//!
//! Includes SHA-1 and SHA-256, both pure-Rust, dependency-free
//! implementations. SHA-1 is provided solely for interoperability with the
//! RTSS digest registry (`recovery::tss::hasher`), which names it as a
//! legacy option alongside SHA-256.

pub mod sha1;
pub mod sha256;

/// Re-export of the SHA-1 convenience function.
pub use sha1::core::sha1;
/// Re-export of the SHA-256 convenience function.
pub use sha256::core::sha256;
