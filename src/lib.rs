//! Threshold secret sharing primitives for Nebula
//!
//! This crate implements the core cryptographic engine behind
//! draft-mcgrew-tss-03: polynomial secret sharing over GF(256), augmented
//! with an embedded RTSS integrity digest. Given a secret octet string and
//! parameters `(M, N)`, the crate produces `N` shares of which any `M`
//! suffice to reconstruct the secret; any `M - 1` reveal nothing about it.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a large or high-level cryptographic API. Components
//! are dependency-free wherever this crate already has an established
//! in-house pattern for the concern (hashing, randomness, OS entropy), and
//! otherwise reach for the same small set of crates the rest of the
//! Nebula stack uses for that concern.
//!
//! # Module overview
//!
//! - `hash`
//!   Cryptographic hash functions (SHA-1, SHA-256), pure-Rust and
//!   dependency-free. Used internally by the RTSS digest registry.
//!
//! - `primitives`
//!   Fixed-size, low-level cryptographic primitives such as `U256`. Used as
//!   a building block for SHA-256's hash state.
//!
//! - `rng`
//!   Cryptographically secure pseudorandom number generation built from
//!   internal primitives, relying on the `os` module for initial entropy.
//!
//! - `recovery`
//!   Cryptographic recovery and survivability mechanisms: the full
//!   draft-mcgrew-tss-03 scheme, with RTSS digests and binary/human
//!   share serialization (`recovery::tss`).
//!
//!   The recovery module is purely cryptographic: it does not perform any
//!   storage, networking, or policy decisions, and it does not implement a
//!   command-line front end. Those concerns are handled at higher layers
//!   of the Nebula stack.
//!
//! # Design goals
//!
//! - No heap allocations in the lowest-level primitives (field arithmetic,
//!   hashing)
//! - Minimal and explicit APIs
//! - Stable, well-defined semantics
//! - Clear separation between cryptographic code and supporting utilities
//!
//! This crate is not intended to replace full-featured, externally audited
//! cryptographic libraries, but to serve as a small, controlled foundation
//! for Nebula's internal cryptographic needs.

pub mod hash;
pub(crate) mod os;
pub mod primitives;
pub mod recovery;
pub mod rng;
