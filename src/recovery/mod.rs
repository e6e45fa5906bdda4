//! Cryptographic recovery primitives.
//!
//! This module provides low-level cryptographic mechanisms designed to
//! protect and recover sensitive material in the presence of partial data
//! loss, node failure, or compromise.
//!
//! The focus of this module is **cryptographic survivability**: enabling
//! secrets to remain recoverable without relying on a single point of
//! failure, while preserving strong security guarantees.
//!
//! # Threshold Secret Sharing (TSS / RTSS)
//!
//! The [`tss`] submodule implements draft-mcgrew-tss-03: GF(256)
//! polynomial secret sharing, optionally augmented with an embedded
//! digest (RTSS) so the combiner can tell a correct `threshold`-sized
//! share subset from an incorrect one.
//!
//! A secret is split into multiple *shares* such that:
//!
//! - Any subset of at least `t` shares can reconstruct the original secret.
//! - Any subset of fewer than `t` shares reveals no information about it.
//!
//! The implementation operates over a finite field (GF(256)) and treats
//! the secret as a sequence of independent octets, each protected by its
//! own randomly generated polynomial.
//!
//! ## Provided functionality
//!
//! - **Splitting** ([`tss::split`]) — a secret can be split into `n`
//!   shares with a reconstruction threshold `t`, optionally padded to a
//!   block size and/or carrying an embedded SHA-1/SHA-256 digest.
//! - **Combining** ([`tss::combine`], [`tss::combine_with`],
//!   [`tss::combine_cancellable`]) — a secret can be reconstructed from
//!   any valid subset of at least `t` shares using Lagrange
//!   interpolation at zero, with a choice of which subset to try first.
//!
//! ## Security properties
//!
//! - All arithmetic is performed in a finite field (GF(256)).
//! - No information about the secret is leaked with fewer than `t` shares.
//! - Digest comparison is constant-time to avoid a timing oracle on
//!   reconstruction.
//! - The module is agnostic to storage, transport, and policy decisions.
//!
//! ## Intended use cases
//!
//! - Distributed backup of cryptographic keys or seeds
//! - Threshold-based recovery mechanisms
//! - Multi-party custody of sensitive material
//! - Long-term survivability of secrets in distributed systems
//!
//! This module is intentionally minimal and does not include:
//! - authentication or MACs for individual shares
//! - networking logic
//! - access control or recovery policies
//!
//! Those concerns are expected to be handled by higher layers of the
//! Nebula stack.

pub mod tss;
