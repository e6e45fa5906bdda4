//! Threshold secret sharing (TSS) and RTSS, as specified by
//! draft-mcgrew-tss-03: GF(256) polynomial secret sharing with an
//! optional embedded digest that lets the combiner tell a correct
//! `threshold`-sized share subset from an incorrect one without
//! exhaustive trial.
//!
//! The implementation is split the same way the underlying Shamir
//! scheme always has been in this crate: a private [`field`] layer doing
//! GF(256) arithmetic and Lagrange interpolation, and a set of small
//! public modules mediating access to it:
//!
//! - [`splitter`] — splits a secret into shares.
//! - [`combiner`] — reconstructs a secret from shares.
//! - [`codec`] — the binary share header and the binary/human string
//!   mapping.
//! - [`hasher`] — the RTSS digest algorithm registry.
//! - [`error`] — [`TssError`], the fault type shared by both directions.
//!
//! ## Design notes
//!
//! - Each octet of the (padded, digest-appended) secret is protected by
//!   its own independently random degree-`(threshold - 1)` polynomial.
//! - Share identifiers are opaque 16-octet values; this module makes no
//!   assumption about their printability. [`codec::to_human`] renders
//!   non-printable bytes as `.` for display purposes only — the
//!   identifier the combiner actually checks always comes from the
//!   binary header.
//! - X-coordinates are nonzero and pairwise distinct within a share set;
//!   `0` is reserved for the secret itself.
//!
//! ## Security scope
//!
//! This module provides **confidentiality through threshold secrecy**
//! and, when a digest is embedded, **tamper detection** on the
//! reconstructed secret. It does not provide authentication of
//! individual shares, resistance against a fully malicious participant
//! set within the chosen subset, or transport/storage of shares.

mod field;
mod padding;
mod polynomial;
mod validation;

pub mod codec;
pub mod combiner;
pub mod error;
pub mod hasher;
pub mod splitter;

pub use combiner::{combine, combine_cancellable, combine_with, CombineOutcome, SelectBy};
pub use error::TssError;
pub use hasher::HashAlgorithm;
pub use splitter::{generate_identifier, split, Share, ShareFormat};
