//! Typed error kinds for the TSS splitter and combiner.
//!
//! This crate hand-rolls its error types rather than depending on
//! `thiserror`/`anyhow`, the same in-house pattern used throughout the
//! crate. `TssError` covers the RTSS fault classes: malformed
//! parameters, unparseable shares, failed reconstruction, and digest
//! mismatch.

use std::fmt;

/// Errors that may occur during TSS splitting or combining.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TssError {
    /// A malformed parameter: bad `M`/`N`, unknown hash code, bad
    /// identifier length, inconsistent share headers, duplicate or zero
    /// X-coordinates, mixed binary/human inputs, or a COMBINATIONS subset
    /// count above the cap.
    Argument(String),
    /// A share's header or human-string form failed to parse, including
    /// base64url decode failures.
    Format(String),
    /// Reconstruction produced an empty or unpad-invalid result and no
    /// embedded digest was available to distinguish a wrong subset from a
    /// genuinely empty secret.
    NoSecret(String),
    /// An embedded digest did not verify against the reconstructed
    /// secret.
    DigestMismatch,
    /// The secret exceeds the maximum representable length
    /// (`2^16 - 1` octets).
    TooLarge {
        /// The offending length.
        len: usize,
    },
    /// A `COMBINATIONS`-mode reconstruction was stopped via its
    /// cancellation token before a verifying subset was found.
    Cancelled,
}

impl fmt::Display for TssError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TssError::Argument(msg) => write!(f, "invalid argument: {msg}"),
            TssError::Format(msg) => write!(f, "malformed share: {msg}"),
            TssError::NoSecret(msg) => write!(f, "no secret recovered: {msg}"),
            TssError::DigestMismatch => write!(f, "embedded digest did not verify"),
            TssError::TooLarge { len } => {
                write!(f, "secret of {len} octets exceeds the 2^16-1 octet limit")
            }
            TssError::Cancelled => write!(f, "reconstruction cancelled before completion"),
        }
    }
}

impl std::error::Error for TssError {}
