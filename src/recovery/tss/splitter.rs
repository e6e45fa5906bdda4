//! Splits a secret into a set of RTSS shares.
//!
//! The buffer actually protected by the polynomials is built in two
//! steps: the digest (if any) is appended to the secret first, and the
//! combined `secret ++ digest` is then PKCS#7-padded as a whole — so the
//! digest itself is covered by padding, not tacked on afterward. The
//! splitter treats this buffer as a sequence of independent GF(256)
//! polynomials, one per octet: `f_k(x) = buffer[k] + a_1*x + ... +
//! a_{M-1}*x^{M-1}`, with `a_1..a_{M-1}` drawn fresh per octet from a
//! [`Csprng`]. Share `i` carries `(f_0(i), f_1(i), ..., f_{L-1}(i))` for
//! `i` in `1..=N`.

use crate::recovery::tss::codec::{self, ShareHeader};
use crate::recovery::tss::error::TssError;
use crate::recovery::tss::field::FieldElement;
use crate::recovery::tss::hasher::HashAlgorithm;
use crate::recovery::tss::padding;
use crate::recovery::tss::polynomial;
use crate::rng::Csprng;
use zeroize::Zeroizing;

/// The maximum secret length this implementation accepts, `2^16 - 1`
/// octets (the header's `share_len` field is 16 bits and must also leave
/// room for the 1-octet X-coordinate).
const MAX_SECRET_LEN: usize = u16::MAX as usize - 1;

/// Whether [`split`] returns shares as raw binary blobs or as
/// `tss~...` human strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShareFormat {
    /// The 20-octet header plus body, as raw bytes.
    Binary,
    /// `to_human`-encoded strings, suitable for printing or copy-paste.
    Human,
}

/// A single RTSS share, produced by [`split`] and consumed by
/// [`crate::recovery::tss::combiner::combine`].
///
/// Rust has no "the host language's native string" equivalent that can
/// hold arbitrary binary data, so share sets are represented as either
/// all-[`Share::Binary`] or all-[`Share::Human`] — never mixed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Share {
    /// Raw binary share bytes (header plus body).
    Binary(Vec<u8>),
    /// A `tss~<id-text>~<threshold>~<base64url>` human string.
    Human(String),
}

impl Share {
    /// Returns the raw binary bytes of this share, decoding from the
    /// human form if necessary.
    pub(crate) fn to_binary(&self) -> Result<Vec<u8>, TssError> {
        match self {
            Share::Binary(bytes) => Ok(bytes.clone()),
            Share::Human(text) => codec::from_human(text),
        }
    }
}

/// Generates a fresh random 16-octet share-set identifier.
pub fn generate_identifier() -> [u8; 16] {
    let mut id = [0u8; 16];
    Csprng::from_os().fill_bytes(&mut id);
    id
}

/// Splits `secret` into `num_shares` RTSS shares, any `threshold` of
/// which suffice to reconstruct it.
///
/// `identifier` defaults to a fresh random value (via [`generate_identifier`])
/// when `None`. `pad_blocksize` of `0` disables PKCS#7 padding;
/// `hash_alg` of [`HashAlgorithm::None`] omits the embedded RTSS digest.
///
/// # Errors
///
/// Returns [`TssError::Argument`] if `threshold` is `0`, `threshold >
/// num_shares`, `num_shares` is `0`, or `secret` is empty (the data model
/// bounds a secret to `1..2^16-1` octets). Returns [`TssError::TooLarge`]
/// if the padded, digest-appended secret would exceed `2^16 - 2` octets.
pub fn split(
    secret: &[u8],
    threshold: u8,
    num_shares: u8,
    identifier: Option<[u8; 16]>,
    hash_alg: HashAlgorithm,
    pad_blocksize: u8,
    format: ShareFormat,
) -> Result<Vec<Share>, TssError> {
    if threshold == 0 {
        return Err(TssError::Argument("threshold must be >= 1".into()));
    }
    if num_shares == 0 {
        return Err(TssError::Argument("num_shares must be >= 1".into()));
    }
    if threshold > num_shares {
        return Err(TssError::Argument(format!(
            "threshold ({threshold}) cannot exceed num_shares ({num_shares})"
        )));
    }
    if secret.is_empty() {
        return Err(TssError::Argument(
            "secret must be at least 1 octet long".into(),
        ));
    }

    let identifier = identifier.unwrap_or_else(generate_identifier);

    let digest = hash_alg.digest(secret);

    let mut digest_appended = Zeroizing::new(Vec::with_capacity(secret.len() + digest.len()));
    digest_appended.extend_from_slice(secret);
    digest_appended.extend_from_slice(&digest);

    let buffer = Zeroizing::new(padding::pad(&digest_appended, pad_blocksize));

    if buffer.len() > MAX_SECRET_LEN {
        return Err(TssError::TooLarge { len: buffer.len() });
    }

    let mut rng = Csprng::from_os();

    // One polynomial per octet of the buffer, each independently random
    // above its constant term. The constant terms are the buffer itself,
    // so this is scrubbed on drop like `buffer` above.
    let coeffs_per_position: Zeroizing<Vec<Vec<FieldElement>>> = Zeroizing::new(
        buffer
            .iter()
            .map(|&octet| polynomial::random_coeffs(octet, threshold, &mut rng))
            .collect(),
    );

    let share_len = (1 + buffer.len()) as u16;
    let header = ShareHeader {
        identifier,
        hash_id: hash_alg.code(),
        threshold,
        share_len,
    };
    let header_bytes = header.encode();

    let mut shares = Vec::with_capacity(num_shares as usize);
    for x in 1..=num_shares {
        let xf = FieldElement::from(x);

        let mut binary = Vec::with_capacity(header_bytes.len() + 1 + buffer.len());
        binary.extend_from_slice(&header_bytes);
        binary.push(x);
        for coeffs in coeffs_per_position.iter() {
            binary.push(polynomial::eval(coeffs, xf).into_number());
        }

        shares.push(match format {
            ShareFormat::Binary => Share::Binary(binary),
            ShareFormat::Human => Share::Human(codec::to_human(&binary, &identifier, threshold)),
        });
    }

    Ok(shares)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recovery::tss::combiner;

    #[test]
    fn split_produces_num_shares_shares() {
        let shares = split(
            b"hello",
            3,
            5,
            None,
            HashAlgorithm::Sha256,
            0,
            ShareFormat::Binary,
        )
        .unwrap();
        assert_eq!(shares.len(), 5);
    }

    #[test]
    fn split_rejects_threshold_above_num_shares() {
        assert!(split(b"x", 5, 3, None, HashAlgorithm::None, 0, ShareFormat::Binary).is_err());
    }

    #[test]
    fn split_rejects_zero_threshold_or_zero_shares() {
        assert!(split(b"x", 0, 3, None, HashAlgorithm::None, 0, ShareFormat::Binary).is_err());
        assert!(split(b"x", 1, 0, None, HashAlgorithm::None, 0, ShareFormat::Binary).is_err());
    }

    #[test]
    fn shares_from_the_same_split_share_an_identifier() {
        let id = [7u8; 16];
        let shares = split(
            b"shared-id-test",
            2,
            4,
            Some(id),
            HashAlgorithm::None,
            0,
            ShareFormat::Binary,
        )
        .unwrap();

        for share in &shares {
            let binary = share.to_binary().unwrap();
            let header = ShareHeader::decode(&binary).unwrap();
            assert_eq!(header.identifier, id);
        }
    }

    #[test]
    fn split_then_combine_round_trips() {
        let secret = b"the quick brown fox";
        let shares = split(
            secret,
            3,
            5,
            None,
            HashAlgorithm::Sha256,
            16,
            ShareFormat::Human,
        )
        .unwrap();

        let outcome = combiner::combine(&shares[1..4]).unwrap();
        assert_eq!(outcome.secret, secret);
    }
}
