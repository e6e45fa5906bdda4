//! Reconstructs a secret from a set of RTSS shares.
//!
//! Three selection strategies decide which `threshold`-sized subset of
//! the supplied shares is actually used for Lagrange interpolation:
//!
//! - [`SelectBy::First`] (the default): the first `threshold` shares, in
//!   the order given.
//! - [`SelectBy::Sample`]: a uniformly random `threshold`-sized subset.
//! - [`SelectBy::Combinations`]: every `threshold`-sized subset, in
//!   lexicographic order, each checked against the embedded digest until
//!   one verifies. Requires an embedded digest (`hash_alg != None`) and
//!   is capped at 1,000,000 candidate subsets — callers with more shares
//!   than that should narrow the set by hand first.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use crate::recovery::tss::codec::ShareHeader;
use crate::recovery::tss::error::TssError;
use crate::recovery::tss::field::FieldElement;
use crate::recovery::tss::hasher::{self, HashAlgorithm};
use crate::recovery::tss::padding as pkcs7;
use crate::recovery::tss::polynomial;
use crate::recovery::tss::splitter::Share;
use crate::recovery::tss::validation;
use crate::rng::Csprng;

/// The maximum number of candidate subsets [`SelectBy::Combinations`]
/// will examine before giving up. Chosen to keep combinatorial recovery
/// a bounded, interactive-scale operation: a 255-share set with threshold
/// 128 must fault immediately rather than attempt the astronomical
/// `C(255, 128)` subset count.
const MAX_COMBINATIONS: u128 = 1_000_000;

/// Which `threshold`-sized subset of the supplied shares to reconstruct
/// from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SelectBy {
    /// The first `threshold` shares, in the order given.
    #[default]
    First,
    /// A uniformly random `threshold`-sized subset.
    Sample,
    /// Every `threshold`-sized subset, checked against the embedded
    /// digest until one verifies.
    Combinations,
}

/// The result of a successful [`combine`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombineOutcome {
    /// The reconstructed secret, with any PKCS#7 padding and embedded
    /// digest removed.
    pub secret: Vec<u8>,
    /// The share set's identifier.
    pub identifier: [u8; 16],
    /// The share set's threshold.
    pub threshold: u8,
    /// The digest algorithm embedded in the share set, if any.
    pub hash_alg: HashAlgorithm,
    /// The embedded digest, lowercase-hex-encoded, if `hash_alg` carries
    /// one.
    pub digest: Option<String>,
    /// Wall-clock time spent inside [`combine`], in milliseconds.
    pub elapsed_ms: u64,
}

struct DecodedShare {
    header: ShareHeader,
    body: Vec<u8>,
    x: u8,
    payload: Vec<u8>,
}

/// Reconstructs a secret from `shares` using [`SelectBy::First`] with
/// padding enabled.
///
/// Equivalent to `combine_with(shares, SelectBy::First)`.
pub fn combine(shares: &[Share]) -> Result<CombineOutcome, TssError> {
    combine_with(shares, SelectBy::First)
}

/// Reconstructs a secret from `shares` using the given selection
/// strategy, with padding enabled.
///
/// Equivalent to `combine_cancellable(shares, select_by, true, None)`.
pub fn combine_with(shares: &[Share], select_by: SelectBy) -> Result<CombineOutcome, TssError> {
    combine_cancellable(shares, select_by, true, None)
}

/// Reconstructs a secret from `shares`, with an optional cooperative
/// cancellation token checked between candidate subsets in
/// [`SelectBy::Combinations`] mode.
///
/// `padding` controls whether PKCS#7 padding is stripped from the
/// reconstructed body before it is returned: `true` (the default used by
/// [`combine`] and [`combine_with`]) unpads; `false` returns the body
/// exactly as reconstructed. Callers must set this to match whatever
/// `pad_blocksize` the shares were split with — the wire format carries
/// no block-size field, so the combiner cannot infer it.
///
/// # Errors
///
/// See the `TssError` variants for the individual fault conditions:
/// inconsistent headers, too few shares, duplicate/zero X-coordinates,
/// a `Combinations` subset count above the cap, a digest mismatch, or a
/// cancellation.
pub fn combine_cancellable(
    shares: &[Share],
    select_by: SelectBy,
    padding: bool,
    cancel: Option<&AtomicBool>,
) -> Result<CombineOutcome, TssError> {
    let started = Instant::now();

    if shares.is_empty() {
        return Err(TssError::Argument("no shares supplied".into()));
    }

    let all_binary_form = matches!(shares[0], Share::Binary(_));
    if !shares
        .iter()
        .all(|s| matches!(s, Share::Binary(_)) == all_binary_form)
    {
        return Err(TssError::Argument(
            "shares must be all-binary or all-human, not a mix".into(),
        ));
    }

    let mut decoded = Vec::with_capacity(shares.len());
    for share in shares {
        let binary = share.to_binary()?;
        let header = ShareHeader::decode(&binary)?;
        let body = binary[20..].to_vec();
        if body.is_empty() {
            return Err(TssError::Format("share body is empty".into()));
        }
        decoded.push(DecodedShare {
            header,
            x: body[0],
            payload: body[1..].to_vec(),
            body,
        });
    }

    let headers: Vec<ShareHeader> = decoded.iter().map(|d| d.header).collect();
    validation::headers_match(&headers)?;

    let bodies: Vec<&[u8]> = decoded.iter().map(|d| d.body.as_slice()).collect();
    validation::lengths_equal(&headers, &bodies)?;

    let threshold = headers[0].threshold;
    validation::threshold_met(decoded.len(), threshold)?;

    let xs: Vec<u8> = decoded.iter().map(|d| d.x).collect();
    validation::x_coordinates_valid(&xs)?;

    let hash_alg = HashAlgorithm::from_code(headers[0].hash_id)?;

    let indices: Vec<usize> = (0..decoded.len()).collect();
    let (secret, digest_bytes) = match select_by {
        SelectBy::First => {
            let subset = &indices[..threshold as usize];
            reconstruct_and_verify(&decoded, subset, hash_alg, padding)?
        }
        SelectBy::Sample => {
            let subset = random_subset(&indices, threshold as usize);
            reconstruct_and_verify(&decoded, &subset, hash_alg, padding)?
        }
        SelectBy::Combinations => {
            if hash_alg == HashAlgorithm::None {
                return Err(TssError::Argument(
                    "COMBINATIONS selection requires an embedded digest (hash_alg != none)".into(),
                ));
            }
            reconstruct_by_combinations(&decoded, threshold, hash_alg, padding, cancel)?
        }
    };

    Ok(CombineOutcome {
        secret,
        identifier: headers[0].identifier,
        threshold,
        hash_alg,
        digest: digest_bytes.as_deref().map(hex_encode),
        elapsed_ms: started.elapsed().as_millis() as u64,
    })
}

/// Reconstructs the secret buffer from exactly `subset` (a list of
/// indices into `decoded`), verifying the embedded digest if one is
/// present. Strips any PKCS#7 padding as the final step. Returns the
/// secret alongside the raw embedded digest bytes, if any.
fn reconstruct_and_verify(
    decoded: &[DecodedShare],
    subset: &[usize],
    hash_alg: HashAlgorithm,
    padding: bool,
) -> Result<(Vec<u8>, Option<Vec<u8>>), TssError> {
    let reconstructed = reconstruct_raw(decoded, subset);
    verify_and_unpad(&reconstructed, hash_alg, padding)
}

/// Evaluates the Lagrange interpolation at `x = 0` independently for
/// every payload position, using the shares named by `subset`.
fn reconstruct_raw(decoded: &[DecodedShare], subset: &[usize]) -> Vec<u8> {
    let payload_len = decoded[subset[0]].payload.len();

    let xs: Vec<FieldElement> = subset
        .iter()
        .map(|&i| FieldElement::from(decoded[i].x))
        .collect();

    let mut out = Vec::with_capacity(payload_len);
    for pos in 0..payload_len {
        let ys: Vec<FieldElement> = subset
            .iter()
            .map(|&i| FieldElement::from(decoded[i].payload[pos]))
            .collect();
        out.push(polynomial::lagrange_interpolate(&xs, &ys).into_number());
    }

    out
}

/// Reverses the splitter's `pad(secret ++ digest)` construction: when
/// `padding` is enabled, strips PKCS#7 padding from `raw` first; then
/// splits off the trailing digest octets and verifies them in constant
/// time if one is expected.
///
/// When `padding` is disabled, `raw` is assumed to carry no padding at
/// all. We cannot tell the padding block size from the wire alone, so
/// when enabled, unpadding trusts the final octet's own claimed pad
/// length — the same contract `padding::unpad` always uses.
fn verify_and_unpad(
    raw: &[u8],
    hash_alg: HashAlgorithm,
    padding: bool,
) -> Result<(Vec<u8>, Option<Vec<u8>>), TssError> {
    // pkcs7::unpad trusts the trailing octet; if the chosen subset was
    // wrong, the buffer is effectively random and this will usually (but
    // not always) fail outright, which is why a digest is what actually
    // guarantees correctness.
    let unpadded = if padding {
        pkcs7::unpad(raw, guess_block_size(raw))?
    } else {
        raw.to_vec()
    };

    let digest_len = hash_alg.bytesize();
    if unpadded.len() < digest_len {
        return Err(TssError::NoSecret(
            "reconstructed buffer shorter than the expected digest".into(),
        ));
    }

    let (secret, embedded_digest) = unpadded.split_at(unpadded.len() - digest_len);
    let secret = secret.to_vec();

    if digest_len > 0 {
        let recomputed = hash_alg.digest(&secret);
        if !hasher::ct_eq(embedded_digest, &recomputed) {
            return Err(TssError::DigestMismatch);
        }
    } else if secret.is_empty() {
        return Err(TssError::NoSecret(
            "reconstruction produced an empty secret and no digest was embedded to confirm it"
                .into(),
        ));
    }

    let digest_bytes = if digest_len > 0 {
        Some(embedded_digest.to_vec())
    } else {
        None
    };

    Ok((secret, digest_bytes))
}

/// `padding::unpad` only needs the padding octet itself to strip
/// padding correctly — any `block_size >= last_octet` behaves
/// identically, so `255` (the maximum valid PKCS#7 block size) is always
/// a safe, format-agnostic choice here, and falls back to "no padding"
/// only when the buffer is empty.
fn guess_block_size(padded: &[u8]) -> u8 {
    if padded.is_empty() { 0 } else { 255 }
}

fn reconstruct_by_combinations(
    decoded: &[DecodedShare],
    threshold: u8,
    hash_alg: HashAlgorithm,
    padding: bool,
    cancel: Option<&AtomicBool>,
) -> Result<(Vec<u8>, Option<Vec<u8>>), TssError> {
    let n = decoded.len();
    let k = threshold as usize;

    count_combinations_capped(n, k, MAX_COMBINATIONS).ok_or_else(|| {
        TssError::Argument(format!(
            "C({n}, {k}) exceeds the {MAX_COMBINATIONS} subset cap for COMBINATIONS selection"
        ))
    })?;

    let mut subset: Vec<usize> = (0..k).collect();
    loop {
        if let Some(flag) = cancel {
            if flag.load(Ordering::Relaxed) {
                return Err(TssError::Cancelled);
            }
        }

        let reconstructed = reconstruct_raw(decoded, &subset);
        if let Ok(result) = verify_and_unpad(&reconstructed, hash_alg, padding) {
            return Ok(result);
        }

        if !advance_combination(&mut subset, n) {
            break;
        }
    }

    Err(TssError::DigestMismatch)
}

/// Advances `subset` (indices into `0..n`, strictly increasing) to the
/// next combination in lexicographic order. Returns `false` once the
/// last combination has been reached.
fn advance_combination(subset: &mut [usize], n: usize) -> bool {
    let k = subset.len();

    let mut i = k;
    loop {
        if i == 0 {
            return false;
        }
        i -= 1;

        if subset[i] < n - (k - i) {
            subset[i] += 1;
            for j in (i + 1)..k {
                subset[j] = subset[j - 1] + 1;
            }
            return true;
        }
    }
}

/// Computes `C(n, k)`, bailing out with `None` as soon as the running
/// product exceeds `cap` to avoid overflow on large `n`/`k` (e.g. `C(255,
/// 128)`, which has no finite representation worth computing exactly).
fn count_combinations_capped(n: usize, k: usize, cap: u128) -> Option<u128> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);

    let mut result: u128 = 1;
    for i in 0..k {
        result = result * (n - i) as u128 / (i + 1) as u128;
        if result > cap {
            return None;
        }
    }

    Some(result)
}

fn random_subset(indices: &[usize], k: usize) -> Vec<usize> {
    let mut pool = indices.to_vec();
    let mut rng = Csprng::from_os();

    // Fisher-Yates partial shuffle: draw k elements without replacement.
    for i in 0..k.min(pool.len()) {
        let remaining = pool.len() - i;
        let mut b = [0u8; 4];
        rng.fill_bytes(&mut b);
        let j = i + (u32::from_le_bytes(b) as usize % remaining);
        pool.swap(i, j);
    }

    let mut subset = pool[..k].to_vec();
    subset.sort_unstable();
    subset
}

fn hex_encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        out.push_str(&format!("{b:02x}"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recovery::tss::splitter::{split, ShareFormat};

    #[test]
    fn combine_rejects_empty_share_list() {
        assert!(combine(&[]).is_err());
    }

    #[test]
    fn combine_rejects_mixed_binary_and_human() {
        let shares = split(
            b"mixed",
            2,
            3,
            None,
            HashAlgorithm::Sha256,
            0,
            ShareFormat::Binary,
        )
        .unwrap();
        let human = Share::Human(
            crate::recovery::tss::codec::to_human(&shares[0].to_binary().unwrap(), &[0; 16], 2),
        );
        let mixed = vec![shares[0].clone(), human];
        assert!(combine(&mixed).is_err());
    }

    #[test]
    fn combine_rejects_too_few_shares() {
        let shares = split(
            b"not-enough",
            4,
            5,
            None,
            HashAlgorithm::None,
            0,
            ShareFormat::Binary,
        )
        .unwrap();
        assert!(combine(&shares[0..2]).is_err());
    }

    #[test]
    fn combine_detects_digest_mismatch_from_corrupted_share() {
        let secret = b"tamper-evident";
        let mut shares = split(
            secret,
            3,
            5,
            None,
            HashAlgorithm::Sha256,
            16,
            ShareFormat::Binary,
        )
        .unwrap();

        // The digest sits right after the secret octets and before any
        // padding (splitter pads `secret ++ digest` as a whole), so flip
        // its first byte rather than the share's last byte, which may now
        // be a padding octet instead.
        if let Share::Binary(bytes) = &mut shares[0] {
            let digest_start = 20 + 1 + secret.len();
            bytes[digest_start] ^= 0xFF;
        }

        assert_eq!(
            combine(&shares[0..3]).unwrap_err(),
            TssError::DigestMismatch
        );
    }

    #[test]
    fn combinations_mode_recovers_despite_one_corrupted_share() {
        let secret = b"combinatorial-recovery";
        let mut shares = split(
            secret,
            3,
            5,
            None,
            HashAlgorithm::Sha256,
            16,
            ShareFormat::Binary,
        )
        .unwrap();

        if let Share::Binary(bytes) = &mut shares[0] {
            let digest_start = 20 + 1 + secret.len();
            bytes[digest_start] ^= 0xFF;
        }

        let outcome = combine_with(&shares, SelectBy::Combinations).unwrap();
        assert_eq!(outcome.secret, b"combinatorial-recovery");
    }

    #[test]
    fn combinations_mode_requires_a_digest() {
        let shares = split(
            b"no-digest",
            2,
            3,
            None,
            HashAlgorithm::None,
            0,
            ShareFormat::Binary,
        )
        .unwrap();
        assert!(combine_with(&shares, SelectBy::Combinations).is_err());
    }

    #[test]
    fn combinations_mode_rejects_subset_counts_above_the_cap() {
        assert_eq!(count_combinations_capped(255, 128, MAX_COMBINATIONS), None);
    }

    #[test]
    fn combinations_mode_honors_cancellation() {
        let shares = split(
            b"cancel-me",
            3,
            6,
            None,
            HashAlgorithm::Sha256,
            0,
            ShareFormat::Binary,
        )
        .unwrap();

        let cancel = AtomicBool::new(true);
        let result = combine_cancellable(&shares, SelectBy::Combinations, true, Some(&cancel));
        assert_eq!(result.unwrap_err(), TssError::Cancelled);
    }

    #[test]
    fn padding_disabled_returns_body_without_unpadding() {
        let secret = b"no-padding-round-trip";
        let shares = split(
            secret,
            3,
            5,
            None,
            HashAlgorithm::Sha256,
            0,
            ShareFormat::Binary,
        )
        .unwrap();

        let outcome = combine_cancellable(&shares[0..3], SelectBy::First, false, None).unwrap();
        assert_eq!(outcome.secret, secret);
    }

    #[test]
    fn padding_mismatched_with_split_corrupts_reconstruction() {
        // The wire format carries no pad_blocksize field: if the caller
        // tells the combiner padding was used when it wasn't, trailing
        // bytes that happen to look like valid PKCS#7 padding are silently
        // (and wrongly) stripped.
        let mut secret = b"testing secret".to_vec();
        secret.extend_from_slice(&[0x02, 0x02]); // looks like a 2-byte PKCS#7 pad
        let shares = split(
            &secret,
            2,
            2,
            None,
            HashAlgorithm::None,
            0,
            ShareFormat::Binary,
        )
        .unwrap();

        let outcome = combine_cancellable(&shares, SelectBy::First, true, None).unwrap();
        assert_ne!(outcome.secret, secret);
    }

    #[test]
    fn verify_and_unpad_rejects_empty_reconstruction_without_digest() {
        let result = verify_and_unpad(&[], HashAlgorithm::None, true);
        assert!(matches!(result, Err(TssError::NoSecret(_))));
    }

    #[test]
    fn count_combinations_matches_known_values() {
        assert_eq!(count_combinations_capped(5, 3, 1_000_000), Some(10));
        assert_eq!(count_combinations_capped(10, 0, 1_000_000), Some(1));
        assert_eq!(count_combinations_capped(10, 10, 1_000_000), Some(1));
    }

    #[test]
    fn sample_selection_recovers_the_secret() {
        let shares = split(
            b"sampled-subset",
            3,
            6,
            None,
            HashAlgorithm::Sha256,
            0,
            ShareFormat::Binary,
        )
        .unwrap();

        let outcome = combine_with(&shares, SelectBy::Sample).unwrap();
        assert_eq!(outcome.secret, b"sampled-subset");
    }
}
