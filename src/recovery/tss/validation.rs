//! Shared validation helpers used by the combiner before it attempts any
//! Lagrange reconstruction.
//!
//! Every check here is cheap and share-count-independent (header fields,
//! lengths, X-coordinates); reconstruction itself, and digest
//! verification, are left to `combiner`.

use crate::recovery::tss::codec::ShareHeader;
use crate::recovery::tss::error::TssError;

/// Every header in `headers` must carry the same identifier, hash_id and
/// threshold as the first one.
pub(crate) fn headers_match(headers: &[ShareHeader]) -> Result<(), TssError> {
    let Some(first) = headers.first() else {
        return Err(TssError::Argument("no shares supplied".into()));
    };

    for header in &headers[1..] {
        if header.identifier != first.identifier {
            return Err(TssError::Argument(
                "shares carry different identifiers; they are not part of the same set".into(),
            ));
        }
        if header.hash_id != first.hash_id {
            return Err(TssError::Argument(
                "shares carry different hash_id values".into(),
            ));
        }
        if header.threshold != first.threshold {
            return Err(TssError::Argument(
                "shares carry different threshold values".into(),
            ));
        }
    }

    Ok(())
}

/// Every share's body must be the same length (`share_len` in the
/// header, and the actual decoded body).
pub(crate) fn lengths_equal(headers: &[ShareHeader], bodies: &[&[u8]]) -> Result<(), TssError> {
    debug_assert_eq!(headers.len(), bodies.len());

    let Some(first) = headers.first() else {
        return Err(TssError::Argument("no shares supplied".into()));
    };

    for (header, body) in headers.iter().zip(bodies.iter()) {
        if header.share_len != first.share_len {
            return Err(TssError::Format(
                "shares carry inconsistent share_len header fields".into(),
            ));
        }
        if body.len() != header.share_len as usize {
            return Err(TssError::Format(
                "share body length does not match its header's share_len".into(),
            ));
        }
    }

    Ok(())
}

/// X-coordinates (the first octet of each share body) must be nonzero
/// (`0` is reserved for the secret itself) and pairwise distinct.
pub(crate) fn x_coordinates_valid(xs: &[u8]) -> Result<(), TssError> {
    for &x in xs {
        if x == 0 {
            return Err(TssError::Argument(
                "a share's X-coordinate is 0, which is reserved for the secret".into(),
            ));
        }
    }

    for i in 0..xs.len() {
        for j in (i + 1)..xs.len() {
            if xs[i] == xs[j] {
                return Err(TssError::Argument(
                    "two shares carry the same X-coordinate".into(),
                ));
            }
        }
    }

    Ok(())
}

/// At least `threshold` shares must have been supplied.
pub(crate) fn threshold_met(share_count: usize, threshold: u8) -> Result<(), TssError> {
    if share_count < threshold as usize {
        return Err(TssError::Argument(format!(
            "{share_count} shares supplied, but reconstruction requires at least {threshold}"
        )));
    }

    Ok(())
}
