//! PKCS#7 padding, used by the splitter and combiner to round the
//! secret-plus-digest buffer to a multiple of `pad_blocksize` octets.
//!
//! `pad_blocksize = 0` disables padding entirely; every
//! other value in `1..=255` is a valid block size, including values that
//! already divide the input length evenly — PKCS#7 always appends a full
//! block in that case so that unpadding is unambiguous.

use crate::recovery::tss::error::TssError;

/// Appends PKCS#7 padding to `block_size`. A no-op (returns `data`
/// unchanged) when `block_size == 0`.
pub(crate) fn pad(data: &[u8], block_size: u8) -> Vec<u8> {
    if block_size == 0 {
        return data.to_vec();
    }

    let block_size = block_size as usize;
    let remainder = data.len() % block_size;
    let pad_len = block_size - remainder;

    let mut out = Vec::with_capacity(data.len() + pad_len);
    out.extend_from_slice(data);
    out.resize(out.len() + pad_len, pad_len as u8);

    out
}

/// Strips PKCS#7 padding added by [`pad`] with the same `block_size`.
///
/// A `block_size` of `0` means padding was disabled and `data` is
/// returned unchanged.
///
/// # Errors
///
/// Returns [`TssError::NoSecret`] if the trailing padding octet is `0`,
/// exceeds `block_size`, exceeds `data.len()`, or the trailing bytes are
/// not all equal to it — any of which indicate the data was never validly
/// padded (a wrong share subset, most likely).
pub(crate) fn unpad(data: &[u8], block_size: u8) -> Result<Vec<u8>, TssError> {
    if block_size == 0 {
        return Ok(data.to_vec());
    }

    let Some(&last) = data.last() else {
        return Err(TssError::NoSecret("padded data is empty".into()));
    };

    if last == 0 || last > block_size || last as usize > data.len() {
        return Err(TssError::NoSecret("invalid PKCS#7 padding octet".into()));
    }

    let pad_len = last as usize;
    let body_len = data.len() - pad_len;

    if !data[body_len..].iter().all(|&b| b == last) {
        return Err(TssError::NoSecret("inconsistent PKCS#7 padding bytes".into()));
    }

    Ok(data[..body_len].to_vec())
}
