//! Binary share header layout and the binary <-> human string mapping.
//!
//! Binary share layout (network byte order for multi-octet fields):
//!
//! ```text
//! offset  size  field
//! 0       16    identifier
//! 16       1    hash_id (0|1|2)
//! 17       1    threshold M (1..255)
//! 18       2    share_len = 1 + payload_len (big-endian)
//! 20       1    X coordinate (1..255)
//! 21     L-1    payload octets
//! ```
//!
//! Human share string: `tss~<id-text>~<threshold>~<base64url-no-pad>`,
//! where the base64url payload is the *entire* binary share (header
//! included). `id-text` is a cosmetic rendering of the identifier and is
//! not authoritative — the identifier actually used by the combiner is
//! always the one decoded from the base64 payload's header.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::recovery::tss::error::TssError;

/// Size of the fixed share header, in octets.
pub(crate) const HEADER_SIZE: usize = 20;

/// The 20-octet share header, common to every share in a set except for
/// the X-coordinate (which lives in the body, not the header).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ShareHeader {
    pub(crate) identifier: [u8; 16],
    pub(crate) hash_id: u8,
    pub(crate) threshold: u8,
    pub(crate) share_len: u16,
}

impl ShareHeader {
    pub(crate) fn encode(&self) -> [u8; HEADER_SIZE] {
        let mut out = [0u8; HEADER_SIZE];
        out[0..16].copy_from_slice(&self.identifier);
        out[16] = self.hash_id;
        out[17] = self.threshold;
        out[18..20].copy_from_slice(&self.share_len.to_be_bytes());
        out
    }

    pub(crate) fn decode(bytes: &[u8]) -> Result<Self, TssError> {
        if bytes.len() < HEADER_SIZE {
            return Err(TssError::Format("share shorter than the 20-octet header".into()));
        }

        let mut identifier = [0u8; 16];
        identifier.copy_from_slice(&bytes[0..16]);

        let hash_id = bytes[16];
        let threshold = bytes[17];
        let share_len = u16::from_be_bytes([bytes[18], bytes[19]]);

        if threshold == 0 {
            return Err(TssError::Format("threshold in header must be >= 1".into()));
        }
        if share_len < 2 {
            return Err(TssError::Format(
                "share_len in header must be >= 2 (X-coordinate plus at least one payload octet)"
                    .into(),
            ));
        }

        Ok(ShareHeader {
            identifier,
            hash_id,
            threshold,
            share_len,
        })
    }
}

/// Encodes a binary share (header plus X-coordinate-prefixed body) into
/// its human string form.
pub fn to_human(binary_share: &[u8], identifier: &[u8; 16], threshold: u8) -> String {
    let id_text: String = identifier
        .iter()
        .map(|&b| if (0x20..=0x7E).contains(&b) { b as char } else { '.' })
        .collect();

    let payload = URL_SAFE_NO_PAD.encode(binary_share);

    format!("tss~{id_text}~{threshold}~{payload}")
}

/// Decodes a human share string back into its binary form.
///
/// # Errors
///
/// Returns [`TssError::Format`] if the string does not match
/// `tss~<id-text>~<threshold>~<base64url>` (see module docs) or if the
/// base64url segment fails to decode.
pub fn from_human(s: &str) -> Result<Vec<u8>, TssError> {
    let rest = s
        .strip_prefix("tss~")
        .ok_or_else(|| TssError::Format("human share must start with \"tss~\"".into()))?;

    let mut parts = rest.splitn(3, '~');
    let id_text = parts
        .next()
        .ok_or_else(|| TssError::Format("human share missing identifier field".into()))?;
    let threshold_text = parts
        .next()
        .ok_or_else(|| TssError::Format("human share missing threshold field".into()))?;
    let payload_text = parts
        .next()
        .ok_or_else(|| TssError::Format("human share missing payload field".into()))?;

    if id_text.len() > 16 || !id_text.bytes().all(|b| (0x20..=0x7E).contains(&b)) {
        return Err(TssError::Format(
            "human share identifier field must be 0..16 printable ASCII characters".into(),
        ));
    }

    if threshold_text.is_empty()
        || threshold_text.len() > 3
        || !threshold_text.bytes().all(|b| b.is_ascii_digit())
        || threshold_text.starts_with('0')
    {
        return Err(TssError::Format(
            "human share threshold field must be a decimal integer 1..255".into(),
        ));
    }
    let threshold: u32 = threshold_text
        .parse()
        .map_err(|_| TssError::Format("human share threshold field out of range".into()))?;
    if threshold == 0 || threshold > 255 {
        return Err(TssError::Format(
            "human share threshold field must be 1..255".into(),
        ));
    }

    if payload_text.is_empty()
        || !payload_text
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
    {
        return Err(TssError::Format(
            "human share payload field must be base64url (no padding)".into(),
        ));
    }

    URL_SAFE_NO_PAD
        .decode(payload_text)
        .map_err(|e| TssError::Format(format!("invalid base64url payload: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_round_trips() {
        let header = ShareHeader {
            identifier: *b"0123456789abcdef",
            hash_id: 2,
            threshold: 3,
            share_len: 17,
        };

        let bytes = header.encode();
        let decoded = ShareHeader::decode(&bytes).unwrap();

        assert_eq!(decoded, header);
    }

    #[test]
    fn human_round_trips() {
        let binary = vec![0xAAu8; 25];
        let id = *b"testid0000000000";

        let human = to_human(&binary, &id, 2);
        assert!(human.starts_with("tss~"));

        let decoded = from_human(&human).unwrap();
        assert_eq!(decoded, binary);
    }

    #[test]
    fn from_human_rejects_missing_prefix() {
        assert!(from_human("not-a-share").is_err());
    }

    #[test]
    fn from_human_rejects_bad_base64() {
        assert!(from_human("tss~abc~2~not!base64!!").is_err());
    }

    #[test]
    fn from_human_rejects_zero_threshold() {
        assert!(from_human("tss~abc~0~AAAA").is_err());
    }
}
