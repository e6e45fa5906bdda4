//! SHA-1 internal computations.
//!
//! Contains the per-round bitwise functions and the message-schedule
//! expansion used by the SHA-1 compression function, as defined in
//! FIPS 180-4 §6.1.

/// SHA-1 round function, selected by round index (FIPS 180-4 §4.1.1).
///
/// - Rounds 0..20: `Ch(b, c, d)`
/// - Rounds 20..40 and 60..80: parity `b ^ c ^ d`
/// - Rounds 40..60: `Maj(b, c, d)`
#[inline(always)]
pub fn round_function(t: usize, b: u32, c: u32, d: u32) -> u32 {
    match t {
        0..=19 => (b & c) | ((!b) & d),
        20..=39 => b ^ c ^ d,
        40..=59 => (b & c) | (b & d) | (c & d),
        _ => b ^ c ^ d,
    }
}

/// SHA-1 round constant, selected by round index (FIPS 180-4 §4.2.1).
#[inline(always)]
pub fn round_constant(t: usize) -> u32 {
    match t {
        0..=19 => 0x5A827999,
        20..=39 => 0x6ED9EBA1,
        40..=59 => 0x8F1BBCDC,
        _ => 0xCA62C1D6,
    }
}

/// Executes all 80 rounds of the SHA-1 compression function.
///
/// `w` holds the first 16 message-schedule words (big-endian); the
/// remaining 64 words are expanded on the fly into a 16-word circular
/// buffer, the same trick used in `hash::sha256::computations::all_rounds`.
pub fn all_rounds(state: &mut [u32; 5], mut w: [u32; 16]) {
    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];
    let mut e = state[4];

    for t in 0..80 {
        if t >= 16 {
            let word = (w[(t - 3) & 15]
                ^ w[(t - 8) & 15]
                ^ w[(t - 14) & 15]
                ^ w[(t - 16) & 15])
                .rotate_left(1);
            w[t & 15] = word;
        }

        let wt = w[t & 15];
        let temp = a
            .rotate_left(5)
            .wrapping_add(round_function(t, b, c, d))
            .wrapping_add(e)
            .wrapping_add(round_constant(t))
            .wrapping_add(wt);

        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = temp;
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
}
