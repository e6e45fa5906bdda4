//! Polynomial evaluation and Lagrange interpolation over GF(256).
//!
//! The splitter constructs one degree-`(M-1)` polynomial per secret octet,
//! with `a[0]` equal to that octet and `a[1..M-1]` drawn from a
//! cryptographically secure RNG. The combiner never reconstructs the
//! polynomial itself — it only needs `f(0)`, which Lagrange interpolation
//! recovers directly from `M` distinct evaluation points.

use crate::recovery::tss::field::FieldElement;
use crate::rng::Csprng;

/// Evaluates a polynomial at `x` using Horner's method.
///
/// `coeffs` is given in increasing degree order:
/// `f(x) = coeffs[0] + coeffs[1]*x + coeffs[2]*x^2 + ...`
pub(crate) fn eval(coeffs: &[FieldElement], x: FieldElement) -> FieldElement {
    let mut acc = FieldElement::ZERO;

    for &c in coeffs.iter().rev() {
        acc = acc * x + c;
    }

    acc
}

/// Reconstructs `f(0)` from a set of `(x, y)` evaluation points via
/// Lagrange interpolation.
///
/// # Preconditions
///
/// `xs` must be pairwise distinct and nonzero; `xs` and `ys` must have
/// equal, nonzero length. These are exactly the invariants the combiner
/// enforces on a share set before calling this function, so the
/// denominator `(x_j XOR x_i)` is never zero here.
pub(crate) fn lagrange_interpolate(xs: &[FieldElement], ys: &[FieldElement]) -> FieldElement {
    debug_assert_eq!(xs.len(), ys.len());

    let mut acc = FieldElement::ZERO;

    for (i, (&xi, &yi)) in xs.iter().zip(ys.iter()).enumerate() {
        let mut num = FieldElement::ONE;
        let mut den = FieldElement::ONE;

        for (j, &xj) in xs.iter().enumerate() {
            if i != j {
                num = num * xj;
                // In GF(2^8), subtraction is addition (XOR).
                den = den * (xj + xi);
            }
        }

        acc = acc + (num / den) * yi;
    }

    acc
}

/// Draws a fresh degree-`(threshold - 1)` polynomial with `a[0] = secret_octet`
/// and the remaining coefficients sampled uniformly from `rng`.
pub(crate) fn random_coeffs(
    secret_octet: u8,
    threshold: u8,
    rng: &mut Csprng,
) -> Vec<FieldElement> {
    let mut coeffs = vec![FieldElement::ZERO; threshold as usize];
    coeffs[0] = FieldElement::from(secret_octet);

    for c in coeffs.iter_mut().skip(1) {
        let mut b = [0u8; 1];
        rng.fill_bytes(&mut b);
        *c = FieldElement::from(b[0]);
    }

    coeffs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fe(n: u8) -> FieldElement {
        FieldElement::from(n)
    }

    #[test]
    fn eval_constant_polynomial() {
        let coeffs = [fe(0x2A)];
        assert_eq!(eval(&coeffs, fe(0x10)).into_number(), 0x2A);
    }

    #[test]
    fn interpolate_recovers_constant_term() {
        let coeffs = vec![fe(0x99), fe(0x11), fe(0x42)];
        let xs: Vec<FieldElement> = (1u8..=3).map(fe).collect();
        let ys: Vec<FieldElement> = xs.iter().map(|&x| eval(&coeffs, x)).collect();

        assert_eq!(lagrange_interpolate(&xs, &ys).into_number(), 0x99);
    }

    #[test]
    fn interpolate_is_order_independent() {
        let coeffs = vec![fe(0x07), fe(0x55), fe(0xAB), fe(0x03)];
        let xs: Vec<FieldElement> = vec![5, 9, 200, 1].into_iter().map(fe).collect();
        let ys: Vec<FieldElement> = xs.iter().map(|&x| eval(&coeffs, x)).collect();

        let shuffled_xs = vec![xs[2], xs[0], xs[3], xs[1]];
        let shuffled_ys = vec![ys[2], ys[0], ys[3], ys[1]];
        assert_eq!(
            lagrange_interpolate(&xs, &ys).into_number(),
            lagrange_interpolate(&shuffled_xs, &shuffled_ys).into_number()
        );
    }

    #[test]
    fn any_m_subset_of_points_recovers_the_same_constant_term() {
        let coeffs = vec![fe(0x64), fe(0x11), fe(0x42)];
        let xs: Vec<FieldElement> = (1u8..=5).map(fe).collect();
        let ys: Vec<FieldElement> = xs.iter().map(|&x| eval(&coeffs, x)).collect();

        let first = lagrange_interpolate(&xs[0..3], &ys[0..3]);
        let last = lagrange_interpolate(&xs[2..5], &ys[2..5]);
        assert_eq!(first.into_number(), 0x64);
        assert_eq!(last.into_number(), 0x64);
    }
}
