//! Arctangent Maclaurin series.
//!
//! The kernel evaluates the 18-term series in Horner form with a fixed
//! instruction count; [`truncated_series`] is the same series summed term by
//! term, used only for deriving π.

use super::constants::SERIES_TERMS;
use super::mul_add_fast;

/// `P(t) = c0 + c1·t + … + c17·t^17`, innermost-first.
#[inline(always)]
pub fn horner(t: f64, c: &[f64; SERIES_TERMS]) -> f64 {
    let poly = c[17];
    let poly = mul_add_fast(t, poly, c[16]);
    let poly = mul_add_fast(t, poly, c[15]);
    let poly = mul_add_fast(t, poly, c[14]);
    let poly = mul_add_fast(t, poly, c[13]);
    let poly = mul_add_fast(t, poly, c[12]);
    let poly = mul_add_fast(t, poly, c[11]);
    let poly = mul_add_fast(t, poly, c[10]);
    let poly = mul_add_fast(t, poly, c[9]);
    let poly = mul_add_fast(t, poly, c[8]);
    let poly = mul_add_fast(t, poly, c[7]);
    let poly = mul_add_fast(t, poly, c[6]);
    let poly = mul_add_fast(t, poly, c[5]);
    let poly = mul_add_fast(t, poly, c[4]);
    let poly = mul_add_fast(t, poly, c[3]);
    let poly = mul_add_fast(t, poly, c[2]);
    let poly = mul_add_fast(t, poly, c[1]);
    mul_add_fast(t, poly, c[0])
}

/// `atan(r) ≈ r·P(r²)`, accurate to ~1e-15 for `|r| <= tan(π/8)`.
#[inline(always)]
pub fn evaluate(r: f64, c: &[f64; SERIES_TERMS]) -> f64 {
    r * horner(r * r, c)
}

/// `Σ_{k<terms} (-1)^k x^(2k+1) / (2k+1)`, summed lowest order first.
pub const fn truncated_series(x: f64, terms: usize) -> f64 {
    let x2 = x * x;
    let mut res = 0.0;
    let mut term = x;
    let mut sign = 1.0;
    let mut denom = 1.0;
    let mut k = 0;
    while k < terms {
        res += (sign / denom) * term;
        term *= x2;
        sign = -sign;
        denom += 2.0;
        k += 1;
    }
    res
}
