//! Constant set for the series arctangent.
//!
//! π comes from Machin's formula, the π/8 range-reduction boundaries from a
//! fixed-count Newton iteration for √2, and the series coefficients from the
//! alternating odd-denominator recurrence. Every routine here is a `const fn`
//! with a fixed iteration count, so the shared instance is folded at compile
//! time and never written again.

use super::series::truncated_series;

/// Number of coefficients in the main arctangent series (degree 35 in `x`).
pub const SERIES_TERMS: usize = 18;

/// Machin terms for `atan(1/5)`.
pub const MACHIN_TERMS_FIFTH: usize = 10;

/// Machin terms for `atan(1/239)`.
pub const MACHIN_TERMS_239: usize = 3;

/// Newton steps for √2 starting from 1.5.
pub const NEWTON_STEPS: usize = 4;

const SQRT2_SEED: f64 = 1.5;

static SHARED: Constants = Constants::derive();

/// Immutable constants consumed by range reduction and series evaluation.
///
/// Invariant: `0 < tan_pi_8 < 1 < cotan_pi_8` and
/// `cotan_pi_8 - tan_pi_8 == 2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constants {
    half_pi: f64,
    quarter_pi: f64,
    tan_pi_8: f64,
    cotan_pi_8: f64,
    coeffs: [f64; SERIES_TERMS],
}

impl Constants {
    /// Derive the full constant set. Deterministic; cannot fail.
    pub const fn derive() -> Self {
        let pi = machin_pi();
        let (tan_pi_8, cotan_pi_8) = boundaries();
        Self {
            half_pi: pi / 2.0,
            quarter_pi: pi / 4.0,
            tan_pi_8,
            cotan_pi_8,
            coeffs: taylor_coeffs::<SERIES_TERMS>(),
        }
    }

    /// Process-wide instance, evaluated at compile time.
    #[inline(always)]
    pub fn shared() -> &'static Self {
        &SHARED
    }

    #[inline(always)]
    pub const fn half_pi(&self) -> f64 {
        self.half_pi
    }

    #[inline(always)]
    pub const fn quarter_pi(&self) -> f64 {
        self.quarter_pi
    }

    /// Upper bound of the directly evaluated interval, `√2 - 1`.
    #[inline(always)]
    pub const fn tan_pi_8(&self) -> f64 {
        self.tan_pi_8
    }

    /// Threshold above which `atan(x) = π/2 - atan(1/x)` is used, `√2 + 1`.
    #[inline(always)]
    pub const fn cotan_pi_8(&self) -> f64 {
        self.cotan_pi_8
    }

    #[inline(always)]
    pub const fn coeffs(&self) -> &[f64; SERIES_TERMS] {
        &self.coeffs
    }
}

impl Default for Constants {
    fn default() -> Self {
        *Self::shared()
    }
}

/// π ≈ 16·atan(1/5) − 4·atan(1/239), both arctangents truncated to a fixed
/// number of terms.
pub const fn machin_pi() -> f64 {
    16.0 * truncated_series(0.2, MACHIN_TERMS_FIFTH)
        - 4.0 * truncated_series(1.0 / 239.0, MACHIN_TERMS_239)
}

/// √2 from [`NEWTON_STEPS`] iterations of `r = (r + 2/r) / 2`.
pub const fn sqrt2_newton() -> f64 {
    let mut r = SQRT2_SEED;
    let mut step = 0;
    while step < NEWTON_STEPS {
        r = (r + 2.0 / r) * 0.5;
        step += 1;
    }
    r
}

/// `(tan(π/8), cot(π/8)) = (√2 − 1, √2 + 1)`.
pub const fn boundaries() -> (f64, f64) {
    let r = sqrt2_newton();
    (r - 1.0, r + 1.0)
}

/// `(-1)^k / (2k + 1)` for `k = 0..N`.
pub const fn taylor_coeffs<const N: usize>() -> [f64; N] {
    let mut out = [0.0; N];
    let mut sign = 1.0;
    let mut denom = 1.0;
    let mut k = 0;
    while k < N {
        out[k] = sign / denom;
        sign = -sign;
        denom += 2.0;
        k += 1;
    }
    out
}
