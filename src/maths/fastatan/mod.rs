//! Series-based arctangent.
//!
//! `atan(x)` is computed without calling any platform math routine: the
//! argument is folded into `|r| <= tan(π/8)` with one of two exact identities
//! and an 18-term Maclaurin series is evaluated there in Horner form. The
//! instruction count per element is fixed (one division at most, 17
//! multiply-adds), which keeps batch evaluation branch-light and
//! reproducible.

mod constants;
mod error;
mod kernel;
mod reduce;
mod series;

use alloc::vec::Vec;

pub use constants::{
    Constants, MACHIN_TERMS_239, MACHIN_TERMS_FIFTH, NEWTON_STEPS, SERIES_TERMS, boundaries,
    machin_pi, sqrt2_newton, taylor_coeffs,
};
pub use error::AtanError;
pub use kernel::AtanKernel;
pub use reduce::{ReducedSample, Regime, reduce};
pub use series::{evaluate, horner, truncated_series};

// Plain multiply-add: identical results with or without hardware FMA.
#[inline(always)]
const fn mul_add_fast(a: f64, b: f64, c: f64) -> f64 {
    a * b + c
}

#[inline]
pub fn atan(x: f64) -> f64 {
    AtanKernel::shared().eval(x)
}

pub fn atan_batch(input: &[f64]) -> Vec<f64> {
    AtanKernel::shared().eval_batch(input)
}

pub fn atan_into(input: &[f64], output: &mut [f64]) -> Result<(), AtanError> {
    AtanKernel::shared().eval_into(input, output)
}

pub fn atan_in_place(values: &mut [f64]) {
    AtanKernel::shared().eval_in_place(values)
}
