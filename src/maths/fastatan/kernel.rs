//! Per-element pipeline and batch mapping.
//!
//! Each element is reduced, run through the fixed-degree series and
//! recombined independently; the only shared state is the borrowed
//! [`Constants`], so a kernel is `Copy` and can be handed to any number of
//! threads.

use alloc::vec::Vec;
use log::{debug, trace};

use super::constants::Constants;
use super::error::AtanError;
use super::reduce::{ReducedSample, reduce};
use super::series::evaluate;

#[derive(Debug, Clone, Copy)]
pub struct AtanKernel<'c> {
    constants: &'c Constants,
}

impl AtanKernel<'static> {
    /// Kernel over the process-wide constants.
    pub fn new() -> Self {
        Self::with_constants(Constants::shared())
    }

    /// Same as [`AtanKernel::new`] without the debug record; used by the free
    /// functions on the scalar path.
    #[inline(always)]
    pub fn shared() -> Self {
        Self {
            constants: Constants::shared(),
        }
    }
}

impl Default for AtanKernel<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'c> AtanKernel<'c> {
    pub fn with_constants(constants: &'c Constants) -> Self {
        debug!(
            "atan kernel: half_pi={:.17e} quarter_pi={:.17e} tan_pi_8={:.17e} cotan_pi_8={:.17e} terms={}",
            constants.half_pi(),
            constants.quarter_pi(),
            constants.tan_pi_8(),
            constants.cotan_pi_8(),
            constants.coeffs().len(),
        );
        Self { constants }
    }

    #[inline(always)]
    pub fn constants(&self) -> &'c Constants {
        self.constants
    }

    #[inline(always)]
    pub fn reduce(&self, x: f64) -> ReducedSample {
        reduce(x, self.constants)
    }

    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        let sample = reduce(x, self.constants);
        sample.recombine(evaluate(sample.value, self.constants.coeffs()))
    }

    /// Map `input` to a freshly allocated vector, index-aligned.
    pub fn eval_batch(&self, input: &[f64]) -> Vec<f64> {
        trace!("atan batch: {} values", input.len());
        input.iter().map(|&x| self.eval(x)).collect()
    }

    /// Write `atan(input[i])` to `output[i]`. Nothing is written on a length
    /// mismatch.
    pub fn eval_into(&self, input: &[f64], output: &mut [f64]) -> Result<(), AtanError> {
        if input.len() != output.len() {
            return Err(AtanError::LengthMismatch {
                input: input.len(),
                output: output.len(),
            });
        }
        trace!("atan into: {} values", input.len());
        for (out, &x) in output.iter_mut().zip(input) {
            *out = self.eval(x);
        }
        Ok(())
    }

    pub fn eval_in_place(&self, values: &mut [f64]) {
        trace!("atan in place: {} values", values.len());
        for v in values.iter_mut() {
            *v = self.eval(*v);
        }
    }

    /// Lazy, order-preserving mapping over any source of inputs.
    pub fn eval_iter<I>(self, input: I) -> impl Iterator<Item = f64>
    where
        I: IntoIterator<Item = f64>,
    {
        input.into_iter().map(move |x| self.eval(x))
    }
}
