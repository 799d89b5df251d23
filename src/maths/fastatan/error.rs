//! Errors for the caller-buffer batch entry points.
//!
//! The kernel itself never fails; NaN and infinities are mapped, not rejected.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AtanError {
    /// Output slice length differs from the input slice length.
    #[error("output holds {output} values but input has {input}")]
    LengthMismatch {
        /// Number of input values.
        input: usize,
        /// Capacity of the output slice.
        output: usize,
    },
}
