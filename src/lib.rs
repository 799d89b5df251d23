#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod maths;

pub use maths::fastatan;
pub use maths::fastatan::{
    AtanError, AtanKernel, Constants, ReducedSample, Regime, atan, atan_batch, atan_in_place,
    atan_into,
};
