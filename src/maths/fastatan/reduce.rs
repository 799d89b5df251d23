//! Range reduction into `|r| <= tan(π/8)`.
//!
//! Three exclusive regimes selected with strict `>` so that a value equal to a
//! boundary stays in the lower regime:
//!
//! * `|x| > cot(π/8)`: `atan(x) = π/2 - atan(1/x)`
//! * `|x| > tan(π/8)`: `atan(x) = π/4 + atan((x - 1) / (x + 1))`
//! * otherwise the series is evaluated at `x` directly.
//!
//! NaN fails every comparison and lands in the direct regime; infinities land
//! in the large regime where `-1/inf` is `-0`.

use super::constants::Constants;

/// Identity used for one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Regime {
    /// `|x| <= tan(π/8)`.
    Small,
    /// `tan(π/8) < |x| <= cot(π/8)`.
    Medium,
    /// `|x| > cot(π/8)`.
    Large,
}

/// `atan(x) = sign * (offset + atan(value))`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReducedSample {
    pub sign: f64,
    pub offset: f64,
    pub value: f64,
    pub regime: Regime,
}

impl ReducedSample {
    /// Undo the reduction given `series ≈ atan(self.value)`.
    #[inline(always)]
    pub fn recombine(&self, series: f64) -> f64 {
        self.sign * (self.offset + series)
    }
}

#[inline(always)]
pub fn reduce(x: f64, c: &Constants) -> ReducedSample {
    let (sign, val) = if x < 0.0 { (-1.0, -x) } else { (1.0, x) };

    if val > c.cotan_pi_8() {
        ReducedSample {
            sign,
            offset: c.half_pi(),
            value: -1.0 / val,
            regime: Regime::Large,
        }
    } else if val > c.tan_pi_8() {
        ReducedSample {
            sign,
            offset: c.quarter_pi(),
            value: (val - 1.0) / (1.0 + val),
            regime: Regime::Medium,
        }
    } else {
        ReducedSample {
            sign,
            offset: 0.0,
            value: val,
            regime: Regime::Small,
        }
    }
}
