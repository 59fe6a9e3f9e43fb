use serde::{Deserialize, Serialize};

/// Box-Cox power (L), median (M) and coefficient of variation (S) at one
/// reference breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LmsParams {
    pub l: f64,
    pub m: f64,
    pub s: f64,
}

impl LmsParams {
    /// |L| below this is treated as zero and the log form of the transform applies.
    pub const DEGENERATE_L: f64 = 1e-4;

    pub const fn new(l: f64, m: f64, s: f64) -> Self {
        Self { l, m, s }
    }

    pub fn is_degenerate(&self) -> bool {
        self.l.abs() < Self::DEGENERATE_L
    }

    /// M and S strictly positive, all three finite.
    pub fn is_valid(&self) -> bool {
        self.l.is_finite() && self.m.is_finite() && self.s.is_finite() && self.m > 0.0 && self.s > 0.0
    }

    /// Component-wise linear blend: `self + (other - self) * ratio`.
    pub fn lerp(&self, other: &LmsParams, ratio: f64) -> LmsParams {
        LmsParams {
            l: self.l + (other.l - self.l) * ratio,
            m: self.m + (other.m - self.m) * ratio,
            s: self.s + (other.s - self.s) * ratio,
        }
    }
}
