//! Numeric types an intensity field can be stored in

use std::fmt::Debug;
use std::ops::Sub;

/// A numeric type wide enough to hold every unsigned 16-bit sample exactly.
///
/// Implemented for the signed integer and floating point types that can
/// represent `[0, 65535]` without loss. Unsigned types are deliberately not
/// supported: inverting a field subtracts in the field's own type.
pub trait Intensity: Copy + PartialOrd + Sub<Output = Self> + Debug + Send + Sync + 'static {
    /// Widen an unsigned 16-bit sample without sign extension
    fn from_sample(sample: u16) -> Self;

    fn to_f64(self) -> f64;
}

impl Intensity for i32 {
    #[inline(always)]
    fn from_sample(sample: u16) -> Self {
        i32::from(sample)
    }

    #[inline(always)]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Intensity for i64 {
    #[inline(always)]
    fn from_sample(sample: u16) -> Self {
        i64::from(sample)
    }

    #[inline(always)]
    #[allow(clippy::cast_precision_loss)] // values originate from u16 samples
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Intensity for f32 {
    #[inline(always)]
    fn from_sample(sample: u16) -> Self {
        f32::from(sample)
    }

    #[inline(always)]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Intensity for f64 {
    #[inline(always)]
    fn from_sample(sample: u16) -> Self {
        f64::from(sample)
    }

    #[inline(always)]
    fn to_f64(self) -> f64 {
        self
    }
}
