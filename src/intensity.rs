// MIT/Apache2 License

use crate::util::clamp;
use ordered_float::NotNan;

/// A range that goes from zero to one, defining the intensity of a color channel or the offset of a stop
/// in a gradient. This type is essentially a wrapper around an `f64`, but with two invariants:
///
/// * The inner value will always be between `0.0` and `1.0`.
/// * The inner value will never be `NaN`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Intensity {
    inner: NotNan<f64>,
}

impl Intensity {
    /// Create a new `Intensity`. If the inner value does not meet the invariants mentioned above, this function
    /// returns `None`.
    #[inline]
    pub fn new(inner: f64) -> Option<Self> {
        if inner < 0.0 || inner > 1.0 {
            None
        } else {
            NotNan::new(inner).ok().map(|inner| Self { inner })
        }
    }

    /// Create a new `Intensity`, pulling out-of-range values onto the nearest bound. `NaN` becomes zero.
    #[inline]
    pub fn saturating(inner: f64) -> Self {
        let inner = if inner.is_nan() {
            0.0
        } else {
            inner.max(0.0).min(1.0)
        };
        Self::new(inner).unwrap_or_default()
    }

    /// The full intensity, `1.0`.
    #[inline]
    pub fn one() -> Self {
        Self::saturating(1.0)
    }

    /// Get the inner value of the `Intensity`.
    #[inline]
    pub fn into_inner(self) -> f64 {
        self.inner.into_inner()
    }

    /// Clamp this value to a `u8`.
    #[inline]
    pub fn clamp_u8(self) -> u8 {
        clamp(self.into_inner())
    }

    /// Clamp this value to a `u16`.
    #[inline]
    pub fn clamp_u16(self) -> u16 {
        clamp(self.into_inner())
    }
}

impl From<Intensity> for f64 {
    #[inline]
    fn from(i: Intensity) -> f64 {
        i.into_inner()
    }
}
