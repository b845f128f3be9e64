// MIT/Apache2 License

use crate::{Result, Status};
use tinyvec::TinyVec;

/// The miter limit handed to the engine while the line join is [`LineJoin::Miter`]. It is large enough that
/// joins are never beveled in practice.
pub const ALWAYS_MITER_LIMIT: f64 = 10000.0;

/// The miter limit a fresh surface remembers for [`LineJoin::MiterOrBevel`].
pub const DEFAULT_MITER_LIMIT: f64 = 10.0;

/// How the ends of open sub-paths are drawn.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

impl Default for LineCap {
    #[inline]
    fn default() -> Self {
        LineCap::Butt
    }
}

/// How two connected segments are joined when stroked.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LineJoin {
    /// Always a sharp corner, no matter how acute.
    Miter,
    /// A sharp corner, unless the miter limit is exceeded, in which case the join is beveled.
    MiterOrBevel,
    Round,
    Bevel,
}

impl Default for LineJoin {
    #[inline]
    fn default() -> Self {
        LineJoin::Miter
    }
}

impl LineJoin {
    /// The join an engine is actually asked for. Engines only know about one kind of miter join; the
    /// difference between `Miter` and `MiterOrBevel` is expressed through the miter limit.
    #[inline]
    pub fn native(self) -> LineJoin {
        match self {
            LineJoin::MiterOrBevel => LineJoin::Miter,
            join => join,
        }
    }
}

/// A dash pattern: alternating "on" and "off" lengths, and how far into the pattern stroking starts.
///
/// An empty pattern means lines are drawn solid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dashes {
    pattern: TinyVec<[f64; 4]>,
    offset: f64,
}

impl Dashes {
    #[inline]
    pub fn new<I: IntoIterator<Item = f64>>(pattern: I, offset: f64) -> Self {
        Self {
            pattern: pattern.into_iter().collect(),
            offset,
        }
    }

    /// No dashing; lines are drawn solid.
    #[inline]
    pub fn solid() -> Self {
        Self::default()
    }

    #[inline]
    pub fn pattern(&self) -> &[f64] {
        &self.pattern
    }

    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    #[inline]
    pub fn is_solid(&self) -> bool {
        self.pattern.is_empty()
    }

    /// Check that every length is non-negative and that the lengths do not all add up to zero.
    #[inline]
    pub fn validate(&self) -> Result {
        if self.is_solid() {
            return Ok(());
        }

        let total: f64 = self.pattern.iter().sum();
        if self.pattern.iter().any(|&len| len < 0.0 || len.is_nan()) || total == 0.0 {
            Err(Status::InvalidDash.into())
        } else {
            Ok(())
        }
    }
}
