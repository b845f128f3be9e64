// MIT/Apache2 License

use crate::{
    gradient::{Gradient, GradientShape},
    Color,
};

/// Decides which areas enclosed by a path count as "inside" when filling or clipping.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FillRule {
    /// A point is inside if the path winds around it a non-zero number of times.
    Winding,
    /// A point is inside if a ray from it crosses the path an odd number of times.
    EvenOdd,
}

impl Default for FillRule {
    #[inline]
    fn default() -> Self {
        FillRule::Winding
    }
}

/// Defines what a particular space is painted with.
#[derive(Debug, Clone, PartialEq)]
pub enum Brush {
    SolidColor(Color),
    Gradient(Gradient, GradientShape),
}

impl From<Color> for Brush {
    #[inline]
    fn from(color: Color) -> Self {
        Brush::SolidColor(color)
    }
}
