// MIT/Apache2 License

use crate::{color::Color, geometry::Point, intensity::Intensity};
use tinyvec::TinyVec;

/// A gradient of colors.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Gradient {
    // invariant: contains at least 1 element, sorted by offset
    stops: TinyVec<[ColorStop; 3]>,
}

/// A color stop in a color gradient.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColorStop {
    pub offset: Intensity,
    pub color: Color,
}

impl Gradient {
    /// Create a gradient from a set of color stops. Returns `None` if there are no stops.
    #[inline]
    pub fn new<I: IntoIterator<Item = ColorStop>>(stops: I) -> Option<Self> {
        let mut stops: TinyVec<[ColorStop; 3]> = stops.into_iter().collect();
        if stops.is_empty() {
            return None;
        }

        // stable, so stops sharing an offset keep their order
        stops.sort_by_key(|stop| stop.offset);
        Some(Self { stops })
    }

    /// A gradient that fades from one color into another.
    #[inline]
    pub fn two_color(from: Color, to: Color) -> Self {
        let mut stops = TinyVec::new();
        stops.push(ColorStop {
            offset: Intensity::default(),
            color: from,
        });
        stops.push(ColorStop {
            offset: Intensity::one(),
            color: to,
        });
        Self { stops }
    }

    /// The color stops in this gradient, ordered by offset.
    #[inline]
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }
}

/// The geometry a gradient is laid along.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GradientShape {
    /// Colors change along the line from `start` to `end`.
    Linear { start: Point, end: Point },
    /// Colors change between two circles.
    Radial {
        center0: Point,
        radius0: f64,
        center1: Point,
        radius1: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_are_sorted() {
        let stop = |offset, color| ColorStop {
            offset: Intensity::saturating(offset),
            color,
        };
        let gradient = Gradient::new(vec![
            stop(1.0, Color::white()),
            stop(0.0, Color::black()),
        ])
        .unwrap();

        assert_eq!(gradient.stops()[0].color, Color::black());
        assert_eq!(gradient.stops()[1].color, Color::white());
        assert!(Gradient::new(Vec::new()).is_none());
    }
}
