// MIT/Apache2 License

use super::Point;

/// A circle, described by its center and radius.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
}

impl Circle {
    #[inline]
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    #[inline]
    pub fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
    }
}
