// MIT/Apache2 License

//! Value types used to describe positions, distances and coordinate spaces.

mod circle;
mod matrix;

pub use circle::*;
pub use matrix::*;

/// A position in two-dimensional space. The X axis runs left to right, the Y axis top to bottom.
pub type Point = lyon_geom::Point<f64>;
/// A distance in two-dimensional space.
pub type Vector = lyon_geom::Vector<f64>;

/// Shorthand for constructing a [`Point`].
#[inline]
pub fn point(x: f64, y: f64) -> Point {
    lyon_geom::point(x, y)
}

/// Shorthand for constructing a [`Vector`].
#[inline]
pub fn vector(x: f64, y: f64) -> Vector {
    lyon_geom::vector(x, y)
}

/// Apply `matrix` to `p` using `origin` as the pivot: the point is shifted so that `origin` sits at zero,
/// transformed, then shifted back.
#[inline]
pub fn pivot(matrix: &Matrix2d, origin: Point, p: Point) -> Point {
    // shifting by the origin and back is not exact in floating point
    if matrix.is_identity() {
        return p;
    }

    matrix.transform_point((p - origin).to_point()) + origin.to_vector()
}

/// The point at `angle` on the circle around `center`.
///
/// The vertical term is written as `-radius * -sin(angle)` and the arc emitter depends on exactly this form.
#[inline]
pub fn rotate_point_absolute_angle(center: Point, radius: f64, angle: f64) -> Point {
    point(radius * angle.cos(), -radius * -angle.sin()) + center.to_vector()
}

/// An axis-aligned rectangle, stored as its top-left corner and its size.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    #[inline]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build the rectangle spanned by two opposite corners, in either order.
    #[inline]
    pub fn from_corners(a: Point, b: Point) -> Self {
        let x = a.x.min(b.x);
        let y = a.y.min(b.y);
        Self {
            x,
            y,
            width: a.x.max(b.x) - x,
            height: a.y.max(b.y) - y,
        }
    }

    #[inline]
    pub fn top_left(&self) -> Point {
        point(self.x, self.y)
    }

    #[inline]
    pub fn bottom_right(&self) -> Point {
        point(self.right(), self.bottom())
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Tell whether `p` lies inside the rectangle. The top and left edges are inclusive.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// The overlapping area of two rectangles, or `None` if they do not overlap.
    #[inline]
    pub fn intersection(&self, other: &Rectangle) -> Option<Rectangle> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right <= x || bottom <= y {
            None
        } else {
            Some(Rectangle::new(x, y, right - x, bottom - y))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn pivot_is_identity_under_identity_matrix() {
        let m = Matrix2d::identity();
        for &(ox, oy) in &[(0.0, 0.0), (13.5, -2.25), (-100.0, 7.0)] {
            let p = point(3.0, 4.0);
            assert_eq!(pivot(&m, point(ox, oy), p), p);
        }
    }

    #[test]
    fn pivot_rotates_about_origin() {
        let m = Matrix2d::rotation(std::f64::consts::FRAC_PI_2);
        let p = pivot(&m, point(10.0, 10.0), point(11.0, 10.0));
        assert_abs_diff_eq!(p.x, 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 11.0, epsilon = 1e-12);
    }

    #[test]
    fn rotate_point_absolute_angle_keeps_sign_convention() {
        let center = point(5.0, 5.0);
        let top = rotate_point_absolute_angle(center, 2.0, std::f64::consts::FRAC_PI_2);
        assert_abs_diff_eq!(top.x, 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(top.y, 7.0, epsilon = 1e-12);
    }

    #[test]
    fn rectangle_from_corners_normalizes() {
        let r = Rectangle::from_corners(point(4.0, 1.0), point(-2.0, 3.0));
        assert_eq!(r, Rectangle::new(-2.0, 1.0, 6.0, 2.0));
        assert!(r.contains(point(0.0, 2.0)));
        assert!(!r.contains(point(4.0, 2.0)));
    }

    #[test]
    fn rectangle_intersection() {
        let a = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        let b = Rectangle::new(5.0, 5.0, 10.0, 10.0);
        assert_eq!(a.intersection(&b), Some(Rectangle::new(5.0, 5.0, 5.0, 5.0)));
        assert_eq!(a.intersection(&Rectangle::new(20.0, 0.0, 1.0, 1.0)), None);
    }
}
