// MIT/Apache2 License

use super::{Point, Vector};
use crate::{Result, Status};
use lyon_geom::Transform;

/// An affine transformation matrix with two rows of scale/rotation/shear terms and one row of translation.
///
/// Points are treated as row vectors, so `transform_point(p)` computes
/// `(m00 * x + m10 * y + m20, m01 * x + m11 * y + m21)`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[repr(transparent)]
pub struct Matrix2d {
    inner: Transform<f64>,
}

impl Default for Matrix2d {
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl Matrix2d {
    #[inline]
    pub fn new(m00: f64, m01: f64, m10: f64, m11: f64, m20: f64, m21: f64) -> Self {
        Self {
            inner: Transform::new(m00, m01, m10, m11, m20, m21),
        }
    }

    #[inline]
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    #[inline]
    pub fn translation(tx: f64, ty: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    #[inline]
    pub fn scale(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// A rotation by `radians`. Positive angles turn the X axis towards the Y axis.
    #[inline]
    pub fn rotation(radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    #[inline]
    pub fn shear(factor_x: f64, factor_y: f64) -> Self {
        Self::new(1.0, factor_y, factor_x, 1.0, 0.0, 0.0)
    }

    #[inline]
    pub fn m00(&self) -> f64 {
        self.inner.m11
    }

    #[inline]
    pub fn m01(&self) -> f64 {
        self.inner.m12
    }

    #[inline]
    pub fn m10(&self) -> f64 {
        self.inner.m21
    }

    #[inline]
    pub fn m11(&self) -> f64 {
        self.inner.m22
    }

    #[inline]
    pub fn m20(&self) -> f64 {
        self.inner.m31
    }

    #[inline]
    pub fn m21(&self) -> f64 {
        self.inner.m32
    }

    /// The six terms in `[m00, m01, m10, m11, m20, m21]` order.
    #[inline]
    pub fn to_array(&self) -> [f64; 6] {
        [
            self.m00(),
            self.m01(),
            self.m10(),
            self.m11(),
            self.m20(),
            self.m21(),
        ]
    }

    #[inline]
    pub fn from_array(terms: [f64; 6]) -> Self {
        let [m00, m01, m10, m11, m20, m21] = terms;
        Self::new(m00, m01, m10, m11, m20, m21)
    }

    #[inline]
    pub fn transform_point(&self, p: Point) -> Point {
        self.inner.transform_point(p)
    }

    /// Transform a distance. The translation terms do not apply.
    #[inline]
    pub fn transform_distance(&self, v: Vector) -> Vector {
        self.inner.transform_vector(v)
    }

    /// The matrix that applies `self` first and `other` second.
    #[inline]
    pub fn multiply(&self, other: &Matrix2d) -> Matrix2d {
        let (a, b) = (self, other);
        Self::new(
            a.m00() * b.m00() + a.m01() * b.m10(),
            a.m00() * b.m01() + a.m01() * b.m11(),
            a.m10() * b.m00() + a.m11() * b.m10(),
            a.m10() * b.m01() + a.m11() * b.m11(),
            a.m20() * b.m00() + a.m21() * b.m10() + b.m20(),
            a.m20() * b.m01() + a.m21() * b.m11() + b.m21(),
        )
    }

    #[inline]
    pub fn determinant(&self) -> f64 {
        self.m00() * self.m11() - self.m01() * self.m10()
    }

    #[inline]
    pub fn is_invertible(&self) -> bool {
        let det = self.determinant();
        det != 0.0 && det.is_finite()
    }

    /// The inverse of this matrix. Fails with [`Status::InvalidMatrix`] if the matrix is singular.
    #[inline]
    pub fn invert(&self) -> Result<Matrix2d> {
        if !self.is_invertible() {
            return Err(Status::InvalidMatrix.into());
        }

        self.inner
            .inverse()
            .map(|inner| Self { inner })
            .ok_or_else(|| Status::InvalidMatrix.into())
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }
}

impl From<Transform<f64>> for Matrix2d {
    #[inline]
    fn from(inner: Transform<f64>) -> Self {
        Self { inner }
    }
}

impl From<Matrix2d> for Transform<f64> {
    #[inline]
    fn from(m: Matrix2d) -> Self {
        m.inner
    }
}
