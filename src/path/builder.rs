// MIT/Apache2 License

use super::{ArcData, Path, PathSegment};
use crate::geometry::{vector, Circle, Matrix2d, Point, Rectangle, Vector};
use std::f64::consts::PI;

/// Builds a [`Path`] one segment at a time.
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    segments: Vec<PathSegment>,
}

impl PathBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            segments: Vec::with_capacity(capacity),
        }
    }

    /// Append an arbitrary segment.
    #[inline]
    pub fn segment(mut self, segment: PathSegment) -> Self {
        self.segments.push(segment);
        self
    }

    #[inline]
    pub fn move_to(self, p: Point) -> Self {
        self.segment(PathSegment::MoveTo(p))
    }

    #[inline]
    pub fn line_to(self, p: Point) -> Self {
        self.segment(PathSegment::LineTo(p))
    }

    #[inline]
    pub fn curve_to(self, control1: Point, control2: Point, end: Point) -> Self {
        self.segment(PathSegment::CurveTo {
            control1,
            control2,
            end,
        })
    }

    #[inline]
    pub fn rel_move_to(self, d: Vector) -> Self {
        self.segment(PathSegment::RelMoveTo(d))
    }

    #[inline]
    pub fn rel_line_to(self, d: Vector) -> Self {
        self.segment(PathSegment::RelLineTo(d))
    }

    #[inline]
    pub fn rel_curve_to(self, control1: Vector, control2: Vector, end: Vector) -> Self {
        self.segment(PathSegment::RelCurveTo {
            control1,
            control2,
            end,
        })
    }

    /// Arc from `angle1` to `angle2`, in the direction of increasing angles.
    #[inline]
    pub fn arc(self, center: Point, radius: f64, angle1: f64, angle2: f64) -> Self {
        self.segment(PathSegment::Arc(ArcData {
            center,
            radius,
            angle1,
            angle2,
        }))
    }

    /// Arc from `angle1` to `angle2`, in the direction of decreasing angles.
    #[inline]
    pub fn arc_negative(self, center: Point, radius: f64, angle1: f64, angle2: f64) -> Self {
        self.segment(PathSegment::ArcNegative(ArcData {
            center,
            radius,
            angle1,
            angle2,
        }))
    }

    /// A closed circle in its own sub-path.
    #[inline]
    pub fn circle(self, circle: Circle) -> Self {
        self.new_sub_path()
            .arc(circle.center(), circle.radius(), 0.0, 2.0 * PI)
            .close_path()
    }

    /// A closed rectangle, drawn from its top left corner along the top edge first.
    #[inline]
    pub fn rectangle(self, rect: Rectangle) -> Self {
        self.move_to(rect.top_left())
            .rel_line_to(vector(rect.width, 0.0))
            .rel_line_to(vector(0.0, rect.height))
            .rel_line_to(vector(-rect.width, 0.0))
            .close_path()
    }

    #[inline]
    pub fn new_sub_path(self) -> Self {
        self.segment(PathSegment::NewSubPath)
    }

    #[inline]
    pub fn close_path(self) -> Self {
        self.segment(PathSegment::ClosePath)
    }

    #[inline]
    pub fn change_origin(self, origin: Point) -> Self {
        self.segment(PathSegment::ChangeOrigin(origin))
    }

    #[inline]
    pub fn change_matrix(self, matrix: Matrix2d) -> Self {
        self.segment(PathSegment::ChangeMatrix(matrix))
    }

    #[inline]
    pub fn build(self) -> Path {
        Path::new(self.segments)
    }
}

impl Extend<PathSegment> for PathBuilder {
    #[inline]
    fn extend<I: IntoIterator<Item = PathSegment>>(&mut self, iter: I) {
        self.segments.extend(iter);
    }
}
