// MIT/Apache2 License

//! Declarative path descriptions.
//!
//! A [`Path`] is an ordered list of [`PathSegment`]s. Points inside a path are written in the path's own
//! coordinate space; the `ChangeOrigin` and `ChangeMatrix` segments alter how every following point is mapped
//! before it reaches the rendering engine. See [`PathEmitter`] for the exact rules.

mod arc;
mod builder;
mod emit;

pub use arc::*;
pub use builder::*;
pub use emit::*;

use crate::{
    geometry::{point, vector, Matrix2d, Point, Vector},
    Error, Result,
};
use std::{iter::FromIterator, slice::Iter as SliceIter};

/// The parameters of a circular arc segment.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ArcData {
    pub center: Point,
    pub radius: f64,
    /// Angle, in radians, that the arc starts at. Zero points along the positive X axis.
    pub angle1: f64,
    /// Angle, in radians, that the arc ends at.
    pub angle2: f64,
}

/// One instruction in a path.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathSegment {
    /// Begin a new sub-path at the given point.
    MoveTo(Point),
    /// Straight line from the current point.
    LineTo(Point),
    /// Cubic bezier curve from the current point.
    CurveTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
    /// Like `MoveTo`, but offset from the current point.
    RelMoveTo(Vector),
    /// Like `LineTo`, but offset from the current point.
    RelLineTo(Vector),
    /// Like `CurveTo`. Every offset is measured from the current point, not from the previous control point.
    RelCurveTo {
        control1: Vector,
        control2: Vector,
        end: Vector,
    },
    /// Arc swept with increasing angles.
    Arc(ArcData),
    /// Arc swept with decreasing angles.
    ArcNegative(ArcData),
    /// Begin a new sub-path without a current point.
    NewSubPath,
    /// Close the current sub-path with a straight line to its start.
    ClosePath,
    /// Set the pivot the active matrix is applied around.
    ChangeOrigin(Point),
    /// Set the matrix applied to every following point.
    ChangeMatrix(Matrix2d),
}

// needed by the fixed-capacity queues the arc converter uses
impl Default for PathSegment {
    #[inline]
    fn default() -> Self {
        PathSegment::NewSubPath
    }
}

/// The tag identifying each [`PathSegment`] variant in its [`RawSegment`] form.
///
/// Layout of `RawSegment::data` per tag (unused slots are zero):
///
/// * `MoveTo`, `LineTo`, `RelMoveTo`, `RelLineTo`, `ChangeOrigin`: `[x, y]`
/// * `CurveTo`, `RelCurveTo`: `[c1x, c1y, c2x, c2y, x, y]`
/// * `Arc`, `ArcNegative`: `[cx, cy, radius, angle1, angle2]`
/// * `ChangeMatrix`: `[m00, m01, m10, m11, m20, m21]`
/// * `NewSubPath`, `ClosePath`: nothing
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum SegmentKind {
    MoveTo = 0,
    LineTo = 1,
    CurveTo = 2,
    RelMoveTo = 3,
    RelLineTo = 4,
    RelCurveTo = 5,
    Arc = 6,
    ArcNegative = 7,
    NewSubPath = 8,
    ClosePath = 9,
    ChangeOrigin = 10,
    ChangeMatrix = 11,
}

impl SegmentKind {
    /// Look up the kind for a raw tag. Returns `None` for tags no segment uses.
    #[inline]
    pub fn from_tag(tag: u8) -> Option<SegmentKind> {
        Some(match tag {
            0 => SegmentKind::MoveTo,
            1 => SegmentKind::LineTo,
            2 => SegmentKind::CurveTo,
            3 => SegmentKind::RelMoveTo,
            4 => SegmentKind::RelLineTo,
            5 => SegmentKind::RelCurveTo,
            6 => SegmentKind::Arc,
            7 => SegmentKind::ArcNegative,
            8 => SegmentKind::NewSubPath,
            9 => SegmentKind::ClosePath,
            10 => SegmentKind::ChangeOrigin,
            11 => SegmentKind::ChangeMatrix,
            _ => return None,
        })
    }

    #[inline]
    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Whether segments of this kind are measured from the current point.
    #[inline]
    pub fn is_relative(self) -> bool {
        matches!(
            self,
            SegmentKind::RelMoveTo | SegmentKind::RelLineTo | SegmentKind::RelCurveTo
        )
    }
}

/// The flat, tagged form of a [`PathSegment`].
///
/// This is how path data looks when it arrives from outside of the crate, e.g. deserialized from a file or
/// handed over by another library. Nothing about it is validated until it is decoded.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct RawSegment {
    pub tag: u8,
    pub data: [f64; 6],
}

impl PathSegment {
    #[inline]
    pub fn kind(&self) -> SegmentKind {
        match self {
            PathSegment::MoveTo(_) => SegmentKind::MoveTo,
            PathSegment::LineTo(_) => SegmentKind::LineTo,
            PathSegment::CurveTo { .. } => SegmentKind::CurveTo,
            PathSegment::RelMoveTo(_) => SegmentKind::RelMoveTo,
            PathSegment::RelLineTo(_) => SegmentKind::RelLineTo,
            PathSegment::RelCurveTo { .. } => SegmentKind::RelCurveTo,
            PathSegment::Arc(_) => SegmentKind::Arc,
            PathSegment::ArcNegative(_) => SegmentKind::ArcNegative,
            PathSegment::NewSubPath => SegmentKind::NewSubPath,
            PathSegment::ClosePath => SegmentKind::ClosePath,
            PathSegment::ChangeOrigin(_) => SegmentKind::ChangeOrigin,
            PathSegment::ChangeMatrix(_) => SegmentKind::ChangeMatrix,
        }
    }

    /// Encode this segment in its flat form.
    #[inline]
    pub fn to_raw(&self) -> RawSegment {
        let data = match *self {
            PathSegment::MoveTo(p)
            | PathSegment::LineTo(p)
            | PathSegment::ChangeOrigin(p) => [p.x, p.y, 0.0, 0.0, 0.0, 0.0],
            PathSegment::RelMoveTo(v) | PathSegment::RelLineTo(v) => {
                [v.x, v.y, 0.0, 0.0, 0.0, 0.0]
            }
            PathSegment::CurveTo {
                control1,
                control2,
                end,
            } => [
                control1.x, control1.y, control2.x, control2.y, end.x, end.y,
            ],
            PathSegment::RelCurveTo {
                control1,
                control2,
                end,
            } => [
                control1.x, control1.y, control2.x, control2.y, end.x, end.y,
            ],
            PathSegment::Arc(arc) | PathSegment::ArcNegative(arc) => [
                arc.center.x,
                arc.center.y,
                arc.radius,
                arc.angle1,
                arc.angle2,
                0.0,
            ],
            PathSegment::NewSubPath | PathSegment::ClosePath => [0.0; 6],
            PathSegment::ChangeMatrix(m) => m.to_array(),
        };

        RawSegment {
            tag: self.kind().tag(),
            data,
        }
    }

    /// Decode a segment from its flat form. `index` is the position of `raw` in its path and is only used for
    /// error reporting.
    #[inline]
    pub fn from_raw(raw: &RawSegment, index: usize) -> Result<PathSegment> {
        let kind = SegmentKind::from_tag(raw.tag).ok_or(Error::InvalidPathData { index })?;
        let [a, b, c, d, e, f] = raw.data;
        let arc = || ArcData {
            center: point(a, b),
            radius: c,
            angle1: d,
            angle2: e,
        };

        Ok(match kind {
            SegmentKind::MoveTo => PathSegment::MoveTo(point(a, b)),
            SegmentKind::LineTo => PathSegment::LineTo(point(a, b)),
            SegmentKind::CurveTo => PathSegment::CurveTo {
                control1: point(a, b),
                control2: point(c, d),
                end: point(e, f),
            },
            SegmentKind::RelMoveTo => PathSegment::RelMoveTo(vector(a, b)),
            SegmentKind::RelLineTo => PathSegment::RelLineTo(vector(a, b)),
            SegmentKind::RelCurveTo => PathSegment::RelCurveTo {
                control1: vector(a, b),
                control2: vector(c, d),
                end: vector(e, f),
            },
            SegmentKind::Arc => PathSegment::Arc(arc()),
            SegmentKind::ArcNegative => PathSegment::ArcNegative(arc()),
            SegmentKind::NewSubPath => PathSegment::NewSubPath,
            SegmentKind::ClosePath => PathSegment::ClosePath,
            SegmentKind::ChangeOrigin => PathSegment::ChangeOrigin(point(a, b)),
            SegmentKind::ChangeMatrix => PathSegment::ChangeMatrix(Matrix2d::from_array(raw.data)),
        })
    }
}

/// A path: an immutable, ordered list of [`PathSegment`]s.
///
/// Paths are usually put together with a [`PathBuilder`], then handed to a surface with `set_path`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    /// Create a new path from a collection of path segments.
    #[inline]
    pub fn new<I: IntoIterator<Item = PathSegment>>(i: I) -> Self {
        Self {
            segments: i.into_iter().collect(),
        }
    }

    /// Decode a path from its flat form, failing on the first segment with an unknown tag.
    #[inline]
    pub fn from_raw(raw: &[RawSegment]) -> Result<Self> {
        raw.iter()
            .enumerate()
            .map(|(index, raw)| PathSegment::from_raw(raw, index))
            .collect()
    }

    #[inline]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    #[inline]
    pub fn iter(&self) -> SliceIter<'_, PathSegment> {
        self.segments.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Encode every segment in its flat form.
    #[inline]
    pub fn to_raw(&self) -> Vec<RawSegment> {
        self.segments.iter().map(PathSegment::to_raw).collect()
    }
}

impl FromIterator<PathSegment> for Path {
    #[inline]
    fn from_iter<I: IntoIterator<Item = PathSegment>>(i: I) -> Self {
        Self::new(i)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathSegment;
    type IntoIter = SliceIter<'a, PathSegment>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
