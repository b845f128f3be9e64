// MIT/Apache2 License

use super::{arc_as_beziers, ArcData, Path, PathSegment, RawSegment};
use crate::{
    geometry::{pivot, rotate_point_absolute_angle, Matrix2d, Point, Vector},
    Engine, Error, Result,
};

/// Walks a path and issues the matching primitive commands to an [`Engine`].
///
/// The emitter keeps three registers for the duration of a pass:
///
/// * the active matrix, initially the identity,
/// * the active origin, initially `(0, 0)`,
/// * the current point, initially unset.
///
/// Every point handed to the engine is mapped as `matrix.transform(p - origin) + origin`. The current point
/// is kept in the path's own, untransformed space; relative segments are measured from it before mapping.
///
/// Any failure stops the pass. Commands issued before the failing segment stay on the engine.
#[derive(Debug)]
pub struct PathEmitter<'e, E> {
    engine: &'e mut E,
    matrix: Matrix2d,
    origin: Point,
    current: Option<Point>,
}

impl<'e, E: Engine> PathEmitter<'e, E> {
    #[inline]
    pub fn new(engine: &'e mut E) -> Self {
        Self {
            engine,
            matrix: Matrix2d::identity(),
            origin: Point::zero(),
            current: None,
        }
    }

    /// The current point, in the path's own coordinate space.
    #[inline]
    pub fn current_point(&self) -> Option<Point> {
        self.current
    }

    #[inline]
    pub fn matrix(&self) -> &Matrix2d {
        &self.matrix
    }

    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Replace the engine's current path with `path`.
    #[inline]
    pub fn emit(&mut self, path: &Path) -> Result {
        self.emit_all(path.len(), path.iter().map(|segment| Ok(*segment)))
    }

    /// Replace the engine's current path with the path described by `raw`.
    ///
    /// Segments are decoded one at a time, so everything before a segment with an unknown tag is still emitted.
    #[inline]
    pub fn emit_raw(&mut self, raw: &[RawSegment]) -> Result {
        self.emit_all(
            raw.len(),
            raw.iter()
                .enumerate()
                .map(|(index, raw)| PathSegment::from_raw(raw, index)),
        )
    }

    fn emit_all<I: Iterator<Item = Result<PathSegment>>>(&mut self, len: usize, segments: I) -> Result {
        self.matrix = Matrix2d::identity();
        self.origin = Point::zero();
        self.current = None;
        self.engine.new_path()?;

        log::debug!("Emitting path of {} segments", len);

        for (index, segment) in segments.enumerate() {
            let segment = segment?;
            self.segment(index, &segment)?;
        }

        log::debug!("Finished emitting path, current point is {:?}", self.current);
        Ok(())
    }

    /// Run a single segment through the state machine. `index` is only used for error reporting.
    pub fn segment(&mut self, index: usize, segment: &PathSegment) -> Result {
        log::trace!("Segment #{}: {:?}", index, segment);

        match *segment {
            PathSegment::MoveTo(p) => self.move_to(p)?,
            PathSegment::LineTo(p) => self.line_to(p)?,
            PathSegment::CurveTo {
                control1,
                control2,
                end,
            } => self.curve_to(control1, control2, end)?,
            PathSegment::RelMoveTo(d) => {
                let p = self.relative(index, d)?;
                self.move_to(p)?;
            }
            PathSegment::RelLineTo(d) => {
                let p = self.relative(index, d)?;
                self.line_to(p)?;
            }
            PathSegment::RelCurveTo {
                control1,
                control2,
                end,
            } => {
                let control1 = self.relative(index, control1)?;
                let control2 = self.relative(index, control2)?;
                let end = self.relative(index, end)?;
                self.curve_to(control1, control2, end)?;
            }
            PathSegment::Arc(ref arc) => self.arc(index, arc, false)?,
            PathSegment::ArcNegative(ref arc) => self.arc(index, arc, true)?,
            PathSegment::NewSubPath => {
                self.engine.new_sub_path()?;
                self.current = None;
            }
            PathSegment::ClosePath => {
                self.engine.close_path()?;
                self.current = None;
            }
            PathSegment::ChangeOrigin(origin) => self.origin = origin,
            PathSegment::ChangeMatrix(matrix) => self.matrix = matrix,
        }

        Ok(())
    }

    #[inline]
    fn map(&self, p: Point) -> Point {
        pivot(&self.matrix, self.origin, p)
    }

    #[inline]
    fn move_to(&mut self, p: Point) -> Result {
        let mapped = self.map(p);
        self.engine.move_to(mapped)?;
        self.current = Some(p);
        Ok(())
    }

    #[inline]
    fn line_to(&mut self, p: Point) -> Result {
        let mapped = self.map(p);
        self.engine.line_to(mapped)?;
        self.current = Some(p);
        Ok(())
    }

    #[inline]
    fn curve_to(&mut self, control1: Point, control2: Point, end: Point) -> Result {
        let (c1, c2, e) = (self.map(control1), self.map(control2), self.map(end));
        self.engine.curve_to(c1, c2, e)?;
        self.current = Some(end);
        Ok(())
    }

    #[inline]
    fn relative(&self, index: usize, offset: Vector) -> Result<Point> {
        self.current
            .map(|current| current + offset)
            .ok_or(Error::NoCurrentPoint { index })
    }

    fn arc(&mut self, index: usize, arc: &ArcData, negative: bool) -> Result {
        let ArcData {
            center,
            radius,
            angle1,
            angle2,
        } = *arc;
        if ![center.x, center.y, radius, angle1, angle2]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(Error::InvalidPathData { index });
        }

        let segments = arc_as_beziers(arc, negative, self.current, self.origin, &self.matrix);

        // the current point is only updated once the whole arc is out
        for segment in segments {
            match segment {
                PathSegment::MoveTo(p) => {
                    let p = self.map(p);
                    self.engine.move_to(p)?;
                }
                PathSegment::LineTo(p) => {
                    let p = self.map(p);
                    self.engine.line_to(p)?;
                }
                PathSegment::CurveTo {
                    control1,
                    control2,
                    end,
                } => {
                    let (c1, c2, e) = (self.map(control1), self.map(control2), self.map(end));
                    self.engine.curve_to(c1, c2, e)?;
                }
                PathSegment::NewSubPath => self.engine.new_sub_path()?,
                // echoes of our own registers
                PathSegment::ChangeOrigin(_) | PathSegment::ChangeMatrix(_) => {}
                _ => return Err(Error::InvalidPathData { index }),
            }
        }

        self.current = Some(rotate_point_absolute_angle(center, radius, angle2));
        Ok(())
    }
}
