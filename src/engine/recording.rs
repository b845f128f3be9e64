// MIT/Apache2 License

//! An in-memory engine that draws nothing and remembers everything.

use super::{Content, Engine, EngineFeatures, Format};
use crate::{
    geometry::{point, vector, Matrix2d, Point, Rectangle, Vector},
    path_utils::{distance_to_line, path_to_lines, path_to_points, winding_number},
    Antialias, Brush, Color, CompositingOperator, Dashes, FillRule, LineCap, LineJoin, Result, Status,
};
use lyon_path::{builder::PathBuilder, path::Builder};
use std::{
    mem,
    sync::atomic::{AtomicUsize, Ordering},
};

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

#[inline]
fn next_id() -> usize {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// A paint source as the [`RecordingEngine`] understands it.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedSource {
    Brush(Brush),
    /// The contents of the recording engine with the given id, placed at `origin`.
    Surface { id: usize, origin: Point },
}

impl Default for RecordedSource {
    #[inline]
    fn default() -> Self {
        RecordedSource::Brush(Brush::SolidColor(Color::black()))
    }
}

/// The device handle of a [`RecordingEngine`]. Every handle gets a fresh id.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct RecordingDevice {
    id: usize,
}

impl RecordingDevice {
    #[inline]
    pub fn id(&self) -> usize {
        self.id
    }
}

/// One call made on a [`RecordingEngine`].
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    NewPath,
    MoveTo(Point),
    LineTo(Point),
    CurveTo(Point, Point, Point),
    NewSubPath,
    ClosePath,

    Save,
    Restore,
    SetSource(RecordedSource),
    SetAntialias(Antialias),
    SetDash(Dashes),
    SetFillRule(FillRule),
    SetLineCap(LineCap),
    SetLineJoin(LineJoin),
    SetLineWidth(f64),
    SetMiterLimit(f64),
    SetOperator(CompositingOperator),
    SetTolerance(f64),
    SetMatrix(Matrix2d),
    SetDeviceOffset(Vector),

    ClipPreserve,
    ResetClip,
    FillPreserve,
    StrokePreserve,
    Paint,
    PaintWithAlpha(f64),
    Mask(RecordedSource),

    Flush,
    Finish,
    MarkDirty(Option<(i32, i32, i32, i32)>),
}

impl Command {
    /// Whether this command builds the current path.
    #[inline]
    pub fn is_path(&self) -> bool {
        matches!(
            self,
            Command::NewPath
                | Command::MoveTo(_)
                | Command::LineTo(_)
                | Command::CurveTo(..)
                | Command::NewSubPath
                | Command::ClosePath
        )
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
enum Element {
    MoveTo(Point),
    LineTo(Point),
    CurveTo(Point, Point, Point),
    Close,
}

#[derive(Debug, Clone, PartialEq)]
struct Clip {
    rects: Vec<Rectangle>,
    /// False once the clip has been intersected with a shape that is not a rectangle. The rectangles are then
    /// only a bounding approximation.
    exact: bool,
}

#[derive(Debug, Clone, PartialEq)]
struct GraphicsState {
    source: RecordedSource,
    antialias: Antialias,
    dashes: Dashes,
    fill_rule: FillRule,
    line_cap: LineCap,
    line_join: LineJoin,
    line_width: f64,
    miter_limit: f64,
    operator: CompositingOperator,
    tolerance: f64,
    matrix: Matrix2d,
    clip: Clip,
}

/// An [`Engine`] that keeps every command it receives in a log.
///
/// Besides the log, the engine keeps enough state to answer questions about it: the graphics state (with
/// `save` and `restore`), the current path, and a clip made of rectangles. Extents and hit tests are computed
/// from the flattened current path in user space. Text is not supported.
#[derive(Debug)]
pub struct RecordingEngine {
    id: usize,
    width: i32,
    height: i32,
    content: Content,
    format: Option<Format>,
    device_offset: Vector,
    finished: bool,

    state: GraphicsState,
    saved: Vec<GraphicsState>,

    elements: Vec<Element>,
    current: Option<Point>,
    sub_path_start: Point,
    sub_path_open: bool,

    commands: Vec<Command>,
}

impl RecordingEngine {
    /// Create a new recording engine with a surface of the given size.
    #[inline]
    pub fn new(width: i32, height: i32) -> Self {
        Self::with_content(Content::ColorAlpha, width, height)
    }

    #[inline]
    pub fn with_content(content: Content, width: i32, height: i32) -> Self {
        let bounds = Rectangle::new(0.0, 0.0, f64::from(width.max(0)), f64::from(height.max(0)));

        Self {
            id: next_id(),
            width,
            height,
            content,
            format: None,
            device_offset: Vector::zero(),
            finished: false,
            state: GraphicsState {
                source: RecordedSource::default(),
                antialias: Antialias::Default,
                dashes: Dashes::solid(),
                fill_rule: FillRule::Winding,
                line_cap: LineCap::Butt,
                line_join: LineJoin::Miter,
                line_width: 2.0,
                miter_limit: 10.0,
                operator: CompositingOperator::Over,
                tolerance: 0.1,
                matrix: Matrix2d::identity(),
                clip: Clip {
                    rects: vec![bounds],
                    exact: true,
                },
            },
            saved: vec![],
            elements: vec![],
            current: None,
            sub_path_start: Point::zero(),
            sub_path_open: false,
            commands: vec![],
        }
    }

    /// Create a recording engine standing in for an image surface with the given pixel layout.
    #[inline]
    pub fn with_format(format: Format, width: i32, height: i32) -> Result<Self> {
        if width < 0 || height < 0 {
            return Err(Status::InvalidSize.into());
        }

        let mut engine = Self::with_content(format.content(), width, height);
        engine.format = Some(format);
        Ok(engine)
    }

    /// The pixel layout this engine was created with, if it stands in for an image surface.
    #[inline]
    pub fn format(&self) -> Option<Format> {
        self.format
    }

    /// A number unique to this engine. Used to refer to it as a source.
    #[inline]
    pub fn id(&self) -> usize {
        self.id
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Every command received so far, in order.
    #[inline]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Only the commands that build paths.
    #[inline]
    pub fn path_commands(&self) -> Vec<Command> {
        self.commands.iter().filter(|c| c.is_path()).cloned().collect()
    }

    /// Empty the log, returning what was in it.
    #[inline]
    pub fn take_commands(&mut self) -> Vec<Command> {
        mem::take(&mut self.commands)
    }

    /// The engine's own current point, if it has one.
    #[inline]
    pub fn current_point(&self) -> Option<Point> {
        self.current
    }

    #[inline]
    fn record(&mut self, command: Command) -> Result {
        if self.finished {
            return Err(Status::SurfaceFinished.into());
        }

        self.commands.push(command);
        Ok(())
    }

    #[inline]
    fn ensure_sub_path(&mut self, fallback: Point) {
        if !self.sub_path_open {
            let at = self.current.unwrap_or(fallback);
            self.elements.push(Element::MoveTo(at));
            self.sub_path_start = at;
            self.sub_path_open = true;
        }
    }

    /// The current path in lyon form.
    fn lyon_path(&self) -> lyon_path::Path {
        #[inline]
        fn cvt(p: Point) -> lyon_geom::Point<f32> {
            lyon_geom::point(p.x as f32, p.y as f32)
        }

        let mut builder = Builder::with_capacity(self.elements.len(), self.elements.len());
        let mut open = false;

        for element in &self.elements {
            match *element {
                Element::MoveTo(p) => {
                    if open {
                        builder.end(false);
                    }
                    builder.begin(cvt(p));
                    open = true;
                }
                Element::LineTo(p) => {
                    builder.line_to(cvt(p));
                }
                Element::CurveTo(c1, c2, end) => {
                    builder.cubic_bezier_to(cvt(c1), cvt(c2), cvt(end));
                }
                Element::Close => {
                    if open {
                        builder.end(true);
                        open = false;
                    }
                }
            }
        }

        if open {
            builder.end(false);
        }

        builder.build()
    }

    #[inline]
    fn flatten_tolerance(&self) -> f32 {
        self.state.tolerance.max(1e-3) as f32
    }

    /// The corners of the box around every point of the flattened path.
    fn path_extents(&self) -> (Point, Point) {
        let path = self.lyon_path();
        let bounds = path_to_points(path.iter(), self.flatten_tolerance()).fold(None, |bounds: Option<(Point, Point)>, p| {
            let p = point(f64::from(p.x), f64::from(p.y));
            Some(match bounds {
                None => (p, p),
                Some((min, max)) => (min.min(p), max.max(p)),
            })
        });

        bounds.unwrap_or_else(|| (Point::zero(), Point::zero()))
    }

    /// If the current path is a single axis-aligned rectangle, return it.
    fn path_as_rectangle(&self) -> Option<Rectangle> {
        let mut corners: Vec<Point> = Vec::with_capacity(5);

        for (i, element) in self.elements.iter().enumerate() {
            match *element {
                Element::MoveTo(p) if i == 0 => corners.push(p),
                Element::LineTo(p) if corners.len() < 5 => corners.push(p),
                Element::Close if i == self.elements.len() - 1 => {}
                _ => return None,
            }
        }

        // an explicit line back to the start is allowed
        if corners.len() == 5 && corners[4] == corners[0] {
            corners.pop();
        }
        if corners.len() != 4 {
            return None;
        }

        let axis_aligned = (0..4).all(|i| {
            let (a, b) = (corners[i], corners[(i + 1) % 4]);
            a.x == b.x || a.y == b.y
        });
        let alternating = corners[0].x == corners[1].x || corners[0].y == corners[1].y;

        if axis_aligned && alternating {
            Some(Rectangle::from_corners(corners[0], corners[2]))
        } else {
            None
        }
    }
}

impl Engine for RecordingEngine {
    type Source = RecordedSource;
    type Device = RecordingDevice;

    #[inline]
    fn features(&self) -> EngineFeatures {
        EngineFeatures {
            text: false,
            devices: true,
        }
    }

    #[inline]
    fn create_similar(&self, content: Content, width: i32, height: i32) -> Result<Self> {
        if width < 0 || height < 0 {
            return Err(Status::InvalidSize.into());
        }

        Ok(Self::with_content(content, width, height))
    }

    #[inline]
    fn create_device(&self) -> Result<RecordingDevice> {
        Ok(RecordingDevice { id: next_id() })
    }

    #[inline]
    fn content(&self) -> Content {
        self.content
    }

    #[inline]
    fn flush(&mut self) -> Result {
        if !self.finished {
            self.commands.push(Command::Flush);
        }
        Ok(())
    }

    #[inline]
    fn finish(&mut self) -> Result {
        if !self.finished {
            self.commands.push(Command::Finish);
            self.finished = true;
        }
        Ok(())
    }

    #[inline]
    fn mark_dirty(&mut self) -> Result {
        self.record(Command::MarkDirty(None))
    }

    #[inline]
    fn mark_dirty_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result {
        self.record(Command::MarkDirty(Some((x, y, width, height))))
    }

    #[inline]
    fn set_device_offset(&mut self, offset: Vector) -> Result {
        self.record(Command::SetDeviceOffset(offset))?;
        self.device_offset = offset;
        Ok(())
    }

    #[inline]
    fn device_offset(&self) -> Vector {
        self.device_offset
    }

    #[inline]
    fn save(&mut self) -> Result {
        self.record(Command::Save)?;
        self.saved.push(self.state.clone());
        Ok(())
    }

    #[inline]
    fn restore(&mut self) -> Result {
        let state = self.saved.pop().ok_or(Status::InvalidRestore)?;
        self.record(Command::Restore)?;
        self.state = state;
        Ok(())
    }

    #[inline]
    fn source(&self) -> RecordedSource {
        self.state.source.clone()
    }

    #[inline]
    fn set_source(&mut self, source: &RecordedSource) -> Result {
        self.record(Command::SetSource(source.clone()))?;
        self.state.source = source.clone();
        Ok(())
    }

    #[inline]
    fn set_brush(&mut self, brush: &Brush) -> Result {
        self.set_source(&RecordedSource::Brush(brush.clone()))
    }

    #[inline]
    fn set_source_surface(&mut self, surface: &Self, origin: Point) -> Result {
        self.set_source(&RecordedSource::Surface {
            id: surface.id,
            origin,
        })
    }

    #[inline]
    fn set_antialias(&mut self, antialias: Antialias) -> Result {
        self.record(Command::SetAntialias(antialias))?;
        self.state.antialias = antialias;
        Ok(())
    }

    #[inline]
    fn antialias(&self) -> Antialias {
        self.state.antialias
    }

    #[inline]
    fn set_dash(&mut self, dashes: &Dashes) -> Result {
        dashes.validate()?;
        self.record(Command::SetDash(dashes.clone()))?;
        self.state.dashes = dashes.clone();
        Ok(())
    }

    #[inline]
    fn dash(&self) -> Dashes {
        self.state.dashes.clone()
    }

    #[inline]
    fn set_fill_rule(&mut self, fill_rule: FillRule) -> Result {
        self.record(Command::SetFillRule(fill_rule))?;
        self.state.fill_rule = fill_rule;
        Ok(())
    }

    #[inline]
    fn fill_rule(&self) -> FillRule {
        self.state.fill_rule
    }

    #[inline]
    fn set_line_cap(&mut self, line_cap: LineCap) -> Result {
        self.record(Command::SetLineCap(line_cap))?;
        self.state.line_cap = line_cap;
        Ok(())
    }

    #[inline]
    fn line_cap(&self) -> LineCap {
        self.state.line_cap
    }

    #[inline]
    fn set_line_join(&mut self, line_join: LineJoin) -> Result {
        self.record(Command::SetLineJoin(line_join))?;
        self.state.line_join = line_join;
        Ok(())
    }

    #[inline]
    fn line_join(&self) -> LineJoin {
        self.state.line_join
    }

    #[inline]
    fn set_line_width(&mut self, width: f64) -> Result {
        self.record(Command::SetLineWidth(width))?;
        self.state.line_width = width;
        Ok(())
    }

    #[inline]
    fn line_width(&self) -> f64 {
        self.state.line_width
    }

    #[inline]
    fn set_miter_limit(&mut self, limit: f64) -> Result {
        self.record(Command::SetMiterLimit(limit))?;
        self.state.miter_limit = limit;
        Ok(())
    }

    #[inline]
    fn miter_limit(&self) -> f64 {
        self.state.miter_limit
    }

    #[inline]
    fn set_operator(&mut self, op: CompositingOperator) -> Result {
        self.record(Command::SetOperator(op))?;
        self.state.operator = op;
        Ok(())
    }

    #[inline]
    fn operator(&self) -> CompositingOperator {
        self.state.operator
    }

    #[inline]
    fn set_tolerance(&mut self, tolerance: f64) -> Result {
        self.record(Command::SetTolerance(tolerance))?;
        self.state.tolerance = tolerance;
        Ok(())
    }

    #[inline]
    fn tolerance(&self) -> f64 {
        self.state.tolerance
    }

    #[inline]
    fn set_matrix(&mut self, matrix: &Matrix2d) -> Result {
        if !matrix.is_invertible() {
            return Err(Status::InvalidMatrix.into());
        }

        self.record(Command::SetMatrix(*matrix))?;
        self.state.matrix = *matrix;
        Ok(())
    }

    #[inline]
    fn matrix(&self) -> Matrix2d {
        self.state.matrix
    }

    #[inline]
    fn new_path(&mut self) -> Result {
        self.record(Command::NewPath)?;
        self.elements.clear();
        self.current = None;
        self.sub_path_open = false;
        Ok(())
    }

    #[inline]
    fn move_to(&mut self, point: Point) -> Result {
        self.record(Command::MoveTo(point))?;
        self.elements.push(Element::MoveTo(point));
        self.current = Some(point);
        self.sub_path_start = point;
        self.sub_path_open = true;
        Ok(())
    }

    #[inline]
    fn line_to(&mut self, point: Point) -> Result {
        self.record(Command::LineTo(point))?;
        self.ensure_sub_path(point);
        self.elements.push(Element::LineTo(point));
        self.current = Some(point);
        Ok(())
    }

    #[inline]
    fn curve_to(&mut self, control1: Point, control2: Point, end: Point) -> Result {
        self.record(Command::CurveTo(control1, control2, end))?;
        self.ensure_sub_path(control1);
        self.elements.push(Element::CurveTo(control1, control2, end));
        self.current = Some(end);
        Ok(())
    }

    #[inline]
    fn new_sub_path(&mut self) -> Result {
        self.record(Command::NewSubPath)?;
        self.current = None;
        self.sub_path_open = false;
        Ok(())
    }

    #[inline]
    fn close_path(&mut self) -> Result {
        self.record(Command::ClosePath)?;
        if self.sub_path_open {
            self.elements.push(Element::Close);
            self.sub_path_open = false;
            self.current = Some(self.sub_path_start);
        }
        Ok(())
    }

    fn clip_preserve(&mut self) -> Result {
        self.record(Command::ClipPreserve)?;

        let (shape, exact) = match self.path_as_rectangle() {
            Some(rect) => (rect, true),
            None => {
                let (min, max) = self.path_extents();
                (Rectangle::from_corners(min, max), false)
            }
        };

        let clip = &mut self.state.clip;
        clip.rects = clip
            .rects
            .iter()
            .filter_map(|rect| rect.intersection(&shape))
            .collect();
        clip.exact &= exact;

        log::debug!(
            "Clipped to {:?} ({} rectangles remain)",
            shape,
            clip.rects.len()
        );
        Ok(())
    }

    #[inline]
    fn reset_clip(&mut self) -> Result {
        self.record(Command::ResetClip)?;
        let bounds = Rectangle::new(
            0.0,
            0.0,
            f64::from(self.width.max(0)),
            f64::from(self.height.max(0)),
        );
        self.state.clip = Clip {
            rects: vec![bounds],
            exact: true,
        };
        Ok(())
    }

    #[inline]
    fn clip_extents(&self) -> Result<(Point, Point)> {
        let extents = self.state.clip.rects.iter().fold(None, |bounds: Option<(Point, Point)>, rect| {
            Some(match bounds {
                None => (rect.top_left(), rect.bottom_right()),
                Some((min, max)) => (min.min(rect.top_left()), max.max(rect.bottom_right())),
            })
        });

        Ok(extents.unwrap_or_else(|| (Point::zero(), Point::zero())))
    }

    #[inline]
    fn in_clip(&self, point: Point) -> Result<bool> {
        Ok(self.state.clip.rects.iter().any(|rect| rect.contains(point)))
    }

    #[inline]
    fn clip_rectangles(&self) -> Result<Vec<Rectangle>> {
        if self.state.clip.exact {
            Ok(self.state.clip.rects.clone())
        } else {
            Err(Status::ClipNotRepresentable.into())
        }
    }

    #[inline]
    fn fill_preserve(&mut self) -> Result {
        self.record(Command::FillPreserve)
    }

    #[inline]
    fn fill_extents(&self) -> Result<(Point, Point)> {
        Ok(self.path_extents())
    }

    #[inline]
    fn in_fill(&self, point: Point) -> Result<bool> {
        let path = self.lyon_path();
        let winding = winding_number(
            path_to_lines(path.iter(), self.flatten_tolerance(), true),
            point.x,
            point.y,
        );

        Ok(match self.state.fill_rule {
            FillRule::Winding => winding != 0,
            FillRule::EvenOdd => winding % 2 != 0,
        })
    }

    #[inline]
    fn stroke_preserve(&mut self) -> Result {
        self.record(Command::StrokePreserve)
    }

    #[inline]
    fn stroke_extents(&self) -> Result<(Point, Point)> {
        if self.elements.is_empty() {
            return Ok((Point::zero(), Point::zero()));
        }

        let (min, max) = self.path_extents();
        let half = self.state.line_width / 2.0;
        let half = vector(half, half);
        Ok((min - half, max + half))
    }

    #[inline]
    fn in_stroke(&self, point: Point) -> Result<bool> {
        let path = self.lyon_path();
        let half = self.state.line_width / 2.0;
        let mut lines = path_to_lines(path.iter(), self.flatten_tolerance(), false);
        Ok(lines.any(|line| distance_to_line(&line, point.x, point.y) <= half))
    }

    #[inline]
    fn paint(&mut self) -> Result {
        self.record(Command::Paint)
    }

    #[inline]
    fn paint_with_alpha(&mut self, alpha: f64) -> Result {
        self.record(Command::PaintWithAlpha(alpha))
    }

    #[inline]
    fn mask(&mut self, mask: &RecordedSource) -> Result {
        self.record(Command::Mask(mask.clone()))
    }

    #[inline]
    fn mask_surface(&mut self, surface: &Self, origin: Point) -> Result {
        self.mask(&RecordedSource::Surface {
            id: surface.id,
            origin,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn square(engine: &mut RecordingEngine, x: f64, y: f64, size: f64) {
        engine.new_path().unwrap();
        engine.move_to(point(x, y)).unwrap();
        engine.line_to(point(x + size, y)).unwrap();
        engine.line_to(point(x + size, y + size)).unwrap();
        engine.line_to(point(x, y + size)).unwrap();
        engine.close_path().unwrap();
    }

    #[test]
    fn format_decides_content() {
        let alpha = RecordingEngine::with_format(Format::A8, 16, 16).unwrap();
        assert_eq!(alpha.content(), Content::Alpha);
        assert_eq!(alpha.format(), Some(Format::A8));

        let opaque = RecordingEngine::with_format(Format::Rgb24, 16, 16).unwrap();
        assert_eq!(opaque.content(), Content::Color);
        assert_eq!(RecordingEngine::new(16, 16).format(), None);

        assert_eq!(
            RecordingEngine::with_format(Format::Argb32, -1, 16).unwrap_err(),
            Status::InvalidSize.into()
        );
    }

    #[test]
    fn close_path_returns_to_sub_path_start() {
        let mut engine = RecordingEngine::new(100, 100);
        square(&mut engine, 10.0, 10.0, 5.0);
        assert_eq!(engine.current_point(), Some(point(10.0, 10.0)));

        engine.new_sub_path().unwrap();
        assert_eq!(engine.current_point(), None);
    }

    #[test]
    fn fill_queries_follow_the_path() {
        let mut engine = RecordingEngine::new(100, 100);
        square(&mut engine, 10.0, 20.0, 30.0);

        let (min, max) = engine.fill_extents().unwrap();
        assert_abs_diff_eq!(min.x, 10.0);
        assert_abs_diff_eq!(min.y, 20.0);
        assert_abs_diff_eq!(max.x, 40.0);
        assert_abs_diff_eq!(max.y, 50.0);

        assert!(engine.in_fill(point(25.0, 35.0)).unwrap());
        assert!(!engine.in_fill(point(5.0, 35.0)).unwrap());

        engine.set_line_width(4.0).unwrap();
        assert!(engine.in_stroke(point(11.0, 35.0)).unwrap());
        assert!(!engine.in_stroke(point(25.0, 35.0)).unwrap());
        let (min, _) = engine.stroke_extents().unwrap();
        assert_abs_diff_eq!(min.x, 8.0);
    }

    #[test]
    fn rectangular_clips_stay_exact() {
        let mut engine = RecordingEngine::new(100, 100);
        square(&mut engine, 10.0, 10.0, 50.0);
        engine.clip_preserve().unwrap();
        square(&mut engine, 30.0, 30.0, 50.0);
        engine.clip_preserve().unwrap();

        assert_eq!(
            engine.clip_rectangles().unwrap(),
            vec![Rectangle::new(30.0, 30.0, 30.0, 30.0)]
        );
        assert!(engine.in_clip(point(45.0, 45.0)).unwrap());
        assert!(!engine.in_clip(point(15.0, 15.0)).unwrap());

        engine.new_path().unwrap();
        engine.move_to(point(0.0, 0.0)).unwrap();
        engine.line_to(point(50.0, 0.0)).unwrap();
        engine.line_to(point(0.0, 50.0)).unwrap();
        engine.close_path().unwrap();
        engine.clip_preserve().unwrap();
        assert_eq!(
            engine.clip_rectangles(),
            Err(Status::ClipNotRepresentable.into())
        );

        engine.reset_clip().unwrap();
        assert_eq!(
            engine.clip_rectangles().unwrap(),
            vec![Rectangle::new(0.0, 0.0, 100.0, 100.0)]
        );
    }

    #[test]
    fn save_and_restore_state() {
        let mut engine = RecordingEngine::new(10, 10);
        engine.save().unwrap();
        engine.set_line_width(7.0).unwrap();
        engine.restore().unwrap();
        assert_abs_diff_eq!(engine.line_width(), 2.0);
        assert_eq!(engine.restore(), Err(Status::InvalidRestore.into()));
    }

    #[test]
    fn finished_engines_refuse_to_draw() {
        let mut engine = RecordingEngine::new(10, 10);
        engine.finish().unwrap();
        assert_eq!(engine.paint(), Err(Status::SurfaceFinished.into()));
        assert!(engine.flush().is_ok());
        assert_eq!(engine.commands(), &[Command::Finish]);
    }

    #[test]
    fn invalid_dashes_are_rejected() {
        let mut engine = RecordingEngine::new(10, 10);
        assert_eq!(
            engine.set_dash(&Dashes::new(vec![-1.0], 0.0)),
            Err(Status::InvalidDash.into())
        );
        assert!(engine.commands().is_empty());
    }
}
