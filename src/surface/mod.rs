// MIT/Apache2 License

use crate::{
    engine::{Content, Engine},
    geometry::{Matrix2d, Point, Rectangle, Vector},
    path::{Path, PathEmitter, RawSegment},
    stroke::{ALWAYS_MITER_LIMIT, DEFAULT_MITER_LIMIT},
    text::{FontExtents, FontSlant, FontWeight, Glyph, TextCluster, TextExtents},
    util, Antialias, Brush, Color, CompositingOperator, Dashes, FillRule, LineCap, LineJoin, Result,
};
use std::sync::Arc;

/// Provides the `DeviceCache` type.
mod device;
/// Scoped source substitution.
mod source;

pub use device::DeviceCache;
use source::SourceGuard;

/// A retained-mode drawing surface.
///
/// `Surface` drives an [`Engine`]. It turns [`Path`]s into engine commands, applies the miter-limit policy
/// described below, and forwards everything else more or less verbatim.
///
/// ## Line joins and the miter limit
///
/// Engines have a single kind of miter join, and decide when to bevel it using the miter limit. `Surface`
/// instead offers [`LineJoin::Miter`], which is never beveled, and [`LineJoin::MiterOrBevel`], which is
/// beveled past the miter limit. The limit the user asks for is always remembered, but is only handed to the
/// engine while the join is `MiterOrBevel`, clamped to `[1, ALWAYS_MITER_LIMIT]`. While the join is `Miter`, the
/// engine's limit is pinned to [`ALWAYS_MITER_LIMIT`].
///
/// ## Preserving operations
///
/// `fill`, `stroke`, `clip` and friends leave the current path in place, so it can be reused by the next
/// drawing operation. Use `clear_path` or `set_path` to replace it.
#[derive(Debug)]
pub struct Surface<E: Engine> {
    engine: E,
    line_join: LineJoin,
    miter_limit: f64,
    saved: Vec<(LineJoin, f64)>,
    device: DeviceCache<E::Device>,
}

#[inline]
fn clamp_miter_limit(limit: f64) -> f64 {
    limit.max(1.0).min(ALWAYS_MITER_LIMIT)
}

impl<E: Engine> Surface<E> {
    /* Lifetime */

    /// Wrap an engine. The engine is switched to always-miter joins.
    #[inline]
    pub fn new(mut engine: E) -> Result<Self> {
        engine.set_line_join(LineJoin::Miter)?;
        engine.set_miter_limit(ALWAYS_MITER_LIMIT)?;

        Ok(Self {
            engine,
            line_join: LineJoin::Miter,
            miter_limit: DEFAULT_MITER_LIMIT,
            saved: vec![],
            device: DeviceCache::new(),
        })
    }

    /// Create a new, empty surface backed by the same kind of engine.
    #[inline]
    pub fn similar(&self, content: Content, width: i32, height: i32) -> Result<Self> {
        Self::new(self.engine.create_similar(content, width, height)?)
    }

    #[inline]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    #[inline]
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    #[inline]
    pub fn into_engine(self) -> E {
        self.engine
    }

    #[inline]
    pub fn finish(&mut self) -> Result {
        self.engine.finish()
    }

    #[inline]
    pub fn flush(&mut self) -> Result {
        self.engine.flush()
    }

    #[inline]
    pub fn content(&self) -> Content {
        self.engine.content()
    }

    #[inline]
    pub fn mark_dirty(&mut self) -> Result {
        self.engine.mark_dirty()
    }

    /// Mark part of the surface as dirty. The rectangle is rounded to whole pixels.
    #[inline]
    pub fn mark_dirty_rect(&mut self, rect: Rectangle) -> Result {
        let x = util::double_to_int(rect.x)?;
        let y = util::double_to_int(rect.y)?;
        let width = util::double_to_extent(rect.width)?;
        let height = util::double_to_extent(rect.height)?;
        self.engine.mark_dirty_rectangle(x, y, width, height)
    }

    #[inline]
    pub fn set_device_offset(&mut self, offset: Vector) -> Result {
        self.engine.set_device_offset(offset)
    }

    #[inline]
    pub fn device_offset(&self) -> Vector {
        self.engine.device_offset()
    }

    /// Get the device this surface belongs to. The same handle is returned for as long as it is alive.
    #[inline]
    pub fn device(&self) -> Result<Arc<E::Device>> {
        let engine = &self.engine;
        self.device.get_or_create(|| engine.create_device())
    }

    /* Graphics State */

    /// Push the graphics state, including the line join and remembered miter limit.
    #[inline]
    pub fn save(&mut self) -> Result {
        self.engine.save()?;
        self.saved.push((self.line_join, self.miter_limit));
        Ok(())
    }

    /// Pop the graphics state pushed by the last `save`.
    #[inline]
    pub fn restore(&mut self) -> Result {
        self.engine.restore()?;
        if let Some((line_join, miter_limit)) = self.saved.pop() {
            self.line_join = line_join;
            self.miter_limit = miter_limit;
        }
        Ok(())
    }

    #[inline]
    pub fn set_brush(&mut self, brush: &Brush) -> Result {
        self.engine.set_brush(brush)
    }

    /// Go back to the default source, opaque black.
    #[inline]
    pub fn reset_source(&mut self) -> Result {
        self.engine.set_brush(&Brush::SolidColor(Color::black()))
    }

    #[inline]
    pub fn source(&self) -> E::Source {
        self.engine.source()
    }

    #[inline]
    pub fn set_source(&mut self, source: &E::Source) -> Result {
        self.engine.set_source(source)
    }

    #[inline]
    pub fn set_antialias(&mut self, antialias: Antialias) -> Result {
        self.engine.set_antialias(antialias)
    }

    #[inline]
    pub fn antialias(&self) -> Antialias {
        self.engine.antialias()
    }

    /// Set the dash pattern. An empty pattern turns dashing off.
    #[inline]
    pub fn set_dashes(&mut self, dashes: &Dashes) -> Result {
        self.engine.set_dash(dashes)
    }

    /// Turn dashing off.
    #[inline]
    pub fn reset_dashes(&mut self) -> Result {
        self.engine.set_dash(&Dashes::solid())
    }

    #[inline]
    pub fn dashes(&self) -> Dashes {
        self.engine.dash()
    }

    #[inline]
    pub fn set_fill_rule(&mut self, fill_rule: FillRule) -> Result {
        self.engine.set_fill_rule(fill_rule)
    }

    #[inline]
    pub fn fill_rule(&self) -> FillRule {
        self.engine.fill_rule()
    }

    #[inline]
    pub fn set_line_cap(&mut self, line_cap: LineCap) -> Result {
        self.engine.set_line_cap(line_cap)
    }

    #[inline]
    pub fn line_cap(&self) -> LineCap {
        self.engine.line_cap()
    }

    /// Set the line join, and hand the engine the miter limit that goes with it.
    #[inline]
    pub fn set_line_join(&mut self, line_join: LineJoin) -> Result {
        self.engine.set_line_join(line_join.native())?;
        self.line_join = line_join;

        match line_join {
            LineJoin::MiterOrBevel => self
                .engine
                .set_miter_limit(clamp_miter_limit(self.miter_limit)),
            LineJoin::Miter => self.engine.set_miter_limit(ALWAYS_MITER_LIMIT),
            LineJoin::Round | LineJoin::Bevel => Ok(()),
        }
    }

    #[inline]
    pub fn line_join(&self) -> LineJoin {
        self.line_join
    }

    /// Set the line width. Negative widths are treated as zero.
    #[inline]
    pub fn set_line_width(&mut self, width: f64) -> Result {
        if width < 0.0 {
            log::warn!("Negative line width {} clamped to zero", width);
        }

        self.engine.set_line_width(width.max(0.0))
    }

    #[inline]
    pub fn line_width(&self) -> f64 {
        self.engine.line_width()
    }

    /// Remember `limit` as the miter limit. It only reaches the engine while the join is `MiterOrBevel`.
    #[inline]
    pub fn set_miter_limit(&mut self, limit: f64) -> Result {
        self.miter_limit = limit;

        if self.line_join == LineJoin::MiterOrBevel {
            self.engine.set_miter_limit(clamp_miter_limit(limit))
        } else {
            Ok(())
        }
    }

    /// The miter limit last asked for, which is not necessarily what the engine is using.
    #[inline]
    pub fn miter_limit(&self) -> f64 {
        self.miter_limit
    }

    /// The miter limit the engine is actually using.
    #[inline]
    pub fn effective_miter_limit(&self) -> f64 {
        self.engine.miter_limit()
    }

    #[inline]
    pub fn set_compositing_operator(&mut self, op: CompositingOperator) -> Result {
        self.engine.set_operator(op)
    }

    #[inline]
    pub fn compositing_operator(&self) -> CompositingOperator {
        self.engine.operator()
    }

    #[inline]
    pub fn set_tolerance(&mut self, tolerance: f64) -> Result {
        self.engine.set_tolerance(tolerance)
    }

    #[inline]
    pub fn tolerance(&self) -> f64 {
        self.engine.tolerance()
    }

    #[inline]
    pub fn set_matrix(&mut self, matrix: &Matrix2d) -> Result {
        self.engine.set_matrix(matrix)
    }

    #[inline]
    pub fn matrix(&self) -> Matrix2d {
        self.engine.matrix()
    }

    /// Map a point from user space to device space.
    #[inline]
    pub fn user_to_device(&self, p: Point) -> Point {
        self.engine.matrix().transform_point(p) + self.engine.device_offset()
    }

    #[inline]
    pub fn user_to_device_distance(&self, v: Vector) -> Vector {
        self.engine.matrix().transform_distance(v)
    }

    /// Map a point from device space to user space. Fails if the current matrix can't be inverted.
    #[inline]
    pub fn device_to_user(&self, p: Point) -> Result<Point> {
        let inverse = self.engine.matrix().invert()?;
        Ok(inverse.transform_point(p - self.engine.device_offset()))
    }

    #[inline]
    pub fn device_to_user_distance(&self, v: Vector) -> Result<Vector> {
        let inverse = self.engine.matrix().invert()?;
        Ok(inverse.transform_distance(v))
    }

    /* Paths */

    /// Replace the current path with `path`.
    #[inline]
    pub fn set_path(&mut self, path: &Path) -> Result {
        PathEmitter::new(&mut self.engine).emit(path)
    }

    /// Replace the current path with the path described by `raw`.
    #[inline]
    pub fn set_path_data(&mut self, raw: &[RawSegment]) -> Result {
        PathEmitter::new(&mut self.engine).emit_raw(raw)
    }

    /// Remove the current path.
    #[inline]
    pub fn clear_path(&mut self) -> Result {
        self.engine.new_path()
    }

    /* Clipping */

    /// Intersect the clip region with the current path.
    #[inline]
    pub fn clip(&mut self) -> Result {
        self.engine.clip_preserve()
    }

    #[inline]
    pub fn reset_clip(&mut self) -> Result {
        self.engine.reset_clip()
    }

    #[inline]
    pub fn clip_extents(&self) -> Result<Rectangle> {
        let (a, b) = self.engine.clip_extents()?;
        log::debug!("Clip extents: {:?} to {:?}", a, b);
        Ok(Rectangle::from_corners(a, b))
    }

    #[inline]
    pub fn in_clip(&self, p: Point) -> Result<bool> {
        self.engine.in_clip(p)
    }

    #[inline]
    pub fn clip_rectangles(&self) -> Result<Vec<Rectangle>> {
        self.engine.clip_rectangles()
    }

    /* Drawing */

    #[inline]
    fn with_surface_source<F: FnOnce(&mut E) -> Result>(
        &mut self,
        surface: &Surface<E>,
        origin: Point,
        op: F,
    ) -> Result {
        let mut guard = SourceGuard::with_surface(&mut self.engine, &surface.engine, origin)?;
        op(guard.engine())?;
        guard.engine().flush()?;
        guard.restore()
    }

    /// Fill the current path with the current source.
    #[inline]
    pub fn fill(&mut self) -> Result {
        self.engine.fill_preserve()
    }

    /// Fill the current path with the contents of `surface`, placed at `origin`.
    #[inline]
    pub fn fill_with_surface(&mut self, surface: &Surface<E>, origin: Point) -> Result {
        self.with_surface_source(surface, origin, |engine| engine.fill_preserve())
    }

    #[inline]
    pub fn fill_extents(&self) -> Result<Rectangle> {
        let (a, b) = self.engine.fill_extents()?;
        log::debug!("Fill extents: {:?} to {:?}", a, b);
        Ok(Rectangle::from_corners(a, b))
    }

    #[inline]
    pub fn in_fill(&self, p: Point) -> Result<bool> {
        self.engine.in_fill(p)
    }

    /// Stroke the current path with the current source.
    #[inline]
    pub fn stroke(&mut self) -> Result {
        self.engine.stroke_preserve()
    }

    /// Stroke the current path with the contents of `surface`, placed at `origin`.
    #[inline]
    pub fn stroke_with_surface(&mut self, surface: &Surface<E>, origin: Point) -> Result {
        self.with_surface_source(surface, origin, |engine| engine.stroke_preserve())
    }

    #[inline]
    pub fn stroke_extents(&self) -> Result<Rectangle> {
        let (a, b) = self.engine.stroke_extents()?;
        log::debug!("Stroke extents: {:?} to {:?}", a, b);
        Ok(Rectangle::from_corners(a, b))
    }

    #[inline]
    pub fn in_stroke(&self, p: Point) -> Result<bool> {
        self.engine.in_stroke(p)
    }

    /// Paint the current source everywhere inside the clip.
    #[inline]
    pub fn paint(&mut self) -> Result {
        self.engine.paint()
    }

    #[inline]
    pub fn paint_with_alpha(&mut self, alpha: f64) -> Result {
        self.engine.paint_with_alpha(alpha)
    }

    #[inline]
    pub fn paint_with_surface(&mut self, surface: &Surface<E>, origin: Point) -> Result {
        self.with_surface_source(surface, origin, |engine| engine.paint())
    }

    #[inline]
    pub fn paint_with_surface_alpha(
        &mut self,
        surface: &Surface<E>,
        origin: Point,
        alpha: f64,
    ) -> Result {
        self.with_surface_source(surface, origin, |engine| engine.paint_with_alpha(alpha))
    }

    /// Paint the current source, using the alpha channel of `mask` as a mask.
    #[inline]
    pub fn mask(&mut self, mask: &E::Source) -> Result {
        self.engine.mask(mask)
    }

    /// Paint the current source, using the alpha channel of `surface` placed at `origin` as a mask.
    #[inline]
    pub fn mask_surface(&mut self, surface: &Surface<E>, origin: Point) -> Result {
        self.engine.mask_surface(&surface.engine, origin)
    }

    /* Text */

    #[inline]
    pub fn select_font_face(&mut self, family: &str, slant: FontSlant, weight: FontWeight) -> Result {
        self.engine.select_font_face(family, slant, weight)
    }

    #[inline]
    pub fn set_font_size(&mut self, size: f64) -> Result {
        self.engine.set_font_size(size)
    }

    #[inline]
    pub fn set_font_matrix(&mut self, matrix: &Matrix2d) -> Result {
        self.engine.set_font_matrix(matrix)
    }

    #[inline]
    pub fn font_matrix(&self) -> Result<Matrix2d> {
        self.engine.font_matrix()
    }

    #[inline]
    pub fn show_text(&mut self, text: &str) -> Result {
        self.engine.show_text(text)
    }

    #[inline]
    pub fn show_glyphs(&mut self, glyphs: &[Glyph]) -> Result {
        self.engine.show_glyphs(glyphs)
    }

    #[inline]
    pub fn show_text_glyphs(
        &mut self,
        text: &str,
        glyphs: &[Glyph],
        clusters: &[TextCluster],
        backward: bool,
    ) -> Result {
        self.engine
            .show_text_glyphs(text, glyphs, clusters, backward)
    }

    #[inline]
    pub fn font_extents(&self) -> Result<FontExtents> {
        self.engine.font_extents()
    }

    #[inline]
    pub fn text_extents(&self, text: &str) -> Result<TextExtents> {
        self.engine.text_extents(text)
    }

    #[inline]
    pub fn glyph_extents(&self, glyphs: &[Glyph]) -> Result<TextExtents> {
        self.engine.glyph_extents(glyphs)
    }
}

#[cfg(all(test, feature = "recording"))]
mod tests {
    use super::*;
    use crate::{
        geometry::{point, vector},
        Command, Error, NotSupportedOp, PathBuilder, RecordedSource, RecordingEngine, Status,
    };
    use approx::assert_abs_diff_eq;

    fn surface() -> Surface<RecordingEngine> {
        let _ = env_logger::builder().is_test(true).try_init();
        Surface::new(RecordingEngine::new(200, 200)).unwrap()
    }

    #[test]
    fn new_surfaces_always_miter() {
        let s = surface();
        assert_eq!(s.line_join(), LineJoin::Miter);
        assert_abs_diff_eq!(s.miter_limit(), DEFAULT_MITER_LIMIT);
        assert_abs_diff_eq!(s.effective_miter_limit(), ALWAYS_MITER_LIMIT);
    }

    #[test]
    fn miter_limit_follows_line_join() {
        let mut s = surface();

        s.set_line_join(LineJoin::MiterOrBevel).unwrap();
        s.set_miter_limit(5.0).unwrap();
        assert_abs_diff_eq!(s.effective_miter_limit(), 5.0);

        s.set_line_join(LineJoin::Miter).unwrap();
        assert_abs_diff_eq!(s.effective_miter_limit(), ALWAYS_MITER_LIMIT);
        assert_abs_diff_eq!(s.miter_limit(), 5.0);

        s.set_line_join(LineJoin::MiterOrBevel).unwrap();
        assert_abs_diff_eq!(s.effective_miter_limit(), 5.0);

        // the engine only ever hears about plain miter joins
        assert_eq!(s.engine().line_join(), LineJoin::Miter);
    }

    #[test]
    fn miter_limit_is_clamped_only_on_the_engine() {
        let mut s = surface();
        s.set_line_join(LineJoin::MiterOrBevel).unwrap();

        s.set_miter_limit(0.25).unwrap();
        assert_abs_diff_eq!(s.effective_miter_limit(), 1.0);
        assert_abs_diff_eq!(s.miter_limit(), 0.25);

        s.set_miter_limit(1e9).unwrap();
        assert_abs_diff_eq!(s.effective_miter_limit(), ALWAYS_MITER_LIMIT);
    }

    #[test]
    fn other_joins_leave_the_engine_limit_alone() {
        let mut s = surface();
        s.set_line_join(LineJoin::MiterOrBevel).unwrap();
        s.set_miter_limit(3.0).unwrap();

        s.set_line_join(LineJoin::Round).unwrap();
        s.set_miter_limit(7.0).unwrap();
        assert_abs_diff_eq!(s.effective_miter_limit(), 3.0);

        s.set_line_join(LineJoin::MiterOrBevel).unwrap();
        assert_abs_diff_eq!(s.effective_miter_limit(), 7.0);
    }

    #[test]
    fn save_and_restore_line_join_state() {
        let mut s = surface();
        s.save().unwrap();
        s.set_line_join(LineJoin::MiterOrBevel).unwrap();
        s.set_miter_limit(4.0).unwrap();
        s.restore().unwrap();

        assert_eq!(s.line_join(), LineJoin::Miter);
        assert_abs_diff_eq!(s.miter_limit(), DEFAULT_MITER_LIMIT);
        assert_abs_diff_eq!(s.effective_miter_limit(), ALWAYS_MITER_LIMIT);

        assert_eq!(s.restore(), Err(Status::InvalidRestore.into()));
    }

    #[test]
    fn dashes_round_trip() {
        let mut s = surface();
        let dashes = Dashes::new(vec![4.0, 2.0], 1.0);
        s.set_dashes(&dashes).unwrap();

        let back = s.dashes();
        assert_eq!(back.pattern(), &[4.0, 2.0]);
        assert_abs_diff_eq!(back.offset(), 1.0);

        s.reset_dashes().unwrap();
        assert!(s.dashes().is_solid());
    }

    #[test]
    fn negative_line_width_is_zero() {
        let mut s = surface();
        s.set_line_width(-3.0).unwrap();
        assert_abs_diff_eq!(s.line_width(), 0.0);
    }

    #[test]
    fn surface_sources_are_temporary() {
        let mut s = surface();
        let other = s.similar(Content::ColorAlpha, 10, 10).unwrap();
        s.set_brush(&Color::white().into()).unwrap();
        let before = s.source();

        s.set_path(&PathBuilder::new().rectangle(Rectangle::new(0.0, 0.0, 5.0, 5.0)).build())
            .unwrap();
        s.fill_with_surface(&other, point(2.0, 3.0)).unwrap();
        s.stroke_with_surface(&other, point(0.0, 0.0)).unwrap();
        s.paint_with_surface(&other, point(0.0, 0.0)).unwrap();
        s.paint_with_surface_alpha(&other, point(0.0, 0.0), 0.5).unwrap();
        assert_eq!(s.source(), before);

        let commands = s.engine_mut().take_commands();
        let fill = commands
            .iter()
            .position(|c| *c == Command::FillPreserve)
            .unwrap();
        assert_eq!(
            commands[fill - 1],
            Command::SetSource(RecordedSource::Surface {
                id: other.engine().id(),
                origin: point(2.0, 3.0)
            })
        );
        assert_eq!(commands[fill + 1], Command::Flush);
        assert_eq!(commands[fill + 2], Command::SetSource(before));
    }

    #[test]
    fn failed_substitution_leaves_source_alone() {
        let mut s = surface();
        let other = s.similar(Content::Color, 10, 10).unwrap();
        let before = s.source();
        s.finish().unwrap();

        assert_eq!(
            s.paint_with_surface(&other, point(0.0, 0.0)),
            Err(Status::SurfaceFinished.into())
        );
        assert_eq!(s.source(), before);
    }

    #[test]
    fn mask_surface_does_not_touch_the_source() {
        let mut s = surface();
        let other = s.similar(Content::Alpha, 10, 10).unwrap();
        let before = s.source();
        s.mask_surface(&other, point(1.0, 1.0)).unwrap();
        assert_eq!(s.source(), before);
        assert_eq!(
            s.engine().commands().last(),
            Some(&Command::Mask(RecordedSource::Surface {
                id: other.engine().id(),
                origin: point(1.0, 1.0)
            }))
        );
    }

    #[test]
    fn devices_are_shared_while_alive() {
        let s = surface();
        let a = s.device().unwrap();
        let b = s.device().unwrap();
        assert!(Arc::ptr_eq(&a, &b));

        let id = a.id();
        drop(a);
        drop(b);
        assert_ne!(s.device().unwrap().id(), id);
    }

    #[test]
    fn extents_are_normalized() {
        let mut s = surface();
        s.set_path(
            &PathBuilder::new()
                .move_to(point(50.0, 40.0))
                .line_to(point(10.0, 20.0))
                .line_to(point(50.0, 20.0))
                .close_path()
                .build(),
        )
        .unwrap();

        let fill = s.fill_extents().unwrap();
        assert_abs_diff_eq!(fill.x, 10.0);
        assert_abs_diff_eq!(fill.y, 20.0);
        assert_abs_diff_eq!(fill.width, 40.0);
        assert_abs_diff_eq!(fill.height, 20.0);
        assert!(s.in_fill(point(45.0, 25.0)).unwrap());
        assert!(!s.in_fill(point(15.0, 35.0)).unwrap());
    }

    #[test]
    fn clip_to_path() {
        let mut s = surface();
        s.set_path(&PathBuilder::new().rectangle(Rectangle::new(10.0, 10.0, 20.0, 20.0)).build())
            .unwrap();
        s.clip().unwrap();

        assert_eq!(
            s.clip_rectangles().unwrap(),
            vec![Rectangle::new(10.0, 10.0, 20.0, 20.0)]
        );
        assert_eq!(s.clip_extents().unwrap(), Rectangle::new(10.0, 10.0, 20.0, 20.0));
        assert!(s.in_clip(point(15.0, 15.0)).unwrap());

        s.set_path(
            &PathBuilder::new()
                .circle(crate::geometry::Circle::new(point(20.0, 20.0), 5.0))
                .build(),
        )
        .unwrap();
        s.clip().unwrap();
        assert_eq!(
            s.clip_rectangles().unwrap_err().status(),
            Some(Status::ClipNotRepresentable)
        );
    }

    #[test]
    fn set_path_data_rejects_unknown_tags() {
        let mut s = surface();
        let mut raw = PathBuilder::new()
            .move_to(point(1.0, 1.0))
            .line_to(point(2.0, 2.0))
            .build()
            .to_raw();
        raw[1].tag = 99;

        assert_eq!(s.set_path_data(&raw), Err(Error::InvalidPathData { index: 1 }));
        assert_eq!(
            s.engine().commands().last(),
            Some(&Command::MoveTo(point(1.0, 1.0)))
        );
    }

    #[test]
    fn user_and_device_space() {
        let mut s = surface();
        s.set_matrix(&Matrix2d::scale(2.0, 4.0)).unwrap();
        s.set_device_offset(vector(10.0, 0.0)).unwrap();

        let device = s.user_to_device(point(1.0, 1.0));
        assert_eq!(device, point(12.0, 4.0));
        let user = s.device_to_user(device).unwrap();
        assert_abs_diff_eq!(user.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(user.y, 1.0, epsilon = 1e-12);

        assert_eq!(s.user_to_device_distance(vector(1.0, 1.0)), vector(2.0, 4.0));
        assert_eq!(
            s.set_matrix(&Matrix2d::scale(0.0, 1.0)),
            Err(Status::InvalidMatrix.into())
        );
    }

    #[test]
    fn dirty_rectangles_must_fit() {
        let mut s = surface();
        s.mark_dirty_rect(Rectangle::new(1.4, 2.6, 3.0, 4.0)).unwrap();
        assert_eq!(
            s.engine().commands().last(),
            Some(&Command::MarkDirty(Some((1, 3, 3, 4))))
        );

        assert_eq!(
            s.mark_dirty_rect(Rectangle::new(1e12, 0.0, 1.0, 1.0)),
            Err(Error::IntegerOverflow(1e12))
        );
    }

    #[test]
    fn text_needs_engine_support() {
        let mut s = surface();
        assert!(!s.engine().features().text);
        assert_eq!(
            s.show_text("hello"),
            Err(Error::NotSupported(NotSupportedOp::Text))
        );
        assert_eq!(
            s.font_extents(),
            Err(Error::NotSupported(NotSupportedOp::Text))
        );
    }
}
