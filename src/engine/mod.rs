// MIT/Apache2 License

use crate::{
    geometry::{Matrix2d, Point, Rectangle, Vector},
    text::{FontExtents, FontSlant, FontWeight, Glyph, TextCluster, TextExtents},
    Antialias, Brush, CompositingOperator, Dashes, Error, FillRule, LineCap, LineJoin, NotSupportedOp,
    Result,
};
use std::fmt;

/// Provides the `EngineFeatures` type.
mod features;
#[cfg(feature = "recording")]
mod recording;

pub use features::EngineFeatures;
#[cfg(feature = "recording")]
pub use recording::*;

/// What kind of content a surface holds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Content {
    Color,
    Alpha,
    ColorAlpha,
}

impl Default for Content {
    #[inline]
    fn default() -> Self {
        Content::ColorAlpha
    }
}

/// Pixel layout of an image surface.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Format {
    Argb32,
    Rgb24,
    A8,
    A1,
    Rgb16_565,
    Rgb30,
}

impl Format {
    /// The kind of content a surface with this pixel layout holds.
    #[inline]
    pub fn content(self) -> Content {
        match self {
            Format::Argb32 => Content::ColorAlpha,
            Format::Rgb24 | Format::Rgb16_565 | Format::Rgb30 => Content::Color,
            Format::A8 | Format::A1 => Content::Alpha,
        }
    }
}

/// A rendering engine: the thing that actually owns pixels and turns paths into them.
///
/// `Engine` is deliberately low level. It receives already-transformed points one primitive at a time and has
/// no notion of [`Path`](crate::Path)s, origins or the miter-limit policy; all of that lives in
/// [`Surface`](crate::Surface), which drives an `Engine`.
///
/// Every engine has a current path built from `move_to`, `line_to`, `curve_to`, `new_sub_path` and
/// `close_path`. The `*_preserve` drawing methods use that path without clearing it. Every engine also has a
/// current source, the pattern that filling, stroking and painting draws with. `source` and `set_source`
/// allow the source to be saved and restored by value, which is what the surface uses to temporarily draw
/// with another surface's contents.
///
/// Engines may not support everything. The text methods default to returning `NotSupported(Text)` and
/// `create_device` defaults to returning `NotSupported(Devices)`; the [`EngineFeatures`] returned by
/// `features()` should tell the truth about which of these are overridden.
pub trait Engine: Sized {
    /// A saved paint source.
    type Source: Clone + fmt::Debug;
    /// The device handle shared by every surface created on the same engine connection.
    type Device;

    /* Setup */

    /// Get the optional features this engine implements.
    fn features(&self) -> EngineFeatures;

    /// Create a new, empty engine of the same kind as this one.
    fn create_similar(&self, content: Content, width: i32, height: i32) -> Result<Self>;
    /// Create the device handle for this engine.
    #[inline]
    fn create_device(&self) -> Result<Self::Device> {
        Err(Error::NotSupported(NotSupportedOp::Devices))
    }

    fn content(&self) -> Content;
    /// Complete any pending drawing.
    fn flush(&mut self) -> Result;
    /// Finish the surface. Drawing to a finished engine fails with `SurfaceFinished`.
    fn finish(&mut self) -> Result;
    /// Tell the engine its pixels were changed behind its back.
    fn mark_dirty(&mut self) -> Result;
    fn mark_dirty_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result;
    fn set_device_offset(&mut self, offset: Vector) -> Result;
    fn device_offset(&self) -> Vector;

    /* Graphics State */

    /// Push a copy of the graphics state.
    fn save(&mut self) -> Result;
    /// Pop the graphics state pushed by the last `save`.
    fn restore(&mut self) -> Result;

    fn source(&self) -> Self::Source;
    fn set_source(&mut self, source: &Self::Source) -> Result;
    fn set_brush(&mut self, brush: &Brush) -> Result;
    /// Use the contents of `surface`, with its top left corner placed at `origin`, as the source.
    fn set_source_surface(&mut self, surface: &Self, origin: Point) -> Result;

    fn set_antialias(&mut self, antialias: Antialias) -> Result;
    fn antialias(&self) -> Antialias;
    fn set_dash(&mut self, dashes: &Dashes) -> Result;
    fn dash(&self) -> Dashes;
    fn set_fill_rule(&mut self, fill_rule: FillRule) -> Result;
    fn fill_rule(&self) -> FillRule;
    fn set_line_cap(&mut self, line_cap: LineCap) -> Result;
    fn line_cap(&self) -> LineCap;
    /// Set the line join. This is never called with `LineJoin::MiterOrBevel`; see [`LineJoin::native`].
    fn set_line_join(&mut self, line_join: LineJoin) -> Result;
    fn line_join(&self) -> LineJoin;
    fn set_line_width(&mut self, width: f64) -> Result;
    fn line_width(&self) -> f64;
    fn set_miter_limit(&mut self, limit: f64) -> Result;
    fn miter_limit(&self) -> f64;
    fn set_operator(&mut self, op: CompositingOperator) -> Result;
    fn operator(&self) -> CompositingOperator;
    fn set_tolerance(&mut self, tolerance: f64) -> Result;
    fn tolerance(&self) -> f64;
    fn set_matrix(&mut self, matrix: &Matrix2d) -> Result;
    fn matrix(&self) -> Matrix2d;

    /* Paths */

    /// Clear the current path.
    fn new_path(&mut self) -> Result;
    fn move_to(&mut self, point: Point) -> Result;
    fn line_to(&mut self, point: Point) -> Result;
    fn curve_to(&mut self, control1: Point, control2: Point, end: Point) -> Result;
    /// Begin a new sub-path. The engine no longer has a current point after this.
    fn new_sub_path(&mut self) -> Result;
    fn close_path(&mut self) -> Result;

    /* Drawing */

    /// Intersect the clip with the current path, keeping the path.
    fn clip_preserve(&mut self) -> Result;
    fn reset_clip(&mut self) -> Result;
    /// The corners of the bounding box of the clip region.
    fn clip_extents(&self) -> Result<(Point, Point)>;
    fn in_clip(&self, point: Point) -> Result<bool>;
    /// The clip as a list of rectangles. Fails with `ClipNotRepresentable` if it can't be expressed that way.
    fn clip_rectangles(&self) -> Result<Vec<Rectangle>>;

    fn fill_preserve(&mut self) -> Result;
    fn fill_extents(&self) -> Result<(Point, Point)>;
    fn in_fill(&self, point: Point) -> Result<bool>;

    fn stroke_preserve(&mut self) -> Result;
    fn stroke_extents(&self) -> Result<(Point, Point)>;
    fn in_stroke(&self, point: Point) -> Result<bool>;

    /// Paint the source everywhere inside of the clip.
    fn paint(&mut self) -> Result;
    fn paint_with_alpha(&mut self, alpha: f64) -> Result;
    /// Paint the current source, using the alpha channel of `mask` as a mask.
    fn mask(&mut self, mask: &Self::Source) -> Result;
    /// Paint the current source, using the alpha channel of `surface` placed at `origin` as a mask.
    fn mask_surface(&mut self, surface: &Self, origin: Point) -> Result;

    /* Text */

    #[inline]
    fn select_font_face(&mut self, _family: &str, _slant: FontSlant, _weight: FontWeight) -> Result {
        Err(Error::NotSupported(NotSupportedOp::Text))
    }
    #[inline]
    fn set_font_size(&mut self, _size: f64) -> Result {
        Err(Error::NotSupported(NotSupportedOp::Text))
    }
    #[inline]
    fn set_font_matrix(&mut self, _matrix: &Matrix2d) -> Result {
        Err(Error::NotSupported(NotSupportedOp::Text))
    }
    #[inline]
    fn font_matrix(&self) -> Result<Matrix2d> {
        Err(Error::NotSupported(NotSupportedOp::Text))
    }
    #[inline]
    fn show_text(&mut self, _text: &str) -> Result {
        Err(Error::NotSupported(NotSupportedOp::Text))
    }
    #[inline]
    fn show_glyphs(&mut self, _glyphs: &[Glyph]) -> Result {
        Err(Error::NotSupported(NotSupportedOp::Text))
    }
    /// Show `text` using `glyphs`, with `clusters` mapping runs of bytes onto runs of glyphs. If `backward` is
    /// set, the clusters map glyphs in reverse order.
    #[inline]
    fn show_text_glyphs(
        &mut self,
        _text: &str,
        _glyphs: &[Glyph],
        _clusters: &[TextCluster],
        _backward: bool,
    ) -> Result {
        Err(Error::NotSupported(NotSupportedOp::Text))
    }
    #[inline]
    fn font_extents(&self) -> Result<FontExtents> {
        Err(Error::NotSupported(NotSupportedOp::Text))
    }
    #[inline]
    fn text_extents(&self, _text: &str) -> Result<TextExtents> {
        Err(Error::NotSupported(NotSupportedOp::Text))
    }
    #[inline]
    fn glyph_extents(&self, _glyphs: &[Glyph]) -> Result<TextExtents> {
        Err(Error::NotSupported(NotSupportedOp::Text))
    }
}
