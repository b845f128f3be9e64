// MIT/Apache2 License

//! Font and glyph types. These are handed to the engine as-is; shaping and rasterization happen there.

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FontSlant {
    Normal,
    Italic,
    Oblique,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FontWeight {
    Normal,
    Bold,
}

/// A glyph index and the position it is drawn at.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Glyph {
    pub index: u64,
    pub x: f64,
    pub y: f64,
}

/// Maps a run of UTF-8 bytes onto a run of glyphs.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct TextCluster {
    pub num_bytes: usize,
    pub num_glyphs: usize,
}

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct FontExtents {
    pub ascent: f64,
    pub descent: f64,
    pub height: f64,
    pub max_x_advance: f64,
    pub max_y_advance: f64,
}

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct TextExtents {
    pub x_bearing: f64,
    pub y_bearing: f64,
    pub width: f64,
    pub height: f64,
    pub x_advance: f64,
    pub y_advance: f64,
}
