// MIT/Apache2 License

/// How drawn content is combined with what is already on the surface.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CompositingOperator {
    Clear,
    Source,
    Over,
    In,
    Out,
    Atop,
    Dest,
    DestOver,
    DestIn,
    DestOut,
    DestAtop,
    Xor,
    Add,
    Saturate,
    Multiply,
    Screen,
    Overlay,
    Darken,
    Lighten,
    ColorDodge,
    ColorBurn,
    HardLight,
    SoftLight,
    Difference,
    Exclusion,
    HslHue,
    HslSaturation,
    HslColor,
    HslLuminosity,
}

impl Default for CompositingOperator {
    #[inline]
    fn default() -> Self {
        CompositingOperator::Over
    }
}

/// The antialiasing mode used when rasterizing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Antialias {
    Default,
    None,
    Gray,
    Subpixel,
    Fast,
    Good,
    Best,
}

impl Default for Antialias {
    #[inline]
    fn default() -> Self {
        Antialias::Default
    }
}
