// MIT/Apache2 License

use crate::intensity::Intensity;

/// A four-element color with straight (non-premultiplied) alpha.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Color {
    r: Intensity,
    g: Intensity,
    b: Intensity,
    a: Intensity,
}

impl Color {
    /// Creates a new color. This function returns `None` if any of the elements are NaN or outside of `[0, 1]`.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Option<Self> {
        Some(Self {
            r: Intensity::new(r)?,
            g: Intensity::new(g)?,
            b: Intensity::new(b)?,
            a: Intensity::new(a)?,
        })
    }

    /// Creates an opaque color.
    #[inline]
    pub fn rgb(r: f64, g: f64, b: f64) -> Option<Self> {
        Self::new(r, g, b, 1.0)
    }

    /// Creates a color, saturating every element into `[0, 1]`.
    #[inline]
    pub fn saturating(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: Intensity::saturating(r),
            g: Intensity::saturating(g),
            b: Intensity::saturating(b),
            a: Intensity::saturating(a),
        }
    }

    /// Opaque black, the source every surface starts with.
    #[inline]
    pub fn black() -> Self {
        Self::saturating(0.0, 0.0, 0.0, 1.0)
    }

    /// Opaque white.
    #[inline]
    pub fn white() -> Self {
        Self::saturating(1.0, 1.0, 1.0, 1.0)
    }

    /// Gets the red element.
    #[inline]
    pub fn red(self) -> f64 {
        self.r.into_inner()
    }

    /// Gets the green element.
    #[inline]
    pub fn green(self) -> f64 {
        self.g.into_inner()
    }

    /// Gets the blue element.
    #[inline]
    pub fn blue(self) -> f64 {
        self.b.into_inner()
    }

    /// Gets the alpha element.
    #[inline]
    pub fn alpha(self) -> f64 {
        self.a.into_inner()
    }

    /// Clamp to u8's.
    #[inline]
    pub fn clamp_u8(self) -> (u8, u8, u8, u8) {
        (
            self.r.clamp_u8(),
            self.g.clamp_u8(),
            self.b.clamp_u8(),
            self.a.clamp_u8(),
        )
    }

    /// Clamp to u16's.
    #[inline]
    pub fn clamp_u16(self) -> (u16, u16, u16, u16) {
        (
            self.r.clamp_u16(),
            self.g.clamp_u16(),
            self.b.clamp_u16(),
            self.a.clamp_u16(),
        )
    }
}
