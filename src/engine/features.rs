// MIT/Apache2 License

/// Optional capabilities of an [`Engine`](super::Engine).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct EngineFeatures {
    /// The font and glyph methods are implemented. Otherwise they return `NotSupported(Text)`.
    pub text: bool,
    /// `create_device` hands out device handles. Otherwise it returns `NotSupported(Devices)`.
    pub devices: bool,
}
