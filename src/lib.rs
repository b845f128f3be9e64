// MIT/Apache2 License

//! Retained-mode 2D drawing surfaces.
//!
//! A [`Surface`] wraps a rendering [`Engine`] and feeds it declarative [`Path`]s. Paths may carry their own
//! coordinate-space changes (`ChangeOrigin` and `ChangeMatrix` segments) which are applied point by point as
//! the path is emitted, and arcs are turned into cubic beziers before they reach the engine.
//!
//! With the `recording` feature (on by default), [`RecordingEngine`] provides an engine that keeps every
//! command it receives, which is useful for tests and for inspecting what a path turns into.

#![forbid(unsafe_code)]

mod error;

pub mod color;
pub mod compositing;
pub mod engine;
pub mod fill;
pub mod geometry;
pub mod gradient;
pub mod intensity;
pub mod path;
pub mod stroke;
pub mod surface;
pub mod text;

#[cfg_attr(not(feature = "recording"), allow(dead_code))]
pub(crate) mod path_utils;
pub(crate) mod util;

pub use color::*;
pub use compositing::*;
pub use engine::*;
pub use error::*;
pub use fill::*;
pub use gradient::*;
pub use intensity::*;
pub use path::*;
pub use stroke::*;
pub use surface::*;
