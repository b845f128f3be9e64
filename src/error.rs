// MIT/Apache2 License

use std::fmt;

/// Sum error type for easel operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A path segment could not be understood. `index` is the position of the offending segment.
    InvalidPathData { index: usize },
    /// A relative path segment was issued while there was no current point.
    NoCurrentPoint { index: usize },
    /// The rendering engine reported a non-success status.
    Status(Status),
    /// Attempted to run an operation the engine does not support.
    NotSupported(NotSupportedOp),
    /// A floating point value could not be represented as an integer.
    IntegerOverflow(f64),
}

/// Status codes a rendering engine may report.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Status {
    InvalidRestore,
    NoCurrentPoint,
    InvalidMatrix,
    InvalidPathData,
    InvalidDash,
    InvalidSize,
    SurfaceFinished,
    ClipNotRepresentable,
}

/// An operation that is not supported.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NotSupportedOp {
    Text,
    Devices,
}

impl Error {
    /// The engine status code equivalent to this error, if there is one.
    #[inline]
    pub fn status(&self) -> Option<Status> {
        match self {
            Self::InvalidPathData { .. } => Some(Status::InvalidPathData),
            Self::NoCurrentPoint { .. } => Some(Status::NoCurrentPoint),
            Self::Status(status) => Some(*status),
            Self::NotSupported(_) | Self::IntegerOverflow(_) => None,
        }
    }
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPathData { index } => write!(f, "Invalid path data at segment #{}", index),
            Self::NoCurrentPoint { index } => write!(
                f,
                "Relative segment #{} was issued without a current point",
                index
            ),
            Self::Status(status) => write!(f, "Rendering engine reported status {:?}", status),
            Self::NotSupported(nsop) => {
                write!(f, "Engine does not support feature \"{:?}\"", nsop)
            }
            Self::IntegerOverflow(value) => {
                write!(f, "{} cannot be represented as a 32-bit integer", value)
            }
        }
    }
}

impl From<Status> for Error {
    #[inline]
    fn from(status: Status) -> Self {
        Self::Status(status)
    }
}

/// Convenience result type.
pub type Result<T = ()> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_errors_carry_engine_status() {
        assert_eq!(
            Error::InvalidPathData { index: 3 }.status(),
            Some(Status::InvalidPathData)
        );
        assert_eq!(
            Error::NoCurrentPoint { index: 0 }.status(),
            Some(Status::NoCurrentPoint)
        );
        assert_eq!(Error::NotSupported(NotSupportedOp::Text).status(), None);
        assert_eq!(
            Error::from(Status::InvalidDash).status(),
            Some(Status::InvalidDash)
        );
    }

    #[test]
    fn display_names_the_segment() {
        let msg = Error::NoCurrentPoint { index: 7 }.to_string();
        assert!(msg.contains("#7"));
    }
}
