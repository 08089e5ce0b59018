//! Crate-level error types.

use std::fmt;

/// Errors produced by the orbicam crate.
///
/// Interaction operations (rotate, pan, zoom, fit) never fail; only
/// construction, spherical conversion and options I/O return these.
#[derive(Debug)]
pub enum OrbitError {
    /// Camera offset from its target has zero length (camera placed exactly
    /// on its look-at point), so no orbit angles exist.
    ZeroOffset,
    /// Camera offset is parallel to the up axis; the polar angle would be
    /// exactly 0 or π and the look-at basis is undefined.
    OffsetOnPoleAxis,
    /// A coordinate contained NaN or infinity.
    NonFinite,
    /// Polar angle outside the open interval (0, π).
    PolarOutOfRange(f64),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML/JSON options parsing or serialization failure.
    OptionsParse(String),
}

impl fmt::Display for OrbitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroOffset => {
                write!(f, "camera position coincides with its target")
            }
            Self::OffsetOnPoleAxis => {
                write!(f, "camera offset is parallel to the up axis")
            }
            Self::NonFinite => write!(f, "non-finite coordinate"),
            Self::PolarOutOfRange(polar) => {
                write!(f, "polar angle {polar} outside (0, π)")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for OrbitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for OrbitError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
