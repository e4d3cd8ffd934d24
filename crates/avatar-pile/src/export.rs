//! Export of laid-out avatar rows.
//!
//! The layout engine only describes what to draw. An [`Exporter`] turns that
//! description into a concrete output format, performing the shape
//! subtraction the description asks for.
//!
//! # Available Backends
//!
//! - [`svg`]: SVG output via [`svg::SvgBuilder`] and [`svg::Svg`]

/// SVG export backend.
pub mod svg;

use avatar_pile_core::layout::AvatarRow;

/// Abstraction for avatar row export backends.
pub trait Exporter {
    /// Exports a row to the backend's output format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the row cannot be converted to the
    /// target format, or [`Error::Io`] if writing the output fails.
    fn export_row(&mut self, row: &AvatarRow) -> Result<(), Error>;
}

/// Errors that can occur during export.
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
    /// An I/O error encountered while writing output.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}
