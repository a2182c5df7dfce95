//! Error types for font generation

use crate::font_source::backend::BackendError;
use thiserror::Error;

/// Errors that stop a Braille font build.
///
/// Every variant is raised synchronously where it is detected and aborts the
/// build; no partially populated font is ever returned.
#[derive(Debug, Error)]
pub enum BrailleError {
    /// Style token outside rectangle, circle and gapless
    #[error("Unsupported dot style '{0}'. Supported styles: rectangle, circle, gapless")]
    UnsupportedStyle(String),

    /// Glyph box or em size that cannot describe a Braille cell
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Dot ratio outside (0, 1] for a style that honours it
    #[error("Invalid dot ratio {0}. The ratio must lie in (0, 1]")]
    InvalidRatio(f64),

    /// Failure reported by the font backend
    #[error(transparent)]
    Backend(#[from] BackendError),
}

pub type Result<T> = std::result::Result<T, BrailleError>;
