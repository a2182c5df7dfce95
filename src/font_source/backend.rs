//! Font backend interface
//!
//! The generator never touches a font format directly. It computes identity,
//! metrics and outlines, and hands them to a [`FontBackend`], which owns the
//! font object and decides how to store and eventually serialize it.

use crate::font_source::metrics::MetricField;
use kurbo::BezPath;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a font backend
#[derive(Debug, Error)]
pub enum BackendError {
    /// Path that cannot be stored as one contour: empty, several subpaths,
    /// or (in release builds only, as kurbo rejects it in debug) no leading move
    #[error("Malformed path: {0}")]
    MalformedPath(String),

    #[error("Metric {field} cannot hold value {value}")]
    MetricOutOfRange { field: MetricField, value: f64 },

    #[error("Metric {field} is not supported with non-zero value {value}")]
    UnsupportedMetric { field: MetricField, value: f64 },

    #[error("Invalid font identity: {0}")]
    InvalidIdentity(String),

    #[error("Invalid glyph name '{0}'")]
    InvalidGlyphName(String),

    #[error("Failed to create output directory {path:?}")]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to save font to {path:?}")]
    Save {
        path: PathBuf,
        #[source]
        source: norad::error::FontWriteError,
    },
}

/// Naming and versioning strings of a font
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontIdentity {
    pub font_name: String,
    pub family_name: String,
    pub full_name: String,
    pub encoding: String,
    pub copyright: String,
    pub version: String,
}

impl Default for FontIdentity {
    fn default() -> Self {
        Self {
            font_name: "BrailleFont-Regular".to_string(),
            family_name: "Braille Font".to_string(),
            full_name: "Braille Font Regular".to_string(),
            encoding: "UnicodeFull".to_string(),
            copyright: String::new(),
            version: "1.0.0".to_string(),
        }
    }
}

/// Receiver of everything the generator produces.
///
/// Glyphs follow a create, populate, finish lifecycle: `create_glyph` hands
/// out a glyph handle, the generator sets its advance and draws paths into
/// it, and `finish_glyph` commits it to the font.
pub trait FontBackend {
    /// Handle to a glyph under construction
    type Glyph;
    /// The completed font returned by [`FontBackend::finish`]
    type Font;

    fn set_identity(&mut self, identity: &FontIdentity) -> Result<(), BackendError>;

    fn set_units_per_em(&mut self, em: f64) -> Result<(), BackendError>;

    fn set_metric(&mut self, field: MetricField, value: f64) -> Result<(), BackendError>;

    fn create_glyph(&mut self, codepoint: char, name: &str) -> Result<Self::Glyph, BackendError>;

    fn set_advance_width(&mut self, glyph: &mut Self::Glyph, width: f64)
        -> Result<(), BackendError>;

    /// Append one closed or open path to the glyph outline
    fn draw_path(&mut self, glyph: &mut Self::Glyph, path: &BezPath) -> Result<(), BackendError>;

    fn finish_glyph(&mut self, glyph: Self::Glyph) -> Result<(), BackendError>;

    fn finish(self) -> Result<Self::Font, BackendError>
    where
        Self: Sized;
}
