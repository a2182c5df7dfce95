//! Braille Font
//!
//! Procedural generator for the 256 Unicode Braille patterns (U+2800-U+28FF).
//! Each raised dot is drawn as a vector shape on a fixed 2x4 grid, and the
//! font-wide vertical metrics are derived from the same cell bounds.
pub mod core;
pub mod data;
pub mod font_source;
pub mod geometry;
pub mod logging;
pub mod qa;
pub mod rendering;

pub use crate::core::errors::BrailleError;
pub use crate::font_source::{build_font, BrailleParams, FontBackend};
