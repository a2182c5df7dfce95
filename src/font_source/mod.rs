//! Font source generation
//!
//! Everything that produces the font itself: the backend seam, font-wide
//! metrics, and the sweep over the Braille block.

pub mod backend;
pub mod builder;
pub mod metrics;

#[cfg(test)]
mod tests;

// Explicit re-exports for public API
pub use backend::{BackendError, FontBackend, FontIdentity};
pub use builder::{
    apply_metrics, braille_char, build_font, glyph_name, BrailleLayout, BrailleParams, BRAILLE_BASE,
    PATTERN_COUNT,
};
pub use metrics::{FontMetrics, MetricField};
