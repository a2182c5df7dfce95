//! Braille glyph sweep
//!
//! Validates the generation parameters, applies identity and metrics, then
//! walks all 256 Braille patterns and draws one shape per raised dot.

use crate::core::errors::{BrailleError, Result};
use crate::font_source::backend::{FontBackend, FontIdentity};
use crate::font_source::metrics::FontMetrics;
use crate::geometry::{center_of, raised_dots, DotRadii, GlyphBox};
use crate::rendering::{render_dot, DotStyle};
use kurbo::BezPath;
use tracing::{debug, info};

/// First code point of the Braille Patterns block (the blank cell)
pub const BRAILLE_BASE: char = '\u{2800}';
/// Number of patterns, and therefore glyphs, in the block
pub const PATTERN_COUNT: usize = 256;

/// Code point of the Braille pattern with the given dot bitmask
pub fn braille_char(pattern: u8) -> char {
    char::from_u32(BRAILLE_BASE as u32 + u32::from(pattern)).unwrap_or(BRAILLE_BASE)
}

/// Production glyph name, e.g. `uni2800`
pub fn glyph_name(codepoint: char) -> String {
    format!("uni{:04X}", codepoint as u32)
}

/// User-facing generation parameters, before validation
#[derive(Debug, Clone, PartialEq)]
pub struct BrailleParams {
    pub em: f64,
    pub width: f64,
    pub ymax: f64,
    pub ymin: f64,
    /// One of `rectangle`, `circle`, `gapless`
    pub style: String,
    /// Dot size relative to the largest size that avoids overlap.
    /// Ignored for `gapless`.
    pub ratio: f64,
}

impl Default for BrailleParams {
    fn default() -> Self {
        Self {
            em: 1000.0,
            width: 500.0,
            ymax: 800.0,
            ymin: -200.0,
            style: DotStyle::default().to_string(),
            ratio: 0.8,
        }
    }
}

impl BrailleParams {
    /// Check every parameter and resolve the drawing layout.
    ///
    /// Runs before any backend call, so a rejected configuration never
    /// creates a font or a glyph.
    pub fn validate(&self) -> Result<BrailleLayout> {
        if !self.em.is_finite() || self.em <= 0.0 {
            return Err(BrailleError::InvalidGeometry(format!(
                "em must be positive, got {}",
                self.em
            )));
        }
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(BrailleError::InvalidGeometry(format!(
                "width must be positive, got {}",
                self.width
            )));
        }
        if !self.ymax.is_finite() || !self.ymin.is_finite() || self.ymax <= self.ymin {
            return Err(BrailleError::InvalidGeometry(format!(
                "ymax ({}) must be greater than ymin ({})",
                self.ymax, self.ymin
            )));
        }

        let requested_style: DotStyle = self.style.parse()?;
        if requested_style != DotStyle::Gapless && !(self.ratio > 0.0 && self.ratio <= 1.0) {
            return Err(BrailleError::InvalidRatio(self.ratio));
        }

        let (style, ratio) = requested_style.resolve(self.ratio);
        let glyph_box = GlyphBox::new(self.width, self.ymax, self.ymin);

        Ok(BrailleLayout {
            em: self.em,
            glyph_box,
            requested_style,
            style,
            ratio,
            radii: glyph_box.dot_radii(ratio),
        })
    }
}

/// Validated parameters with the effective style and dot radii
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrailleLayout {
    pub em: f64,
    pub glyph_box: GlyphBox,
    pub requested_style: DotStyle,
    /// Style used for drawing; gapless has become rectangle
    pub style: DotStyle,
    pub ratio: f64,
    pub radii: DotRadii,
}

impl BrailleLayout {
    pub fn metrics(&self) -> FontMetrics {
        FontMetrics::from_glyph_box(&self.glyph_box)
    }

    /// One path per raised dot of `pattern`, in dot order
    pub fn glyph_outline(&self, pattern: u8) -> Vec<BezPath> {
        raised_dots(pattern)
            .map(|dot| render_dot(self.style, center_of(dot, &self.glyph_box), self.radii))
            .collect()
    }
}

/// Generate the full Braille font on `backend`.
///
/// Any error, from validation or from the backend, aborts the build and the
/// partially populated backend is dropped.
pub fn build_font<B: FontBackend>(params: &BrailleParams, mut backend: B) -> Result<B::Font> {
    let layout = params.validate()?;
    info!(
        "Building Braille font: style={} (drawn as {}), ratio={}, width={}, ymax={}, ymin={}",
        layout.requested_style,
        layout.style,
        layout.ratio,
        layout.glyph_box.width,
        layout.glyph_box.ymax,
        layout.glyph_box.ymin
    );

    backend.set_identity(&FontIdentity::default())?;
    backend.set_units_per_em(layout.em)?;
    apply_metrics(&mut backend, &layout.metrics())?;

    let mut shape_count = 0;
    for pattern in 0..=u8::MAX {
        let codepoint = braille_char(pattern);
        let mut glyph = backend.create_glyph(codepoint, &glyph_name(codepoint))?;
        backend.set_advance_width(&mut glyph, layout.glyph_box.width)?;

        let outline = layout.glyph_outline(pattern);
        for path in &outline {
            backend.draw_path(&mut glyph, path)?;
        }
        shape_count += outline.len();

        backend.finish_glyph(glyph)?;
    }
    debug!("Drew {} dot shapes across {} glyphs", shape_count, PATTERN_COUNT);

    Ok(backend.finish()?)
}

/// Write every vertical metric field to the backend
pub fn apply_metrics<B: FontBackend>(backend: &mut B, metrics: &FontMetrics) -> Result<()> {
    for (field, value) in metrics.entries() {
        debug!("Setting {} = {}", field, value);
        backend.set_metric(field, value)?;
    }
    Ok(())
}
