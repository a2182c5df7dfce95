//! Font-wide vertical metrics
//!
//! Ascent and descent come straight from the glyph box, so line spacing
//! matches the cell every glyph is drawn in.

use crate::geometry::GlyphBox;
use std::fmt;

/// Vertical metric fields of the hhea and OS/2 tables.
///
/// The `*Add` fields are offsets some font tools apply on top of the
/// absolute values; this crate always writes them as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricField {
    HheaAscent,
    HheaDescent,
    HheaLineGap,
    HheaAscentAdd,
    HheaDescentAdd,
    Os2WinAscent,
    Os2WinDescent,
    Os2WinAscentAdd,
    Os2WinDescentAdd,
    Os2TypoAscent,
    Os2TypoDescent,
    Os2TypoLineGap,
    Os2TypoAscentAdd,
    Os2TypoDescentAdd,
}

impl MetricField {
    pub fn name(&self) -> &'static str {
        match self {
            MetricField::HheaAscent => "hhea_ascent",
            MetricField::HheaDescent => "hhea_descent",
            MetricField::HheaLineGap => "hhea_linegap",
            MetricField::HheaAscentAdd => "hhea_ascent_add",
            MetricField::HheaDescentAdd => "hhea_descent_add",
            MetricField::Os2WinAscent => "os2_winascent",
            MetricField::Os2WinDescent => "os2_windescent",
            MetricField::Os2WinAscentAdd => "os2_winascent_add",
            MetricField::Os2WinDescentAdd => "os2_windescent_add",
            MetricField::Os2TypoAscent => "os2_typoascent",
            MetricField::Os2TypoDescent => "os2_typodescent",
            MetricField::Os2TypoLineGap => "os2_typolinegap",
            MetricField::Os2TypoAscentAdd => "os2_typoascent_add",
            MetricField::Os2TypoDescentAdd => "os2_typodescent_add",
        }
    }

    pub fn is_add(&self) -> bool {
        matches!(
            self,
            MetricField::HheaAscentAdd
                | MetricField::HheaDescentAdd
                | MetricField::Os2WinAscentAdd
                | MetricField::Os2WinDescentAdd
                | MetricField::Os2TypoAscentAdd
                | MetricField::Os2TypoDescentAdd
        )
    }
}

impl fmt::Display for MetricField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ascent, descent and line gap shared by all metric families
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    pub ascent: f64,
    /// Signed: below the baseline is negative
    pub descent: f64,
    pub line_gap: f64,
}

impl FontMetrics {
    pub fn from_glyph_box(glyph_box: &GlyphBox) -> Self {
        Self {
            ascent: glyph_box.ymax,
            descent: glyph_box.ymin,
            line_gap: 0.0,
        }
    }

    /// Every metric field with the value to write, in application order.
    ///
    /// The OS/2 win descent is stored as a positive distance below the
    /// baseline, so it is the only descent with its sign flipped.
    pub fn entries(&self) -> [(MetricField, f64); 14] {
        [
            (MetricField::HheaAscent, self.ascent),
            (MetricField::HheaDescent, self.descent),
            (MetricField::HheaLineGap, self.line_gap),
            (MetricField::HheaAscentAdd, 0.0),
            (MetricField::HheaDescentAdd, 0.0),
            (MetricField::Os2WinAscent, self.ascent),
            (MetricField::Os2WinDescent, -self.descent),
            (MetricField::Os2WinAscentAdd, 0.0),
            (MetricField::Os2WinDescentAdd, 0.0),
            (MetricField::Os2TypoAscent, self.ascent),
            (MetricField::Os2TypoDescent, self.descent),
            (MetricField::Os2TypoLineGap, self.line_gap),
            (MetricField::Os2TypoAscentAdd, 0.0),
            (MetricField::Os2TypoDescentAdd, 0.0),
        ]
    }

    /// Value written for `field`, `None` if it has no entry
    pub fn get(&self, field: MetricField) -> Option<f64> {
        self.entries()
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, value)| *value)
    }
}
