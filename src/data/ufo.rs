//! UFO font backend
//!
//! Builds the generated font as an in-memory norad `Font` that can be saved
//! as a UFO 3 source and compiled by any UFO toolchain.

use crate::data::conversions::bezpath_to_contour;
use crate::font_source::backend::{BackendError, FontBackend, FontIdentity};
use crate::font_source::metrics::MetricField;
use anyhow::Result;
use kurbo::BezPath;
use norad::fontinfo::NonNegativeIntegerOrFloat;
use norad::{Font, Glyph, Name};
use std::path::Path;
use tracing::debug;

/// Font backend writing into a norad UFO font
pub struct UfoBackend {
    font: Font,
}

impl Default for UfoBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl UfoBackend {
    pub fn new() -> Self {
        Self { font: Font::new() }
    }

    pub fn font(&self) -> &Font {
        &self.font
    }
}

impl FontBackend for UfoBackend {
    type Glyph = Glyph;
    type Font = Font;

    fn set_identity(&mut self, identity: &FontIdentity) -> Result<(), BackendError> {
        let (major, minor) = parse_version(&identity.version)?;
        let info = &mut self.font.font_info;

        info.family_name = Some(identity.family_name.clone());
        info.style_name = Some("Regular".to_string());
        info.postscript_font_name = Some(identity.font_name.clone());
        info.postscript_full_name = Some(identity.full_name.clone());
        info.copyright = (!identity.copyright.is_empty()).then(|| identity.copyright.clone());
        info.version_major = Some(major);
        info.version_minor = Some(minor);

        // Unicode mapping lives on each glyph's codepoints in a UFO
        debug!("Encoding '{}' is carried by glyph codepoints", identity.encoding);
        Ok(())
    }

    fn set_units_per_em(&mut self, em: f64) -> Result<(), BackendError> {
        let units = NonNegativeIntegerOrFloat::new(em).ok_or_else(|| {
            BackendError::InvalidIdentity(format!("units per em must be non-negative, got {em}"))
        })?;
        self.font.font_info.units_per_em = Some(units);
        Ok(())
    }

    fn set_metric(&mut self, field: MetricField, value: f64) -> Result<(), BackendError> {
        if field.is_add() {
            if value != 0.0 {
                return Err(BackendError::UnsupportedMetric { field, value });
            }
            return Ok(());
        }

        let info = &mut self.font.font_info;
        match field {
            MetricField::HheaAscent => {
                info.open_type_hhea_ascender = Some(to_integer(field, value)?)
            }
            MetricField::HheaDescent => {
                info.open_type_hhea_descender = Some(to_integer(field, value)?)
            }
            MetricField::HheaLineGap => {
                info.open_type_hhea_line_gap = Some(to_integer(field, value)?)
            }
            MetricField::Os2WinAscent => {
                info.open_type_os2_win_ascent = Some(to_non_negative(field, value)?)
            }
            MetricField::Os2WinDescent => {
                info.open_type_os2_win_descent = Some(to_non_negative(field, value)?)
            }
            MetricField::Os2TypoAscent => {
                info.open_type_os2_typo_ascender = Some(to_integer(field, value)?);
                info.ascender = Some(value);
            }
            MetricField::Os2TypoDescent => {
                info.open_type_os2_typo_descender = Some(to_integer(field, value)?);
                info.descender = Some(value);
            }
            MetricField::Os2TypoLineGap => {
                info.open_type_os2_typo_line_gap = Some(to_integer(field, value)?)
            }
            MetricField::HheaAscentAdd
            | MetricField::HheaDescentAdd
            | MetricField::Os2WinAscentAdd
            | MetricField::Os2WinDescentAdd
            | MetricField::Os2TypoAscentAdd
            | MetricField::Os2TypoDescentAdd => {}
        }
        Ok(())
    }

    fn create_glyph(&mut self, codepoint: char, name: &str) -> Result<Glyph, BackendError> {
        if name.parse::<Name>().is_err() {
            return Err(BackendError::InvalidGlyphName(name.to_string()));
        }
        let mut glyph = Glyph::new(name);
        glyph.codepoints.insert(codepoint);
        Ok(glyph)
    }

    fn set_advance_width(&mut self, glyph: &mut Glyph, width: f64) -> Result<(), BackendError> {
        glyph.width = width;
        Ok(())
    }

    fn draw_path(&mut self, glyph: &mut Glyph, path: &BezPath) -> Result<(), BackendError> {
        glyph.contours.push(bezpath_to_contour(path)?);
        Ok(())
    }

    fn finish_glyph(&mut self, glyph: Glyph) -> Result<(), BackendError> {
        self.font.default_layer_mut().insert_glyph(glyph);
        Ok(())
    }

    fn finish(self) -> Result<Font, BackendError> {
        Ok(self.font)
    }
}

/// Save a generated font as a UFO directory, replacing any existing one
pub fn save_ufo(font: &Font, path: impl AsRef<Path>) -> Result<(), BackendError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| BackendError::OutputDirectory {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    font.save(path).map_err(|source| BackendError::Save {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Saved UFO to {:?}", path);
    Ok(())
}

/// Load a UFO font file from disk
pub fn load_ufo_from_path(path: impl AsRef<Path>) -> Result<Font> {
    let font = Font::load(path)?;
    Ok(font)
}

/// Split `major.minor[.patch]` into the UFO version fields
fn parse_version(version: &str) -> Result<(i32, u32), BackendError> {
    let invalid = || BackendError::InvalidIdentity(format!("unparsable version '{version}'"));
    let mut parts = version.trim().split('.');
    let major = parts
        .next()
        .and_then(|s| s.parse::<i32>().ok())
        .ok_or_else(invalid)?;
    let minor = match parts.next() {
        Some(s) => s.parse::<u32>().map_err(|_| invalid())?,
        None => 0,
    };
    Ok((major, minor))
}

fn to_integer(field: MetricField, value: f64) -> Result<i32, BackendError> {
    let rounded = value.round();
    if !rounded.is_finite() || rounded < f64::from(i32::MIN) || rounded > f64::from(i32::MAX) {
        return Err(BackendError::MetricOutOfRange { field, value });
    }
    Ok(rounded as i32)
}

fn to_non_negative(field: MetricField, value: f64) -> Result<u32, BackendError> {
    let rounded = value.round();
    if !rounded.is_finite() || rounded < 0.0 || rounded > f64::from(u32::MAX) {
        return Err(BackendError::MetricOutOfRange { field, value });
    }
    Ok(rounded as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_version() {
        assert_eq!(parse_version("1.0.0").unwrap(), (1, 0));
        assert_eq!(parse_version("2.13").unwrap(), (2, 13));
        assert_eq!(parse_version("3").unwrap(), (3, 0));
        assert!(parse_version("v1").is_err());
        assert!(parse_version("1.x").is_err());
    }

    #[test]
    fn test_identity_lands_in_font_info() {
        let mut backend = UfoBackend::new();
        backend.set_identity(&FontIdentity::default()).unwrap();
        backend.set_units_per_em(1000.0).unwrap();

        let info = &backend.font().font_info;
        assert_eq!(info.family_name.as_deref(), Some("Braille Font"));
        assert_eq!(info.postscript_font_name.as_deref(), Some("BrailleFont-Regular"));
        assert_eq!(info.postscript_full_name.as_deref(), Some("Braille Font Regular"));
        assert_eq!(info.copyright, None);
        assert_eq!(info.version_major, Some(1));
        assert_eq!(info.version_minor, Some(0));
        assert!(info.units_per_em.is_some());
    }

    #[test]
    fn test_metric_fields() {
        let mut backend = UfoBackend::new();
        backend.set_metric(MetricField::HheaDescent, -200.0).unwrap();
        backend.set_metric(MetricField::Os2WinDescent, 200.0).unwrap();
        backend.set_metric(MetricField::Os2TypoAscent, 800.4).unwrap();
        backend.set_metric(MetricField::Os2TypoAscentAdd, 0.0).unwrap();

        let info = &backend.font().font_info;
        assert_eq!(info.open_type_hhea_descender, Some(-200));
        assert_eq!(info.open_type_os2_win_descent, Some(200));
        assert_eq!(info.open_type_os2_typo_ascender, Some(800));
        assert_eq!(info.ascender, Some(800.4));
    }

    #[test]
    fn test_metric_errors() {
        let mut backend = UfoBackend::new();
        assert!(matches!(
            backend.set_metric(MetricField::Os2WinDescent, -10.0),
            Err(BackendError::MetricOutOfRange { .. })
        ));
        assert!(matches!(
            backend.set_metric(MetricField::HheaAscent, f64::NAN),
            Err(BackendError::MetricOutOfRange { .. })
        ));
        assert!(matches!(
            backend.set_metric(MetricField::HheaAscentAdd, 5.0),
            Err(BackendError::UnsupportedMetric { .. })
        ));
    }

    #[test]
    fn test_glyph_lifecycle() {
        let mut backend = UfoBackend::new();
        let mut glyph = backend.create_glyph('\u{2801}', "uni2801").unwrap();
        backend.set_advance_width(&mut glyph, 500.0).unwrap();
        backend
            .draw_path(
                &mut glyph,
                &crate::rendering::rectangle_path(kurbo::Point::new(125.0, 675.0), 100.0, 100.0),
            )
            .unwrap();
        backend.finish_glyph(glyph).unwrap();

        let font = backend.finish().unwrap();
        let glyph = font.default_layer().get_glyph("uni2801").unwrap();
        assert_eq!(glyph.width, 500.0);
        assert_eq!(glyph.contours.len(), 1);
        assert!(glyph.codepoints.iter().any(|c| c == '\u{2801}'));
    }

    #[test]
    fn test_invalid_glyph_name() {
        let mut backend = UfoBackend::new();
        assert!(matches!(
            backend.create_glyph('\u{2800}', ""),
            Err(BackendError::InvalidGlyphName(_))
        ));
    }
}
