//! Dot shape rendering
//!
//! Turns a dot center and radii into a closed path description. The renderer
//! only builds `BezPath` values; handing them to a font is the backend's job.

use crate::core::errors::BrailleError;
use crate::geometry::DotRadii;
use kurbo::{BezPath, Point, Vec2};
use std::fmt;
use std::str::FromStr;

/// Control point distance for a quarter-circle cubic, as a fraction of the radius
pub const CIRCLE_KAPPA: f64 = 4.0 / 3.0 * (std::f64::consts::SQRT_2 - 1.0);

/// How a raised dot is drawn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DotStyle {
    Rectangle,
    #[default]
    Circle,
    /// Rectangles grown until neighbouring dots touch
    Gapless,
}

impl DotStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            DotStyle::Rectangle => "rectangle",
            DotStyle::Circle => "circle",
            DotStyle::Gapless => "gapless",
        }
    }

    pub fn all_names() -> [&'static str; 3] {
        ["rectangle", "circle", "gapless"]
    }

    /// Style and ratio actually used for drawing.
    ///
    /// Gapless is a rectangle at full size, so it resolves to
    /// `(Rectangle, 1.0)` whatever ratio was requested.
    pub fn resolve(self, ratio: f64) -> (DotStyle, f64) {
        match self {
            DotStyle::Gapless => (DotStyle::Rectangle, 1.0),
            style => (style, ratio),
        }
    }
}

impl FromStr for DotStyle {
    type Err = BrailleError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "rectangle" => Ok(DotStyle::Rectangle),
            "circle" => Ok(DotStyle::Circle),
            "gapless" => Ok(DotStyle::Gapless),
            other => Err(BrailleError::UnsupportedStyle(other.to_string())),
        }
    }
}

impl fmt::Display for DotStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render one dot as a closed path.
///
/// `Gapless` draws the same outline as `Rectangle`; callers are expected to
/// have resolved its radii to full size beforehand (see [`DotStyle::resolve`]).
pub fn render_dot(style: DotStyle, center: Point, radii: DotRadii) -> BezPath {
    match style {
        DotStyle::Rectangle | DotStyle::Gapless => rectangle_path(center, radii.rx, radii.ry),
        DotStyle::Circle => circle_path(center, radii.rx.min(radii.ry)),
    }
}

/// Rectangle traversed clockwise from the top-left corner, returning to it
/// before closing
pub fn rectangle_path(center: Point, rx: f64, ry: f64) -> BezPath {
    let (cx, cy) = (center.x, center.y);

    let mut path = BezPath::new();
    path.move_to((cx - rx, cy + ry));
    path.line_to((cx + rx, cy + ry));
    path.line_to((cx + rx, cy - ry));
    path.line_to((cx - rx, cy - ry));
    path.line_to((cx - rx, cy + ry));
    path.close_path();
    path
}

/// Circle made of four cubic arcs: top, right, bottom, left, back to top
pub fn circle_path(center: Point, r: f64) -> BezPath {
    let offset = r * CIRCLE_KAPPA;

    let top = center + Vec2::new(0.0, r);
    let right = center + Vec2::new(r, 0.0);
    let bottom = center - Vec2::new(0.0, r);
    let left = center - Vec2::new(r, 0.0);

    let horizontal = Vec2::new(offset, 0.0);
    let vertical = Vec2::new(0.0, offset);

    let mut path = BezPath::new();
    path.move_to(top);
    path.curve_to(top + horizontal, right + vertical, right);
    path.curve_to(right - vertical, bottom + horizontal, bottom);
    path.curve_to(bottom - horizontal, left - vertical, left);
    path.curve_to(left + vertical, top - horizontal, top);
    path.close_path();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::PathEl;

    fn assert_close(actual: f64, expected: f64) {
        let tolerance = 1e-9 * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_parse_styles() {
        assert_eq!("rectangle".parse::<DotStyle>().unwrap(), DotStyle::Rectangle);
        assert_eq!("circle".parse::<DotStyle>().unwrap(), DotStyle::Circle);
        assert_eq!("gapless".parse::<DotStyle>().unwrap(), DotStyle::Gapless);
        for name in DotStyle::all_names() {
            assert_eq!(name.parse::<DotStyle>().unwrap().as_str(), name);
        }
    }

    #[test]
    fn test_unknown_style_is_rejected() {
        let error = "triangle".parse::<DotStyle>().unwrap_err();
        assert!(matches!(error, BrailleError::UnsupportedStyle(ref s) if s == "triangle"));
        assert!("Circle".parse::<DotStyle>().is_err());
    }

    #[test]
    fn test_gapless_resolves_to_full_rectangle() {
        assert_eq!(DotStyle::Gapless.resolve(0.3), (DotStyle::Rectangle, 1.0));
        assert_eq!(DotStyle::Circle.resolve(0.3), (DotStyle::Circle, 0.3));
        assert_eq!(DotStyle::Rectangle.resolve(0.5), (DotStyle::Rectangle, 0.5));
    }

    #[test]
    fn test_rectangle_corners() {
        let path = rectangle_path(Point::new(100.0, 200.0), 10.0, 20.0);
        assert_eq!(
            path.elements(),
            &[
                PathEl::MoveTo(Point::new(90.0, 220.0)),
                PathEl::LineTo(Point::new(110.0, 220.0)),
                PathEl::LineTo(Point::new(110.0, 180.0)),
                PathEl::LineTo(Point::new(90.0, 180.0)),
                PathEl::LineTo(Point::new(90.0, 220.0)),
                PathEl::ClosePath,
            ]
        );
    }

    #[test]
    fn test_circle_has_four_arcs() {
        let path = circle_path(Point::new(0.0, 0.0), 50.0);
        let elements = path.elements();
        assert_eq!(elements.len(), 6);
        assert_eq!(elements[0], PathEl::MoveTo(Point::new(0.0, 50.0)));
        assert!(elements[1..5]
            .iter()
            .all(|el| matches!(el, PathEl::CurveTo(..))));
        assert_eq!(elements[5], PathEl::ClosePath);

        let anchors: Vec<Point> = elements[1..5]
            .iter()
            .filter_map(|el| match el {
                PathEl::CurveTo(_, _, p) => Some(*p),
                _ => None,
            })
            .collect();
        assert_eq!(
            anchors,
            vec![
                Point::new(50.0, 0.0),
                Point::new(0.0, -50.0),
                Point::new(-50.0, 0.0),
                Point::new(0.0, 50.0),
            ]
        );
    }

    #[test]
    fn test_circle_control_offsets_use_kappa() {
        let r = 73.5;
        let expected = r * 4.0 / 3.0 * (2.0_f64.sqrt() - 1.0);
        let path = circle_path(Point::new(10.0, 20.0), r);

        let mut start = match path.elements()[0] {
            PathEl::MoveTo(p) => p,
            ref other => panic!("unexpected first element {other:?}"),
        };
        for el in path.elements() {
            if let PathEl::CurveTo(c1, c2, end) = *el {
                // Each control point sits on the tangent of its anchor
                assert_close((c1 - start).hypot(), expected);
                assert_close((c2 - end).hypot(), expected);
                assert!((c1 - start).x == 0.0 || (c1 - start).y == 0.0);
                assert!((c2 - end).x == 0.0 || (c2 - end).y == 0.0);
                start = end;
            }
        }
    }

    #[test]
    fn test_circle_uses_smaller_radius() {
        let radii = DotRadii { rx: 40.0, ry: 25.0 };
        let path = render_dot(DotStyle::Circle, Point::new(0.0, 0.0), radii);
        assert_eq!(path.elements()[0], PathEl::MoveTo(Point::new(0.0, 25.0)));
    }

    #[test]
    fn test_gapless_renders_like_rectangle() {
        let radii = DotRadii {
            rx: 125.0,
            ry: 125.0,
        };
        let center = Point::new(125.0, 675.0);
        assert_eq!(
            render_dot(DotStyle::Gapless, center, radii),
            render_dot(DotStyle::Rectangle, center, radii)
        );
    }
}
