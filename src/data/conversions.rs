//! Path description to UFO conversion
//!
//! Turns the `BezPath` values produced by the dot renderer into norad
//! contours. UFO contours have no explicit move or close commands: a closed
//! contour is a ring of points where each on-curve point's type describes
//! the segment that ends at it.

use crate::font_source::backend::BackendError;
use kurbo::{BezPath, PathEl, Point};
use norad::{Contour, ContourPoint, PointType};

/// Convert one subpath into a norad contour.
///
/// kurbo only lets a path start without a move in release builds, so the
/// leading-move check matters there alone.
///
/// A closed path whose last segment already returns to the start point is
/// folded so the start is stored once, as the final point of the ring.
pub fn bezpath_to_contour(path: &BezPath) -> Result<Contour, BackendError> {
    let mut elements = path.elements().iter();
    let start = match elements.next() {
        Some(PathEl::MoveTo(p)) => *p,
        Some(other) => {
            return Err(BackendError::MalformedPath(format!(
                "path must begin with a move, found {other:?}"
            )))
        }
        None => return Err(BackendError::MalformedPath("path is empty".to_string())),
    };

    let mut points = Vec::new();
    let mut current = start;
    let mut closed = false;

    for el in elements {
        if closed {
            return Err(BackendError::MalformedPath(
                "only one subpath per contour is supported".to_string(),
            ));
        }
        match *el {
            PathEl::MoveTo(_) => {
                return Err(BackendError::MalformedPath(
                    "only one subpath per contour is supported".to_string(),
                ))
            }
            PathEl::LineTo(p) => {
                points.push(point(p, PointType::Line));
                current = p;
            }
            PathEl::QuadTo(c, p) => {
                points.push(point(c, PointType::OffCurve));
                points.push(point(p, PointType::QCurve));
                current = p;
            }
            PathEl::CurveTo(c1, c2, p) => {
                points.push(point(c1, PointType::OffCurve));
                points.push(point(c2, PointType::OffCurve));
                points.push(point(p, PointType::Curve));
                current = p;
            }
            PathEl::ClosePath => closed = true,
        }
    }

    if closed {
        // The closing segment is an implicit line unless the path is already home
        if current != start || points.is_empty() {
            points.push(point(start, PointType::Line));
        }
    } else {
        points.insert(0, point(start, PointType::Move));
    }

    Ok(Contour::new(points, None))
}

fn point(p: Point, typ: PointType) -> ContourPoint {
    ContourPoint::new(p.x, p.y, typ, false, None, None)
}
