//! Geometry kernel: pure functions over points, segments and rectangles.
//!
//! Every containment or crossing test normalizes its rectangle first, so
//! callers may pass a selection box exactly as it was dragged.

use crate::constants::HIT_THRESHOLD;
use crate::types::{Line, Point, SelectionBox, TracingImage};

/// Distance from `point` to the nearest point on the segment `line`.
///
/// The projection parameter is clamped to [0, 1], so points beyond either end
/// measure to that endpoint. A zero-length segment degrades to point distance.
pub fn distance_point_to_segment(point: &Point, line: &Line) -> f64 {
    let dx = line.p2.x - line.p1.x;
    let dy = line.p2.y - line.p1.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return point.distance_to(&line.p1);
    }

    let t = (((point.x - line.p1.x) * dx + (point.y - line.p1.y) * dy) / len_sq).clamp(0.0, 1.0);
    let closest = Point::new(line.p1.x + t * dx, line.p1.y + t * dy);
    point.distance_to(&closest)
}

/// True when `point` is strictly closer than `threshold` to the segment.
pub fn is_near_line(point: &Point, line: &Line, threshold: f64) -> bool {
    distance_point_to_segment(point, line) < threshold
}

/// [`is_near_line`] with the default pointer threshold.
pub fn is_near_line_default(point: &Point, line: &Line) -> bool {
    is_near_line(point, line, HIT_THRESHOLD)
}

/// Rewrites a box with negative extents into non-negative form anchored at
/// its min corner.
pub fn normalize_rect(rect: &SelectionBox) -> SelectionBox {
    SelectionBox {
        x: if rect.width < 0.0 { rect.x + rect.width } else { rect.x },
        y: if rect.height < 0.0 { rect.y + rect.height } else { rect.y },
        width: rect.width.abs(),
        height: rect.height.abs(),
    }
}

/// Containment semantics: both endpoints inside the closed rect.
pub fn is_line_fully_inside(line: &Line, rect: &SelectionBox) -> bool {
    let r = normalize_rect(rect);
    r.contains(&line.p1) && r.contains(&line.p2)
}

/// Crossing semantics: an endpoint lies inside the rect, or the segment
/// properly crosses one of its four edges.
pub fn does_line_intersect_rect(line: &Line, rect: &SelectionBox) -> bool {
    let r = normalize_rect(rect);
    if r.contains(&line.p1) || r.contains(&line.p2) {
        return true;
    }

    let tl = Point::new(r.min_x(), r.min_y());
    let tr = Point::new(r.max_x(), r.min_y());
    let br = Point::new(r.max_x(), r.max_y());
    let bl = Point::new(r.min_x(), r.max_y());

    [(tl, tr), (tr, br), (br, bl), (bl, tl)]
        .iter()
        .any(|(a, b)| segments_intersect(line, &Line::segment(*a, *b)))
}

/// Parametric segment intersection.
///
/// Parallel and collinear segments (zero determinant) never intersect, and
/// both parameters must lie in the open interval (0, 1): touching at an
/// endpoint is not an intersection.
pub fn segments_intersect(a: &Line, b: &Line) -> bool {
    let (x1, y1, x2, y2) = (a.p1.x, a.p1.y, a.p2.x, a.p2.y);
    let (x3, y3, x4, y4) = (b.p1.x, b.p1.y, b.p2.x, b.p2.y);

    let den = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if den == 0.0 {
        return false;
    }

    let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / den;
    let u = -((x1 - x2) * (y1 - y3) - (y1 - y2) * (x1 - x3)) / den;

    t > 0.0 && t < 1.0 && u > 0.0 && u < 1.0
}

/// Rotates `point` about `center` by `angle_degrees`.
pub fn rotate_point(point: &Point, center: &Point, angle_degrees: f64) -> Point {
    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    Point::new(
        center.x + dx * cos - dy * sin,
        center.y + dx * sin + dy * cos,
    )
}

/// Hit test against the image frame after its rotation is applied.
pub fn is_point_in_rotated_rect(point: &Point, image: &TracingImage) -> bool {
    let local = rotate_point(point, &image.center(), -image.rotation);
    local.x >= image.x
        && local.x <= image.x + image.width
        && local.y >= image.y
        && local.y <= image.y + image.height
}
