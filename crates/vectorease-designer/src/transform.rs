//! Transform engine: snapping, line drag/resize and tracing image
//! pan/resize/rotate.
//!
//! Line drags and image resizes are computed from geometry captured when the
//! gesture started, never from the previous move, so repeated moves do not
//! accumulate floating error. Image panning is the exception: it re-anchors
//! on every move.

use vectorease_core::{rotate_point, Corner, Endpoint, Line, Point, TracingImage};

use crate::line_store::{DrawnLine, LineId, LineStore};

/// Snapping policy applied to drawn and resized endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapOptions {
    pub ortho: bool,
    pub snap_to_angle: bool,
    pub angle_step_degrees: f64,
}

/// Constrains `current` relative to `anchor`.
///
/// Ortho mode wins over angle snapping: the point is projected onto the
/// horizontal or vertical through `anchor`, whichever has the larger delta.
/// Angle snapping keeps the distance and rounds the direction to the nearest
/// step.
pub fn snapped_point(current: Point, anchor: Point, options: &SnapOptions) -> Point {
    let dx = current.x - anchor.x;
    let dy = current.y - anchor.y;

    if options.ortho {
        return if dx.abs() > dy.abs() {
            Point::new(current.x, anchor.y)
        } else {
            Point::new(anchor.x, current.y)
        };
    }

    if options.snap_to_angle && options.angle_step_degrees > 0.0 {
        let step = options.angle_step_degrees.to_radians();
        let angle = (dy.atan2(dx) / step).round() * step;
        let distance = dx.hypot(dy);
        return Point::new(
            anchor.x + distance * angle.cos(),
            anchor.y + distance * angle.sin(),
        );
    }

    current
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Axis with the larger absolute delta; ties go to Y.
    pub fn dominant(dx: f64, dy: f64) -> Self {
        if dx.abs() > dy.abs() {
            Self::X
        } else {
            Self::Y
        }
    }
}

/// Originals of every line taking part in a drag.
#[derive(Debug, Clone, PartialEq)]
pub struct DragContext {
    originals: Vec<DrawnLine>,
    locked_axis: Option<Axis>,
}

impl DragContext {
    /// Captures the current geometry of `ids`; unknown ids are skipped.
    pub fn capture(store: &LineStore, ids: &[LineId]) -> Self {
        let originals = ids
            .iter()
            .filter_map(|&id| store.get(id).map(|line| DrawnLine::new(id, line.clone())))
            .collect();
        Self {
            originals,
            locked_axis: None,
        }
    }

    pub fn ids(&self) -> impl Iterator<Item = LineId> + '_ {
        self.originals.iter().map(|drawn| drawn.id)
    }

    pub fn locked_axis(&self) -> Option<Axis> {
        self.locked_axis
    }

    /// Applies the ortho axis lock to a cumulative delta.
    ///
    /// The first call under ortho decides the axis; it then holds for the
    /// rest of the gesture regardless of where the pointer goes.
    pub fn constrain(&mut self, dx: f64, dy: f64, ortho: bool) -> (f64, f64) {
        if !ortho {
            return (dx, dy);
        }
        let axis = *self.locked_axis.get_or_insert_with(|| Axis::dominant(dx, dy));
        match axis {
            Axis::X => (dx, 0.0),
            Axis::Y => (0.0, dy),
        }
    }

    /// Writes every captured line, translated by (dx, dy) from its original,
    /// into `draft`.
    pub fn apply(&self, draft: &mut LineStore, dx: f64, dy: f64) {
        for drawn in &self.originals {
            draft.replace(drawn.id, drawn.line.translated(dx, dy));
        }
    }
}

/// Which endpoint of which line a resize gesture is moving.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeInfo {
    pub id: LineId,
    pub endpoint: Endpoint,
    pub original: Line,
}

impl ResizeInfo {
    /// The resized line: the grabbed endpoint follows `current`, snapped
    /// against the opposite endpoint.
    pub fn resized(&self, current: Point, options: &SnapOptions) -> Line {
        let anchor = self.original.endpoint(self.endpoint.opposite());
        let mut line = self.original.clone();
        line.set_endpoint(self.endpoint, snapped_point(current, anchor, options));
        line
    }
}

/// Moves the image by a per-move delta.
pub fn pan_image(image: &mut TracingImage, dx: f64, dy: f64) {
    image.x += dx;
    image.y += dy;
}

/// Resizes `original` by dragging `corner` from `start` to `current`.
///
/// Both points are taken into the image's unrotated frame first. Width and
/// height never drop below `min_size`; when a left or top corner hits the
/// limit the opposite edge stays where it was.
pub fn resize_image(
    original: &TracingImage,
    corner: Corner,
    start: Point,
    current: Point,
    min_size: f64,
) -> TracingImage {
    let center = original.center();
    let local_start = rotate_point(&start, &center, -original.rotation);
    let local_current = rotate_point(&current, &center, -original.rotation);
    let dx = local_current.x - local_start.x;
    let dy = local_current.y - local_start.y;

    let mut resized = original.clone();

    if corner.is_left() {
        resized.x = original.x + dx;
        resized.width = original.width - dx;
    } else {
        resized.width = original.width + dx;
    }

    if corner.is_top() {
        resized.y = original.y + dy;
        resized.height = original.height - dy;
    } else {
        resized.height = original.height + dy;
    }

    if resized.width < min_size {
        resized.width = min_size;
        if corner.is_left() {
            resized.x = original.x + original.width - min_size;
        }
    }
    if resized.height < min_size {
        resized.height = min_size;
        if corner.is_top() {
            resized.y = original.y + original.height - min_size;
        }
    }

    resized
}

/// Rotation (degrees) that points the rotate handle at `pointer`.
///
/// The handle sits above the top edge, so 0° means straight up; hence the
/// 90° offset on the atan2 angle.
pub fn rotation_towards(original: &TracingImage, pointer: Point) -> f64 {
    let center = original.center();
    (pointer.y - center.y).atan2(pointer.x - center.x).to_degrees() + 90.0
}
