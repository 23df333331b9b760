//! Data model shared by the editor: points, lines, the tracing image and the
//! transient selection box.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{DEFAULT_COLOR, DEFAULT_STROKE_WIDTH};

/// A point in the editor's local (post-transform) space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Returns this point moved by (dx, dy).
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Stroke style of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    #[default]
    Line,
    /// Semi-transparent, round-capped highlighter stroke.
    Marker,
}

/// One endpoint of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    P1,
    P2,
}

impl Endpoint {
    /// The endpoint on the other end of the segment.
    pub fn opposite(self) -> Self {
        match self {
            Self::P1 => Self::P2,
            Self::P2 => Self::P1,
        }
    }
}

/// A straight segment entity. Lines are replaced, never edited in place, by
/// the history layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    pub p1: Point,
    pub p2: Point,
    pub color: String,
    pub stroke_width: f64,
    #[serde(rename = "type", default)]
    pub kind: LineKind,
}

impl Line {
    pub fn new(p1: Point, p2: Point, color: impl Into<String>, stroke_width: f64, kind: LineKind) -> Self {
        Self {
            p1,
            p2,
            color: color.into(),
            stroke_width,
            kind,
        }
    }

    /// A plain line with the default colour and width.
    pub fn segment(p1: Point, p2: Point) -> Self {
        Self::new(p1, p2, DEFAULT_COLOR, DEFAULT_STROKE_WIDTH, LineKind::Line)
    }

    pub fn endpoint(&self, which: Endpoint) -> Point {
        match which {
            Endpoint::P1 => self.p1,
            Endpoint::P2 => self.p2,
        }
    }

    pub fn set_endpoint(&mut self, which: Endpoint, point: Point) {
        match which {
            Endpoint::P1 => self.p1 = point,
            Endpoint::P2 => self.p2 = point,
        }
    }

    /// Returns a copy with both endpoints moved by (dx, dy).
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            p1: self.p1.offset(dx, dy),
            p2: self.p2.offset(dx, dy),
            ..self.clone()
        }
    }

    pub fn is_finite(&self) -> bool {
        self.p1.is_finite() && self.p2.is_finite() && self.stroke_width.is_finite()
    }

    /// (min_x, min_y, max_x, max_y)
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        (
            self.p1.x.min(self.p2.x),
            self.p1.y.min(self.p2.y),
            self.p1.x.max(self.p2.x),
            self.p1.y.max(self.p2.y),
        )
    }
}

/// Active editing tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    #[default]
    Select,
    Line,
    Marker,
    Erase,
    Image,
}

impl Tool {
    /// The line kind drawn by this tool, if it draws at all.
    pub fn line_kind(self) -> Option<LineKind> {
        match self {
            Self::Line => Some(LineKind::Line),
            Self::Marker => Some(LineKind::Marker),
            _ => None,
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Select => write!(f, "select"),
            Self::Line => write!(f, "line"),
            Self::Marker => write!(f, "marker"),
            Self::Erase => write!(f, "erase"),
            Self::Image => write!(f, "image"),
        }
    }
}

/// Drag rectangle. The sign of `width` selects the box-selection mode:
/// non-negative means containment, negative means crossing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectionBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl SelectionBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Box spanning from `start` to `end`, keeping the drag direction.
    pub fn from_corners(start: Point, end: Point) -> Self {
        Self::new(start.x, start.y, end.x - start.x, end.y - start.y)
    }

    /// True when drawn right-to-left.
    pub fn is_crossing(&self) -> bool {
        self.width < 0.0
    }

    pub fn min_x(&self) -> f64 {
        self.x
    }

    pub fn min_y(&self) -> f64 {
        self.y
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// Closed-bounds containment. Expects a normalized box.
    pub fn contains(&self, p: &Point) -> bool {
        p.x >= self.min_x() && p.x <= self.max_x() && p.y >= self.min_y() && p.y <= self.max_y()
    }
}

/// Corner of the tracing image, in its own unrotated frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// Hit-test order.
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    pub fn is_left(self) -> bool {
        matches!(self, Self::TopLeft | Self::BottomLeft)
    }

    pub fn is_top(self) -> bool {
        matches!(self, Self::TopLeft | Self::TopRight)
    }
}

/// The single reference raster layer.
///
/// `x`, `y`, `width` and `height` describe the unrotated frame; `rotation`
/// (degrees) is applied about the frame's center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TracingImage {
    pub src: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
    pub opacity: f64,
    pub visible: bool,
}

impl TracingImage {
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Corner position in the unrotated frame.
    pub fn corner(&self, corner: Corner) -> Point {
        let right = self.x + self.width;
        let bottom = self.y + self.height;
        match corner {
            Corner::TopLeft => Point::new(self.x, self.y),
            Corner::TopRight => Point::new(right, self.y),
            Corner::BottomLeft => Point::new(self.x, bottom),
            Corner::BottomRight => Point::new(right, bottom),
        }
    }

    /// Corner position after rotation, as drawn on screen.
    pub fn rotated_corner(&self, corner: Corner) -> Point {
        crate::geometry::rotate_point(&self.corner(corner), &self.center(), self.rotation)
    }

    /// Rotate handle position after rotation; sits `offset` above the top edge.
    pub fn rotate_handle(&self, offset: f64) -> Point {
        let handle = Point::new(self.x + self.width / 2.0, self.y - offset);
        crate::geometry::rotate_point(&handle, &self.center(), self.rotation)
    }

    pub fn is_finite(&self) -> bool {
        [
            self.x,
            self.y,
            self.width,
            self.height,
            self.rotation,
            self.opacity,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}
