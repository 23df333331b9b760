//! # VectorEase Core
//!
//! Core types, the geometry kernel and the shared error type for VectorEase.
//! Everything here is pure: no state, no I/O.

pub mod constants;
pub mod error;
pub mod geometry;
pub mod types;

pub use error::{Error, Result};

pub use geometry::{
    distance_point_to_segment, does_line_intersect_rect, is_line_fully_inside, is_near_line,
    is_near_line_default, is_point_in_rotated_rect, normalize_rect, rotate_point,
    segments_intersect,
};

pub use types::{Corner, Endpoint, Line, LineKind, Point, SelectionBox, Tool, TracingImage};
