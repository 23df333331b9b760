//! Default tuning constants shared across crates.
//!
//! These are the factory values; `vectorease-settings` lets a host override
//! every one of them.

/// Distance below which a pointer counts as touching a line (erase and select).
pub const HIT_THRESHOLD: f64 = 15.0;

/// Base grip size for line endpoints and image handles.
pub const GRIP_SIZE: f64 = 8.0;

/// Grip radius multiplier for endpoints of already-selected lines.
pub const SELECTED_GRIP_FACTOR: f64 = 2.0;

/// Grip radius multiplier for endpoints of unselected lines and image handles.
pub const UNSELECTED_GRIP_FACTOR: f64 = 2.5;

/// Displacement below which a gesture is a click rather than a drag.
pub const CLICK_THRESHOLD: f64 = 5.0;

/// Angle increment used by snap-to-angle.
pub const SNAP_ANGLE_STEP_DEGREES: f64 = 15.0;

/// Smallest width/height a tracing image may be resized to.
pub const MIN_IMAGE_SIZE: f64 = 20.0;

/// Distance of the rotate handle above the image's top edge.
pub const ROTATE_HANDLE_OFFSET: f64 = 20.0;

/// Offset applied on both axes to duplicated lines.
pub const DUPLICATE_OFFSET: f64 = 10.0;

/// Gap between the selection bounds and the floating toolbar anchor.
pub const TOOLBAR_OFFSET: f64 = 10.0;

/// Largest share of the viewport a freshly loaded image may cover.
pub const IMAGE_FIT_RATIO: f64 = 0.8;

/// Opacity of a freshly loaded tracing image.
pub const DEFAULT_IMAGE_OPACITY: f64 = 0.5;

/// Stroke colour used until the user picks another.
pub const DEFAULT_COLOR: &str = "hsl(var(--foreground))";

/// Stroke width used until the user picks another.
pub const DEFAULT_STROKE_WIDTH: f64 = 1.0;
