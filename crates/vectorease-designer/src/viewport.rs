//! Device-to-local coordinate mapping.
//!
//! The editor works in local space. The host hands pointer positions in
//! device space together with a [`CoordinateMapper`]; any mapped point that
//! is not finite is discarded by the editor.

use vectorease_core::Point;

/// Maps a device-space position into the editor's local space.
pub trait CoordinateMapper {
    fn to_local(&self, device: Point) -> Point;
}

impl<F> CoordinateMapper for F
where
    F: Fn(Point) -> Point,
{
    fn to_local(&self, device: Point) -> Point {
        self(device)
    }
}

/// Device space is already local space.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityMapper;

impl CoordinateMapper for IdentityMapper {
    fn to_local(&self, device: Point) -> Point {
        device
    }
}

/// Zoom and pan state of the drawing surface.
///
/// Both spaces have y growing downwards, so there is no axis flip.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
        }
    }
}

impl Viewport {
    pub fn new(zoom: f64, pan_x: f64, pan_y: f64) -> Self {
        let mut viewport = Self::default();
        viewport.set_zoom(zoom);
        viewport.set_pan(pan_x, pan_y);
        viewport
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom level, constrained between 0.1 and 50.0.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom > 0.1 && zoom < 50.0 {
            self.zoom = zoom;
        }
    }

    pub fn pan(&self) -> (f64, f64) {
        (self.pan_x, self.pan_y)
    }

    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
    }

    /// Converts local coordinates back to device coordinates.
    ///
    /// ```text
    /// device_x = local_x * zoom + pan_x
    /// device_y = local_y * zoom + pan_y
    /// ```
    pub fn to_device(&self, local: Point) -> Point {
        Point::new(local.x * self.zoom + self.pan_x, local.y * self.zoom + self.pan_y)
    }
}

impl CoordinateMapper for Viewport {
    fn to_local(&self, device: Point) -> Point {
        Point::new(
            (device.x - self.pan_x) / self.zoom,
            (device.y - self.pan_y) / self.zoom,
        )
    }
}
