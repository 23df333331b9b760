//! Tracing image ingestion and controls.
//!
//! Image edits change the editor state in place and are not recorded in the
//! line history.

use vectorease_core::{Error, Result, Tool, TracingImage};

use super::Editor;
use crate::gesture::InteractionState;

impl Editor {
    /// Places a freshly decoded image, centered in the viewport and scaled to
    /// fit within the configured share of its width and height while keeping
    /// the aspect ratio. Switches to the image tool.
    pub fn load_image(
        &mut self,
        src: impl Into<String>,
        natural_width: f64,
        natural_height: f64,
        viewport_width: f64,
        viewport_height: f64,
    ) -> Result<()> {
        let usable = |v: f64| v.is_finite() && v > 0.0;
        if !usable(natural_width) || !usable(natural_height) {
            return Err(Error::InvalidImageDimensions {
                width: natural_width,
                height: natural_height,
            });
        }
        if !usable(viewport_width) || !usable(viewport_height) {
            return Err(Error::InvalidImageDimensions {
                width: viewport_width,
                height: viewport_height,
            });
        }

        let ratio = self.config.image.fit_ratio;
        let aspect = natural_width / natural_height;
        let mut width = viewport_width * ratio;
        let mut height = width / aspect;
        if height > viewport_height * ratio {
            height = viewport_height * ratio;
            width = height * aspect;
        }

        self.end_image_gesture();
        self.image = Some(TracingImage {
            src: src.into(),
            x: (viewport_width - width) / 2.0,
            y: (viewport_height - height) / 2.0,
            width,
            height,
            rotation: 0.0,
            opacity: self.config.image.default_opacity,
            visible: true,
        });
        self.active_tool = Tool::Image;
        tracing::info!("Loaded tracing image at {:.1}x{:.1}", width, height);
        Ok(())
    }

    /// Sets the image opacity, clamped to [0, 1].
    pub fn set_image_opacity(&mut self, opacity: f64) -> bool {
        if opacity.is_nan() {
            return false;
        }
        match self.image.as_mut() {
            Some(image) => {
                image.opacity = opacity.clamp(0.0, 1.0);
                true
            }
            None => false,
        }
    }

    pub fn set_image_visible(&mut self, visible: bool) -> bool {
        match self.image.as_mut() {
            Some(image) => {
                image.visible = visible;
                true
            }
            None => false,
        }
    }

    pub fn toggle_image_visibility(&mut self) -> bool {
        match self.image.as_mut() {
            Some(image) => {
                image.visible = !image.visible;
                image.visible
            }
            None => false,
        }
    }

    /// Removes the image; leaves the image tool for the select tool.
    pub fn delete_image(&mut self) {
        self.end_image_gesture();
        if self.image.take().is_some() {
            tracing::debug!("Tracing image removed");
        }
        if self.active_tool == Tool::Image {
            self.active_tool = Tool::Select;
        }
    }

    /// Drops an in-flight pan, resize or rotate. Their captured geometry
    /// belongs to the image being replaced.
    fn end_image_gesture(&mut self) {
        if matches!(
            self.arbiter.state(),
            InteractionState::ImagePanning
                | InteractionState::ImageResizing
                | InteractionState::ImageRotating
        ) {
            self.arbiter.release();
        }
    }
}
