//! Configuration for the VectorEase editor
//!
//! Every tolerance and offset used by the interaction engine lives here so a
//! host can tune it for mouse, pen or touch input. Supports JSON and TOML
//! files, chosen by extension.
//!
//! Configuration is organized into logical sections:
//! - Interaction (hit and grip radii, click threshold, offsets)
//! - Snapping (angle increment)
//! - Tracing image (minimum size, handle offset, initial fit)
//! - History (optional depth limit)

use serde::{Deserialize, Serialize};
use std::path::Path;
use vectorease_core::constants;

use crate::error::{SettingsError, SettingsResult};

/// Pointer tolerances and gesture offsets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionSettings {
    /// Distance below which the pointer touches a line
    pub hit_threshold: f64,
    /// Base grip size
    pub grip_size: f64,
    /// Grip radius multiplier for endpoints of selected lines
    pub selected_grip_factor: f64,
    /// Grip radius multiplier for endpoints of unselected lines and image handles
    pub unselected_grip_factor: f64,
    /// Per-axis displacement below which a gesture counts as a click
    pub click_threshold: f64,
    /// Offset applied to duplicated lines
    pub duplicate_offset: f64,
    /// Gap between selection bounds and the floating toolbar anchor
    pub toolbar_offset: f64,
}

impl InteractionSettings {
    /// Grab radius around endpoints of lines that are already selected.
    pub fn selected_grip_radius(&self) -> f64 {
        self.grip_size * self.selected_grip_factor
    }

    /// Grab radius around endpoints of unselected lines and image handles.
    pub fn unselected_grip_radius(&self) -> f64 {
        self.grip_size * self.unselected_grip_factor
    }
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            hit_threshold: constants::HIT_THRESHOLD,
            grip_size: constants::GRIP_SIZE,
            selected_grip_factor: constants::SELECTED_GRIP_FACTOR,
            unselected_grip_factor: constants::UNSELECTED_GRIP_FACTOR,
            click_threshold: constants::CLICK_THRESHOLD,
            duplicate_offset: constants::DUPLICATE_OFFSET,
            toolbar_offset: constants::TOOLBAR_OFFSET,
        }
    }
}

/// Snap-to-angle settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapSettings {
    /// Angle increment in degrees
    pub angle_step_degrees: f64,
}

impl Default for SnapSettings {
    fn default() -> Self {
        Self {
            angle_step_degrees: constants::SNAP_ANGLE_STEP_DEGREES,
        }
    }
}

/// Tracing image settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSettings {
    /// Minimum width and height while resizing
    pub min_size: f64,
    /// Rotate handle distance above the top edge
    pub rotate_handle_offset: f64,
    /// Largest share of the viewport covered by a freshly loaded image
    pub fit_ratio: f64,
    /// Opacity of a freshly loaded image
    pub default_opacity: f64,
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            min_size: constants::MIN_IMAGE_SIZE,
            rotate_handle_offset: constants::ROTATE_HANDLE_OFFSET,
            fit_ratio: constants::IMAGE_FIT_RATIO,
            default_opacity: constants::DEFAULT_IMAGE_OPACITY,
        }
    }
}

/// Undo history settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Maximum number of snapshots kept; unbounded when absent
    pub max_depth: Option<usize>,
}

/// Complete editor configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub interaction: InteractionSettings,
    pub snapping: SnapSettings,
    pub image: ImageSettings,
    pub history: HistorySettings,
}

impl EditorConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match extension(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::info!("Loaded editor config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match extension(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let i = &self.interaction;
        positive("interaction.hit_threshold", i.hit_threshold)?;
        positive("interaction.grip_size", i.grip_size)?;
        positive("interaction.selected_grip_factor", i.selected_grip_factor)?;
        positive("interaction.unselected_grip_factor", i.unselected_grip_factor)?;
        positive("interaction.click_threshold", i.click_threshold)?;
        positive("interaction.duplicate_offset", i.duplicate_offset)?;
        positive("interaction.toolbar_offset", i.toolbar_offset)?;

        positive("snapping.angle_step_degrees", self.snapping.angle_step_degrees)?;

        positive("image.min_size", self.image.min_size)?;
        positive("image.rotate_handle_offset", self.image.rotate_handle_offset)?;
        unit_interval("image.fit_ratio", self.image.fit_ratio)?;
        unit_interval("image.default_opacity", self.image.default_opacity)?;

        if self.history.max_depth == Some(0) {
            return Err(SettingsError::invalid(
                "history.max_depth",
                "must keep at least one snapshot",
            ));
        }

        Ok(())
    }
}

enum Format {
    Json,
    Toml,
}

fn extension(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(SettingsError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

fn positive(key: &str, value: f64) -> SettingsResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SettingsError::invalid(key, format!("must be positive and finite, got {value}")))
    }
}

fn unit_interval(key: &str, value: f64) -> SettingsResult<()> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(SettingsError::invalid(key, format!("must be within (0, 1], got {value}")))
    }
}
