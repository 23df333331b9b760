//! VectorEase Settings Crate
//!
//! Tunable interaction tolerances, snapping, tracing image and history
//! configuration, with JSON/TOML persistence.

pub mod config;
pub mod error;

pub use config::{EditorConfig, HistorySettings, ImageSettings, InteractionSettings, SnapSettings};
pub use error::{SettingsError, SettingsResult};
