//! # VectorEase
//!
//! The interaction engine of an interactive 2D vector-line editor: users
//! draw, select, transform and erase straight line and marker strokes over an
//! optional rotatable, resizable tracing image, with linear undo/redo.
//!
//! ## Architecture
//!
//! VectorEase is organized as a workspace with multiple crates:
//!
//! 1. **vectorease-core** - Data model, geometry kernel, shared errors
//! 2. **vectorease-settings** - Tunable interaction configuration
//! 3. **vectorease-designer** - Hit testing, gestures, transforms, history and the `Editor`
//! 4. **vectorease** - This crate: re-exports, logging setup and a thin binary

use std::path::Path;

use anyhow::Context;

pub use vectorease_designer as designer;
pub use vectorease_settings as settings;

pub use vectorease_core::{
    Corner, Endpoint, Error, Line, LineKind, Point, Result, SelectionBox, Tool, TracingImage,
};

pub use vectorease_designer::{
    ClearTarget, CoordinateMapper, Editor, EditorDocument, IdentityMapper, InteractionState,
    LineId, PointerEvent, PointerPhase, SelectSameCriterion, Viewport,
};

pub use vectorease_settings::{EditorConfig, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

/// Builds an editor from optional config and document files.
pub fn open_editor(config: Option<&Path>, document: Option<&Path>) -> anyhow::Result<Editor> {
    let config = match config {
        Some(path) => EditorConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => EditorConfig::default(),
    };

    let mut editor = Editor::new(config);
    if let Some(path) = document {
        editor
            .load_from_file(path)
            .with_context(|| format!("Failed to open document {}", path.display()))?;
    }
    Ok(editor)
}
