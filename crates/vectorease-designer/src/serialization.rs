//! Serialization and deserialization of editor documents.
//!
//! A document is the persisted editor snapshot: the committed line list, the
//! active tool and style, and the tracing image. It is stored as camelCase
//! JSON:
//!
//! ```json
//! { "lines": [...], "activeTool": "select", "activeColor": "...",
//!   "activeWidth": 1, "tracingImage": null }
//! ```
//!
//! Missing fields fall back to defaults. Documents holding non-finite
//! numbers are rejected.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use vectorease_core::constants::{DEFAULT_COLOR, DEFAULT_STROKE_WIDTH};
use vectorease_core::{Error, Line, Tool, TracingImage};

/// Document format version
const FILE_FORMAT_VERSION: &str = "1.0";

/// Persisted editor snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorDocument {
    #[serde(default)]
    pub lines: Vec<Line>,
    #[serde(default)]
    pub active_tool: Tool,
    #[serde(default = "default_color")]
    pub active_color: String,
    #[serde(default = "default_width")]
    pub active_width: f64,
    #[serde(default)]
    pub tracing_image: Option<TracingImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<DocumentMetadata>,
}

/// Document metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub version: String,
    pub saved: DateTime<Utc>,
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

fn default_width() -> f64 {
    DEFAULT_STROKE_WIDTH
}

impl Default for EditorDocument {
    fn default() -> Self {
        Self {
            lines: Vec::new(),
            active_tool: Tool::default(),
            active_color: default_color(),
            active_width: default_width(),
            tracing_image: None,
            metadata: None,
        }
    }
}

impl EditorDocument {
    /// Rejects documents the editor cannot represent.
    pub fn validate(&self) -> vectorease_core::Result<()> {
        if let Some(index) = self.lines.iter().position(|line| !line.is_finite()) {
            return Err(Error::invalid_document(format!(
                "line {index} has non-finite coordinates"
            )));
        }
        if let Some(image) = &self.tracing_image {
            if !image.is_finite() {
                return Err(Error::invalid_document(
                    "tracing image has non-finite geometry",
                ));
            }
            if image.width <= 0.0 || image.height <= 0.0 {
                return Err(Error::InvalidImageDimensions {
                    width: image.width,
                    height: image.height,
                });
            }
        }
        Ok(())
    }

    /// Replaces a non-positive or non-finite active width with the default.
    pub fn normalize(&mut self) {
        if !self.active_width.is_finite() || self.active_width <= 0.0 {
            tracing::warn!(
                "Active width {} replaced by {}",
                self.active_width,
                DEFAULT_STROKE_WIDTH
            );
            self.active_width = DEFAULT_STROKE_WIDTH;
        }
    }

    /// Parses and validates a document from JSON text.
    pub fn from_json(json: &str) -> vectorease_core::Result<Self> {
        let mut document: Self = serde_json::from_str(json)?;
        document.normalize();
        document.validate()?;
        Ok(document)
    }

    pub fn to_json(&self) -> vectorease_core::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Save document to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut document = self.clone();
        document.metadata = Some(DocumentMetadata {
            version: FILE_FORMAT_VERSION.to_string(),
            saved: Utc::now(),
        });

        let json = document.to_json().context("Failed to serialize document")?;
        std::fs::write(path.as_ref(), json).context("Failed to write document file")?;

        tracing::info!(
            "Saved {} lines to {}",
            self.lines.len(),
            path.as_ref().display()
        );
        Ok(())
    }

    /// Load document from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read document file")?;

        Self::from_json(&content)
            .inspect_err(|err| {
                tracing::warn!("Rejected document {}: {}", path.as_ref().display(), err)
            })
            .context("Failed to parse document file")
    }
}
