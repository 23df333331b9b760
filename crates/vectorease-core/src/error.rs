//! Error handling for VectorEase
//!
//! The interaction engine itself never fails: a bad pointer event degrades to a
//! logged no-op. The error types here cover the fallible edges of the system:
//! - Coordinate mapping that produced non-finite values
//! - Persisted documents that cannot be accepted
//! - Image ingestion with unusable dimensions
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for VectorEase
///
/// A unified error type used by persistence, image ingestion and the
/// coordinate boundary. This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// A mapped coordinate was NaN or infinite
    #[error("Non-finite coordinate ({x}, {y})")]
    NonFiniteCoordinate {
        /// The offending x value.
        x: f64,
        /// The offending y value.
        y: f64,
    },

    /// A persisted document was rejected
    #[error("Invalid document: {reason}")]
    InvalidDocument {
        /// Why the document was rejected.
        reason: String,
    },

    /// Image or viewport dimensions cannot produce a tracing image
    #[error("Invalid image dimensions {width}x{height}")]
    InvalidImageDimensions {
        /// Offending width.
        width: f64,
        /// Offending height.
        height: f64,
    },

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Create an invalid-document error
    pub fn invalid_document(reason: impl Into<String>) -> Self {
        Error::InvalidDocument {
            reason: reason.into(),
        }
    }

    /// Check if this error came from bad input coordinates
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::NonFiniteCoordinate { .. })
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
