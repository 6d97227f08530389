//! Error handling for Polyplanner
//!
//! Provides error types for the layers of the library:
//! - Geometry errors (polygon construction)
//! - Configuration and I/O errors surfaced through the umbrella [`Error`]
//!
//! All error types use `thiserror` for ergonomic error handling.
//! Interaction misses (a press that hits nothing, a move while idle) are
//! ordinary outcomes and never produce an error.

use thiserror::Error;

/// Geometry error type
///
/// Represents failures while constructing geometric objects. A failed build
/// never hands out a partially constructed polygon.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// A polygon ring was closed or built with too few vertices
    #[error("Polygon requires at least 3 vertices, got {count}")]
    NotEnoughVertices {
        /// The number of vertices supplied before closing.
        count: usize,
    },
}

/// Main error type for Polyplanner
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a configuration error from a string message
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Check if this is a geometry error
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Error::Geometry(_))
    }

    /// Check if this is a configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
