//! Error types for sparkfield.
//!
//! This module provides error types for simulation construction and for
//! exporting rasterized frames.

use std::fmt;

/// Errors that can occur when constructing a simulation.
#[derive(Debug)]
pub enum ConfigError {
    /// Pool capacity must be at least 1.
    ZeroCapacity,
    /// Grid cell size must be finite and positive.
    InvalidCellSize(f32),
    /// Link distance must be finite and positive.
    InvalidLinkDistance(f32),
    /// Viewport dimensions must be finite and positive.
    InvalidViewport(f32, f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroCapacity => {
                write!(f, "Pool capacity must be at least 1")
            }
            ConfigError::InvalidCellSize(size) => {
                write!(f, "Grid cell size must be finite and positive, got {}", size)
            }
            ConfigError::InvalidLinkDistance(dist) => {
                write!(f, "Link distance must be finite and positive, got {}", dist)
            }
            ConfigError::InvalidViewport(w, h) => {
                write!(f, "Viewport dimensions must be finite and positive, got {}x{}", w, h)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors that can occur when exporting a rasterized frame.
#[derive(Debug)]
pub enum ExportError {
    /// Failed to encode the image.
    Image(image::ImageError),
    /// Failed to write the file to disk.
    Io(std::io::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Image(e) => write!(f, "Failed to encode frame: {}", e),
            ExportError::Io(e) => write!(f, "Failed to write frame: {}", e),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Image(e) => Some(e),
            ExportError::Io(e) => Some(e),
        }
    }
}

impl From<image::ImageError> for ExportError {
    fn from(e: image::ImageError) -> Self {
        ExportError::Image(e)
    }
}

impl From<std::io::Error> for ExportError {
    fn from(e: std::io::Error) -> Self {
        ExportError::Io(e)
    }
}
