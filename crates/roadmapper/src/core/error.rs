//! Core error types for roadmap drawing
//!
//! This module defines the error type shared by the painter and the theme registry.

use thiserror::Error;

/// Core error types for roadmap drawing
#[derive(Error, Debug)]
pub enum RoadmapError {
    #[error("Colour theme {name} not recognised")]
    InvalidTheme { name: String },

    #[error("Unknown roadmap component: {category}")]
    InvalidCategory { category: String },

    #[error("Unknown text alignment: {alignment} (expected centre, left or right)")]
    InvalidAlignment { alignment: String },

    #[error("Invalid surface size {width}x{height}: both dimensions must be positive")]
    InvalidSurface { width: u32, height: u32 },

    #[error("Unsupported colour: {colour}")]
    InvalidColour { colour: String },

    #[error("Graphics backend error: {message}")]
    Backend { message: String },

    #[error("Logging setup failed: {message}")]
    Logging { message: String },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl RoadmapError {
    /// Create a new theme error
    pub fn invalid_theme(name: impl Into<String>) -> Self {
        Self::InvalidTheme { name: name.into() }
    }

    /// Create a new component category error
    pub fn invalid_category(category: impl Into<String>) -> Self {
        Self::InvalidCategory {
            category: category.into(),
        }
    }

    /// Create a new alignment error
    pub fn invalid_alignment(alignment: impl Into<String>) -> Self {
        Self::InvalidAlignment {
            alignment: alignment.into(),
        }
    }

    /// Create a new colour error
    pub fn invalid_colour(colour: impl Into<String>) -> Self {
        Self::InvalidColour {
            colour: colour.into(),
        }
    }

    /// Create a new backend error
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }

    pub(crate) fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, RoadmapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_theme() {
        let error = RoadmapError::invalid_theme("NOPE");
        let error_msg = format!("{}", error);
        assert_eq!(error_msg, "Colour theme NOPE not recognised");
    }

    #[test]
    fn test_invalid_category() {
        let error = RoadmapError::invalid_category("legend");
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Unknown roadmap component"));
        assert!(error_msg.contains("legend"));
    }

    #[test]
    fn test_invalid_surface() {
        let error = RoadmapError::InvalidSurface {
            width: 0,
            height: 20,
        };
        assert!(error.to_string().contains("0x20"));
    }

    #[test]
    fn test_backend_error() {
        let error = RoadmapError::backend("pixmap allocation failed");
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Graphics backend error"));
        assert!(error_msg.contains("pixmap allocation failed"));
    }

    #[test]
    fn test_io_error_conversion() {
        use std::io;
        let io_err = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error: RoadmapError = io_err.into();
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("IO error"));
        assert!(error_msg.contains("File not found"));
    }
}
