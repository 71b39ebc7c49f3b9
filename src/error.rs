//! Error types for path operations

use crate::platform::Platform;
use thiserror::Error;

/// The error type for path operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    /// No path segments were supplied to a combine operation
    #[error("At least one path segment is required")]
    NullSegment,

    /// Empty or whitespace-only argument where a value is required
    #[error("Value cannot be empty or whitespace: {name}")]
    EmptyArgument { name: &'static str },

    /// A character from the platform's invalid set was found in the path
    #[error("Invalid character {character:?} detected in path {path}")]
    InvalidPath { path: String, character: char },

    /// File name reserved by Windows device namespace (CON, COM1, ...)
    #[error("Reserved file name detected: {file_name}")]
    ReservedFileName { file_name: String },

    /// The path shape cannot be mapped onto the host's native path rules
    #[error("Path format is not supported: {path} ({reason})")]
    NotSupported { path: String, reason: String },

    /// The host cannot provide a native capability for the requested platform
    #[error("{feature} is not available for {platform} paths on this host")]
    PlatformFeature {
        feature: &'static str,
        platform: Platform,
    },

    /// I/O error while resolving or creating paths
    #[error("I/O error: {message}")]
    Io { message: String },
}

impl From<std::io::Error> for PathError {
    fn from(err: std::io::Error) -> Self {
        PathError::Io {
            message: err.to_string(),
        }
    }
}

/// Result type for path operations
pub type Result<T> = std::result::Result<T, PathError>;
