//! Error types for nexjax

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using NexjaxError
pub type Result<T> = std::result::Result<T, NexjaxError>;

/// Main error type for nexjax operations
#[derive(Debug, Error)]
pub enum NexjaxError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Native project layout errors
    #[error(transparent)]
    Project(#[from] ProjectError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Pattern compilation error
    #[error("Invalid pattern: {0}")]
    Regex(#[from] regex::Error),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required package descriptor not found
    #[error("package.json not found at {0}")]
    NotFound(PathBuf),

    /// Required package descriptor could not be parsed
    #[error("Failed to parse {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    /// Override file could not be written
    #[error("Failed to write {path}: {message}")]
    WriteFailed { path: PathBuf, message: String },
}

/// Native iOS project layout errors
#[derive(Debug, Error)]
pub enum ProjectError {
    /// No `ios` directory under the project root
    #[error(
        "ios directory not found at {0}. Make sure you are in a React Native project root."
    )]
    DirectoryMissing(PathBuf),

    /// No `.xcodeproj` bundle inside the ios directory
    #[error("Xcode project (.xcodeproj) not found in {0}")]
    NotFound(PathBuf),

    /// The bundle exists but has no project.pbxproj
    #[error("Xcode project file not found: {0}")]
    FileMissing(PathBuf),
}
