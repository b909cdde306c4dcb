//! Error types for relcut

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using RelcutError
pub type Result<T> = std::result::Result<T, RelcutError>;

/// Main error type for relcut operations
#[derive(Debug, Error)]
pub enum RelcutError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Version-related errors
    #[error(transparent)]
    Version(#[from] VersionError),

    /// Changelog-related errors
    #[error(transparent)]
    Changelog(#[from] ChangelogError),

    /// Manifest-related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found at {0}")]
    NotFound(PathBuf),

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Version-related errors
#[derive(Debug, Error)]
pub enum VersionError {
    /// Failed to parse version
    #[error("Failed to parse version '{0}': {1}")]
    ParseFailed(String, String),

    /// Invalid version format
    #[error("Invalid version format: {0}")]
    InvalidFormat(String),

    /// Semver error
    #[error("Semver error: {0}")]
    Semver(#[from] semver::Error),
}

/// Changelog-related errors
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// Working fragment not found
    #[error("Changelog fragment not found at {0}")]
    FragmentNotFound(PathBuf),

    /// Default template not found
    #[error("Changelog template not found at {0}")]
    TemplateNotFound(PathBuf),

    /// Archive not found
    #[error("Changelog archive not found: {0}")]
    ArchiveNotFound(String),

    /// Failed to write changelog
    #[error("Failed to write changelog: {0}")]
    WriteFailed(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Manifest-related errors
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Project manifest not found
    #[error("Project manifest not found at {0}")]
    NotFound(PathBuf),

    /// Failed to parse manifest
    #[error("Failed to parse manifest: {0}")]
    ParseError(String),

    /// Manifest is missing the version field
    #[error("Manifest at {0} has no version field")]
    MissingVersion(PathBuf),
}

impl RelcutError {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }
}
