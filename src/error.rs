//! Error types for Brewtagger
//!
//! All modules use `BrewtaggerResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Brewtagger operations
pub type BrewtaggerResult<T> = Result<T, BrewtaggerError>;

/// All errors that can occur in Brewtagger
#[derive(Error, Debug)]
pub enum BrewtaggerError {
    // Environment errors
    #[error("Required CLI not found: {name}")]
    ToolNotFound { name: String },

    #[error("mas command not found. Please install it with: brew install mas")]
    MasNotInstalled,

    // Discovery errors
    #[error("Failed to list installed casks: {0}")]
    CaskList(#[source] Box<BrewtaggerError>),

    #[error("Failed to read metadata for cask {cask}: {reason}")]
    CaskMetadata { cask: String, reason: String },

    #[error("Failed to list App Store apps: {0}")]
    StoreList(#[source] Box<BrewtaggerError>),

    #[error("Failed to list {path}: {source}")]
    ApplicationsDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Process errors
    #[error("Command failed: {command}")]
    CommandFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command execution error: {command}, exit code: {code}, stderr: {stderr}")]
    CommandExecution {
        command: String,
        code: i32,
        stderr: String,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl BrewtaggerError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a command failed error
    pub fn command_failed(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::CommandFailed {
            command: command.into(),
            source,
        }
    }

    /// Create a command execution error
    pub fn command_exec(
        command: impl Into<String>,
        code: i32,
        stderr: impl Into<String>,
    ) -> Self {
        Self::CommandExecution {
            command: command.into(),
            code,
            stderr: stderr.into(),
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::MasNotInstalled => Some("Run: brew install mas"),
            Self::ToolNotFound { name } => match name.rsplit('/').next() {
                Some("brew") => Some("Install Homebrew from https://brew.sh"),
                Some("mas") => Some("Run: brew install mas"),
                Some("tag") => Some("Run: brew install tag"),
                _ => None,
            },
            Self::CaskList(inner) | Self::StoreList(inner) => inner.hint(),
            Self::ApplicationsDir { .. } => {
                Some("Set tagging.applications_dir in the config file")
            }
            _ => None,
        }
    }
}
