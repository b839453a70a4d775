// Error types for the map chooser adapter

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for adapter operations
#[derive(Debug, Error)]
pub enum AdapterError {
    /// A file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON document could not be parsed
    #[error("Failed to parse {what}: {source}")]
    Json {
        what: String,
        #[source]
        source: serde_json::Error,
    },

    /// Settings parsed but are out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl AdapterError {
    /// Create a new I/O error for `path`
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a new JSON error for the document described by `what`
    pub fn json(what: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            what: what.into(),
            source,
        }
    }
}

impl From<mapchooser_core::MapChooserError> for AdapterError {
    fn from(err: mapchooser_core::MapChooserError) -> Self {
        match err {
            mapchooser_core::MapChooserError::InvalidConfig(msg) => Self::InvalidConfig(msg),
            other => Self::InvalidConfig(other.to_string()),
        }
    }
}
