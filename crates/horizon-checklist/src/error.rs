//! Error types for the checklist widget.

use std::path::PathBuf;

/// Result type alias for checklist operations.
pub type Result<T> = std::result::Result<T, CheckListError>;

/// Errors that can occur while building catalogs, loading configuration, or
/// mounting a [`CheckList`](crate::widget::CheckList).
///
/// Nothing that happens after a successful mount is reported through this
/// type: reconciliation and toggling never fail, they at worst do nothing.
#[derive(Debug, thiserror::Error)]
pub enum CheckListError {
    /// A bound collection was not a proper sequence, or held a malformed entry.
    #[error("Malformed '{binding}' binding: {reason}")]
    MalformedBinding {
        binding: &'static str,
        reason: String,
    },

    /// Two catalog entries share the same value.
    #[error("Duplicate catalog value '{value}' at positions {first} and {second}")]
    DuplicateValue {
        value: String,
        first: usize,
        second: usize,
    },

    /// The container already hosts a mounted list.
    #[error("Container '{container}' already has a mounted list")]
    ContainerInUse { container: String },

    /// A configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration TOML could not be parsed.
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration could not be serialized to TOML.
    #[error("Failed to serialize configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// Configuration file could not be read.
    #[error("Failed to read configuration '{path}': {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON text could not be parsed at all.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl CheckListError {
    /// Create a malformed-binding error.
    pub fn malformed(binding: &'static str, reason: impl Into<String>) -> Self {
        Self::MalformedBinding {
            binding,
            reason: reason.into(),
        }
    }

    /// Create a configuration I/O error.
    pub fn config_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigIo {
            path: path.into(),
            source,
        }
    }
}
