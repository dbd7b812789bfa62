//! Error types for the harvester.
//!
//! Every variant is recoverable at the file or archive-entry boundary: the
//! harvest run converts them into diagnostics instead of aborting.

use thiserror::Error;

/// Main error type for the harvester library.
#[derive(Debug, Error)]
pub enum HarvesterError {
    /// The document is not well-formed XML.
    #[error("Malformed XML document: {0}")]
    MalformedDocument(#[from] roxmltree::Error),

    /// An archive entry exists but could not be decoded as text.
    #[error("Unreadable archive entry '{path}': {reason}")]
    UnreadableArchiveEntry { path: String, reason: String },

    /// No dispatch rule matched the file name.
    #[error("Unrecognized file type: '{0}'")]
    UnrecognizedFileType(String),

    /// The input is not a readable zip archive.
    #[error("Archive could not be opened: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Selector text could not be parsed.
    #[error("Invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

/// Result type alias for harvester operations.
pub type Result<T> = std::result::Result<T, HarvesterError>;
