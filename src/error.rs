//! Error types for BCF Inspector.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when parsing BCF archives.
#[derive(Debug, Error)]
pub enum BcfError {
    /// Failed to read the BCF file from disk.
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The bytes are not a readable zip container.
    #[error("archive is not a valid zip container: {source}")]
    ArchiveCorrupt {
        #[from]
        source: zip::result::ZipError,
    },

    /// An entry is listed in the archive but its data cannot be read.
    #[error("failed to read archive entry '{path}': {source}")]
    EntryRead {
        path: String,
        source: std::io::Error,
    },

    /// A topic's markup document is malformed or missing required elements.
    #[error("invalid markup for topic '{topic_id}': {source}")]
    MarkupParse {
        topic_id: String,
        source: MarkupError,
    },

    /// The caller raised the cancel flag while the archive was being parsed.
    #[error("parse cancelled")]
    Cancelled,
}

/// Errors produced while decoding a single `markup.bcf` document.
#[derive(Debug, Error)]
pub enum MarkupError {
    /// The text is not well-formed XML.
    #[error("XML parsing failed: {0}")]
    Xml(#[from] roxmltree::Error),

    /// A structurally required element is absent.
    #[error("no {0} element found")]
    MissingElement(&'static str),
}

/// Errors that can occur when exporting data.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to create the output file.
    #[error("failed to create file '{path}': {source}")]
    FileCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write data to the file.
    #[error("failed to write data: {message}")]
    WriteError { message: String },

    /// Failed to serialize data to JSON.
    #[error("JSON serialization failed: {source}")]
    JsonSerialize {
        #[from]
        source: serde_json::Error,
    },

    /// Failed to write CSV data.
    #[error("CSV write failed: {source}")]
    CsvWrite {
        #[from]
        source: csv::Error,
    },
}
