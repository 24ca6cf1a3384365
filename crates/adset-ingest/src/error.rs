//! Error types for lead export ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a lead export.
///
/// Loading records treats undecodable text as "no data" rather than an error;
/// see [`crate::LoadOutcome::Exhausted`]. Header inspection reports it as
/// [`IngestError::Undecodable`].
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// The csv reader rejected the decoded text.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// No header row could be read.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// None of the candidate encodings could decode the file.
    #[error("could not decode {path} with any of: {tried}")]
    Undecodable { path: PathBuf, tried: String },

    // === Configuration Errors ===
    /// Encoding label not among the supported candidates.
    #[error("unsupported encoding '{label}'")]
    UnknownEncoding { label: String },
}

impl IngestError {
    pub(crate) fn from_io(path: &std::path::Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source: err,
            }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
