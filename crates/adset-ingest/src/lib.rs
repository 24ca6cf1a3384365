//! Lead export ingestion.
//!
//! This crate turns a semicolon-delimited lead export into [`Record`]s.
//!
//! # Features
//!
//! - **Encoding fallback**: try UTF-8, Latin-1, CP1252, ISO-8859-1 in order
//! - **Empty data dropping**: columns and rows with no data are removed
//! - **Header inspection**: list column positions and names of a file
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use adset_ingest::{LoadOptions, load_records};
//!
//! let outcome = load_records(Path::new("leads.csv"), &LoadOptions::default())?;
//! let records = outcome.into_records();
//! ```
//!
//! [`Record`]: adset_model::Record

mod csv;
mod encoding;
mod error;
mod options;

// === Error Types ===
pub use error::{IngestError, Result};

// === Configuration ===
pub use encoding::{SourceEncoding, decode_with_fallback};
pub use options::{DEFAULT_DELIMITER, LoadOptions};

// === CSV Reading ===
pub use self::csv::{
    HeaderColumn, HeaderInspection, LoadOutcome, LoadStats, column_letter, load_records,
    normalize_headers, read_headers,
};
