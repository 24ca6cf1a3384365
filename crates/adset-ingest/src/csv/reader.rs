//! Lead export reading with encoding fallback.

use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord};
use tracing::{debug, info, warn};

use adset_model::Record;

use crate::encoding::{SourceEncoding, decode_with_fallback};
use crate::error::{IngestError, Result};
use crate::options::LoadOptions;

use super::header::normalize_headers;

/// Counters describing what loading kept and dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Data rows read after the header.
    pub rows_read: usize,
    /// Rows dropped because every cell was empty.
    pub rows_dropped: usize,
    /// Columns dropped because every data cell was empty.
    pub columns_dropped: Vec<String>,
    /// Rows that had more cells than the header; the extras were ignored.
    pub rows_truncated: usize,
}

/// Result of loading a lead export.
#[derive(Debug, Clone)]
pub enum LoadOutcome {
    /// The file decoded with `encoding`.
    Decoded {
        encoding: SourceEncoding,
        /// Column names kept after dropping empty columns.
        columns: Vec<String>,
        records: Vec<Record>,
        stats: LoadStats,
    },
    /// No candidate encoding could decode the file. Treated as no data.
    Exhausted { tried: Vec<SourceEncoding> },
}

impl LoadOutcome {
    pub fn records(&self) -> &[Record] {
        match self {
            Self::Decoded { records, .. } => records,
            Self::Exhausted { .. } => &[],
        }
    }

    pub fn into_records(self) -> Vec<Record> {
        match self {
            Self::Decoded { records, .. } => records,
            Self::Exhausted { .. } => Vec::new(),
        }
    }

    pub fn encoding(&self) -> Option<SourceEncoding> {
        match self {
            Self::Decoded { encoding, .. } => Some(*encoding),
            Self::Exhausted { .. } => None,
        }
    }
}

pub(crate) fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| IngestError::from_io(path, e))
}

pub(crate) fn csv_reader(bytes: &[u8], delimiter: u8) -> Reader<&[u8]> {
    ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes)
}

/// Loads every record of a lead export.
///
/// Encodings from `options` are tried in order; the first that decodes the
/// whole file is used. If none does, [`LoadOutcome::Exhausted`] is returned
/// rather than an error. Columns and rows that are entirely empty are
/// dropped before records are built.
///
/// # Errors
///
/// Returns an error when the file cannot be read, has no header row, or the
/// CSV reader rejects its contents.
pub fn load_records(path: &Path, options: &LoadOptions) -> Result<LoadOutcome> {
    let bytes = read_bytes(path)?;
    let Some((encoding, text)) = decode_with_fallback(&bytes, &options.encodings) else {
        warn!(
            path = %path.display(),
            tried = %options.tried_labels(),
            "could not decode file with any candidate encoding"
        );
        return Ok(LoadOutcome::Exhausted {
            tried: options.encodings.clone(),
        });
    };
    info!(path = %path.display(), encoding = %encoding, "decoded lead export");

    let (columns, records, stats) = parse_records(path, text.as_bytes(), options.delimiter)?;
    info!(
        path = %path.display(),
        records = records.len(),
        columns = columns.len(),
        rows_dropped = stats.rows_dropped,
        columns_dropped = stats.columns_dropped.len(),
        "loaded lead records"
    );
    if stats.rows_truncated > 0 {
        warn!(
            path = %path.display(),
            rows = stats.rows_truncated,
            "rows with more cells than the header were truncated"
        );
    }

    Ok(LoadOutcome::Decoded {
        encoding,
        columns,
        records,
        stats,
    })
}

fn parse_records(
    path: &Path,
    bytes: &[u8],
    delimiter: u8,
) -> Result<(Vec<String>, Vec<Record>, LoadStats)> {
    let parse_error = |source| IngestError::CsvParse {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv_reader(bytes, delimiter);
    let mut rows = reader.records();
    let header: StringRecord = match rows.next() {
        Some(record) => record.map_err(parse_error)?,
        None => {
            return Err(IngestError::EmptyCsv {
                path: path.to_path_buf(),
            });
        }
    };
    let headers = normalize_headers(header.iter());
    let width = headers.len();

    let mut stats = LoadStats::default();
    let mut cells: Vec<Vec<String>> = Vec::new();
    for row in rows {
        let row = row.map_err(parse_error)?;
        if row.len() > width {
            stats.rows_truncated += 1;
        }
        let mut values: Vec<String> = row.iter().take(width).map(str::to_string).collect();
        values.resize(width, String::new());
        cells.push(values);
    }
    stats.rows_read = cells.len();

    let keep: Vec<bool> = (0..width)
        .map(|col| cells.iter().any(|row| !row[col].is_empty()))
        .collect();
    for (name, kept) in headers.iter().zip(&keep) {
        if !kept {
            debug!(column = %name, "dropping empty column");
            stats.columns_dropped.push(name.clone());
        }
    }

    let columns: Vec<String> = headers
        .iter()
        .zip(&keep)
        .filter(|(_, kept)| **kept)
        .map(|(name, _)| name.clone())
        .collect();

    let mut records = Vec::with_capacity(cells.len());
    for row in cells {
        let values: Vec<String> = row
            .into_iter()
            .zip(&keep)
            .filter(|(_, kept)| **kept)
            .map(|(value, _)| value)
            .collect();
        if values.iter().all(String::is_empty) {
            stats.rows_dropped += 1;
            continue;
        }
        records.push(columns.iter().cloned().zip(values).collect::<Record>());
    }

    Ok((columns, records, stats))
}
