//! CSV header normalization and inspection.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::encoding::{SourceEncoding, decode_with_fallback};
use crate::error::{IngestError, Result};
use crate::options::LoadOptions;

use super::reader::{csv_reader, read_bytes};

/// One header column as it appears in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderColumn {
    /// Zero-based position.
    pub index: usize,
    /// Spreadsheet column letter (`A`, `B`, ..., `AA`).
    pub letter: String,
    /// Column name after normalization.
    pub name: String,
}

/// Header row of a lead export plus the encoding it decoded with.
#[derive(Debug, Clone)]
pub struct HeaderInspection {
    pub encoding: SourceEncoding,
    pub columns: Vec<HeaderColumn>,
}

impl HeaderInspection {
    pub fn names(&self) -> impl Iterator<Item = &str> + Clone {
        self.columns.iter().map(|column| column.name.as_str())
    }
}

/// Spreadsheet-style letter for a zero-based column index.
pub fn column_letter(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// Makes header names unique and non-empty.
///
/// Blank names become `Unnamed: <index>`. Repeated names get `.1`, `.2`, ...
/// in order of appearance, so `venda;venda` reads as `venda;venda.1`.
pub fn normalize_headers<'a, I>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen: HashSet<String> = HashSet::new();
    let mut suffixes: HashMap<String, usize> = HashMap::new();
    let mut names = Vec::new();
    for (index, name) in raw.into_iter().enumerate() {
        let base = if name.trim().is_empty() {
            format!("Unnamed: {index}")
        } else {
            name.to_string()
        };
        let mut candidate = base.clone();
        if seen.contains(&candidate) {
            let suffix = suffixes.entry(base.clone()).or_insert(0);
            loop {
                *suffix += 1;
                candidate = format!("{base}.{suffix}");
                if !seen.contains(&candidate) {
                    break;
                }
            }
        }
        seen.insert(candidate.clone());
        names.push(candidate);
    }
    names
}

/// Reads only the header row of a lead export.
///
/// The whole file is still decoded, since an encoding is only accepted once
/// every byte is valid in it.
pub fn read_headers(path: &Path, options: &LoadOptions) -> Result<HeaderInspection> {
    let bytes = read_bytes(path)?;
    let Some((encoding, text)) = decode_with_fallback(&bytes, &options.encodings) else {
        return Err(IngestError::Undecodable {
            path: path.to_path_buf(),
            tried: options.tried_labels(),
        });
    };

    let mut reader = csv_reader(text.as_bytes(), options.delimiter);
    let header = match reader.records().next() {
        Some(record) => record.map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?,
        None => {
            return Err(IngestError::EmptyCsv {
                path: path.to_path_buf(),
            });
        }
    };

    let columns = normalize_headers(header.iter())
        .into_iter()
        .enumerate()
        .map(|(index, name)| HeaderColumn {
            index,
            letter: column_letter(index),
            name,
        })
        .collect();

    Ok(HeaderInspection { encoding, columns })
}
