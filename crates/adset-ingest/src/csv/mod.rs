//! CSV reading utilities.

mod header;
mod reader;

pub use header::{
    HeaderColumn, HeaderInspection, column_letter, normalize_headers, read_headers,
};
pub use reader::{LoadOutcome, LoadStats, load_records};
