//! Load-then-aggregate pipeline behind the `summarize` command.

use std::path::Path;
use std::time::Instant;

use tracing::{error, info, info_span};

use adset_ingest::{LoadOptions, LoadOutcome, SourceEncoding, load_records};
use adset_model::AdsetReport;
use adset_transform::aggregate;

/// Outcome of summarizing one lead export.
#[derive(Debug)]
pub struct SummarizeResult {
    /// Encoding the file decoded with; `None` if loading failed or no
    /// candidate encoding worked.
    pub encoding: Option<SourceEncoding>,
    /// Records that reached aggregation.
    pub record_count: usize,
    pub report: AdsetReport,
    /// Load failures reported to the operator.
    pub errors: Vec<String>,
}

impl SummarizeResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Loads `path` and aggregates its records per adset.
///
/// Never fails: a file that cannot be read yields an empty report with the
/// failure recorded in [`SummarizeResult::errors`], and a file no encoding
/// can decode yields an empty report without an error.
pub fn summarize_file(path: &Path, options: &LoadOptions) -> SummarizeResult {
    let span = info_span!("summarize", path = %path.display());
    let _guard = span.enter();
    let start = Instant::now();

    let mut errors = Vec::new();
    let (encoding, records) = match load_records(path, options) {
        Ok(outcome) => {
            let encoding = outcome.encoding();
            if let LoadOutcome::Exhausted { .. } = outcome {
                info!("no decodable data, continuing with an empty dataset");
            }
            (encoding, outcome.into_records())
        }
        Err(err) => {
            error!(error = %err, "failed to load lead export");
            errors.push(err.to_string());
            (None, Vec::new())
        }
    };

    let report = aggregate(&records);
    info!(
        records = records.len(),
        adsets = report.len(),
        duration_ms = start.elapsed().as_millis(),
        "summary complete"
    );

    SummarizeResult {
        encoding,
        record_count: records.len(),
        report,
        errors,
    }
}
