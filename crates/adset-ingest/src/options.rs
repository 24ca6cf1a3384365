//! Load configuration.

use crate::encoding::SourceEncoding;

/// Field delimiter used by the lead exports.
pub const DEFAULT_DELIMITER: u8 = b';';

/// How a lead export is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Encodings tried in order until one decodes the whole file.
    pub encodings: Vec<SourceEncoding>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            encodings: SourceEncoding::DEFAULT_CANDIDATES.to_vec(),
        }
    }
}

impl LoadOptions {
    /// Replace the encoding candidates. An empty list keeps the defaults.
    #[must_use]
    pub fn with_encodings(mut self, encodings: Vec<SourceEncoding>) -> Self {
        if !encodings.is_empty() {
            self.encodings = encodings;
        }
        self
    }

    pub(crate) fn tried_labels(&self) -> String {
        self.encodings
            .iter()
            .map(|encoding| encoding.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
