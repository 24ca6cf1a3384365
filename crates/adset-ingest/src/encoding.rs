//! Text encodings tried when decoding a lead export.
//!
//! Exports come out of spreadsheet tools on different machines, so the same
//! file may be UTF-8 or one of the Western single-byte code pages. Candidates
//! are tried in order and the first one that decodes every byte wins.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use encoding_rs::{UTF_8, WINDOWS_1252};

use crate::error::IngestError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// A candidate source encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceEncoding {
    Utf8,
    Latin1,
    Cp1252,
    Iso8859_1,
}

impl SourceEncoding {
    /// Default probing order.
    pub const DEFAULT_CANDIDATES: [SourceEncoding; 4] =
        [Self::Utf8, Self::Latin1, Self::Cp1252, Self::Iso8859_1];

    pub fn label(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Latin1 => "latin-1",
            Self::Cp1252 => "cp1252",
            Self::Iso8859_1 => "iso-8859-1",
        }
    }

    /// Decodes `bytes`, or `None` if they are not valid in this encoding.
    ///
    /// A leading UTF-8 byte-order mark is dropped when decoding as UTF-8.
    pub fn decode(self, bytes: &[u8]) -> Option<Cow<'_, str>> {
        match self {
            Self::Utf8 => {
                let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
                UTF_8.decode_without_bom_handling_and_without_replacement(bytes)
            }
            Self::Latin1 | Self::Iso8859_1 => Some(encoding_rs::mem::decode_latin1(bytes)),
            Self::Cp1252 => WINDOWS_1252.decode_without_bom_handling_and_without_replacement(bytes),
        }
    }
}

impl fmt::Display for SourceEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SourceEncoding {
    type Err = IngestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "utf-8" | "utf8" => Ok(Self::Utf8),
            "latin-1" | "latin1" | "l1" => Ok(Self::Latin1),
            "cp1252" | "windows-1252" => Ok(Self::Cp1252),
            "iso-8859-1" | "iso8859-1" => Ok(Self::Iso8859_1),
            _ => Err(IngestError::UnknownEncoding {
                label: s.to_string(),
            }),
        }
    }
}

/// Decodes with the first candidate that accepts every byte.
///
/// Returns `None` when all candidates fail (or the list is empty).
pub fn decode_with_fallback<'a>(
    bytes: &'a [u8],
    candidates: &[SourceEncoding],
) -> Option<(SourceEncoding, Cow<'a, str>)> {
    for &encoding in candidates {
        match encoding.decode(bytes) {
            Some(text) => {
                tracing::debug!(encoding = %encoding, "decoded source text");
                return Some((encoding, text));
            }
            None => {
                tracing::debug!(encoding = %encoding, "decoding failed, trying next encoding");
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_first() {
        let (encoding, text) =
            decode_with_fallback("Crédito".as_bytes(), &SourceEncoding::DEFAULT_CANDIDATES)
                .unwrap();
        assert_eq!(encoding, SourceEncoding::Utf8);
        assert_eq!(text, "Crédito");
    }

    #[test]
    fn test_latin1_fallback() {
        let bytes = b"Cr\xE9dito";
        let (encoding, text) =
            decode_with_fallback(bytes, &SourceEncoding::DEFAULT_CANDIDATES).unwrap();
        assert_eq!(encoding, SourceEncoding::Latin1);
        assert_eq!(text, "Crédito");
    }

    #[test]
    fn test_utf8_bom_stripped() {
        let text = SourceEncoding::Utf8.decode(b"\xEF\xBB\xBFadset").unwrap();
        assert_eq!(text, "adset");
    }

    #[test]
    fn test_exhausted() {
        assert!(decode_with_fallback(b"\xFF\xFE", &[SourceEncoding::Utf8]).is_none());
        assert!(decode_with_fallback(b"abc", &[]).is_none());
    }

    #[test]
    fn test_labels_round_trip() {
        for encoding in SourceEncoding::DEFAULT_CANDIDATES {
            assert_eq!(encoding.label().parse::<SourceEncoding>().unwrap(), encoding);
        }
        assert_eq!("UTF8".parse::<SourceEncoding>().unwrap(), SourceEncoding::Utf8);
        assert_eq!(
            "windows_1252".parse::<SourceEncoding>().unwrap(),
            SourceEncoding::Cp1252
        );
        assert!(matches!(
            "ebcdic".parse::<SourceEncoding>(),
            Err(IngestError::UnknownEncoding { .. })
        ));
    }
}
