//! CSV reader that turns an upload into analyzable texts.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, SentimentError};
use crate::validation::{
    sanitize_text, validate_csv_row, validate_file, CsvRow, FileInfo, ValidationError,
    ValidationKind, TEXT_FIELD,
};

use super::source::IngestOutcome;

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Field delimiter.
    pub delimiter: u8,
    /// Quote character.
    pub quote: u8,
    /// Maximum rows to read (None = all).
    pub max_rows: Option<usize>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            max_rows: None,
        }
    }
}

/// Reads header-led CSV uploads, validating and sanitizing each row.
pub struct CsvIngest {
    config: ParserConfig,
}

impl CsvIngest {
    /// Create an ingester with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create an ingester with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Ingest an uploaded file's bytes.
    ///
    /// Fails with `format`/`size` from file validation, `format` if the CSV
    /// cannot be read, and `content` if no usable text remains. Rows that
    /// fail row validation are skipped, not reported.
    pub fn ingest(&self, name: &str, bytes: &[u8]) -> std::result::Result<IngestOutcome, ValidationError> {
        let file = FileInfo::new(name, bytes.len() as u64);
        validate_file(&file)?;

        let rows = self.parse_rows(bytes)?;
        let total_rows = rows.len();

        let mut texts = Vec::new();
        for (index, row) in rows.iter().enumerate() {
            if let Err(err) = validate_csv_row(row) {
                debug!(row = index + 1, reason = %err, "skipping invalid row");
                continue;
            }
            let text = row.get(TEXT_FIELD).map(|t| sanitize_text(t));
            match text {
                Some(text) if !text.is_empty() => texts.push(text),
                _ => debug!(row = index + 1, "skipping row empty after sanitizing"),
            }
        }

        if texts.is_empty() {
            return Err(ValidationError::new(ValidationKind::Content, "No valid data found")
                .with_details("File contains no valid text entries"));
        }

        let skipped_rows = total_rows - texts.len();
        Ok(IngestOutcome {
            file,
            texts,
            total_rows,
            skipped_rows,
        })
    }

    /// Read a CSV file from disk and ingest it.
    pub fn ingest_path(&self, path: impl AsRef<Path>) -> Result<IngestOutcome> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| SentimentError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(self.ingest(&name, &bytes)?)
    }

    /// Parse bytes into rows keyed by header name.
    fn parse_rows(&self, bytes: &[u8]) -> std::result::Result<Vec<CsvRow>, ValidationError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .quote(self.config.quote)
            .has_headers(true)
            .flexible(true)
            .from_reader(bytes);

        let headers: Vec<String> = reader
            .byte_headers()
            .map_err(read_error)?
            .iter()
            .map(|h| String::from_utf8_lossy(h).trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for (row_idx, result) in reader.byte_records().enumerate() {
            if let Some(max) = self.config.max_rows {
                if row_idx >= max {
                    break;
                }
            }

            let record = result.map_err(read_error)?;
            // Fields past the header width have no name and are dropped.
            let row: CsvRow = headers
                .iter()
                .zip(record.iter())
                .map(|(h, v)| (h.clone(), String::from_utf8_lossy(v).into_owned()))
                .collect();
            rows.push(row);
        }

        Ok(rows)
    }
}

impl Default for CsvIngest {
    fn default() -> Self {
        Self::new()
    }
}

fn read_error(err: csv::Error) -> ValidationError {
    ValidationError::new(ValidationKind::Format, "Failed to read file").with_details(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rows_by_header() {
        let ingest = CsvIngest::new();
        let rows = ingest.parse_rows(b"id,text\n1,hello\n2,\"quoted, text\"").unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("text").map(String::as_str), Some("hello"));
        assert_eq!(rows[1].get("text").map(String::as_str), Some("quoted, text"));
        assert_eq!(rows[1].get_index(0).map(|(k, _)| k.as_str()), Some("id"));
    }

    #[test]
    fn test_short_rows_lack_fields() {
        let ingest = CsvIngest::new();
        let rows = ingest.parse_rows(b"id,text\n1").unwrap();
        assert!(rows[0].get("text").is_none());
    }

    #[test]
    fn test_ingest_skips_invalid_rows() {
        let ingest = CsvIngest::new();
        let long = "a".repeat(1001);
        let data = format!("text,id\nGreat!,1\n,2\n{},3\n\u{1F600},4\n  fine  ,5\n", long);
        let outcome = ingest.ingest("reviews.csv", data.as_bytes()).unwrap();

        assert_eq!(outcome.texts, vec!["Great!", "fine"]);
        assert_eq!(outcome.total_rows, 5);
        assert_eq!(outcome.skipped_rows, 3);
        assert_eq!(outcome.file.name, "reviews.csv");
    }

    #[test]
    fn test_ingest_without_text_column() {
        let err = CsvIngest::new()
            .ingest("data.csv", b"comment\nnice\n")
            .unwrap_err();
        assert_eq!(err.kind, ValidationKind::Content);
        assert_eq!(err.message, "No valid data found");
    }

    #[test]
    fn test_ingest_rejects_wrong_extension() {
        let err = CsvIngest::new().ingest("data.txt", b"text\nhi\n").unwrap_err();
        assert_eq!(err.kind, ValidationKind::Format);
    }

    #[test]
    fn test_max_rows() {
        let ingest = CsvIngest::with_config(ParserConfig {
            max_rows: Some(1),
            ..ParserConfig::default()
        });
        let outcome = ingest.ingest("a.csv", b"text\none\ntwo\n").unwrap();
        assert_eq!(outcome.texts, vec!["one"]);
    }
}
