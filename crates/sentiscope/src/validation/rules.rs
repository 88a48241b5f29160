//! File, row and text checks applied before anything reaches the classifier.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::error::{ValidationError, ValidationKind};

/// Maximum accepted upload size (5 MiB).
pub const MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// Maximum characters in a single row's `text` field.
pub const MAX_TEXT_LENGTH: usize = 1000;

/// Column that carries the text to analyze.
pub const TEXT_FIELD: &str = "text";

/// Name and size of an uploaded file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    /// File name as supplied by the uploader.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
}

impl FileInfo {
    /// Create file info from a name and byte length.
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// One parsed CSV row, keyed by header name in column order.
pub type CsvRow = IndexMap<String, String>;

/// Check that an upload looks like a CSV file of acceptable size.
pub fn validate_file(file: &FileInfo) -> Result<(), ValidationError> {
    if !file.name.ends_with(".csv") {
        return Err(ValidationError::new(ValidationKind::Format, "Invalid file format")
            .with_details("Please upload a CSV file"));
    }

    if file.size > MAX_FILE_SIZE {
        return Err(file_too_large());
    }

    Ok(())
}

/// The `size` error reported for uploads over [`MAX_FILE_SIZE`].
pub fn file_too_large() -> ValidationError {
    ValidationError::new(ValidationKind::Size, "File too large").with_details(format!(
        "Maximum file size is {}MB",
        MAX_FILE_SIZE / 1024 / 1024
    ))
}

/// Check that a row has a non-empty `text` field of at most [`MAX_TEXT_LENGTH`] characters.
///
/// Only the first violated constraint is reported.
pub fn validate_csv_row(row: &CsvRow) -> Result<(), ValidationError> {
    let violation = match row.get(TEXT_FIELD) {
        None => Some(format!("Field '{}' is required", TEXT_FIELD)),
        Some(text) if text.is_empty() => {
            Some(format!("Field '{}' must contain at least 1 character", TEXT_FIELD))
        }
        Some(text) if text.chars().count() > MAX_TEXT_LENGTH => Some(format!(
            "Field '{}' must contain at most {} characters",
            TEXT_FIELD, MAX_TEXT_LENGTH
        )),
        Some(_) => None,
    };

    match violation {
        Some(details) => Err(
            ValidationError::new(ValidationKind::Structure, "Invalid row structure")
                .with_details(details),
        ),
        None => Ok(()),
    }
}

/// Sanitize manually entered text and check it is usable.
///
/// Returns the sanitized text, or a `content` error when nothing is left or
/// the result is longer than [`MAX_TEXT_LENGTH`] characters.
pub fn validate_manual_text(text: &str) -> Result<String, ValidationError> {
    let text = sanitize_text(text);
    if text.is_empty() {
        return Err(ValidationError::new(ValidationKind::Content, "Please enter valid text"));
    }
    if text.chars().count() > MAX_TEXT_LENGTH {
        return Err(
            ValidationError::new(ValidationKind::Content, "Text too long").with_details(format!(
                "Text must be at most {} characters",
                MAX_TEXT_LENGTH
            )),
        );
    }
    Ok(text)
}

/// Strip control and non-ASCII characters, then trim surrounding whitespace.
pub fn sanitize_text(text: &str) -> String {
    let kept: String = text.chars().filter(|&c| is_safe_char(c)).collect();
    kept.trim().to_string()
}

fn is_safe_char(c: char) -> bool {
    let code = c as u32;
    // 0x80..=0x9F is covered by the ASCII bound.
    code <= 0x7F && code > 0x1F && code != 0x7F
}
