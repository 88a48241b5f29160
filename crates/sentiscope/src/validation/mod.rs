//! Input validation and text sanitization.
//!
//! All checks are pure: failures come back as [`ValidationError`] values and
//! the caller decides whether to skip a row or abort.

mod error;
mod rules;

pub use error::{ValidationError, ValidationKind};
pub use rules::{
    file_too_large, sanitize_text, validate_csv_row, validate_file, validate_manual_text,
    CsvRow, FileInfo, MAX_FILE_SIZE, MAX_TEXT_LENGTH, TEXT_FIELD,
};
