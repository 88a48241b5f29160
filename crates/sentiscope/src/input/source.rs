//! Outcome of ingesting an uploaded CSV.

use serde::{Deserialize, Serialize};

use crate::validation::FileInfo;

/// Texts extracted from an upload, ready for classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestOutcome {
    /// The uploaded file.
    pub file: FileInfo,
    /// Sanitized, non-empty texts in file order.
    pub texts: Vec<String>,
    /// Number of data rows read (excluding header).
    pub total_rows: usize,
    /// Rows dropped by validation or left empty after sanitizing.
    pub skipped_rows: usize,
}

impl IngestOutcome {
    /// Number of texts accepted.
    pub fn accepted(&self) -> usize {
        self.texts.len()
    }
}
