//! Sentiscope: sentiment classification for typed text and CSV uploads.
//!
//! Text goes through a remote classifier behind a local rate window and a
//! bounded retry loop. Results are collected in a session and rolled up into
//! a seven-day trend.
//!
//! # Core Principles
//!
//! - **Validate before sending**: uploads and rows are checked and text is
//!   sanitized before any API call
//! - **Bounded load**: a fixed-window rate limit and chunked batches
//! - **Ephemeral state**: history lives only as long as the [`Session`]
//!
//! # Example
//!
//! ```no_run
//! use sentiscope::{Analysis, CsvIngest, MockClassifier, SentimentClient, Session};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = SentimentClient::new(MockClassifier::new());
//! let mut session = Session::new();
//!
//! let upload = CsvIngest::new().ingest_path("reviews.csv")?;
//! let results = client.analyze_batch(&upload.texts).await?;
//! session.record_batch(Analysis::from_batch(&upload.texts, results));
//!
//! for point in session.trend() {
//!     println!("{}: +{} -{} ={}", point.name, point.positive, point.negative, point.neutral);
//! }
//! # Ok(())
//! # }
//! ```

pub mod classify;
pub mod client;
pub mod error;
pub mod input;
pub mod sentiment;
pub mod session;
pub mod validation;

pub use classify::{Classifier, HuggingFaceClassifier, MockClassifier};
pub use client::{ClientConfig, RateLimitState, RetryPolicy, SentimentClient};
pub use error::{Result, SentimentError};
pub use input::{CsvIngest, IngestOutcome};
pub use sentiment::{LabelScore, SentimentLabel, SentimentResult};
pub use session::{Analysis, AnalysisSource, Session, SessionSummary, TrendPoint};
pub use validation::{
    sanitize_text, validate_csv_row, validate_file, validate_manual_text, CsvRow, FileInfo,
    ValidationError, ValidationKind,
};
