//! Remote sentiment classification.
//!
//! The [`Classifier`] trait is the seam between [`SentimentClient`] and the
//! service that actually labels text.
//!
//! # Implementations
//!
//! - **HuggingFace** - hosted inference API (reads `HUGGINGFACE_API_KEY`)
//! - **Mock** - keyword heuristics with scriptable failures, no network
//!
//! [`SentimentClient`]: crate::SentimentClient

mod classifier;
mod huggingface;
mod mock;

pub use classifier::Classifier;
pub use huggingface::{HuggingFaceClassifier, DEFAULT_API_URL};
pub use mock::MockClassifier;
