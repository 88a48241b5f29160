//! Classifier trait.

use async_trait::async_trait;

use crate::error::Result;
use crate::sentiment::LabelScore;

/// A service that labels a single text.
///
/// Implementations must be thread-safe (Send + Sync) so one instance can
/// serve concurrent calls within a batch chunk.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Classify `text` with the given model.
    ///
    /// # Returns
    /// Label candidates, best first. Callers use only the first one.
    async fn classify(&self, model: &str, text: &str) -> Result<Vec<LabelScore>>;

    /// Get the name of this classifier (for logging/debugging).
    fn name(&self) -> &str;
}
