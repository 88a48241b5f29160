//! CLI command implementations.

pub mod analyze;
pub mod batch;
pub mod serve;

use std::sync::Arc;

use sentiscope::{Classifier, ClientConfig, HuggingFaceClassifier, MockClassifier, SentimentClient};
use tracing::warn;

use crate::cli::ClassifierChoice;

/// Global options that shape the sentiment client.
pub struct ClientOptions {
    pub classifier: ClassifierChoice,
    pub model: Option<String>,
}

/// Build a client from environment configuration and CLI overrides.
pub fn build_client(options: &ClientOptions) -> Result<SentimentClient, Box<dyn std::error::Error>> {
    let mut config = ClientConfig::from_env();
    if let Some(ref model) = options.model {
        config = config.with_model(model);
    }

    let classifier: Arc<dyn Classifier> = match options.classifier {
        ClassifierChoice::HuggingFace => {
            let hf = HuggingFaceClassifier::from_env()?;
            if !hf.has_api_key() {
                warn!("HUGGINGFACE_API_KEY is not set; requests will likely be rejected");
            }
            Arc::new(hf)
        }
        ClassifierChoice::Mock => Arc::new(MockClassifier::new()),
    };

    Ok(SentimentClient::with_config(classifier, config))
}
