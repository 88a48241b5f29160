//! Sentiment client: rate limiting, retries and batch chunking around a
//! [`Classifier`](crate::classify::Classifier).

mod config;
mod rate_limit;
mod retry;
mod sentiment_client;

pub use config::{ClientConfig, DEFAULT_MODEL};
pub use rate_limit::{Clock, ManualClock, RateLimitState, RateLimiter, SystemClock};
pub use retry::RetryPolicy;
pub use sentiment_client::SentimentClient;
