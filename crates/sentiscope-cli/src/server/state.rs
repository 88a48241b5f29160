//! Application state for the web server.

use std::sync::Arc;
use tokio::sync::RwLock;

use sentiscope::{CsvIngest, SentimentClient, Session};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Client used for every classification request.
    pub client: Arc<SentimentClient>,
    /// Results recorded since the server started.
    pub session: Arc<RwLock<Session>>,
    /// Reader for uploaded CSV files.
    pub ingest: Arc<CsvIngest>,
}

impl AppState {
    /// Create new application state with an empty session.
    pub fn new(client: SentimentClient) -> Self {
        Self {
            client: Arc::new(client),
            session: Arc::new(RwLock::new(Session::new())),
            ingest: Arc::new(CsvIngest::new()),
        }
    }
}
