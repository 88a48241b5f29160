//! Manual text analysis handler.

use axum::{extract::State, Json};
use serde::Deserialize;

use sentiscope::{validate_manual_text, Analysis};

use crate::server::error::ApiError;
use crate::server::extract::ApiJson;
use crate::server::state::AppState;

/// Request to analyze one text.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Raw text as typed by the user.
    pub text: String,
}

/// POST /api/analyze - Classify one text and record it.
pub async fn analyze_text(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<AnalyzeRequest>,
) -> Result<Json<Analysis>, ApiError> {
    let text = validate_manual_text(&request.text)?;

    let result = state.client.analyze_sentiment(&text).await?;
    let analysis = Analysis::manual(text, result);

    state.session.write().await.record_single(analysis.clone());

    Ok(Json(analysis))
}
