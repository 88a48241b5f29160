//! Result list, trend and status handlers.

use axum::{extract::State, http::StatusCode, Json};

use sentiscope::{Analysis, RateLimitState, SessionSummary, TrendPoint};

use crate::server::state::AppState;

/// GET /api/results - All analyses, newest first.
pub async fn list_results(State(state): State<AppState>) -> Json<Vec<Analysis>> {
    Json(state.session.read().await.analyses().to_vec())
}

/// DELETE /api/results - Forget all analyses.
pub async fn clear_results(State(state): State<AppState>) -> StatusCode {
    state.session.write().await.clear();
    StatusCode::NO_CONTENT
}

/// GET /api/trend - Seven-day chart data, oldest day first.
pub async fn get_trend(State(state): State<AppState>) -> Json<Vec<TrendPoint>> {
    Json(state.session.read().await.trend())
}

/// GET /api/summary - Totals across the session.
pub async fn get_summary(State(state): State<AppState>) -> Json<SessionSummary> {
    Json(state.session.read().await.summary())
}

/// GET /api/rate-limit - Current rate window.
pub async fn get_rate_limit(State(state): State<AppState>) -> Json<RateLimitState> {
    Json(state.client.rate_limit())
}
