//! CSV upload handler.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use sentiscope::Analysis;

use crate::server::error::ApiError;
use crate::server::extract::{ApiQuery, UploadBody};
use crate::server::state::AppState;

/// Query parameters for an upload.
#[derive(Debug, Deserialize)]
pub struct UploadQuery {
    /// Original file name; must end in `.csv`.
    pub filename: String,
}

/// Response for a processed upload.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// Recorded analyses, in file order.
    pub analyses: Vec<Analysis>,
    /// Data rows read from the file.
    pub total_rows: usize,
    /// Rows skipped by validation.
    pub skipped_rows: usize,
}

/// POST /api/upload?filename=<name> - Analyze every valid row of a CSV body.
pub async fn upload_csv(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<UploadQuery>,
    UploadBody(body): UploadBody,
) -> Result<Json<UploadResponse>, ApiError> {
    let upload = state.ingest.ingest(&query.filename, &body)?;
    info!(
        file = %upload.file.name,
        accepted = upload.accepted(),
        skipped = upload.skipped_rows,
        "processing upload"
    );

    let results = state.client.analyze_batch(&upload.texts).await?;
    let analyses = Analysis::from_batch(&upload.texts, results);

    state.session.write().await.record_batch(analyses.clone());

    Ok(Json(UploadResponse {
        analyses,
        total_rows: upload.total_rows,
        skipped_rows: upload.skipped_rows,
    }))
}
