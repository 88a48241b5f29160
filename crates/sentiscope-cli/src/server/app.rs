//! Axum application setup.

use axum::{
    extract::DefaultBodyLimit,
    http::{StatusCode, Uri},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use sentiscope::validation::MAX_FILE_SIZE;

use super::handlers;
use super::state::AppState;

/// Create the Axum router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration for local development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Oversized uploads must reach the validator to get a `size` error.
    let body_limit = DefaultBodyLimit::max(2 * MAX_FILE_SIZE as usize);

    let api_routes = Router::new()
        // Classification
        .route("/analyze", post(handlers::analyze_text))
        .route("/upload", post(handlers::upload_csv))
        // History
        .route(
            "/results",
            get(handlers::list_results).delete(handlers::clear_results),
        )
        .route("/trend", get(handlers::get_trend))
        .route("/summary", get(handlers::get_summary))
        // Client status
        .route("/rate-limit", get(handlers::get_rate_limit));

    Router::new()
        .nest("/api", api_routes)
        .fallback(not_found)
        .layer(body_limit)
        .layer(cors)
        .with_state(state)
}

async fn not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "not_found",
            "message": format!("No route for {}", uri.path()),
        })),
    )
}

/// Start the web server.
pub async fn run_server(state: AppState, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(state);
    let addr = std::net::SocketAddr::from(([127, 0, 0, 1], port));

    info!(%addr, "dashboard API listening");
    println!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request};
    use serde_json::Value;
    use tower::ServiceExt;

    use sentiscope::{ClientConfig, MockClassifier, RetryPolicy, SentimentClient};

    use super::*;

    fn test_state(config: ClientConfig) -> AppState {
        AppState::new(SentimentClient::with_config(
            Arc::new(MockClassifier::new()),
            config,
        ))
    }

    async fn send(state: &AppState, request: Request<Body>) -> (StatusCode, Value) {
        let response = create_router(state.clone()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_analyze_records_result() {
        let state = test_state(ClientConfig::default());

        let (status, body) = send(&state, post_json("/api/analyze", json!({ "text": "  great day\u{7}  " }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["text"], "great day");
        assert_eq!(body["source"], "manual");
        assert_eq!(body["result"]["label"], "POSITIVE");

        let (_, results) = send(&state, get("/api/results")).await;
        assert_eq!(results.as_array().map(Vec::len), Some(1));

        let (_, rate) = send(&state, get("/api/rate-limit")).await;
        assert_eq!(rate["remaining"], 59);
        assert_eq!(rate["limit"], 60);
    }

    #[tokio::test]
    async fn test_analyze_rejects_empty_text() {
        let state = test_state(ClientConfig::default());

        let (status, body) = send(&state, post_json("/api/analyze", json!({ "text": "\u{1F600}" }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Please enter valid text");
        assert_eq!(state.client.rate_limit().remaining, 60);
    }

    #[tokio::test]
    async fn test_rate_limited_is_429() {
        let config = ClientConfig::default()
            .with_rate_limit(1, Duration::from_secs(60))
            .with_retry(RetryPolicy::none());
        let state = test_state(config);

        let (first, _) = send(&state, post_json("/api/analyze", json!({ "text": "one" }))).await;
        let (second, body) = send(&state, post_json("/api/analyze", json!({ "text": "two" }))).await;

        assert_eq!(first, StatusCode::OK);
        assert_eq!(second, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(body["message"], "Rate limit exceeded. Please try again later.");
    }

    #[tokio::test]
    async fn test_upload_then_trend_and_summary() {
        let state = test_state(ClientConfig::default());
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/upload?filename=reviews.csv")
            .header("content-type", "text/csv")
            .body(Body::from("id,text\n1,good food\n2,bad service\n3,\n4,fine\n"))
            .unwrap();

        let (status, body) = send(&state, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_rows"], 4);
        assert_eq!(body["skipped_rows"], 1);
        assert_eq!(body["analyses"][0]["text"], "good food");
        assert_eq!(body["analyses"][0]["source"], "csv");

        let (_, trend) = send(&state, get("/api/trend")).await;
        let days = trend.as_array().unwrap();
        assert_eq!(days.len(), 7);
        let count = |key: &str| days.iter().map(|d| d[key].as_u64().unwrap()).sum::<u64>();
        assert_eq!(count("positive"), 1);
        assert_eq!(count("negative"), 1);
        assert_eq!(count("neutral"), 1);

        let (_, summary) = send(&state, get("/api/summary")).await;
        assert_eq!(summary["total"], 3);
        assert_eq!(summary["from_csv"], 3);
    }

    #[tokio::test]
    async fn test_upload_wrong_extension_is_format_error() {
        let state = test_state(ClientConfig::default());
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/upload?filename=notes.txt")
            .body(Body::from("text\nhello\n"))
            .unwrap();

        let (status, body) = send(&state, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "format");
        assert_eq!(body["message"], "Invalid file format");
        assert_eq!(body["details"], "Please upload a CSV file");
    }

    #[tokio::test]
    async fn test_upload_too_large_is_413() {
        let state = test_state(ClientConfig::default());
        let mut csv = String::from("text\n");
        csv.push_str(&"x".repeat(MAX_FILE_SIZE as usize + 1));
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/upload?filename=big.csv")
            .body(Body::from(csv))
            .unwrap();

        let (status, body) = send(&state, request).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["error"], "size");
    }

    #[tokio::test]
    async fn test_upload_over_body_limit_is_size_error() {
        let state = test_state(ClientConfig::default());
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/upload?filename=huge.csv")
            .body(Body::from(vec![b'x'; 2 * MAX_FILE_SIZE as usize + 1]))
            .unwrap();

        let (status, body) = send(&state, request).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["error"], "size");
        assert_eq!(body["message"], "File too large");
        assert_eq!(body["details"], "Maximum file size is 5MB");
    }

    #[tokio::test]
    async fn test_upload_without_filename_is_json_error() {
        let state = test_state(ClientConfig::default());
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/upload")
            .body(Body::from("text\nhello\n"))
            .unwrap();

        let (status, body) = send(&state, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "bad_request");
        assert!(body["message"].as_str().unwrap().contains("filename"));
    }

    #[tokio::test]
    async fn test_malformed_json_is_json_error() {
        let state = test_state(ClientConfig::default());
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/analyze")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let (status, body) = send(&state, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "bad_request");
        assert_eq!(state.client.rate_limit().remaining, 60);
    }

    #[tokio::test]
    async fn test_analyze_rejects_text_over_limit() {
        let state = test_state(ClientConfig::default());
        let text = "a".repeat(1001);

        let (status, body) = send(&state, post_json("/api/analyze", json!({ "text": text }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "content");
        assert_eq!(body["message"], "Text too long");
    }

    #[tokio::test]
    async fn test_clear_results() {
        let state = test_state(ClientConfig::default());
        send(&state, post_json("/api/analyze", json!({ "text": "hello" }))).await;

        let request = Request::builder()
            .method(Method::DELETE)
            .uri("/api/results")
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(&state, request).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(state.session.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let state = test_state(ClientConfig::default());
        let (status, body) = send(&state, get("/api/nope")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
    }
}
