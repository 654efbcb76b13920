//! HTTP adapters - REST API implementations.
//!
//! `app_router` assembles the analysis endpoints with the shared layer stack
//! (tracing, CORS, request timeout, upload body limit).

pub mod analysis;

use axum::{extract::DefaultBodyLimit, Router};
use http::HeaderValue;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::warn;

use crate::config::AppConfig;

// Re-export key types for convenience
pub use analysis::analysis_routes;
pub use analysis::AnalysisAppState;

/// Build the complete application router.
pub fn app_router(state: AnalysisAppState, config: &AppConfig) -> Router {
    analysis_routes()
        .with_state(state)
        .layer(DefaultBodyLimit::max(config.analysis.max_upload_bytes))
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(cors_layer(&config.server.allowed_origins()))
        .layer(TraceLayer::new_for_http())
}

/// CORS layer allowing `origins`, or any origin when the list is empty.
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods(Any)
        .allow_headers(Any)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tempfile::TempDir;
    use tower::ServiceExt;

    use crate::adapters::landmarks::InMemoryLandmarkSource;
    use crate::adapters::storage::TempFileUploadStorage;
    use crate::application::handlers::analysis::AnalyzeVideoHandler;

    fn state(dir: &TempDir, max_bytes: usize) -> AnalysisAppState {
        let handler = AnalyzeVideoHandler::new(
            Arc::new(InMemoryLandmarkSource::with_frames(vec![])),
            Arc::new(TempFileUploadStorage::new(dir.path(), max_bytes)),
            2,
        );
        AnalysisAppState::new(Arc::new(handler))
    }

    #[tokio::test]
    async fn health_is_served_through_layers() {
        let dir = TempDir::new().unwrap();
        let app = app_router(state(&dir, 1024), &AppConfig::default());

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn oversized_upload_is_rejected() {
        let dir = TempDir::new().unwrap();
        let mut config = AppConfig::default();
        config.analysis.max_upload_bytes = 64;
        let app = app_router(state(&dir, 64), &config);

        let boundary = "limit-boundary";
        let payload = "x".repeat(1024);
        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"clip.json\"\r\n\r\n\
             {payload}\r\n\
             --{boundary}--\r\n"
        );
        let request = Request::builder()
            .method("POST")
            .uri("/analyze")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[test]
    fn cors_layer_accepts_configured_origins() {
        // Construction must not panic for valid or invalid entries.
        let _ = cors_layer(&[]);
        let _ = cors_layer(&["http://localhost:8081".to_string(), "bad\norigin".to_string()]);
    }
}
