//! Axum router configuration for analysis endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{analyze_video, health, AnalysisAppState};

/// Create the analysis API router.
///
/// # Routes
///
/// - `POST /analyze` - Analyze an uploaded clip (multipart field `file`)
/// - `GET /health` - Liveness probe
pub fn analysis_routes() -> Router<AnalysisAppState> {
    Router::new()
        .route("/analyze", post(analyze_video))
        .route("/health", get(health))
}
