//! HTTP adapter for analysis endpoints.
//!
//! Exposes the throw analysis pipeline via REST API:
//! - `POST /analyze` - Upload a clip and receive throw metrics with a coaching tip
//! - `GET /health` - Liveness probe

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{ErrorResponse, HealthResponse};
pub use handlers::{analyze_video, health, AnalysisAppState};
pub use routes::analysis_routes;
