//! HTTP handlers for analysis endpoints.

use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, warn};

use crate::application::handlers::analysis::{AnalyzeVideoCommand, AnalyzeVideoHandler};
use crate::domain::foundation::{DomainError, ErrorCode};

use super::dto::{ErrorResponse, HealthResponse};

/// Name of the multipart field carrying the clip.
const FILE_FIELD: &str = "file";

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AnalysisAppState {
    analyze_handler: Arc<AnalyzeVideoHandler>,
}

impl AnalysisAppState {
    pub fn new(analyze_handler: Arc<AnalyzeVideoHandler>) -> Self {
        Self { analyze_handler }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /analyze - Analyze an uploaded clip
pub async fn analyze_video(
    State(state): State<AnalysisAppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let Ok(mut multipart) = multipart else {
        return (StatusCode::BAD_REQUEST, Json(ErrorResponse::no_file())).into_response();
    };

    let cmd = loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => {
                return (StatusCode::BAD_REQUEST, Json(ErrorResponse::no_file())).into_response()
            }
            Err(e) => return multipart_error(e.status(), e.body_text()),
        };

        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        match field.bytes().await {
            Ok(bytes) => {
                break AnalyzeVideoCommand {
                    payload: bytes.to_vec(),
                    file_name,
                }
            }
            Err(e) => return multipart_error(e.status(), e.body_text()),
        }
    };

    match state.analyze_handler.handle(cmd).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => handle_analysis_error(e),
    }
}

/// GET /health - Liveness probe
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

fn multipart_error(status: StatusCode, message: String) -> Response {
    warn!(%status, %message, "Rejected multipart upload");
    let code = if status == StatusCode::PAYLOAD_TOO_LARGE {
        ErrorCode::PayloadTooLarge
    } else {
        ErrorCode::ValidationFailed
    };
    (status, Json(ErrorResponse::new(code, message))).into_response()
}

fn handle_analysis_error(e: DomainError) -> Response {
    let status = status_for(e.code);
    if status.is_server_error() {
        error!(error = %e, "Analysis failed");
    } else {
        warn!(error = %e, "Analysis rejected");
    }
    (status, Json(ErrorResponse::from(&e))).into_response()
}

pub(crate) fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
        ErrorCode::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        ErrorCode::UnsupportedFormat => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::ShapeMismatch | ErrorCode::LandmarksUnavailable | ErrorCode::StorageError => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
