//! AnalyzeVideoHandler - Command handler for analyzing one uploaded clip.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, info_span, warn, Instrument};

use crate::domain::foundation::{AnalysisId, DomainError, ValidationError};
use crate::domain::kinematics::{
    analyze_sequence, detect_release_index, MetricsResult, MIN_FRAMES,
};
use crate::ports::{LandmarkSource, UploadStorage};

/// File suffix used when the upload name carries no extension.
const DEFAULT_SUFFIX: &str = ".json";

/// Command to analyze an uploaded clip.
#[derive(Debug, Clone)]
pub struct AnalyzeVideoCommand {
    pub payload: Vec<u8>,
    /// Original file name of the upload, used only for its extension.
    pub file_name: Option<String>,
}

/// Handler for analyzing clips.
///
/// Stores the upload, extracts landmark frames, always removes the upload,
/// then runs the kinematics core.
pub struct AnalyzeVideoHandler {
    landmark_source: Arc<dyn LandmarkSource>,
    upload_storage: Arc<dyn UploadStorage>,
    frame_stride: usize,
}

impl AnalyzeVideoHandler {
    pub fn new(
        landmark_source: Arc<dyn LandmarkSource>,
        upload_storage: Arc<dyn UploadStorage>,
        frame_stride: usize,
    ) -> Self {
        Self {
            landmark_source,
            upload_storage,
            frame_stride,
        }
    }

    pub async fn handle(&self, cmd: AnalyzeVideoCommand) -> Result<MetricsResult, DomainError> {
        let analysis_id = AnalysisId::new();
        let span = info_span!("analyze_video", %analysis_id);
        self.run(cmd).instrument(span).await
    }

    async fn run(&self, cmd: AnalyzeVideoCommand) -> Result<MetricsResult, DomainError> {
        if cmd.payload.is_empty() {
            return Err(ValidationError::empty_field("file").into());
        }

        let suffix = upload_suffix(cmd.file_name.as_deref());
        let upload = self.upload_storage.persist(&cmd.payload, &suffix).await?;
        debug!(bytes = upload.size_bytes(), path = %upload.path().display(), "Stored upload");

        let extracted = self
            .landmark_source
            .extract_frames(upload.path(), self.frame_stride)
            .await;

        if let Err(e) = self.upload_storage.remove(&upload).await {
            warn!(error = %e, "Failed to remove stored upload");
        }

        let frames = extracted?;
        let outcome = outcome_for(frames.len());
        if outcome == AnalysisOutcome::Metrics {
            let release_index = detect_release_index(&frames)?;
            debug!(release_index, "Detected release");
        }
        let result = analyze_sequence(&frames)?;

        info!(
            frames = frames.len(),
            outcome = outcome.as_str(),
            tip = %result.tip,
            "Analysis complete"
        );

        Ok(result)
    }
}

/// Which branch of the analysis a clip takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AnalysisOutcome {
    NoLandmarks,
    ClipTooShort,
    Metrics,
}

impl AnalysisOutcome {
    fn as_str(self) -> &'static str {
        match self {
            AnalysisOutcome::NoLandmarks => "no_landmarks",
            AnalysisOutcome::ClipTooShort => "clip_too_short",
            AnalysisOutcome::Metrics => "metrics",
        }
    }
}

fn outcome_for(frame_count: usize) -> AnalysisOutcome {
    match frame_count {
        0 => AnalysisOutcome::NoLandmarks,
        n if n < MIN_FRAMES => AnalysisOutcome::ClipTooShort,
        _ => AnalysisOutcome::Metrics,
    }
}

/// Extension of the uploaded file name, with its dot, or the default suffix.
fn upload_suffix(file_name: Option<&str>) -> String {
    file_name
        .map(Path::new)
        .and_then(|p| p.extension())
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty() && e.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|e| format!(".{}", e.to_ascii_lowercase()))
        .unwrap_or_else(|| DEFAULT_SUFFIX.to_string())
}
