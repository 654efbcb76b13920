//! Landmark Source Port - Pose landmark extraction interface.
//!
//! The kinematics core never sees video. An upstream pose detector turns a
//! clip into per-frame joint positions; this port is the narrow seam through
//! which those positions reach the domain.

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::kinematics::Frame;

/// Port for turning a stored clip into an ordered frame sequence.
///
/// # Contract
///
/// Implementations must:
/// - Return frames in ascending `t` order
/// - Sample only every `stride`-th source frame
/// - Omit frames where detection failed or any tracked joint is missing
/// - Return an empty sequence, not an error, when no body was found
#[async_trait]
pub trait LandmarkSource: Send + Sync {
    /// Extract frames from the clip stored at `path`.
    async fn extract_frames(
        &self,
        path: &Path,
        stride: usize,
    ) -> Result<Vec<Frame>, LandmarkSourceError>;
}

/// Errors from landmark extraction.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LandmarkSourceError {
    #[error("Clip not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Unreadable pose track: {0}")]
    Parse(String),

    #[error("Invalid pose track: {0}")]
    InvalidTrack(String),
}

impl LandmarkSourceError {
    pub fn code(&self) -> ErrorCode {
        match self {
            LandmarkSourceError::Parse(_) | LandmarkSourceError::InvalidTrack(_) => {
                ErrorCode::UnsupportedFormat
            }
            LandmarkSourceError::NotFound(_) | LandmarkSourceError::Io(_) => {
                ErrorCode::LandmarksUnavailable
            }
        }
    }
}

impl From<LandmarkSourceError> for DomainError {
    fn from(err: LandmarkSourceError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_errors_map_to_unsupported_format() {
        let err: DomainError = LandmarkSourceError::Parse("eof".into()).into();
        assert_eq!(err.code, ErrorCode::UnsupportedFormat);
        assert_eq!(err.message, "Unreadable pose track: eof");
    }

    #[test]
    fn io_errors_map_to_landmarks_unavailable() {
        let err: DomainError = LandmarkSourceError::Io("denied".into()).into();
        assert_eq!(err.code, ErrorCode::LandmarksUnavailable);
    }
}
