//! In-memory Landmark Source - Fixed frame sequences for tests and demos.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::kinematics::Frame;
use crate::ports::{LandmarkSource, LandmarkSourceError};

/// Landmark source that ignores the clip and returns preset frames.
///
/// Every call is recorded so callers can assert on the requested path and
/// stride.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLandmarkSource {
    frames: Vec<Frame>,
    failure: Option<LandmarkSourceError>,
    calls: Arc<Mutex<Vec<(PathBuf, usize)>>>,
}

impl InMemoryLandmarkSource {
    /// Source that yields `frames` for every clip.
    pub fn with_frames(frames: Vec<Frame>) -> Self {
        Self {
            frames,
            ..Self::default()
        }
    }

    /// Source that fails every extraction with `error`.
    pub fn failing(error: LandmarkSourceError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    /// Paths and strides of every extraction so far.
    pub fn calls(&self) -> Vec<(PathBuf, usize)> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl LandmarkSource for InMemoryLandmarkSource {
    async fn extract_frames(
        &self,
        path: &Path,
        stride: usize,
    ) -> Result<Vec<Frame>, LandmarkSourceError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((path.to_path_buf(), stride));
        }
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(self.frames.clone()),
        }
    }
}
