//! Pose-track File Adapter - Implementation of LandmarkSource.
//!
//! Reads the per-frame output of an upstream pose detector from a JSON (or
//! YAML) document and turns it into the frame sequence the kinematics core
//! consumes.
//!
//! # Document Format
//!
//! ```text
//! {
//!   "fps": 30.0,
//!   "width": 1280,
//!   "height": 720,
//!   "frames": [
//!     { "landmarks": { "right_shoulder": { "x": 0.41, "y": 0.33 }, ... } },
//!     { "landmarks": null },
//!     ...
//!   ]
//! }
//! ```
//!
//! Landmark coordinates are normalized to the image; pixel positions are
//! `x * width` and `y * height`. Entry `i` of `frames` is source frame `i`
//! of the clip, so its timestamp is `i / fps`.

use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;
use tokio::fs;
use tracing::debug;

use crate::domain::kinematics::{Frame, KeyPoint};
use crate::ports::{LandmarkSource, LandmarkSourceError};

/// Frame rate assumed when a track does not declare a usable one.
pub const DEFAULT_FPS: f64 = 30.0;

/// Encoding of a pose-track document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackFormat {
    Json,
    Yaml,
}

impl TrackFormat {
    /// Picks the format from a file extension; anything but YAML is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml") | Some("yml") => TrackFormat::Yaml,
            _ => TrackFormat::Json,
        }
    }
}

/// A landmark in normalized image coordinates.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct NormalizedLandmark {
    pub x: f64,
    pub y: f64,
}

/// The joints tracked for a throw; any may be missing from a detection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrackedJoints {
    #[serde(default)]
    pub right_shoulder: Option<NormalizedLandmark>,
    #[serde(default)]
    pub right_elbow: Option<NormalizedLandmark>,
    #[serde(default)]
    pub right_wrist: Option<NormalizedLandmark>,
    #[serde(default)]
    pub left_shoulder: Option<NormalizedLandmark>,
    #[serde(default)]
    pub left_hip: Option<NormalizedLandmark>,
    #[serde(default)]
    pub right_hip: Option<NormalizedLandmark>,
}

/// One source frame; `landmarks` is null when no body was detected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrackFrame {
    #[serde(default)]
    pub landmarks: Option<TrackedJoints>,
}

/// A whole pose-track document.
#[derive(Debug, Clone, Deserialize)]
pub struct PoseTrack {
    #[serde(default)]
    pub fps: Option<f64>,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub frames: Vec<TrackFrame>,
}

impl PoseTrack {
    /// Decodes a document in the given format.
    pub fn parse(bytes: &[u8], format: TrackFormat) -> Result<Self, LandmarkSourceError> {
        match format {
            TrackFormat::Json => serde_json::from_slice(bytes)
                .map_err(|e| LandmarkSourceError::Parse(e.to_string())),
            TrackFormat::Yaml => serde_yaml::from_slice(bytes)
                .map_err(|e| LandmarkSourceError::Parse(e.to_string())),
        }
    }

    /// Samples every `stride`-th frame and converts it to pixel coordinates.
    ///
    /// Frames without a detection, or missing any tracked joint, are dropped.
    pub fn into_frames(
        self,
        stride: usize,
        default_fps: f64,
    ) -> Result<Vec<Frame>, LandmarkSourceError> {
        if stride == 0 {
            return Err(LandmarkSourceError::InvalidTrack(
                "frame stride must be at least 1".to_string(),
            ));
        }
        if !(self.width.is_finite() && self.width > 0.0)
            || !(self.height.is_finite() && self.height > 0.0)
        {
            return Err(LandmarkSourceError::InvalidTrack(format!(
                "frame size must be positive, got {}x{}",
                self.width, self.height
            )));
        }

        let fps = self
            .fps
            .filter(|fps| fps.is_finite() && *fps > 0.0)
            .unwrap_or(default_fps);
        let (width, height) = (self.width, self.height);
        let to_pixels = |lm: NormalizedLandmark| KeyPoint::new(lm.x * width, lm.y * height);

        let frames = self
            .frames
            .into_iter()
            .enumerate()
            .step_by(stride)
            .filter_map(|(i, frame)| {
                let joints = frame.landmarks?;
                Some(Frame {
                    t: i as f64 / fps,
                    right_shoulder: to_pixels(joints.right_shoulder?),
                    right_elbow: to_pixels(joints.right_elbow?),
                    right_wrist: to_pixels(joints.right_wrist?),
                    left_shoulder: to_pixels(joints.left_shoulder?),
                    left_hip: to_pixels(joints.left_hip?),
                    right_hip: to_pixels(joints.right_hip?),
                })
            })
            .collect();

        Ok(frames)
    }
}

/// Landmark source reading pose-track documents from disk.
#[derive(Debug, Clone)]
pub struct PoseTrackFileSource {
    default_fps: f64,
}

impl PoseTrackFileSource {
    pub fn new(default_fps: f64) -> Self {
        Self { default_fps }
    }
}

impl Default for PoseTrackFileSource {
    fn default() -> Self {
        Self::new(DEFAULT_FPS)
    }
}

#[async_trait]
impl LandmarkSource for PoseTrackFileSource {
    async fn extract_frames(
        &self,
        path: &Path,
        stride: usize,
    ) -> Result<Vec<Frame>, LandmarkSourceError> {
        let bytes = fs::read(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LandmarkSourceError::NotFound(path.display().to_string())
            } else {
                LandmarkSourceError::Io(e.to_string())
            }
        })?;

        let track = PoseTrack::parse(&bytes, TrackFormat::from_path(path))?;
        let source_frames = track.frames.len();
        let frames = track.into_frames(stride, self.default_fps)?;

        debug!(
            source_frames,
            sampled_frames = frames.len(),
            stride,
            "Extracted frames from pose track"
        );

        Ok(frames)
    }
}
