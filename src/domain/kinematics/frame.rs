//! Pose samples consumed by the kinematics core.

use serde::{Deserialize, Serialize};

/// A joint position in image pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyPoint {
    pub x: f64,
    pub y: f64,
}

impl KeyPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One sampled instant of a throw with the six tracked joints.
///
/// Frames arrive in non-decreasing `t` order. Equal timestamps are tolerated
/// but make the derivative at those samples undefined (non-finite).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Seconds since the start of the clip.
    pub t: f64,
    pub right_shoulder: KeyPoint,
    pub right_elbow: KeyPoint,
    pub right_wrist: KeyPoint,
    pub left_shoulder: KeyPoint,
    pub left_hip: KeyPoint,
    pub right_hip: KeyPoint,
}

/// Timestamps of a frame sequence.
pub(crate) fn timestamps(frames: &[Frame]) -> Vec<f64> {
    frames.iter().map(|f| f.t).collect()
}

/// Right-wrist x and y series of a frame sequence.
pub(crate) fn wrist_track(frames: &[Frame]) -> (Vec<f64>, Vec<f64>) {
    frames
        .iter()
        .map(|f| (f.right_wrist.x, f.right_wrist.y))
        .unzip()
}
