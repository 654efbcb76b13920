//! Kinematics Module - Throw metrics from pose landmark sequences.
//!
//! Everything here is a pure, synchronous transformation of an in-memory
//! frame sequence. Analyses of different clips share no state and can run
//! on any thread.
//!
//! # Components
//!
//! - `geometry` - Angles between points and vectors
//! - `differentiator` - Derivatives over irregular timestamps
//! - `release` - Release instant from peak wrist speed
//! - `metrics` - Hip-shoulder separation, reachback, elbow timing, wrist speed
//! - `coaching` - Ordered rules choosing one coaching tip
//! - `facade` - Entry point adding sentinel results for missing or short clips

mod coaching;
mod differentiator;
mod errors;
mod facade;
mod frame;
mod geometry;
mod metrics;
mod release;
mod result;

pub use coaching::{
    coaching_tip, CoachingTip, ELBOW_PEAK_THRESHOLD_MS, HIP_SEPARATION_THRESHOLD_DEG,
    REACHBACK_THRESHOLD_PX,
};
pub use differentiator::finite_diff;
pub use errors::KinematicsError;
pub use facade::{analyze_sequence, CLIP_TOO_SHORT_TIP, NO_LANDMARKS_TIP};
pub use frame::{Frame, KeyPoint};
pub use geometry::{angle_deg, elbow_angle_deg, line_angle, normalize_angle};
pub use metrics::{compute_metrics, hip_shoulder_separation, METERS_PER_PIXEL, MIN_FRAMES};
pub use release::{detect_release_index, wrist_speed, SMOOTHING_KERNEL};
pub use result::{MetricsResult, ThrowMetrics};
