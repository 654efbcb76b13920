//! Top-level analysis of a landmark frame sequence.

use super::coaching::coaching_tip;
use super::errors::KinematicsError;
use super::frame::Frame;
use super::metrics::compute_metrics;
use super::result::MetricsResult;

/// Tip returned when the landmark source found no body in the clip.
pub const NO_LANDMARKS_TIP: &str =
    "No body landmarks detected. Try better lighting and a full side view.";

/// Tip returned when the clip has too few frames for metrics.
pub const CLIP_TOO_SHORT_TIP: &str = "Clip too short. Record at least ~2\u{2013}3 seconds.";

/// Analyzes a frame sequence into a result that always carries a tip.
///
/// Missing or insufficient data produce sentinel results rather than errors.
///
/// # Errors
///
/// Propagates `ShapeMismatch` from the differentiator, which signals a bug
/// in series extraction rather than a bad clip.
pub fn analyze_sequence(frames: &[Frame]) -> Result<MetricsResult, KinematicsError> {
    if frames.is_empty() {
        return Ok(MetricsResult::sentinel(NO_LANDMARKS_TIP));
    }

    Ok(match compute_metrics(frames)? {
        Some(metrics) => MetricsResult::with_tip(metrics, coaching_tip(&metrics)),
        None => MetricsResult::sentinel(CLIP_TOO_SHORT_TIP),
    })
}
