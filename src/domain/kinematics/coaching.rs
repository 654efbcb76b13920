//! Rule-based coaching tip selection.

use serde::{Deserialize, Serialize};

use super::result::ThrowMetrics;

/// Separation below this many degrees suggests late hip rotation.
pub const HIP_SEPARATION_THRESHOLD_DEG: f64 = 10.0;

/// Reachback shorter than this many pixels suggests a cramped wind-up.
pub const REACHBACK_THRESHOLD_PX: f64 = 120.0;

/// Elbow peak closer to release than this many milliseconds is a late snap.
pub const ELBOW_PEAK_THRESHOLD_MS: i64 = 40;

/// The coaching tips a throw can earn, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoachingTip {
    RotateHipsEarlier,
    ReachFartherBack,
    ExtendElbowEarlier,
    FollowThrough,
}

impl CoachingTip {
    /// Picks the first tip whose rule matches; falls back to [`CoachingTip::FollowThrough`].
    pub fn for_metrics(metrics: &ThrowMetrics) -> Self {
        if metrics
            .hip_shoulder_separation_deg
            .is_some_and(|deg| deg < HIP_SEPARATION_THRESHOLD_DEG)
        {
            CoachingTip::RotateHipsEarlier
        } else if metrics
            .reachback_px
            .is_some_and(|px| px < REACHBACK_THRESHOLD_PX)
        {
            CoachingTip::ReachFartherBack
        } else if metrics
            .elbow_peak_ms
            .is_some_and(|ms| ms < ELBOW_PEAK_THRESHOLD_MS)
        {
            CoachingTip::ExtendElbowEarlier
        } else {
            CoachingTip::FollowThrough
        }
    }

    /// The sentence shown to the thrower.
    pub fn message(&self) -> &'static str {
        match self {
            CoachingTip::RotateHipsEarlier => "Rotate your hips a touch earlier.",
            CoachingTip::ReachFartherBack => {
                "Reach a bit farther back before initiating the pull."
            }
            CoachingTip::ExtendElbowEarlier => {
                "Extend the elbow a bit earlier\u{2014}snap before release."
            }
            CoachingTip::FollowThrough => {
                "Nice throw\u{2014}focus on a relaxed, full follow\u{2011}through."
            }
        }
    }
}

/// Coaching sentence for a set of metrics.
pub fn coaching_tip(metrics: &ThrowMetrics) -> &'static str {
    CoachingTip::for_metrics(metrics).message()
}
