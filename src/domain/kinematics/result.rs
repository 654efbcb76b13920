//! Metrics records produced by an analysis.

use serde::{Deserialize, Serialize};

/// Release-point metrics of one throw, before a coaching tip is attached.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThrowMetrics {
    /// Torso line minus pelvis line at release, in `(-180, 180]` degrees.
    pub hip_shoulder_separation_deg: Option<f64>,
    /// Largest backward wrist displacement behind the shoulder before release.
    pub reachback_px: Option<f64>,
    /// Milliseconds from peak elbow angular velocity to release.
    pub elbow_peak_ms: Option<i64>,
    /// Wrist speed at release, scaled to metres per second.
    pub wrist_speed_mps: Option<f64>,
}

/// Final analysis artifact returned for every clip.
///
/// Serialized with the field names `hipShoulderSeparationDeg`,
/// `reachbackPx`, `elbowPeakMs`, `wristSpeedMps` and `tip`. Numeric fields
/// may be null; `tip` never is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsResult {
    pub hip_shoulder_separation_deg: Option<f64>,
    pub reachback_px: Option<f64>,
    pub elbow_peak_ms: Option<i64>,
    pub wrist_speed_mps: Option<f64>,
    pub tip: String,
}

impl MetricsResult {
    /// Attaches a coaching tip to computed metrics.
    pub fn with_tip(metrics: ThrowMetrics, tip: impl Into<String>) -> Self {
        Self {
            hip_shoulder_separation_deg: metrics.hip_shoulder_separation_deg,
            reachback_px: metrics.reachback_px,
            elbow_peak_ms: metrics.elbow_peak_ms,
            wrist_speed_mps: metrics.wrist_speed_mps,
            tip: tip.into(),
        }
    }

    /// A result with no metrics, only an explanatory tip.
    pub fn sentinel(tip: impl Into<String>) -> Self {
        Self::with_tip(ThrowMetrics::default(), tip)
    }

    /// The numeric part of this result.
    pub fn metrics(&self) -> ThrowMetrics {
        ThrowMetrics {
            hip_shoulder_separation_deg: self.hip_shoulder_separation_deg,
            reachback_px: self.reachback_px,
            elbow_peak_ms: self.elbow_peak_ms,
            wrist_speed_mps: self.wrist_speed_mps,
        }
    }

    /// True when no numeric metric could be computed.
    pub fn is_sentinel(&self) -> bool {
        self.metrics() == ThrowMetrics::default()
    }
}
