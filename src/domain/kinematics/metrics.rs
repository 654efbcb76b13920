//! Release-point metrics over a frame sequence.

use super::differentiator::finite_diff;
use super::errors::KinematicsError;
use super::frame::{timestamps, Frame};
use super::geometry::{elbow_angle_deg, line_angle, normalize_angle};
use super::release::{argmax, detect_release_index, wrist_speed};
use super::result::ThrowMetrics;

/// Shortest clip, in frames, for which metrics are computed.
pub const MIN_FRAMES: usize = 5;

/// Pixel-to-metre scale for wrist speed. Uncalibrated placeholder.
pub const METERS_PER_PIXEL: f64 = 0.002;

/// Elbow timing needs more pre-release samples than this.
const MIN_PRE_RELEASE_SAMPLES: usize = 3;

/// Computes the four release-point metrics.
///
/// Returns `Ok(None)` when the clip has fewer than [`MIN_FRAMES`] frames.
pub fn compute_metrics(frames: &[Frame]) -> Result<Option<ThrowMetrics>, KinematicsError> {
    if frames.len() < MIN_FRAMES {
        return Ok(None);
    }

    let rel = detect_release_index(frames)?;
    let t = timestamps(frames);

    Ok(Some(ThrowMetrics {
        hip_shoulder_separation_deg: Some(hip_shoulder_separation(&frames[rel])),
        reachback_px: Some(reachback(frames, rel)),
        elbow_peak_ms: elbow_peak_ms(frames, &t, rel)?,
        wrist_speed_mps: Some(wrist_speed(frames)?[rel] * METERS_PER_PIXEL),
    }))
}

/// Torso line angle minus pelvis line angle, wrapped to `(-180, 180]`.
pub fn hip_shoulder_separation(frame: &Frame) -> f64 {
    let torso = line_angle(frame.left_shoulder, frame.right_shoulder);
    let pelvis = line_angle(frame.left_hip, frame.right_hip);
    normalize_angle(torso - pelvis)
}

/// Magnitude of the most negative wrist-minus-shoulder x offset before release.
///
/// The window always holds at least the first frame.
fn reachback(frames: &[Frame], rel: usize) -> f64 {
    frames[..rel.max(1)]
        .iter()
        .map(|f| f.right_wrist.x - f.right_shoulder.x)
        .reduce(f64::min)
        .map_or(0.0, f64::abs)
}

fn elbow_peak_ms(frames: &[Frame], t: &[f64], rel: usize) -> Result<Option<i64>, KinematicsError> {
    let angles: Vec<f64> = frames
        .iter()
        .map(|f| elbow_angle_deg(f.right_shoulder, f.right_elbow, f.right_wrist))
        .collect();
    let angular_velocity = finite_diff(&angles, t)?;

    if rel <= MIN_PRE_RELEASE_SAMPLES {
        return Ok(None);
    }

    let magnitudes: Vec<f64> = angular_velocity[..rel].iter().map(|v| v.abs()).collect();
    let peak = argmax(&magnitudes);
    Ok(Some(((t[rel] - t[peak]) * 1000.0).round() as i64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::kinematics::frame::KeyPoint;

    fn kp(x: f64, y: f64) -> KeyPoint {
        KeyPoint::new(x, y)
    }

    /// Wrist sweeps forward with a sharp burst at `burst`, elbow bends before it.
    fn sweep(n: usize, burst: usize) -> Vec<Frame> {
        (0..n)
            .map(|i| {
                let x = if i < burst { -150.0 + i as f64 } else { 150.0 + i as f64 };
                let elbow_y = if i + 2 == burst { 160.0 } else { 120.0 };
                Frame {
                    t: i as f64 * 0.05,
                    right_shoulder: kp(0.0, 100.0),
                    right_elbow: kp(-20.0, elbow_y),
                    right_wrist: kp(x, 130.0),
                    left_shoulder: kp(-30.0, 100.0),
                    left_hip: kp(-25.0, 200.0),
                    right_hip: kp(5.0, 200.0),
                }
            })
            .collect()
    }

    #[test]
    fn too_few_frames_yield_none() {
        let frames = sweep(4, 2);
        assert_eq!(compute_metrics(&frames).unwrap(), None);
    }

    #[test]
    fn separation_of_parallel_lines_is_zero() {
        let frame = sweep(1, 10)[0];
        // Shoulder and hip lines are both horizontal, 30 px wide.
        assert!(hip_shoulder_separation(&frame).abs() < 1e-9);
    }

    #[test]
    fn separation_wraps_into_half_open_range() {
        let mut frame = sweep(1, 10)[0];
        frame.left_shoulder = kp(30.0, 100.0);
        frame.right_shoulder = kp(0.0, 100.0);
        let sep = hip_shoulder_separation(&frame);
        assert!((sep.abs() - 180.0).abs() < 1e-9);
        assert!(sep > -180.0);
    }

    #[test]
    fn reachback_uses_pre_release_window_only() {
        let frames = sweep(10, 6);
        // Before release the wrist sits 150 px or less behind the shoulder.
        assert!((reachback(&frames, 6) - 150.0).abs() < 1e-9);
    }

    #[test]
    fn reachback_keeps_first_frame_when_release_is_zero() {
        let frames = sweep(6, 3);
        assert!((reachback(&frames, 0) - 150.0).abs() < 1e-9);
    }

    #[test]
    fn reachback_of_forward_wrist_is_its_offset_magnitude() {
        let mut frames = sweep(5, 0);
        for f in &mut frames {
            f.right_wrist.x = 40.0;
        }
        assert!((reachback(&frames, 3) - 40.0).abs() < 1e-9);
    }

    #[test]
    fn full_metrics_on_sweep() {
        let frames = sweep(12, 7);
        let metrics = compute_metrics(&frames).unwrap().unwrap();

        let rel = detect_release_index(&frames).unwrap();
        assert!((6..=7).contains(&rel), "release at {rel}");

        assert!(metrics.hip_shoulder_separation_deg.unwrap().abs() < 1e-9);
        assert!(metrics.reachback_px.unwrap() > 140.0);
        let elbow = metrics.elbow_peak_ms.unwrap();
        assert!(elbow >= 0, "elbow timing {elbow}");
        assert!(metrics.wrist_speed_mps.unwrap() > 0.0);
    }

    #[test]
    fn separation_sign_follows_shoulder_rotation() {
        let mut frame = sweep(1, 10)[0];
        // Right shoulder rises 15 px over a 30 px wide torso; hips stay level.
        frame.right_shoulder = kp(0.0, 85.0);
        let raised = hip_shoulder_separation(&frame);
        assert!((raised - 26.565_051_177_077_99).abs() < 1e-9, "{raised}");

        frame.right_shoulder = kp(0.0, 115.0);
        let dropped = hip_shoulder_separation(&frame);
        assert!((dropped + 26.565_051_177_077_99).abs() < 1e-9, "{dropped}");
    }

    /// Elbow at 90 degrees for frames 0-1, straight for 2-5, bent again at 6,
    /// on an uneven clock.
    fn elbow_snap() -> (Vec<Frame>, Vec<f64>) {
        let t = vec![0.0, 0.1, 0.12, 0.13, 0.2, 0.2337, 0.24];
        let frames = t
            .iter()
            .enumerate()
            .map(|(i, &t)| {
                let wrist = if (2..=5).contains(&i) { kp(200.0, 0.0) } else { kp(100.0, 100.0) };
                Frame {
                    t,
                    right_shoulder: kp(0.0, 0.0),
                    right_elbow: kp(100.0, 0.0),
                    right_wrist: wrist,
                    left_shoulder: kp(-30.0, 0.0),
                    left_hip: kp(-30.0, 100.0),
                    right_hip: kp(0.0, 100.0),
                }
            })
            .collect();
        (frames, t)
    }

    #[test]
    fn elbow_timing_rounds_release_minus_peak() {
        let (frames, t) = elbow_snap();
        // |omega| peaks at index 1 (3750 deg/s vs 1500 at index 2);
        // 0.2337 - 0.1 = 133.7 ms rounds up.
        assert_eq!(elbow_peak_ms(&frames, &t, 5).unwrap(), Some(134));
    }

    #[test]
    fn elbow_timing_window_stops_before_release() {
        let (frames, t) = elbow_snap();
        // Widening the window to include index 5 picks up the re-bend there.
        assert_eq!(elbow_peak_ms(&frames, &t, 6).unwrap(), Some(6));
        assert_eq!(elbow_peak_ms(&frames, &t, 3).unwrap(), None);
    }

    #[test]
    fn elbow_timing_absent_for_early_release() {
        // Burst at frame 1 puts the release at or before index 3.
        let frames = sweep(8, 1);
        let metrics = compute_metrics(&frames).unwrap().unwrap();
        assert_eq!(metrics.elbow_peak_ms, None);
    }

    #[test]
    fn wrist_speed_uses_meters_per_pixel() {
        // Constant 100 px per 0.1 s = 1000 px/s everywhere.
        let frames: Vec<Frame> = (0..6)
            .map(|i| {
                let mut f = sweep(1, 10)[0];
                f.t = i as f64 * 0.1;
                f.right_wrist = kp(i as f64 * 100.0, 130.0);
                f
            })
            .collect();
        let metrics = compute_metrics(&frames).unwrap().unwrap();
        assert!((metrics.wrist_speed_mps.unwrap() - 2.0).abs() < 1e-9);
    }
}
