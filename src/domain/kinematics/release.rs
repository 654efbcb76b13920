//! Release-instant detection from the right-wrist speed profile.
//!
//! Release is approximated as the sample with peak wrist speed. This is a
//! heuristic, not a biomechanically exact release detector.

use super::differentiator::finite_diff;
use super::errors::KinematicsError;
use super::frame::{timestamps, wrist_track, Frame};

/// Symmetric 3-tap smoothing kernel applied to the speed profile.
pub const SMOOTHING_KERNEL: [f64; 3] = [0.25, 0.5, 0.25];

/// Speed profiles at or below this length are not smoothed.
const MIN_SAMPLES_FOR_SMOOTHING: usize = 3;

/// Per-sample right-wrist speed in pixels per second.
pub fn wrist_speed(frames: &[Frame]) -> Result<Vec<f64>, KinematicsError> {
    let t = timestamps(frames);
    let (wx, wy) = wrist_track(frames);
    let vx = finite_diff(&wx, &t)?;
    let vy = finite_diff(&wy, &t)?;
    Ok(vx.iter().zip(&vy).map(|(x, y)| x.hypot(*y)).collect())
}

/// Index of the frame at which the disc most likely left the hand.
///
/// Returns `0` for an empty sequence.
pub fn detect_release_index(frames: &[Frame]) -> Result<usize, KinematicsError> {
    if frames.is_empty() {
        return Ok(0);
    }

    let mut speed = wrist_speed(frames)?;
    if speed.len() > MIN_SAMPLES_FOR_SMOOTHING {
        speed = smooth(&speed);
    }

    Ok(argmax(&speed))
}

/// Same-length convolution with [`SMOOTHING_KERNEL`], zero-padded at both ends.
pub(crate) fn smooth(signal: &[f64]) -> Vec<f64> {
    let [left, centre, right] = SMOOTHING_KERNEL;
    let at = |i: Option<usize>| i.and_then(|i| signal.get(i)).copied().unwrap_or(0.0);

    (0..signal.len())
        .map(|i| left * at(i.checked_sub(1)) + centre * signal[i] + right * at(Some(i + 1)))
        .collect()
}

/// Index of the largest value; ties go to the first occurrence.
pub(crate) fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, v) in values.iter().enumerate() {
        if *v > values[best] {
            best = i;
        }
    }
    best
}
