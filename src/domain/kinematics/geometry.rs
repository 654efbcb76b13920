//! Planar angle helpers on joint geometry.
//!
//! All angles are in degrees.

use super::frame::KeyPoint;

/// Vectors shorter than this are treated as degenerate.
const MIN_VECTOR_LENGTH: f64 = 1e-6;

/// Angle of the vector `(dx, dy)` against the +x axis, in `(-180, 180]`.
pub fn angle_deg(dx: f64, dy: f64) -> f64 {
    dy.atan2(dx).to_degrees()
}

/// Wraps any angle into `(-180, 180]`.
///
/// `rem_euclid` keeps the remainder non-negative for negative inputs. The
/// wrap formula lands exactly on -180 for odd multiples of 180, which is
/// folded onto +180.
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = (angle + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped <= -180.0 {
        180.0
    } else {
        wrapped
    }
}

/// Orientation of the line from `p1` to `p2`.
///
/// The vertical delta goes in the first slot and the horizontal delta in the
/// second. Only differences of two `line_angle` results are meaningful.
pub fn line_angle(p1: KeyPoint, p2: KeyPoint) -> f64 {
    angle_deg(p2.y - p1.y, p2.x - p1.x)
}

/// Interior angle at `elbow` between the rays towards `shoulder` and `wrist`.
///
/// Returns `0.0` when either ray collapses to a point.
pub fn elbow_angle_deg(shoulder: KeyPoint, elbow: KeyPoint, wrist: KeyPoint) -> f64 {
    let v1 = (shoulder.x - elbow.x, shoulder.y - elbow.y);
    let v2 = (wrist.x - elbow.x, wrist.y - elbow.y);

    let norm1 = v1.0.hypot(v1.1);
    let norm2 = v2.0.hypot(v2.1);
    if norm1 < MIN_VECTOR_LENGTH || norm2 < MIN_VECTOR_LENGTH {
        return 0.0;
    }

    let cos = ((v1.0 * v2.0 + v1.1 * v2.1) / (norm1 * norm2)).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}
