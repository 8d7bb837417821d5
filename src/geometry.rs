// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Joint angle calculation.

use crate::keypoints::{BodyPart, Keypoint, KeypointFrame};

/// Angle in degrees at `vertex` between the rays towards `a` and `b`.
///
/// Uses `cos(θ) = (A · B) / (|A| |B|)` with `A = a - vertex` and `B = b - vertex`,
/// clamping the cosine to `[-1, 1]` before `acos`.
///
/// # Returns
///
/// `None` if either ray has zero length or the result is not finite.
#[must_use]
pub fn angle_between(vertex: (f32, f32), a: (f32, f32), b: (f32, f32)) -> Option<f32> {
    let v1 = (a.0 - vertex.0, a.1 - vertex.1);
    let v2 = (b.0 - vertex.0, b.1 - vertex.1);

    let dot = v1.0.mul_add(v2.0, v1.1 * v2.1);
    let norm1 = v1.0.hypot(v1.1);
    let norm2 = v2.0.hypot(v2.1);
    let denom = norm1 * norm2;

    if !denom.is_finite() || denom <= 0.0 {
        return None;
    }

    let angle = (dot / denom).clamp(-1.0, 1.0).acos().to_degrees();
    angle.is_finite().then_some(angle)
}

/// Angle at the right shoulder between the right elbow and the right hip.
///
/// The shoulder, elbow and hip must all be detected at `min_confidence`, otherwise
/// the angle is undetermined.
#[must_use]
pub fn right_shoulder_angle(frame: &KeypointFrame, min_confidence: f32) -> Option<f32> {
    let joints: [Keypoint; 3] = [
        frame[BodyPart::RightShoulder],
        frame[BodyPart::RightElbow],
        frame[BodyPart::RightHip],
    ];
    if !joints.iter().all(|kp| kp.is_detected(min_confidence)) {
        return None;
    }
    let [shoulder, elbow, hip] = joints;
    angle_between(shoulder.position(), elbow.position(), hip.position())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn frame(shoulder: (f32, f32), elbow: (f32, f32), hip: (f32, f32)) -> KeypointFrame {
        KeypointFrame::empty()
            .with(BodyPart::RightShoulder, Keypoint::new(shoulder.0, shoulder.1, 0.9))
            .with(BodyPart::RightElbow, Keypoint::new(elbow.0, elbow.1, 0.9))
            .with(BodyPart::RightHip, Keypoint::new(hip.0, hip.1, 0.9))
    }

    #[test]
    fn test_right_angle() {
        let angle = angle_between((0.5, 0.5), (0.5, 0.8), (0.8, 0.5)).unwrap();
        assert!((angle - 90.0).abs() < EPS);

        let f = frame((0.4, 0.4), (0.4, 0.1), (0.9, 0.4));
        let angle = right_shoulder_angle(&f, 0.0).unwrap();
        assert!((angle - 90.0).abs() < EPS);
    }

    #[test]
    fn test_straight_and_folded() {
        let straight = angle_between((0.5, 0.5), (0.2, 0.5), (0.8, 0.5)).unwrap();
        assert!((straight - 180.0).abs() < 0.05);

        let folded = angle_between((0.5, 0.5), (0.8, 0.5), (0.9, 0.5)).unwrap();
        assert!(folded.abs() < 0.05);
    }

    #[test]
    fn test_scale_invariance() {
        let base = angle_between((0.5, 0.5), (0.3, 0.7), (0.8, 0.5)).unwrap();
        let scaled = angle_between((0.25, 0.25), (0.15, 0.35), (0.4, 0.25)).unwrap();
        assert!((base - scaled).abs() < EPS);
        assert!((base - 135.0).abs() < EPS);
    }

    #[test]
    fn test_ray_order_does_not_matter() {
        let ab = angle_between((0.5, 0.5), (0.3, 0.7), (0.8, 0.5)).unwrap();
        let ba = angle_between((0.5, 0.5), (0.8, 0.5), (0.3, 0.7)).unwrap();
        assert!((ab - ba).abs() < EPS);
    }

    #[test]
    fn test_degenerate_ray() {
        assert!(angle_between((0.5, 0.5), (0.5, 0.5), (0.8, 0.5)).is_none());
        assert!(angle_between((0.5, 0.5), (0.3, 0.7), (f32::NAN, 0.5)).is_none());
    }

    #[test]
    fn test_negative_sentinel_is_undetermined() {
        let f = frame((0.5, 0.5), (-1.0, 0.7), (0.8, 0.5));
        assert!(right_shoulder_angle(&f, 0.0).is_none());

        let f = frame((0.5, -0.01), (0.3, 0.7), (0.8, 0.5));
        assert!(right_shoulder_angle(&f, 0.0).is_none());
    }

    #[test]
    fn test_confidence_gate() {
        let f = frame((0.5, 0.5), (0.3, 0.7), (0.8, 0.5))
            .with(BodyPart::RightHip, Keypoint::new(0.8, 0.5, 0.1));
        assert!(right_shoulder_angle(&f, 0.0).is_some());
        assert!(right_shoulder_angle(&f, 0.3).is_none());
    }
}
