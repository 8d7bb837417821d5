// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Keypoint frame types.
//!
//! A [`KeypointFrame`] holds the 17 COCO keypoints produced by single-pose models such
//! as `MoveNet`, each as `(y, x, confidence)` normalized to `[0, 1]` relative to the
//! frame. Joints are addressed through [`BodyPart`] instead of raw indices.

use std::fmt;
use std::str::FromStr;

use ndarray::{Array2, ArrayView2, ArrayViewD};
use serde::{Deserialize, Serialize};

use crate::error::{PostureError, Result};

/// Number of keypoints in a frame.
pub const NUM_KEYPOINTS: usize = 17;

/// Values per keypoint: `y`, `x`, `confidence`.
pub const KEYPOINT_DIM: usize = 3;

/// COCO body parts in model output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyPart {
    Nose = 0,
    LeftEye = 1,
    RightEye = 2,
    LeftEar = 3,
    RightEar = 4,
    LeftShoulder = 5,
    RightShoulder = 6,
    LeftElbow = 7,
    RightElbow = 8,
    LeftWrist = 9,
    RightWrist = 10,
    LeftHip = 11,
    RightHip = 12,
    LeftKnee = 13,
    RightKnee = 14,
    LeftAnkle = 15,
    RightAnkle = 16,
}

impl BodyPart {
    /// All body parts, ordered by index.
    pub const ALL: [Self; NUM_KEYPOINTS] = [
        Self::Nose,
        Self::LeftEye,
        Self::RightEye,
        Self::LeftEar,
        Self::RightEar,
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::LeftElbow,
        Self::RightElbow,
        Self::LeftWrist,
        Self::RightWrist,
        Self::LeftHip,
        Self::RightHip,
        Self::LeftKnee,
        Self::RightKnee,
        Self::LeftAnkle,
        Self::RightAnkle,
    ];

    /// Position of this body part in a keypoint frame.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Body part at `index`, if it is in range.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Snake-case name of the body part.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nose => "nose",
            Self::LeftEye => "left_eye",
            Self::RightEye => "right_eye",
            Self::LeftEar => "left_ear",
            Self::RightEar => "right_ear",
            Self::LeftShoulder => "left_shoulder",
            Self::RightShoulder => "right_shoulder",
            Self::LeftElbow => "left_elbow",
            Self::RightElbow => "right_elbow",
            Self::LeftWrist => "left_wrist",
            Self::RightWrist => "right_wrist",
            Self::LeftHip => "left_hip",
            Self::RightHip => "right_hip",
            Self::LeftKnee => "left_knee",
            Self::RightKnee => "right_knee",
            Self::LeftAnkle => "left_ankle",
            Self::RightAnkle => "right_ankle",
        }
    }
}

impl fmt::Display for BodyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for BodyPart {
    type Err = PostureError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|part| part.as_str() == normalized)
            .ok_or_else(|| PostureError::ParseError(format!("unknown body part '{s}'")))
    }
}

/// A single detected landmark.
///
/// Coordinates are normalized to `[0, 1]`. Models report an undetected joint either
/// with a low confidence or with negative sentinel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 3]", into = "[f32; 3]")]
pub struct Keypoint {
    /// Vertical position.
    pub y: f32,
    /// Horizontal position.
    pub x: f32,
    /// Detection confidence.
    pub confidence: f32,
}

impl Keypoint {
    /// Placeholder for a joint the model did not see.
    pub const MISSING: Self = Self::new(-1.0, -1.0, 0.0);

    /// Create a keypoint from `(y, x, confidence)`.
    #[must_use]
    pub const fn new(y: f32, x: f32, confidence: f32) -> Self {
        Self { y, x, confidence }
    }

    /// Whether this keypoint counts as a valid detection.
    ///
    /// Both coordinates must be finite and non-negative and the confidence must
    /// reach `min_confidence`.
    #[must_use]
    pub fn is_detected(&self, min_confidence: f32) -> bool {
        self.y.is_finite()
            && self.x.is_finite()
            && self.y >= 0.0
            && self.x >= 0.0
            && self.confidence >= min_confidence
    }

    /// Position as `(y, x)`.
    #[must_use]
    pub const fn position(&self) -> (f32, f32) {
        (self.y, self.x)
    }
}

impl From<[f32; 3]> for Keypoint {
    fn from([y, x, confidence]: [f32; 3]) -> Self {
        Self::new(y, x, confidence)
    }
}

impl From<Keypoint> for [f32; 3] {
    fn from(kp: Keypoint) -> Self {
        [kp.y, kp.x, kp.confidence]
    }
}

/// The 17 keypoints of one pose, in [`BodyPart`] order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Keypoint>", into = "Vec<Keypoint>")]
pub struct KeypointFrame {
    keypoints: [Keypoint; NUM_KEYPOINTS],
}

impl KeypointFrame {
    /// Create a frame from a fixed-size keypoint array.
    #[must_use]
    pub const fn new(keypoints: [Keypoint; NUM_KEYPOINTS]) -> Self {
        Self { keypoints }
    }

    /// A frame in which no joint was detected.
    #[must_use]
    pub const fn empty() -> Self {
        Self::new([Keypoint::MISSING; NUM_KEYPOINTS])
    }

    /// Build a frame from `(y, x, confidence)` rows.
    ///
    /// # Errors
    ///
    /// Returns [`PostureError::ShapeError`] unless exactly 17 rows are given.
    pub fn from_rows(rows: &[[f32; 3]]) -> Result<Self> {
        if rows.len() != NUM_KEYPOINTS {
            return Err(PostureError::ShapeError(format!(
                "expected {NUM_KEYPOINTS} keypoints, got {}",
                rows.len()
            )));
        }
        let mut keypoints = [Keypoint::MISSING; NUM_KEYPOINTS];
        for (slot, row) in keypoints.iter_mut().zip(rows) {
            *slot = Keypoint::from(*row);
        }
        Ok(Self::new(keypoints))
    }

    /// Build a frame from a `(17, 3)` array view.
    ///
    /// # Errors
    ///
    /// Returns [`PostureError::ShapeError`] if the view is not `(17, 3)`.
    pub fn from_array(view: ArrayView2<'_, f32>) -> Result<Self> {
        if view.dim() != (NUM_KEYPOINTS, KEYPOINT_DIM) {
            return Err(PostureError::ShapeError(format!(
                "expected shape ({NUM_KEYPOINTS}, {KEYPOINT_DIM}), got {:?}",
                view.shape()
            )));
        }
        let mut keypoints = [Keypoint::MISSING; NUM_KEYPOINTS];
        for (slot, row) in keypoints.iter_mut().zip(view.outer_iter()) {
            *slot = Keypoint::new(row[0], row[1], row[2]);
        }
        Ok(Self::new(keypoints))
    }

    /// Decode a single-pose model output tensor.
    ///
    /// `MoveNet` single-pose models emit shape `(1, 1, 17, 3)`. Any number of leading
    /// unit axes is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`PostureError::ShapeError`] if the trailing axes are not `(17, 3)` or a
    /// leading axis holds more than one pose.
    pub fn from_model_output(view: ArrayViewD<'_, f32>) -> Result<Self> {
        let shape = view.shape();
        let trailing_ok = shape.len() >= 2
            && shape[shape.len() - 2] == NUM_KEYPOINTS
            && shape[shape.len() - 1] == KEYPOINT_DIM;
        let leading_ok = shape[..shape.len().saturating_sub(2)]
            .iter()
            .all(|&d| d == 1);
        if !trailing_ok || !leading_ok {
            return Err(PostureError::ShapeError(format!(
                "expected model output shape (..., {NUM_KEYPOINTS}, {KEYPOINT_DIM}) with unit leading axes, got {shape:?}"
            )));
        }

        let values: Vec<f32> = view.iter().copied().collect();
        let mut keypoints = [Keypoint::MISSING; NUM_KEYPOINTS];
        for (slot, chunk) in keypoints.iter_mut().zip(values.chunks_exact(KEYPOINT_DIM)) {
            *slot = Keypoint::new(chunk[0], chunk[1], chunk[2]);
        }
        Ok(Self::new(keypoints))
    }

    /// Keypoint for a body part.
    #[must_use]
    pub const fn get(&self, part: BodyPart) -> Keypoint {
        self.keypoints[part.index()]
    }

    /// Replace the keypoint for a body part.
    pub const fn set(&mut self, part: BodyPart, keypoint: Keypoint) {
        self.keypoints[part.index()] = keypoint;
    }

    /// Builder-style variant of [`Self::set`].
    #[must_use]
    pub const fn with(mut self, part: BodyPart, keypoint: Keypoint) -> Self {
        self.set(part, keypoint);
        self
    }

    /// All keypoints in body-part order.
    #[must_use]
    pub const fn keypoints(&self) -> &[Keypoint; NUM_KEYPOINTS] {
        &self.keypoints
    }

    /// Iterate over `(body part, keypoint)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (BodyPart, Keypoint)> + '_ {
        BodyPart::ALL.into_iter().zip(self.keypoints.iter().copied())
    }

    /// Number of keypoints detected at `min_confidence`.
    #[must_use]
    pub fn detected_count(&self, min_confidence: f32) -> usize {
        self.keypoints
            .iter()
            .filter(|kp| kp.is_detected(min_confidence))
            .count()
    }

    /// Frame as a `(17, 3)` array.
    #[must_use]
    pub fn to_array(&self) -> Array2<f32> {
        Array2::from_shape_fn((NUM_KEYPOINTS, KEYPOINT_DIM), |(i, j)| {
            let kp = self.keypoints[i];
            match j {
                0 => kp.y,
                1 => kp.x,
                _ => kp.confidence,
            }
        })
    }
}

impl Default for KeypointFrame {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::ops::Index<BodyPart> for KeypointFrame {
    type Output = Keypoint;

    fn index(&self, part: BodyPart) -> &Keypoint {
        &self.keypoints[part.index()]
    }
}

impl TryFrom<Vec<Keypoint>> for KeypointFrame {
    type Error = PostureError;

    fn try_from(keypoints: Vec<Keypoint>) -> Result<Self> {
        let len = keypoints.len();
        let keypoints: [Keypoint; NUM_KEYPOINTS] = keypoints.try_into().map_err(|_| {
            PostureError::ShapeError(format!("expected {NUM_KEYPOINTS} keypoints, got {len}"))
        })?;
        Ok(Self::new(keypoints))
    }
}

impl From<KeypointFrame> for Vec<Keypoint> {
    fn from(frame: KeypointFrame) -> Self {
        frame.keypoints.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array, Array2, IxDyn};

    #[test]
    fn test_body_part_indices() {
        assert_eq!(BodyPart::Nose.index(), 0);
        assert_eq!(BodyPart::LeftShoulder.index(), 5);
        assert_eq!(BodyPart::RightShoulder.index(), 6);
        assert_eq!(BodyPart::RightElbow.index(), 8);
        assert_eq!(BodyPart::RightWrist.index(), 10);
        assert_eq!(BodyPart::RightHip.index(), 12);

        for (i, part) in BodyPart::ALL.iter().enumerate() {
            assert_eq!(part.index(), i);
            assert_eq!(BodyPart::from_index(i), Some(*part));
        }
        assert_eq!(BodyPart::from_index(17), None);
    }

    #[test]
    fn test_body_part_from_str() {
        assert_eq!("nose".parse::<BodyPart>().unwrap(), BodyPart::Nose);
        assert_eq!(
            "Right-Elbow".parse::<BodyPart>().unwrap(),
            BodyPart::RightElbow
        );
        assert_eq!(
            "right hip".parse::<BodyPart>().unwrap(),
            BodyPart::RightHip
        );
        assert!("tail".parse::<BodyPart>().is_err());
    }

    #[test]
    fn test_keypoint_detection() {
        assert!(Keypoint::new(0.5, 0.5, 0.9).is_detected(0.0));
        assert!(Keypoint::new(0.0, 0.0, 0.0).is_detected(0.0));
        assert!(!Keypoint::new(-0.1, 0.5, 0.9).is_detected(0.0));
        assert!(!Keypoint::new(0.5, f32::NAN, 0.9).is_detected(0.0));
        assert!(!Keypoint::new(0.5, 0.5, 0.2).is_detected(0.3));
        assert!(!Keypoint::MISSING.is_detected(0.0));
    }

    #[test]
    fn test_from_rows_requires_17() {
        let rows = vec![[0.5, 0.5, 0.9]; 16];
        assert!(matches!(
            KeypointFrame::from_rows(&rows),
            Err(PostureError::ShapeError(_))
        ));

        let mut rows = vec![[0.1, 0.2, 0.3]; 17];
        rows[BodyPart::RightElbow.index()] = [0.3, 0.7, 0.9];
        let frame = KeypointFrame::from_rows(&rows).unwrap();
        assert_eq!(frame.get(BodyPart::RightElbow), Keypoint::new(0.3, 0.7, 0.9));
        assert_eq!(frame[BodyPart::Nose], Keypoint::new(0.1, 0.2, 0.3));
    }

    #[test]
    fn test_from_array() {
        let mut data = Array2::<f32>::zeros((17, 3));
        data[[BodyPart::RightWrist.index(), 0]] = 0.2;
        data[[BodyPart::RightWrist.index(), 1]] = 0.75;
        data[[BodyPart::RightWrist.index(), 2]] = 0.9;

        let frame = KeypointFrame::from_array(data.view()).unwrap();
        assert_eq!(frame[BodyPart::RightWrist], Keypoint::new(0.2, 0.75, 0.9));
        assert_eq!(frame.to_array(), data);

        let wrong = Array2::<f32>::zeros((17, 2));
        assert!(KeypointFrame::from_array(wrong.view()).is_err());
    }

    #[test]
    fn test_from_model_output() {
        let output = Array::from_shape_fn(IxDyn(&[1, 1, 17, 3]), |idx| {
            (idx[2] * 3 + idx[3]) as f32 / 100.0
        });
        let frame = KeypointFrame::from_model_output(output.view()).unwrap();
        let nose = frame[BodyPart::Nose];
        assert!((nose.x - 0.01).abs() < 1e-6);
        let hip = frame[BodyPart::RightHip];
        assert!((hip.y - 0.36).abs() < 1e-6);
        assert!((hip.confidence - 0.38).abs() < 1e-6);

        let multi = Array::<f32, _>::zeros(IxDyn(&[2, 17, 3]));
        assert!(KeypointFrame::from_model_output(multi.view()).is_err());

        let flat = Array::<f32, _>::zeros(IxDyn(&[51]));
        assert!(KeypointFrame::from_model_output(flat.view()).is_err());
    }

    #[test]
    fn test_serde_as_rows() {
        let frame = KeypointFrame::empty().with(BodyPart::Nose, Keypoint::new(0.1, 0.5, 0.9));
        let json = serde_json::to_string(&frame).unwrap();
        assert!(json.starts_with("[[0.1,0.5,0.9],[-1.0,-1.0,0.0]"));

        let parsed: KeypointFrame = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, frame);

        let short = "[[0.1,0.5,0.9]]";
        assert!(serde_json::from_str::<KeypointFrame>(short).is_err());
    }

    #[test]
    fn test_keypoints_in_body_part_order() {
        let frame =
            KeypointFrame::empty().with(BodyPart::RightElbow, Keypoint::new(0.3, 0.7, 0.9));
        let keypoints = frame.keypoints();
        assert_eq!(keypoints.len(), NUM_KEYPOINTS);
        assert_eq!(keypoints[8], Keypoint::new(0.3, 0.7, 0.9));
        assert_eq!(keypoints[0], Keypoint::MISSING);
    }

    #[test]
    fn test_detected_count() {
        let frame = KeypointFrame::empty()
            .with(BodyPart::Nose, Keypoint::new(0.1, 0.5, 0.9))
            .with(BodyPart::RightHip, Keypoint::new(0.8, 0.5, 0.2));
        assert_eq!(frame.detected_count(0.0), 2);
        assert_eq!(frame.detected_count(0.3), 1);
        assert_eq!(frame.iter().count(), NUM_KEYPOINTS);
    }
}
