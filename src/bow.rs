// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Bow position estimation.
//!
//! The hand's place along the bow is inferred from the horizontal distance between the
//! right wrist and the nose, measured relative to the shoulder width so that it does
//! not depend on how far the player stands from the camera.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PostureError;
use crate::keypoints::{BodyPart, KeypointFrame};

/// Zone of the bow currently in contact with the string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BowPosition {
    /// Near the hand, where the bow is held.
    Frog,
    /// Middle of the bow.
    Middle,
    /// Far end of the bow.
    Tip,
}

impl BowPosition {
    /// All positions from frog to tip.
    pub const ALL: [Self; 3] = [Self::Frog, Self::Middle, Self::Tip];

    /// Canonical position along the bow, used for angle range interpolation.
    #[must_use]
    pub const fn ratio(self) -> f32 {
        match self {
            Self::Frog => 0.0,
            Self::Middle => 0.5,
            Self::Tip => 1.0,
        }
    }

    /// Lowercase name of the position.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Frog => "frog",
            Self::Middle => "middle",
            Self::Tip => "tip",
        }
    }

    /// Classify a wrist-to-nose distance relative to the shoulder width.
    ///
    /// Both comparisons are strict: a distance equal to a threshold falls into the
    /// zone closer to the frog.
    #[must_use]
    pub fn classify(relative_distance: f32, tip_threshold: f32, middle_threshold: f32) -> Self {
        if relative_distance > tip_threshold {
            Self::Tip
        } else if relative_distance > middle_threshold {
            Self::Middle
        } else {
            Self::Frog
        }
    }
}

impl fmt::Display for BowPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for BowPosition {
    type Err = PostureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "frog" => Ok(Self::Frog),
            "middle" | "mid" => Ok(Self::Middle),
            "tip" | "point" => Ok(Self::Tip),
            _ => Err(PostureError::ParseError(format!(
                "invalid bow position '{s}', expected one of: frog, middle, tip"
            ))),
        }
    }
}

/// Wrist-to-nose horizontal distance divided by the shoulder width.
///
/// # Returns
///
/// `None` if the nose, right wrist or either shoulder is not detected, the shoulder
/// width is zero, or the ratio is not finite.
#[must_use]
pub fn relative_wrist_distance(frame: &KeypointFrame, min_confidence: f32) -> Option<f32> {
    let right_shoulder = frame[BodyPart::RightShoulder];
    let left_shoulder = frame[BodyPart::LeftShoulder];
    let right_wrist = frame[BodyPart::RightWrist];
    let nose = frame[BodyPart::Nose];

    let all_detected = [right_shoulder, left_shoulder, right_wrist, nose]
        .iter()
        .all(|kp| kp.is_detected(min_confidence));
    if !all_detected {
        return None;
    }

    let shoulder_distance = (right_shoulder.x - left_shoulder.x).abs();
    if shoulder_distance <= 0.0 {
        return None;
    }
    let wrist_nose_distance = (right_wrist.x - nose.x).abs();

    let relative = wrist_nose_distance / shoulder_distance;
    relative.is_finite().then_some(relative)
}

/// Estimate the bow position from a keypoint frame.
///
/// Falls back to [`BowPosition::Middle`] whenever the relative distance cannot be
/// measured, so callers always receive a classification.
#[must_use]
pub fn estimate_bow_position(
    frame: &KeypointFrame,
    tip_threshold: f32,
    middle_threshold: f32,
    min_confidence: f32,
) -> BowPosition {
    relative_wrist_distance(frame, min_confidence).map_or(BowPosition::Middle, |relative| {
        BowPosition::classify(relative, tip_threshold, middle_threshold)
    })
}
