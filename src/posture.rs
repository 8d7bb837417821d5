// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Posture judgment.
//!
//! [`PostureEvaluator`] composes the angle calculation, bow position estimate and angle
//! range interpolation into a [`PostureVerdict`] for a single frame. Evaluation is a
//! pure function of the frame and the configuration: nothing is carried between
//! frames, and degenerate input yields a verdict rather than an error.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bow::{BowPosition, estimate_bow_position};
use crate::config::PostureConfig;
use crate::geometry::right_shoulder_angle;
use crate::keypoints::KeypointFrame;
use crate::locale::Language;
use crate::range::{AngleRange, angle_range};

/// Outcome category of a posture check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostureStatus {
    /// Elbow angle within the acceptable range.
    Acceptable,
    /// Elbow angle below the acceptable range.
    ElbowTooLow,
    /// Elbow angle above the acceptable range.
    ElbowTooHigh,
    /// Elbow angle could not be calculated.
    Undetermined,
    /// No pose was detected in the frame.
    NoPose,
}

impl PostureStatus {
    /// All statuses in reporting order.
    pub const ALL: [Self; 5] = [
        Self::Acceptable,
        Self::ElbowTooLow,
        Self::ElbowTooHigh,
        Self::Undetermined,
        Self::NoPose,
    ];

    /// Snake-case name of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Acceptable => "acceptable",
            Self::ElbowTooLow => "elbow_too_low",
            Self::ElbowTooHigh => "elbow_too_high",
            Self::Undetermined => "undetermined",
            Self::NoPose => "no_pose",
        }
    }
}

impl fmt::Display for PostureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Result of checking one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostureVerdict {
    /// Outcome category.
    pub status: PostureStatus,
    /// Elbow angle in degrees, if it could be measured.
    pub angle: Option<f32>,
    /// Estimated bow position, if the angle could be measured.
    pub bow_position: Option<BowPosition>,
    /// Acceptable range for the bow position, if the angle could be measured.
    pub range: Option<AngleRange>,
    /// Human-readable feedback.
    pub message: String,
}

impl PostureVerdict {
    /// Judge a measured angle against the range for a bow position.
    ///
    /// Range bounds are inclusive.
    #[must_use]
    pub fn from_measurement(
        angle: f32,
        bow_position: BowPosition,
        range: AngleRange,
        language: Language,
    ) -> Self {
        let (status, message) = if range.contains(angle) {
            (
                PostureStatus::Acceptable,
                language.acceptable(bow_position, angle),
            )
        } else if angle < range.min {
            (
                PostureStatus::ElbowTooLow,
                language.elbow_too_low(bow_position, angle),
            )
        } else {
            (
                PostureStatus::ElbowTooHigh,
                language.elbow_too_high(bow_position, angle),
            )
        };

        Self {
            status,
            angle: Some(angle),
            bow_position: Some(bow_position),
            range: Some(range),
            message,
        }
    }

    /// Verdict for a frame whose elbow angle could not be calculated.
    #[must_use]
    pub fn undetermined(language: Language) -> Self {
        Self::without_measurement(PostureStatus::Undetermined, language.undetermined())
    }

    /// Verdict for a frame without a detected pose.
    #[must_use]
    pub fn no_pose(language: Language) -> Self {
        Self::without_measurement(PostureStatus::NoPose, language.no_pose())
    }

    fn without_measurement(status: PostureStatus, message: &str) -> Self {
        Self {
            status,
            angle: None,
            bow_position: None,
            range: None,
            message: message.to_string(),
        }
    }

    /// Whether the posture is acceptable.
    #[must_use]
    pub fn is_acceptable(&self) -> bool {
        self.status == PostureStatus::Acceptable
    }

    /// Verdict as an `(acceptable, message)` pair.
    #[must_use]
    pub fn into_message(self) -> (bool, String) {
        (self.is_acceptable(), self.message)
    }
}

/// Stateless evaluator of bowing posture.
///
/// # Example
///
/// ```rust
/// use bowing_posture::{BodyPart, Keypoint, KeypointFrame, PostureEvaluator};
///
/// let frame = KeypointFrame::empty()
///     .with(BodyPart::RightShoulder, Keypoint::new(0.5, 0.5, 0.9))
///     .with(BodyPart::RightElbow, Keypoint::new(0.5, 0.8, 0.9))
///     .with(BodyPart::RightHip, Keypoint::new(0.8, 0.5, 0.9));
///
/// let evaluator = PostureEvaluator::default();
/// let angle = evaluator.calculate_angle(&frame).unwrap();
/// assert!((angle - 90.0).abs() < 1e-3);
///
/// let verdict = evaluator.check_posture(&frame);
/// assert!(!verdict.is_acceptable());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PostureEvaluator {
    config: PostureConfig,
}

impl PostureEvaluator {
    /// Create an evaluator with the given configuration.
    #[must_use]
    pub const fn new(config: PostureConfig) -> Self {
        Self { config }
    }

    /// Configuration used by this evaluator.
    #[must_use]
    pub const fn config(&self) -> &PostureConfig {
        &self.config
    }

    /// Angle at the right shoulder between the right elbow and right hip, in degrees.
    ///
    /// `None` when the joints are not detected or the geometry is degenerate.
    #[must_use]
    pub fn calculate_angle(&self, frame: &KeypointFrame) -> Option<f32> {
        right_shoulder_angle(frame, self.config.min_confidence)
    }

    /// Estimated bow position and its canonical ratio.
    ///
    /// Falls back to `(Middle, 0.5)` when the frame does not allow an estimate.
    #[must_use]
    pub fn estimate_bow_position(&self, frame: &KeypointFrame) -> (BowPosition, f32) {
        let position = estimate_bow_position(
            frame,
            self.config.tip_threshold,
            self.config.middle_threshold,
            self.config.min_confidence,
        );
        (position, position.ratio())
    }

    /// Acceptable angle range for a bow position ratio.
    #[must_use]
    pub fn angle_range(&self, ratio: f32) -> AngleRange {
        angle_range(ratio, &self.config)
    }

    /// Full posture check of one frame.
    #[must_use]
    pub fn check_posture(&self, frame: &KeypointFrame) -> PostureVerdict {
        let language = self.config.language;
        let Some(angle) = self.calculate_angle(frame) else {
            return PostureVerdict::undetermined(language);
        };
        let (position, ratio) = self.estimate_bow_position(frame);
        let range = self.angle_range(ratio);
        PostureVerdict::from_measurement(angle, position, range, language)
    }

    /// Posture check of an optional frame.
    ///
    /// An absent frame, as returned by a keypoint source that saw no pose, yields a
    /// [`PostureStatus::NoPose`] verdict.
    #[must_use]
    pub fn check_frame(&self, frame: Option<&KeypointFrame>) -> PostureVerdict {
        frame.map_or_else(
            || PostureVerdict::no_pose(self.config.language),
            |frame| self.check_posture(frame),
        )
    }

    /// Posture check reduced to an `(acceptable, message)` pair.
    #[must_use]
    pub fn check_posture_message(&self, frame: Option<&KeypointFrame>) -> (bool, String) {
        self.check_frame(frame).into_message()
    }
}
