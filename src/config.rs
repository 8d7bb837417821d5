// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Posture evaluation configuration.
//!
//! [`PostureConfig`] holds the reference angle ranges, the bow position thresholds and
//! the feedback language used by [`crate::PostureEvaluator`].

use crate::error::{PostureError, Result};
use crate::locale::Language;
use crate::range::AngleRange;

/// Default acceptable elbow angle range at the frog, in degrees.
pub const DEFAULT_FROG_RANGE: AngleRange = AngleRange::new(45.0, 70.0);

/// Default acceptable elbow angle range at the middle of the bow, in degrees.
pub const DEFAULT_MIDDLE_RANGE: AngleRange = AngleRange::new(37.0, 50.0);

/// Default acceptable elbow angle range at the tip, in degrees.
pub const DEFAULT_TIP_RANGE: AngleRange = AngleRange::new(35.0, 45.0);

/// Relative wrist-to-nose distance above which the hand is at the tip.
pub const DEFAULT_TIP_THRESHOLD: f32 = 1.1;

/// Relative wrist-to-nose distance above which the hand is at the middle.
pub const DEFAULT_MIDDLE_THRESHOLD: f32 = 0.7;

/// Configuration for posture evaluation.
///
/// Uses a builder pattern for convenient construction.
///
/// # Example
///
/// ```rust
/// use bowing_posture::{Language, PostureConfig};
///
/// let config = PostureConfig::new()
///     .with_min_confidence(0.3)
///     .with_language(Language::Japanese);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PostureConfig {
    /// Acceptable elbow angle range at the frog.
    pub frog_range: AngleRange,
    /// Acceptable elbow angle range at the middle.
    pub middle_range: AngleRange,
    /// Acceptable elbow angle range at the tip.
    pub tip_range: AngleRange,
    /// Relative distance strictly above which the bow position is the tip.
    pub tip_threshold: f32,
    /// Relative distance strictly above which the bow position is the middle.
    pub middle_threshold: f32,
    /// Minimum keypoint confidence for a joint to count as detected.
    /// The default of `0.0` only rejects negative sentinel coordinates.
    pub min_confidence: f32,
    /// Clamp the interpolation parameter to `[0, 1]`.
    /// Off by default, so the tip segment slightly overshoots the tip range at ratio 1.0.
    pub clamp_interpolation: bool,
    /// Language of feedback messages.
    pub language: Language,
}

impl Default for PostureConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl PostureConfig {
    /// Default configuration, usable in const contexts.
    pub const DEFAULT: Self = Self {
        frog_range: DEFAULT_FROG_RANGE,
        middle_range: DEFAULT_MIDDLE_RANGE,
        tip_range: DEFAULT_TIP_RANGE,
        tip_threshold: DEFAULT_TIP_THRESHOLD,
        middle_threshold: DEFAULT_MIDDLE_THRESHOLD,
        min_confidence: 0.0,
        clamp_interpolation: false,
        language: Language::English,
    };

    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reference ranges for the frog, middle and tip.
    #[must_use]
    pub const fn with_ranges(
        mut self,
        frog: AngleRange,
        middle: AngleRange,
        tip: AngleRange,
    ) -> Self {
        self.frog_range = frog;
        self.middle_range = middle;
        self.tip_range = tip;
        self
    }

    /// Set the relative-distance thresholds for the tip and the middle.
    ///
    /// # Arguments
    ///
    /// * `tip` - Distances strictly above this are classified as the tip.
    /// * `middle` - Distances strictly above this (and not above `tip`) are the middle.
    #[must_use]
    pub const fn with_thresholds(mut self, tip: f32, middle: f32) -> Self {
        self.tip_threshold = tip;
        self.middle_threshold = middle;
        self
    }

    /// Set the minimum confidence for a keypoint to count as detected.
    #[must_use]
    pub const fn with_min_confidence(mut self, min_confidence: f32) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    /// Enable or disable clamping of the interpolation parameter.
    #[must_use]
    pub const fn with_clamp_interpolation(mut self, clamp: bool) -> Self {
        self.clamp_interpolation = clamp;
        self
    }

    /// Set the feedback language.
    #[must_use]
    pub const fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Check that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns [`PostureError::ConfigError`] if a range is inverted or not finite, the
    /// thresholds are not ordered `0 <= middle < tip`, or the minimum confidence lies
    /// outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        for (name, range) in [
            ("frog", self.frog_range),
            ("middle", self.middle_range),
            ("tip", self.tip_range),
        ] {
            if !range.min.is_finite() || !range.max.is_finite() {
                return Err(PostureError::ConfigError(format!(
                    "{name} range must be finite, got {range}"
                )));
            }
            if range.min > range.max {
                return Err(PostureError::ConfigError(format!(
                    "{name} range minimum exceeds maximum: {range}"
                )));
            }
        }

        if !self.tip_threshold.is_finite() || !self.middle_threshold.is_finite() {
            return Err(PostureError::ConfigError(
                "bow position thresholds must be finite".to_string(),
            ));
        }
        if self.middle_threshold < 0.0 || self.middle_threshold >= self.tip_threshold {
            return Err(PostureError::ConfigError(format!(
                "expected 0 <= middle threshold < tip threshold, got middle={} tip={}",
                self.middle_threshold, self.tip_threshold
            )));
        }

        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(PostureError::ConfigError(format!(
                "min confidence must be within [0, 1], got {}",
                self.min_confidence
            )));
        }

        Ok(())
    }
}
