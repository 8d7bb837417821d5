// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Acceptable elbow angle ranges along the bow.
//!
//! The range for a bow position ratio is a piecewise linear blend of three reference
//! ranges (frog, middle, tip). The two segments meet at ratio [`SEGMENT_SPLIT`], not at
//! the middle's canonical 0.5, and use fixed scale factors:
//!
//! | ratio            | t                                   | blend         |
//! |------------------|-------------------------------------|---------------|
//! | `<= 0.33`        | `ratio * 3`                         | frog -> middle |
//! | `> 0.33`         | `(ratio - 0.33) * 1.5`              | middle -> tip |
//!
//! At ratio 1.0 the second segment gives `t = 1.005`, overshooting the tip range very
//! slightly. [`PostureConfig::clamp_interpolation`] clamps `t` to `[0, 1]` instead.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::PostureConfig;

/// Ratio at which interpolation switches from the frog segment to the tip segment.
pub const SEGMENT_SPLIT: f32 = 0.33;

/// Scale applied to the ratio on the frog -> middle segment.
pub const FROG_SEGMENT_SCALE: f32 = 3.0;

/// Scale applied to the ratio offset on the middle -> tip segment.
pub const TIP_SEGMENT_SCALE: f32 = 1.5;

/// Inclusive range of acceptable elbow angles, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleRange {
    /// Smallest acceptable angle.
    pub min: f32,
    /// Largest acceptable angle.
    pub max: f32,
}

impl AngleRange {
    /// Create a range from its bounds in degrees.
    #[must_use]
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Whether `angle` lies within the range, bounds included.
    #[must_use]
    pub fn contains(&self, angle: f32) -> bool {
        self.min <= angle && angle <= self.max
    }

    /// Linear blend from `self` (at `t = 0`) to `other` (at `t = 1`).
    ///
    /// `t` is not clamped.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            min: t.mul_add(other.min - self.min, self.min),
            max: t.mul_add(other.max - self.max, self.max),
        }
    }

    /// Bounds as a `(min, max)` tuple.
    #[must_use]
    pub const fn as_tuple(&self) -> (f32, f32) {
        (self.min, self.max)
    }
}

impl fmt::Display for AngleRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°-{:.1}°", self.min, self.max)
    }
}

/// Acceptable angle range for a bow position ratio.
///
/// # Arguments
///
/// * `ratio` - Position along the bow, `0.0` at the frog and `1.0` at the tip.
/// * `config` - Reference ranges and clamping behavior.
#[must_use]
pub fn angle_range(ratio: f32, config: &PostureConfig) -> AngleRange {
    let (from, to, t) = if ratio <= SEGMENT_SPLIT {
        (
            &config.frog_range,
            &config.middle_range,
            ratio * FROG_SEGMENT_SCALE,
        )
    } else {
        (
            &config.middle_range,
            &config.tip_range,
            (ratio - SEGMENT_SPLIT) * TIP_SEGMENT_SCALE,
        )
    };
    let t = if config.clamp_interpolation {
        t.clamp(0.0, 1.0)
    } else {
        t
    };
    from.lerp(to, t)
}
