// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Feedback message localization.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::bow::BowPosition;
use crate::error::PostureError;

/// Language used for feedback messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English feedback.
    #[default]
    English,
    /// Japanese feedback.
    Japanese,
}

impl Language {
    /// Short language code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Japanese => "ja",
        }
    }

    /// Display label for a bow position.
    #[must_use]
    pub const fn bow_position_label(self, position: BowPosition) -> &'static str {
        match (self, position) {
            (Self::English, BowPosition::Frog) => "frog",
            (Self::English, BowPosition::Middle) => "middle",
            (Self::English, BowPosition::Tip) => "tip",
            (Self::Japanese, BowPosition::Frog) => "弓元",
            (Self::Japanese, BowPosition::Middle) => "弓中",
            (Self::Japanese, BowPosition::Tip) => "弓先",
        }
    }

    pub(crate) fn acceptable(self, position: BowPosition, angle: f32) -> String {
        let label = self.bow_position_label(position);
        match self {
            Self::English => format!("✅ Good posture at the {label} (angle: {angle:.1}°)"),
            Self::Japanese => format!("✅ {label}での適切な姿勢です (角度: {angle:.1}°)"),
        }
    }

    pub(crate) fn elbow_too_low(self, position: BowPosition, angle: f32) -> String {
        let label = self.bow_position_label(position);
        match self {
            Self::English => {
                format!("⚠️ Right elbow is too low when playing at the {label} (angle: {angle:.1}°)")
            }
            Self::Japanese => {
                format!("⚠️ {label}での演奏時は右肘が下がりすぎています (角度: {angle:.1}°)")
            }
        }
    }

    pub(crate) fn elbow_too_high(self, position: BowPosition, angle: f32) -> String {
        let label = self.bow_position_label(position);
        match self {
            Self::English => {
                format!("⚠️ Right elbow is too high when playing at the {label} (angle: {angle:.1}°)")
            }
            Self::Japanese => {
                format!("⚠️ {label}での演奏時は右肘が上がりすぎています (角度: {angle:.1}°)")
            }
        }
    }

    pub(crate) const fn undetermined(self) -> &'static str {
        match self {
            Self::English => "Cannot determine posture: elbow angle could not be calculated",
            Self::Japanese => "角度を計算できません",
        }
    }

    pub(crate) const fn no_pose(self) -> &'static str {
        match self {
            Self::English => "No pose detected",
            Self::Japanese => "姿勢を検出できません",
        }
    }

    /// Line announcing the current bow position.
    #[must_use]
    pub fn current_position(self, position: BowPosition) -> String {
        let label = self.bow_position_label(position);
        match self {
            Self::English => format!("Current bow position: {label}"),
            Self::Japanese => format!("現在の弓の位置: {label}"),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.code())
    }
}

impl FromStr for Language {
    type Err = PostureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "ja" | "jp" | "japanese" => Ok(Self::Japanese),
            _ => Err(PostureError::ConfigError(format!(
                "invalid language '{s}', expected one of: en, ja"
            ))),
        }
    }
}
