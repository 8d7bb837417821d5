// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

#![allow(clippy::multiple_crate_versions)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Bowing Posture
//!
//! Real-time feedback on violin bowing posture from human pose keypoints.
//!
//! Given the 17 COCO keypoints of a player (as produced by single-pose models such as
//! `MoveNet`), the library measures the angle at the right shoulder between the elbow
//! and the hip, estimates which part of the bow is in use (frog, middle or tip) and
//! checks the angle against the range expected for that part of the bow.
//!
//! ## Features
//!
//! - **Pure evaluation** - Each frame is judged on its own, with no state between frames
//! - **Never fails on bad frames** - Missing joints fall back to documented verdicts
//! - **Pluggable pose backends** - Any model sits behind the [`KeypointSource`] trait
//! - **Recorded sessions** - Replay keypoints captured earlier from JSON
//! - **Localized feedback** - English and Japanese messages
//!
//! ## Quick Start (Library)
//!
//! ```rust
//! use bowing_posture::{BodyPart, Keypoint, KeypointFrame, PostureEvaluator, PostureStatus};
//!
//! let frame = KeypointFrame::empty()
//!     .with(BodyPart::Nose, Keypoint::new(0.1, 0.5, 0.9))
//!     .with(BodyPart::LeftShoulder, Keypoint::new(0.5, 0.3, 0.9))
//!     .with(BodyPart::RightShoulder, Keypoint::new(0.5, 0.5, 0.9))
//!     .with(BodyPart::RightElbow, Keypoint::new(0.3, 0.7, 0.9))
//!     .with(BodyPart::RightWrist, Keypoint::new(0.2, 0.75, 0.9))
//!     .with(BodyPart::RightHip, Keypoint::new(0.8, 0.5, 0.9));
//!
//! let evaluator = PostureEvaluator::default();
//! let verdict = evaluator.check_posture(&frame);
//! assert_eq!(verdict.status, PostureStatus::ElbowTooHigh);
//! println!("{}", verdict.message);
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! # Replay a recorded session
//! bowing-posture check --keypoints session.json
//!
//! # Japanese feedback, ignoring joints below 30% confidence
//! bowing-posture check -k session.json --lang ja --min-conf 0.3
//!
//! # One JSON verdict per frame
//! bowing-posture check -k session.json --json --quiet
//!
//! # Acceptable angle range along the bow
//! bowing-posture ranges --steps 20
//! ```
//!
//! ## Custom Configuration
//!
//! ```rust
//! use bowing_posture::{AngleRange, Language, PostureConfig, PostureEvaluator};
//!
//! let config = PostureConfig::new()
//!     .with_thresholds(1.2, 0.6)
//!     .with_min_confidence(0.3)
//!     .with_ranges(
//!         AngleRange::new(50.0, 70.0),
//!         AngleRange::new(40.0, 50.0),
//!         AngleRange::new(35.0, 45.0),
//!     )
//!     .with_language(Language::Japanese);
//! config.validate().expect("valid config");
//! let evaluator = PostureEvaluator::new(config);
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`keypoints`] | [`KeypointFrame`], [`Keypoint`] and the [`BodyPart`] enumeration |
//! | [`geometry`] | Joint angle calculation |
//! | [`bow`] | [`BowPosition`] estimation |
//! | [`range`] | [`AngleRange`] interpolation along the bow |
//! | [`posture`] | [`PostureEvaluator`] and [`PostureVerdict`] |
//! | [`config`] | [`PostureConfig`] |
//! | [`locale`] | Feedback [`Language`] |
//! | [`source`] | [`KeypointSource`] trait and [`RecordedSource`] |
//! | [`recording`] | JSON [`Recording`] of keypoint sessions |
//! | [`summary`] | [`SessionSummary`] statistics |
//! | [`error`] | Error types ([`PostureError`], [`Result`]) |

// Modules
pub mod bow;
pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod keypoints;
pub mod locale;
pub mod posture;
pub mod range;
pub mod recording;
pub mod source;
pub mod summary;

// Re-export main types for convenience
pub use bow::BowPosition;
pub use config::PostureConfig;
pub use error::{PostureError, Result};
pub use keypoints::{BodyPart, Keypoint, KeypointFrame};
pub use locale::Language;
pub use posture::{PostureEvaluator, PostureStatus, PostureVerdict};
pub use range::AngleRange;
pub use recording::Recording;
pub use source::{KeypointSource, RecordedSource};
pub use summary::SessionSummary;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(VERSION.contains('.'));
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "bowing-posture");
    }
}
