// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Aggregate statistics over a practice session.

use std::collections::HashMap;

use serde::Serialize;

use crate::bow::BowPosition;
use crate::posture::{PostureStatus, PostureVerdict};

/// Verdict counts accumulated over many frames.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    /// Total frames recorded.
    pub frames: usize,
    /// Frames per posture status.
    pub by_status: HashMap<PostureStatus, usize>,
    /// Measured frames per bow position.
    pub by_position: HashMap<BowPosition, usize>,
}

impl SessionSummary {
    /// Create an empty summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one verdict.
    pub fn record(&mut self, verdict: &PostureVerdict) {
        self.frames += 1;
        *self.by_status.entry(verdict.status).or_insert(0) += 1;
        if let Some(position) = verdict.bow_position {
            *self.by_position.entry(position).or_insert(0) += 1;
        }
    }

    /// Frames with the given status.
    #[must_use]
    pub fn count(&self, status: PostureStatus) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }

    /// Measured frames at the given bow position.
    #[must_use]
    pub fn position_count(&self, position: BowPosition) -> usize {
        self.by_position.get(&position).copied().unwrap_or(0)
    }

    /// Frames in which the elbow angle was measured.
    #[must_use]
    pub fn measured(&self) -> usize {
        self.count(PostureStatus::Acceptable)
            + self.count(PostureStatus::ElbowTooLow)
            + self.count(PostureStatus::ElbowTooHigh)
    }

    /// Share of measured frames with acceptable posture, in `[0, 1]`.
    ///
    /// `None` if no frame was measured.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn acceptable_rate(&self) -> Option<f32> {
        let measured = self.measured();
        (measured > 0).then(|| self.count(PostureStatus::Acceptable) as f32 / measured as f32)
    }
}

impl<'a> Extend<&'a PostureVerdict> for SessionSummary {
    fn extend<I: IntoIterator<Item = &'a PostureVerdict>>(&mut self, iter: I) {
        for verdict in iter {
            self.record(verdict);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Language;
    use crate::range::AngleRange;

    fn verdict(angle: f32, position: BowPosition) -> PostureVerdict {
        PostureVerdict::from_measurement(
            angle,
            position,
            AngleRange::new(40.0, 50.0),
            Language::English,
        )
    }

    #[test]
    fn test_empty_summary() {
        let summary = SessionSummary::new();
        assert_eq!(summary.frames, 0);
        assert_eq!(summary.measured(), 0);
        assert!(summary.acceptable_rate().is_none());
    }

    #[test]
    fn test_counts_and_rate() {
        let verdicts = [
            verdict(45.0, BowPosition::Frog),
            verdict(45.0, BowPosition::Tip),
            verdict(30.0, BowPosition::Tip),
            verdict(60.0, BowPosition::Middle),
            PostureVerdict::undetermined(Language::English),
            PostureVerdict::no_pose(Language::English),
        ];
        let mut summary = SessionSummary::new();
        summary.extend(&verdicts);

        assert_eq!(summary.frames, 6);
        assert_eq!(summary.count(PostureStatus::Acceptable), 2);
        assert_eq!(summary.count(PostureStatus::ElbowTooLow), 1);
        assert_eq!(summary.count(PostureStatus::ElbowTooHigh), 1);
        assert_eq!(summary.count(PostureStatus::Undetermined), 1);
        assert_eq!(summary.count(PostureStatus::NoPose), 1);
        assert_eq!(summary.position_count(BowPosition::Tip), 2);
        assert_eq!(summary.position_count(BowPosition::Frog), 1);
        assert_eq!(summary.measured(), 4);
        assert!((summary.acceptable_rate().unwrap() - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_summary_serializes_by_name() {
        let mut summary = SessionSummary::new();
        summary.extend(&[
            verdict(45.0, BowPosition::Tip),
            PostureVerdict::no_pose(Language::English),
        ]);

        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["frames"], 2);
        assert_eq!(value["by_status"]["acceptable"], 1);
        assert_eq!(value["by_status"]["no_pose"], 1);
        assert_eq!(value["by_position"]["tip"], 1);
    }
}
