// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Recorded keypoint sessions.
//!
//! A recording is a JSON document holding one entry per video frame: either the 17
//! `[y, x, confidence]` rows of the detected pose, or `null` when no pose was found.
//!
//! ```json
//! {
//!   "fps": 30.0,
//!   "frames": [
//!     [[0.1, 0.5, 0.9], [0.09, 0.52, 0.8], "... 15 more rows"],
//!     null
//!   ]
//! }
//! ```

use std::fs;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::keypoints::KeypointFrame;

/// Keypoint frames captured from a video session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recording {
    /// Capture rate, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fps: Option<f32>,
    /// One entry per captured frame, `None` where no pose was detected.
    pub frames: Vec<Option<KeypointFrame>>,
}

impl Recording {
    /// Create a recording from frames.
    #[must_use]
    pub const fn new(frames: Vec<Option<KeypointFrame>>) -> Self {
        Self { fps: None, frames }
    }

    /// Set the capture rate.
    #[must_use]
    pub fn with_fps(mut self, fps: f32) -> Self {
        self.fps = Some(fps);
        self
    }

    /// Load a recording from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the file cannot be read, or a parse error if it is not a
    /// valid recording (including frames that do not have exactly 17 keypoints).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Parse a recording from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns a parse error if the JSON is not a valid recording.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a recording from a reader.
    ///
    /// # Errors
    ///
    /// Returns a parse error if the content is not a valid recording.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Write the recording to a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Number of frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the recording has no frames.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Timestamp of a frame in seconds, if the capture rate is known.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn timestamp(&self, index: usize) -> Option<f32> {
        self.fps
            .filter(|fps| *fps > 0.0)
            .map(|fps| index as f32 / fps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PostureError;
    use crate::keypoints::{BodyPart, Keypoint};

    fn frame_json() -> String {
        let rows = vec!["[0.5, 0.5, 0.9]"; 17].join(", ");
        format!("[{rows}]")
    }

    #[test]
    fn test_parse_recording() {
        let json = format!(r#"{{"fps": 10.0, "frames": [{}, null]}}"#, frame_json());
        let recording = Recording::from_json_str(&json).unwrap();
        assert_eq!(recording.len(), 2);
        assert!(recording.frames[0].is_some());
        assert!(recording.frames[1].is_none());
        assert!((recording.timestamp(5).unwrap() - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_fps_is_optional() {
        let recording = Recording::from_json_str(r#"{"frames": []}"#).unwrap();
        assert!(recording.is_empty());
        assert!(recording.fps.is_none());
        assert!(recording.timestamp(3).is_none());
    }

    #[test]
    fn test_reject_short_frame() {
        let json = r#"{"frames": [[[0.5, 0.5, 0.9]]]}"#;
        let err = Recording::from_json_str(json).unwrap_err();
        assert!(matches!(err, PostureError::ParseError(_)));
        assert!(err.to_string().contains("expected 17 keypoints"));
    }

    #[test]
    fn test_save_and_load() {
        let frame = KeypointFrame::empty().with(BodyPart::RightHip, Keypoint::new(0.8, 0.5, 0.9));
        let recording = Recording::new(vec![Some(frame), None]).with_fps(30.0);

        let path = std::env::temp_dir().join(format!(
            "bowing_posture_recording_{}.json",
            std::process::id()
        ));
        recording.save(&path).unwrap();
        let loaded = Recording::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, recording);
    }

    #[test]
    fn test_from_reader() {
        let recording = Recording::new(vec![None, Some(KeypointFrame::empty())]).with_fps(15.0);
        let bytes = serde_json::to_vec(&recording).unwrap();

        let parsed = Recording::from_reader(bytes.as_slice()).unwrap();
        assert_eq!(parsed, recording);
        assert!(Recording::from_reader(&b"{\"frames\": 3}"[..]).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Recording::load("/nonexistent/session.json").unwrap_err();
        assert!(matches!(err, PostureError::Io(_)));
    }
}
