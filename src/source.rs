// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Keypoint sources.
//!
//! A [`KeypointSource`] turns an image into the keypoints of the single person in it.
//! The pose model behind it is opaque to the rest of the crate, so any backend can be
//! plugged in: a closure wrapping an inference session implements the trait directly,
//! and [`RecordedSource`] replays keypoints captured earlier.

use std::collections::VecDeque;

use image::DynamicImage;

use crate::error::{PostureError, Result};
use crate::keypoints::KeypointFrame;
use crate::recording::Recording;

/// Produces a keypoint frame from an image.
pub trait KeypointSource {
    /// Detect the pose in `image`.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(frame))` - A pose was found.
    /// * `Ok(None)` - The image contains no pose.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn detect(&mut self, image: &DynamicImage) -> Result<Option<KeypointFrame>>;
}

impl<F> KeypointSource for F
where
    F: FnMut(&DynamicImage) -> Result<Option<KeypointFrame>>,
{
    fn detect(&mut self, image: &DynamicImage) -> Result<Option<KeypointFrame>> {
        self(image)
    }
}

/// Replays previously captured frames in order, ignoring the image content.
#[derive(Debug, Clone, Default)]
pub struct RecordedSource {
    frames: VecDeque<Option<KeypointFrame>>,
}

impl RecordedSource {
    /// Create a source replaying `frames`. `None` entries replay as "no pose".
    #[must_use]
    pub fn new(frames: Vec<Option<KeypointFrame>>) -> Self {
        Self {
            frames: frames.into(),
        }
    }

    /// Number of frames left to replay.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }

    /// Whether every frame has been replayed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.frames.is_empty()
    }
}

impl From<Recording> for RecordedSource {
    fn from(recording: Recording) -> Self {
        Self::new(recording.frames)
    }
}

impl KeypointSource for RecordedSource {
    fn detect(&mut self, _image: &DynamicImage) -> Result<Option<KeypointFrame>> {
        self.frames.pop_front().ok_or(PostureError::SourceExhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keypoints::{BodyPart, Keypoint};

    #[test]
    fn test_recorded_source_replays_in_order() {
        let frame = KeypointFrame::empty().with(BodyPart::Nose, Keypoint::new(0.1, 0.5, 0.9));
        let mut source = RecordedSource::new(vec![Some(frame), None]);
        let image = DynamicImage::new_rgb8(4, 4);

        assert_eq!(source.remaining(), 2);
        assert_eq!(source.detect(&image).unwrap(), Some(frame));
        assert_eq!(source.detect(&image).unwrap(), None);
        assert!(source.is_exhausted());
        assert!(matches!(
            source.detect(&image),
            Err(PostureError::SourceExhausted)
        ));
    }

    #[test]
    fn test_closure_source() {
        let mut calls = 0;
        let mut source = |image: &DynamicImage| -> Result<Option<KeypointFrame>> {
            calls += 1;
            if image.width() == 0 {
                return Err(PostureError::SourceError("empty image".to_string()));
            }
            Ok(Some(KeypointFrame::empty()))
        };

        assert!(source.detect(&DynamicImage::new_rgb8(2, 2)).unwrap().is_some());
        assert!(source.detect(&DynamicImage::new_rgb8(0, 0)).is_err());
        drop(source);
        assert_eq!(calls, 2);
    }
}
