// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Error types for the posture library.
//!
//! Per-frame evaluation never fails: missing or degenerate keypoints fall back to
//! documented values. These errors cover the surrounding layers only (recordings,
//! keypoint shape validation, configuration and keypoint sources).

use std::fmt;

/// Result type alias for posture operations.
pub type Result<T> = std::result::Result<T, PostureError>;

/// Main error type for the posture library.
#[derive(Debug)]
pub enum PostureError {
    /// Keypoint data did not have the expected 17 x 3 shape.
    ShapeError(String),
    /// Invalid configuration provided.
    ConfigError(String),
    /// Recording could not be parsed.
    ParseError(String),
    /// Keypoint source failed to produce a frame.
    SourceError(String),
    /// Keypoint source has no more frames to replay.
    SourceExhausted,
    /// Error decoding or handling an image.
    ImageError(String),
    /// Wrapped `std::io::Error`.
    Io(std::io::Error),
}

impl fmt::Display for PostureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeError(msg) => write!(f, "Keypoint shape error: {msg}"),
            Self::ConfigError(msg) => write!(f, "Config error: {msg}"),
            Self::ParseError(msg) => write!(f, "Parse error: {msg}"),
            Self::SourceError(msg) => write!(f, "Keypoint source error: {msg}"),
            Self::SourceExhausted => write!(f, "Keypoint source exhausted"),
            Self::ImageError(msg) => write!(f, "Image error: {msg}"),
            Self::Io(err) => write!(f, "IO error: {err}"),
        }
    }
}

impl std::error::Error for PostureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PostureError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for PostureError {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError(err.to_string())
    }
}

impl From<image::ImageError> for PostureError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageError(err.to_string())
    }
}
