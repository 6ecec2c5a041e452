/// Error type shared by the loaders and the display adapter
///
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StimulusError {
    #[error("image codec error: {0}")]
    Decode(#[from] image::ImageError),
    #[error("invalid stimulus description: {0}")]
    Json(#[from] serde_json::Error),
    #[error("animation needs at least one frame")]
    EmptySequence,
    #[error("frame shape {found:?} does not match {expected:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
    #[error("frame sink failed: {0}")]
    Sink(String),
}

pub type Result<T> = std::result::Result<T, StimulusError>;
