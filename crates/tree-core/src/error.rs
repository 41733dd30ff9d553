use thiserror::Error;

/// Invalid values in a [`SceneConfig`](crate::SceneConfig).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be positive (got {value})")]
    NonPositive { field: &'static str, value: f32 },
    #[error("pearl strands need at least two beads (got {0})")]
    TooFewBeads(usize),
    #[error("at least one ornament type is required")]
    NoOrnamentTypes,
    #[error("ornament weight {0} is outside 0..=1")]
    OrnamentWeight(f32),
}

/// Failures of the hand-tracking pipeline.
///
/// Only `DetectorUnavailable` and `CameraUnavailable` ever reach the user;
/// `Detection` is swallowed per frame by the sampler.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GestureError {
    #[error("hand detector unavailable: {0}")]
    DetectorUnavailable(String),
    #[error("camera unavailable: {0}")]
    CameraUnavailable(String),
    #[error("detection failed: {0}")]
    Detection(String),
    #[error("hand sample has {0} landmarks, expected 21")]
    MalformedSample(usize),
}
