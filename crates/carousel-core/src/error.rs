use thiserror::Error;

/// Failures that halt a carousel mount cycle.
///
/// Layout, panning and drawing are numeric operations over validated inputs
/// and have no error paths of their own.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum CarouselError {
    #[error("failed to load image #{index} ({locator}): {reason}")]
    AssetLoadFailure {
        index: usize,
        locator: String,
        reason: String,
    },
    #[error("invalid carousel configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T, E = CarouselError> = std::result::Result<T, E>;
