use thiserror::Error;

/// Reasons a comparison configuration cannot be shown.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("no {0} image source configured")]
    MissingSource(&'static str),
    #[error("initial position must be a finite number, got {0}")]
    InvalidInitialPosition(f32),
    #[error("widget height must be positive, got {0}")]
    InvalidHeight(f32),
}
