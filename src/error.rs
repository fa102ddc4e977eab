use thiserror::Error;

/// Library error type for backdrop operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The supplied pixel buffer does not match the declared dimensions.
    #[error("invalid pixel buffer: expected {expected} bytes for the declared dimensions, got {actual}")]
    InvalidBuffer { expected: usize, actual: usize },

    /// A hexadecimal color string could not be parsed.
    #[error("invalid hex color: {0:?}")]
    BadColor(String),

    /// Underlying IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// YAML/serde configuration error.
    #[error(transparent)]
    Config(#[from] serde_yaml::Error),
}
