use std::path::PathBuf;

/// Failure of a colour operation.
///
/// The predicates never produce one; every other operation returns one of
/// these in place of a result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColourError {
    #[error("invalid colour format: {0}")]
    InvalidFormat(String),

    #[error("{channel} channel out of range [0, 255]: {value}")]
    InvalidRange { channel: &'static str, value: f64 },

    #[error("invalid percentage: {0}")]
    InvalidPercentage(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("no platform config directory for this user")]
    NoConfigDir,

    #[error("cannot write config {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ColourmixError {
    #[error(transparent)]
    Colour(#[from] ColourError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
