pub mod errors;
pub mod types;

pub use errors::{ColourError, ColourmixError, ConfigError};
pub use types::{Channels, BLACK, CHANNEL_NAMES, DEFAULT_PERCENTAGE, WHITE};

pub type Result<T> = std::result::Result<T, ColourmixError>;
