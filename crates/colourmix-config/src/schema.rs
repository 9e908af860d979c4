//! Configuration types.

use colourmix_common::{DEFAULT_PERCENTAGE, WHITE};
use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ColourmixConfig {
    pub blend: BlendConfig,
    pub logging: LoggingConfig,
}

/// Defaults used when a blend does not name its weight or second colour.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlendConfig {
    /// Weight of the first colour, 0.0-1.0.
    pub percentage: f64,
    /// Second colour for `blend` (hex or rgb).
    pub background: String,
}

impl Default for BlendConfig {
    fn default() -> Self {
        Self {
            percentage: DEFAULT_PERCENTAGE,
            background: WHITE.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// trace, debug, info, warn or error.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}
