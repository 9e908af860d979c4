//! colourmix configuration.
//!
//! TOML-based, with serde defaults for every field so partial files work.
//!
//! ```rust,no_run
//! use colourmix_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{BlendConfig, ColourmixConfig, LoggingConfig};
pub use toml_loader::{create_default_config, default_config_path, load_default, load_from_path};
pub use validation::validate;

use colourmix_common::ConfigError;
use std::path::Path;

/// Load config from `path` if given, otherwise from the platform default,
/// then validate it.
pub fn load_config_from(path: Option<&Path>) -> Result<ColourmixConfig, ConfigError> {
    let config = match path {
        Some(path) => load_from_path(path)?,
        None => load_default()?,
    };
    validate(&config)?;
    Ok(config)
}

/// Load and validate config from the platform default path.
pub fn load_config() -> Result<ColourmixConfig, ConfigError> {
    load_config_from(None)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &ColourmixConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&ColourmixConfig::default());
        assert!(json.contains("\"blend\""));
        assert!(json.contains("\"percentage\": 0.5"));
        assert!(json.contains("\"#FFFFFF\""));
        assert!(json.contains("\"logging\""));
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let json = config_to_json(&ColourmixConfig::default());
        let parsed: ColourmixConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.blend.background, "#FFFFFF");
        assert_eq!(parsed.logging.level, "info");
    }

    #[test]
    fn load_config_from_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[blend]\npercentage = 1.5\n").unwrap();

        let err = load_config_from(Some(path.as_path())).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn load_config_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[blend]\nbackground = \"rgb(0,0,0)\"\n").unwrap();

        let config = load_config_from(Some(path.as_path())).unwrap();
        assert_eq!(config.blend.background, "rgb(0,0,0)");
        assert_eq!(config.blend.percentage, 0.5);
    }
}
