//! Configuration validation.
//!
//! Collects every problem into a single `ConfigError` so one run reports
//! them all.


use crate::schema::ColourmixConfig;
use colourmix_common::ConfigError;
use colourmix_core::is_valid_colour;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ColourmixConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_blend(&mut errors, config);
    validate_logging(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_blend(errors: &mut Vec<String>, config: &ColourmixConfig) {
    let percentage = config.blend.percentage;
    if !(0.0..=1.0).contains(&percentage) {
        errors.push(format!(
            "blend.percentage = {percentage} is out of range [0, 1]"
        ));
    }

    let background = &config.blend.background;
    if !is_valid_colour(background) {
        errors.push(format!(
            "blend.background = {background:?} is not a hex or rgb colour"
        ));
    }
}

fn validate_logging(errors: &mut Vec<String>, config: &ColourmixConfig) {
    let level = config.logging.level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(format!(
            "logging.level = {:?} must be one of {}",
            config.logging.level,
            LOG_LEVELS.join(", ")
        ));
    }
}
