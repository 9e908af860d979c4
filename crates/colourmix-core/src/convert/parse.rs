//! String to channel-triple parsing.

use colourmix_common::{Channels, ColourError, CHANNEL_NAMES};
use tracing::debug;

use crate::validate::{is_valid_hex, rgb_fields};

/// Parse an `rgb()`/`rgba()` or hex colour into its `[red, green, blue]` channels.
///
/// The functional form is tried first. Shorthand hex (`#RGB`, `#RGBA`) is
/// expanded by digit duplication and any alpha component is discarded.
///
/// # Errors
///
/// [`ColourError::InvalidFormat`] if the string is in neither format, and
/// [`ColourError::InvalidRange`] if an `rgb()` field is above 255.
pub fn as_rgb_array(colour: &str) -> Result<Channels, ColourError> {
    if let Some(fields) = rgb_fields(colour) {
        return parse_rgb(fields);
    }
    if is_valid_hex(colour) {
        return parse_hex(colour);
    }

    debug!(colour, "rejected colour: neither hex nor rgb");
    Err(ColourError::InvalidFormat(colour.to_string()))
}

fn parse_rgb(fields: [&str; 3]) -> Result<Channels, ColourError> {
    let mut channels = [0u8; 3];
    for ((slot, field), channel) in channels.iter_mut().zip(fields).zip(CHANNEL_NAMES) {
        // at most three digits, so u16 always holds it
        let value: u16 = field
            .parse()
            .map_err(|_| ColourError::InvalidFormat(field.to_string()))?;
        *slot = u8::try_from(value).map_err(|_| ColourError::InvalidRange {
            channel,
            value: f64::from(value),
        })?;
    }
    Ok(channels)
}

fn parse_hex(colour: &str) -> Result<Channels, ColourError> {
    let hex = colour.strip_prefix('#').unwrap_or(colour);
    let expanded: String = match hex.len() {
        3 | 4 => hex.chars().flat_map(|c| [c, c]).collect(),
        _ => hex.to_string(),
    };

    let byte = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&expanded[range], 16)
            .map_err(|_| ColourError::InvalidFormat(colour.to_string()))
    };
    Ok([byte(0..2)?, byte(2..4)?, byte(4..6)?])
}
