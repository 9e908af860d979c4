//! Channel values to `#RRGGBB` formatting.

use colourmix_common::{Channels, ColourError, CHANNEL_NAMES};
use tracing::debug;

/// Format three channel values as an upper-case `#RRGGBB` string.
///
/// Each value is range-checked after rounding to the nearest integer (halves
/// upward), then
/// packed with its fractional part dropped, so `as_hex(127.5, 0.0, 0.0)` is
/// `#7F0000`.
///
/// # Errors
///
/// [`ColourError::InvalidFormat`] for NaN or infinite values,
/// [`ColourError::InvalidRange`] for values that round outside `[0, 255]`.
pub fn as_hex(red: f64, green: f64, blue: f64) -> Result<String, ColourError> {
    let mut channels = [0u8; 3];
    for ((slot, value), channel) in channels
        .iter_mut()
        .zip([red, green, blue])
        .zip(CHANNEL_NAMES)
    {
        *slot = channel_byte(value, channel)?;
    }
    Ok(format_channels(channels))
}

/// Format an in-range channel triple as `#RRGGBB`.
pub fn format_channels([red, green, blue]: Channels) -> String {
    let packed = 0x100_0000 + (u32::from(red) << 16) + (u32::from(green) << 8) + u32::from(blue);
    format!("#{:06X}", packed & 0xFF_FFFF)
}

fn channel_byte(value: f64, channel: &'static str) -> Result<u8, ColourError> {
    if !value.is_finite() {
        debug!(channel, value, "rejected non-finite channel");
        return Err(ColourError::InvalidFormat(format!("{channel} channel is {value}")));
    }
    // halves round up, so -0.5 lands on 0 and 255.5 on 256
    let rounded = (value + 0.5).floor();
    if !(0.0..=255.0).contains(&rounded) {
        debug!(channel, value, "rejected out-of-range channel");
        return Err(ColourError::InvalidRange { channel, value });
    }
    // rounding only gates the range; the packed value is truncated
    Ok(value.trunc().clamp(0.0, 255.0) as u8)
}
