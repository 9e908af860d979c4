//! Percentage-weighted linear blending of two colours.
//!
//! `blend(first, p, second)` computes, per channel,
//! `p * first + (1 - p) * second` with `p` clamped to `[0, 1]`. This is plain
//! interpolation in sRGB space, not alpha compositing: any alpha on the
//! inputs is ignored.

#[cfg(test)]
mod tests;

use colourmix_common::{Channels, ColourError, BLACK, WHITE};
use tracing::{debug, trace};

use crate::convert::{as_hex, as_rgb_array};

/// Blend `first` into `second`, giving `first` a weight of `percentage`.
///
/// `percentage = 1.0` yields `first` and `0.0` yields `second`, both in
/// canonical `#RRGGBB` form.
///
/// # Errors
///
/// Fails if either colour does not parse or `percentage` is NaN.
pub fn blend(first: &str, percentage: f64, second: &str) -> Result<String, ColourError> {
    let foreground = as_rgb_array(first)?;
    let background = as_rgb_array(second)?;
    mix(foreground, percentage, background)
}

/// Blend `first` into a background given directly as channels.
pub fn blend_channels(
    first: &str,
    percentage: f64,
    background: Channels,
) -> Result<String, ColourError> {
    let foreground = as_rgb_array(first)?;
    mix(foreground, percentage, background)
}

/// Blend towards white.
pub fn lighten(colour: &str, percentage: f64) -> Result<String, ColourError> {
    blend(colour, percentage, WHITE)
}

/// Blend towards black.
pub fn darken(colour: &str, percentage: f64) -> Result<String, ColourError> {
    blend(colour, percentage, BLACK)
}

/// Clamp a blend weight into `[0, 1]`. Infinities clamp; NaN is rejected.
pub fn clamp_percentage(percentage: f64) -> Result<f64, ColourError> {
    if percentage.is_nan() {
        debug!("rejected NaN percentage");
        return Err(ColourError::InvalidPercentage(percentage.to_string()));
    }
    Ok(percentage.clamp(0.0, 1.0))
}

fn mix(
    foreground: Channels,
    percentage: f64,
    background: Channels,
) -> Result<String, ColourError> {
    let weight = clamp_percentage(percentage)?;
    let channel =
        |i: usize| weight * f64::from(foreground[i]) + (1.0 - weight) * f64::from(background[i]);
    let (red, green, blue) = (channel(0), channel(1), channel(2));
    trace!(?foreground, ?background, weight, red, green, blue, "blended channels");
    as_hex(red, green, blue)
}
