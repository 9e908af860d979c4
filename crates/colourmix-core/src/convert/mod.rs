//! Conversions between colour strings and channel triples.

mod format;
mod parse;


pub use format::{as_hex, format_channels};
pub use parse::as_rgb_array;

use colourmix_common::ColourError;

/// Canonical `#RRGGBB` form of any accepted colour string.
///
/// Shorthand is expanded, alpha dropped and digits upper-cased, so
/// `normalize("#abc8")` and `normalize("rgb(170,187,204)")` are both `#AABBCC`.
pub fn normalize(colour: &str) -> Result<String, ColourError> {
    as_rgb_array(colour).map(format_channels)
}
