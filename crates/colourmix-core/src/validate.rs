//! Format predicates for hex and `rgb()`/`rgba()` colour strings.
//!
//! Patterns are anchored and matched statelessly. Channel fields are checked
//! by digit count only (1-3 digits), so `rgb(999,0,0)` is well-formed here and
//! rejected later by the parser's range check.

use regex::Regex;
use std::sync::LazyLock;

/// Hex colour: optional `#`, then 3, 4, 6 or 8 hex digits.
static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#?([0-9A-Fa-f]{8}|[0-9A-Fa-f]{6}|[0-9A-Fa-f]{3,4})$").unwrap());

/// `rgb(r,g,b)` with at most one space after each comma.
static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgb\(([0-9]{1,3}), ?([0-9]{1,3}), ?([0-9]{1,3})\)$").unwrap()
});

/// `rgba(r,g,b,a)` where `a` is `0`, `1` or `0.` followed by digits.
static RGBA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgba\(([0-9]{1,3}), ?([0-9]{1,3}), ?([0-9]{1,3}), ?(1|0|0\.[0-9]+)\)$").unwrap()
});

/// Returns `true` if `colour` is a hex colour code.
pub fn is_valid_hex(colour: &str) -> bool {
    HEX_RE.is_match(colour)
}

/// Returns `true` if `colour` is an `rgb()` or `rgba()` colour code.
pub fn is_valid_rgb(colour: &str) -> bool {
    rgb_fields(colour).is_some()
}

/// Returns `true` if `colour` is in either accepted format.
pub fn is_valid_colour(colour: &str) -> bool {
    is_valid_rgb(colour) || is_valid_hex(colour)
}

/// The three channel fields of an `rgb()`/`rgba()` string, alpha dropped.
pub(crate) fn rgb_fields(colour: &str) -> Option<[&str; 3]> {
    let caps = RGB_RE
        .captures(colour)
        .or_else(|| RGBA_RE.captures(colour))?;
    Some([
        caps.get(1)?.as_str(),
        caps.get(2)?.as_str(),
        caps.get(3)?.as_str(),
    ])
}
