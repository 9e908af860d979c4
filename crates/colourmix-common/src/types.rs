//! Plain value types shared by every colourmix crate.

/// An ordered `(red, green, blue)` triple, each channel in `[0, 255]`.
pub type Channels = [u8; 3];

/// Endpoint used by `lighten` and the default second colour of `blend`.
pub const WHITE: &str = "#FFFFFF";

/// Endpoint used by `darken`.
pub const BLACK: &str = "#000000";

/// Weight given to the first colour when a caller does not pick one.
pub const DEFAULT_PERCENTAGE: f64 = 0.5;

/// Channel names, indexed the same way as [`Channels`].
pub const CHANNEL_NAMES: [&str; 3] = ["red", "green", "blue"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_canonical_hex() {
        assert_eq!(WHITE.len(), 7);
        assert_eq!(BLACK.len(), 7);
        assert!(WHITE.starts_with('#'));
        assert_eq!(WHITE, WHITE.to_uppercase());
    }

    #[test]
    fn default_percentage_is_midpoint() {
        assert_eq!(DEFAULT_PERCENTAGE, 0.5);
    }

    #[test]
    fn channel_names_follow_triple_order() {
        assert_eq!(CHANNEL_NAMES, ["red", "green", "blue"]);
    }
}
