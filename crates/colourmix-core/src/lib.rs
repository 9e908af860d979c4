//! Colour validation, conversion and linear blending.
//!
//! Colours come in two string forms:
//! - hex: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA` (the `#` is optional)
//! - functional: `rgb(r,g,b)` or `rgba(r,g,b,a)`
//!
//! Alpha is accepted on input but never takes part in blending, and every
//! produced colour is `#RRGGBB` in upper case.
//!
//! ```rust
//! use colourmix_core::{blend, darken};
//!
//! assert_eq!(blend("#00ADD8", 0.5, "#FFFFFF").unwrap(), "#7FD6EB");
//! assert_eq!(darken("#00ADD8", 0.3).unwrap(), "#003340");
//! ```

pub mod blend;
pub mod convert;
pub mod ipc;
pub mod validate;

pub use blend::{blend, blend_channels, clamp_percentage, darken, lighten};
pub use colourmix_common::{Channels, ColourError, BLACK, DEFAULT_PERCENTAGE, WHITE};
pub use convert::{as_hex, as_rgb_array, format_channels, normalize};
pub use ipc::{ColourRequest, ColourResponse, ColourValue};
pub use validate::{is_valid_colour, is_valid_hex, is_valid_rgb};
