//! Subcommand execution.

use colourmix_common::ColourmixError;
use colourmix_config::{config_to_json, ColourmixConfig};
use colourmix_core::{as_hex, as_rgb_array, blend, darken, is_valid_hex, is_valid_rgb, lighten};
use std::io::{BufRead, Write};
use tracing::debug;

use crate::cli::Command;
use crate::serve::serve;

/// Run `command`, writing its result to `out`.
///
/// Returns `Ok(false)` when the command ran but the answer is negative
/// (`check` on an invalid colour).
pub fn execute<R: BufRead, W: Write>(
    command: &Command,
    config: &ColourmixConfig,
    input: R,
    out: &mut W,
) -> Result<bool, ColourmixError> {
    debug!(?command, "executing");
    let default_percentage = config.blend.percentage;

    let line = match command {
        Command::Check { colour } => {
            let kind = if is_valid_hex(colour) {
                "hex"
            } else if is_valid_rgb(colour) {
                "rgb"
            } else {
                writeln!(out, "invalid")?;
                return Ok(false);
            };
            kind.to_string()
        }
        Command::Channels { colour } => {
            let [red, green, blue] = as_rgb_array(colour)?;
            format!("{red},{green},{blue}")
        }
        Command::Hex { red, green, blue } => as_hex(*red, *green, *blue)?,
        Command::Blend {
            colour,
            percentage,
            with,
        } => blend(
            colour,
            percentage.unwrap_or(default_percentage),
            with.as_deref().unwrap_or(config.blend.background.as_str()),
        )?,
        Command::Lighten { colour, percentage } => {
            lighten(colour, percentage.unwrap_or(default_percentage))?
        }
        Command::Darken { colour, percentage } => {
            darken(colour, percentage.unwrap_or(default_percentage))?
        }
        Command::Serve => {
            serve(input, out)?;
            return Ok(true);
        }
        Command::Config => config_to_json(config),
    };

    writeln!(out, "{line}")?;
    Ok(true)
}
