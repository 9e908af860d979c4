use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// colourmix: validate, convert and blend hex and rgb() colours.
#[derive(Parser, Debug)]
#[command(name = "colourmix", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error) or a full
    /// tracing directive.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Report whether a colour is hex, rgb, or invalid.
    Check { colour: String },

    /// Print the red, green and blue channels of a colour.
    Channels { colour: String },

    /// Format three channel values as #RRGGBB.
    #[command(allow_negative_numbers = true)]
    Hex { red: f64, green: f64, blue: f64 },

    /// Blend a colour into a second colour.
    #[command(allow_negative_numbers = true)]
    Blend {
        colour: String,
        /// Weight of the first colour; clamped to 0.0-1.0.
        #[arg(short, long)]
        percentage: Option<f64>,
        /// Second colour; defaults to the configured background.
        #[arg(short, long)]
        with: Option<String>,
    },

    /// Blend a colour towards white.
    #[command(allow_negative_numbers = true)]
    Lighten {
        colour: String,
        #[arg(short, long)]
        percentage: Option<f64>,
    },

    /// Blend a colour towards black.
    #[command(allow_negative_numbers = true)]
    Darken {
        colour: String,
        #[arg(short, long)]
        percentage: Option<f64>,
    },

    /// Answer JSON requests read line by line from stdin.
    Serve,

    /// Print the effective configuration as JSON.
    Config,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_blend_with_options() {
        let args = Args::try_parse_from([
            "colourmix", "blend", "#00ADD8", "--percentage", "0.3", "--with", "#000",
        ])
        .unwrap();
        assert_eq!(
            args.command,
            Command::Blend {
                colour: "#00ADD8".into(),
                percentage: Some(0.3),
                with: Some("#000".into()),
            }
        );
    }

    #[test]
    fn parses_negative_numbers() {
        let args = Args::try_parse_from(["colourmix", "hex", "-1", "0", "0"]).unwrap();
        assert_eq!(
            args.command,
            Command::Hex {
                red: -1.0,
                green: 0.0,
                blue: 0.0
            }
        );

        let args = Args::try_parse_from(["colourmix", "darken", "#FFF", "-p", "-2"]).unwrap();
        assert!(matches!(
            args.command,
            Command::Darken {
                percentage: Some(p),
                ..
            } if p == -2.0
        ));
    }

    #[test]
    fn global_options_follow_subcommand() {
        let args = Args::try_parse_from([
            "colourmix", "check", "#FFF", "--config", "/tmp/c.toml", "--log-level", "debug",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/c.toml")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn rejects_non_numeric_percentage() {
        assert!(Args::try_parse_from(["colourmix", "lighten", "#FFF", "-p", "m"]).is_err());
    }
}
