/// Default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# colourmix configuration
# Only override what you want to change -- missing fields use defaults.

[blend]
# percentage = 0.5        # 0.0-1.0, weight of the first colour
# background = "#FFFFFF"  # hex or rgb()/rgba(), second colour for `blend`

[logging]
# level = "info"          # trace, debug, info, warn, error
"##
}
