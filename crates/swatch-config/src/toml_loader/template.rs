//! Default config file content.

/// Generate the default TOML config content with comments.
pub(super) fn default_config_toml() -> &'static str {
    r##"# Swatch Configuration
# Only override what you want to change -- missing fields use defaults.

version = 1

[cache]
# max_entries = 1024          # 1-1048576
# eviction = "approx_quarter" # approx_quarter, strict_lru

[palette]
# Extra named colors, looked up before the CSS names.
# Names are letters only; values are hex, rgb() or rgba().
# accent = "#00d4ff"
# panel = "rgba(10,14,20,0.72)"
"##
}
