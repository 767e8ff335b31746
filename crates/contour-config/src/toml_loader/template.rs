//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Contour Configuration
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "Contour"
# width = 1280           # initial logical size
# height = 800
# startup_mode = "windowed"   # windowed, maximized, fullscreen
# decorations = true

[theme]
# mode = "dark"          # dark, light (toggle at runtime with 't')

[theme.variables]
# Accepted forms: "#rgb", "#rrggbb", "rgb(r, g, b)"
# background = "#d5d6db"        # sampled in light mode
# dark_background = "#1a1b26"   # sampled in dark mode

[animation]
# time_offset = 20.0     # starting shader-clock value
# time_scale = 500.0     # milliseconds of real time per clock unit
# time_max = 100.0       # clock stops advancing here
# fps_log_interval_secs = 0    # 0 disables the frame-rate report
"##
    .to_string()
}
