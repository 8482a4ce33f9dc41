//! Layout constants for the host screen

/// Gap between the trigger button and the bottom edge of the screen
pub const BUTTON_BOTTOM_MARGIN: f32 = 40.0;

/// Side length of the color indicator swatch
pub const SWATCH_SIZE: f32 = 40.0;

/// Horizontal gap between the swatch and the trigger button
pub const SWATCH_SPACING: f32 = 20.0;

/// Background the demo composites snapshots onto
pub const SCREEN_BACKGROUND: colorwheel_ui::Color = colorwheel_ui::Color::WHITE;

/// Default config filename
pub const CONFIG_FILENAME: &str = "colorwheel-config.json";
