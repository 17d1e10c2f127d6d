//! Application-level configuration constants.

// Sample generator
pub const SAMPLE_INTERVAL_MS: u32 = 2_000;

// Dial geometry (logical canvas units)
pub const CANVAS_WIDTH: u32 = 400;
pub const CANVAS_HEIGHT: u32 = 250;
pub const CENTER_Y_FACTOR: f64 = 0.8;
pub const DIAL_RADIUS: f64 = 90.0;
pub const ARC_LINE_WIDTH: f64 = 10.0;
pub const TICK_COUNT: usize = 11;
pub const TICK_LENGTH: f64 = 8.0;
pub const TICK_LABEL_OFFSET: f64 = 18.0;
pub const NEEDLE_LENGTH_FACTOR: f64 = 0.9;
pub const NEEDLE_LINE_WIDTH: f64 = 2.0;
pub const PIVOT_RADIUS: f64 = 6.0;
pub const READOUT_OFFSET: f64 = 30.0;

// Colors and fonts
pub const ARC_COLOR: &str = "#aaa";
pub const INK_COLOR: &str = "#000";
pub const TICK_FONT: &str = "10px sans-serif";
pub const READOUT_FONT: &str = "16px sans-serif";
