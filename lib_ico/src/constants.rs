pub const DEFAULT_OUTPUT_PATH: &str = "public/favicon.ico";

/// Width and height of the canvas, in pixels.
pub const CANVAS_SIZE: u8 = 16;

pub const DEFAULT_CENTER: (u32, u32) = (8, 8);
pub const DEFAULT_RADIUS: u32 = 7;

/// Accent fill color in conventional RGBA order.
pub const DEFAULT_ACCENT_RGBA: [u8; 4] = [0xFF, 0x40, 0x00, 0xFF];
