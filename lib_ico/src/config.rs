use std::path::PathBuf;

use crate::constants::{DEFAULT_ACCENT_RGBA, DEFAULT_CENTER, DEFAULT_OUTPUT_PATH, DEFAULT_RADIUS};
use crate::raster::Bgra;

/// Parameters of the generated icon. The canvas is always
/// [`CANVAS_SIZE`](crate::constants::CANVAS_SIZE) pixels square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconConfig {
    pub center: (u32, u32),
    pub radius: u32,
    pub accent: Bgra,
    pub output_path: PathBuf,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            radius: DEFAULT_RADIUS,
            accent: Bgra::from_rgba(DEFAULT_ACCENT_RGBA),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}
