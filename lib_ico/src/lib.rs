pub mod config;
pub mod constants;
pub mod image;
pub mod raster;
pub mod writer;

use log::*;
use std::io::Write;

pub use crate::config::IconConfig;
pub use crate::image::format::IconImage;
pub use crate::image::{decode, encode};
pub use crate::writer::save;

/// Routes this crate's log records to stderr. Only warnings and errors pass,
/// so a clean run stays silent.
pub fn init_logging() {
    env_logger::Builder::new()
        .target(env_logger::Target::Stderr)
        .filter(Some("lib_ico"), LevelFilter::Warn)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}
