use std::io;
use std::path::PathBuf;

use lib_ico::image::encoder::EncodingError;
use lib_ico::{encode, save, IconConfig};
use log::info;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Icon encoding error: {0}")]
    EncodingError(#[from] EncodingError),
}

/// Encodes the icon described by `config` and writes it to its output path.
pub fn generate_icon(config: &IconConfig) -> Result<PathBuf, GenerateError> {
    let encoded_data = encode(config)?;
    save(&encoded_data, &config.output_path)?;

    info!(
        "Icon written to {} ({} bytes)",
        config.output_path.display(),
        encoded_data.len()
    );
    Ok(config.output_path.clone())
}
