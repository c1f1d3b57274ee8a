use log::{debug, info};
use thiserror::Error;

use super::format::{
    write_block, BitmapInfoHeader, IconDirEntry, IconDirHeader, ICON_FILE_SIZE, MASK_SIZE,
};
use crate::config::IconConfig;
use crate::constants::CANVAS_SIZE;
use crate::raster::render_disc;

#[derive(Error, Debug)]
pub enum EncodingError {
    #[error("Failed to serialize header block")]
    HeaderSerializationFailed(#[from] bincode::Error),
}

/// Builds the complete icon file for `config`.
///
/// The output is a pure function of the configuration and is always
/// [`ICON_FILE_SIZE`] bytes long.
pub fn encode(config: &IconConfig) -> Result<Vec<u8>, EncodingError> {
    info!("Starting encoding");

    let mut encoded_data: Vec<u8> = Vec::with_capacity(ICON_FILE_SIZE);

    // Step 1: File header
    let header = IconDirHeader::single_icon();
    write_block(&mut encoded_data, &header)?;
    debug!("File header written: {:?}", header);

    // Step 2: Directory entry
    let entry = IconDirEntry::for_canvas();
    write_block(&mut encoded_data, &entry)?;
    debug!(
        "Directory entry written: size={} offset={}",
        entry.bytes_in_res, entry.image_offset
    );

    // Step 3: Bitmap descriptor
    let descriptor = BitmapInfoHeader::for_canvas();
    write_block(&mut encoded_data, &descriptor)?;
    debug!(
        "Bitmap descriptor written: {}x{} (encoded height)",
        descriptor.width, descriptor.height
    );

    // Step 4: Color plane, stored bottom row first
    let pixels = render_disc(config);
    for row in pixels.chunks(CANVAS_SIZE as usize).rev() {
        for pixel in row {
            encoded_data.extend_from_slice(&pixel.to_bytes());
        }
    }
    debug!("Color plane written with {} pixels", pixels.len());

    // Step 5: Opacity mask, all visible; alpha carries the transparency
    encoded_data.resize(encoded_data.len() + MASK_SIZE, 0);
    debug!("Opacity mask written: {} bytes", MASK_SIZE);

    info!(
        "Encoding process completed successfully: {} bytes",
        encoded_data.len()
    );
    Ok(encoded_data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_icon_has_fixed_length() {
        let encoded = encode(&IconConfig::default()).unwrap();
        assert_eq!(encoded.len(), ICON_FILE_SIZE);
    }

    #[test]
    fn smaller_radius_changes_only_the_color_plane() {
        let full = encode(&IconConfig::default()).unwrap();
        let small = encode(&IconConfig {
            radius: 3,
            ..IconConfig::default()
        })
        .unwrap();

        assert_eq!(full.len(), small.len());
        assert_eq!(full[..62], small[..62]);
        assert_ne!(full[62..62 + 1024], small[62..62 + 1024]);
        assert_eq!(full[62 + 1024..], small[62 + 1024..]);
    }
}
