use super::format::{
    mask_row_bytes, read_block, BitmapInfoHeader, IconDirEntry, IconDirHeader, IconImage,
    BITS_PER_PIXEL, BYTES_PER_PIXEL,
};
use crate::raster::Bgra;
use log::{debug, error, info};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Data too short: expected at least {expected} bytes, got {actual}")]
    TooShort { expected: usize, actual: usize },
    #[error("Reserved header field must be 0, got {0}")]
    InvalidReserved(u16),
    #[error("Resource type {0} is not an icon")]
    NotAnIcon(u16),
    #[error("Expected exactly one image, found {0}")]
    UnsupportedImageCount(u16),
    #[error("Image offset {0} lies outside the data")]
    OffsetOutOfBounds(u32),
    #[error("Directory entry declares unsupported bit depth {0}")]
    UnsupportedEntryBitDepth(u16),
    #[error("Declared image size {declared} is smaller than the required {required} bytes")]
    DeclaredSizeTooSmall { declared: u32, required: usize },
    #[error("Image at offset {offset} with size {size} runs past the end of {len} bytes")]
    DeclaredSizeOutOfBounds { offset: u32, size: u32, len: usize },
    #[error("Unsupported bitmap descriptor size {0}")]
    InvalidDescriptorSize(u32),
    #[error("Descriptor dimensions {descriptor:?} do not match directory entry {entry:?}")]
    DimensionMismatch {
        entry: (u32, u32),
        descriptor: (i32, i32),
    },
    #[error("Unsupported bit depth {0}")]
    UnsupportedBitDepth(u16),
    #[error("Unsupported compression method {0}")]
    UnsupportedCompression(u32),

    #[error("Failed to parse header block")]
    HeaderParsingFailed(#[from] bincode::Error),
}

fn ensure_len(data: &[u8], expected: usize) -> Result<(), DecodeError> {
    if data.len() < expected {
        error!(
            "Unexpected end of data: need {} bytes, have {}",
            expected,
            data.len()
        );
        return Err(DecodeError::TooShort {
            expected,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Parses a single-image, 32-bit, uncompressed icon.
pub fn decode(encoded_data: &[u8]) -> Result<IconImage, DecodeError> {
    let mut cursor = 0;

    // File header
    ensure_len(encoded_data, IconDirHeader::SIZE + IconDirEntry::SIZE)?;
    let header: IconDirHeader = read_block(&encoded_data[cursor..])?;
    if header.reserved != 0 {
        error!("Reserved field is {}", header.reserved);
        return Err(DecodeError::InvalidReserved(header.reserved));
    }
    if header.kind != IconDirHeader::KIND_ICON {
        error!("Resource type {} is not an icon", header.kind);
        return Err(DecodeError::NotAnIcon(header.kind));
    }
    if header.count != 1 {
        error!("Image count {} is not supported", header.count);
        return Err(DecodeError::UnsupportedImageCount(header.count));
    }
    cursor += IconDirHeader::SIZE;
    debug!("File header validated: {:?}", header);

    // Directory entry
    let entry: IconDirEntry = read_block(&encoded_data[cursor..])?;
    let width = entry.pixel_width();
    let height = entry.pixel_height();
    debug!(
        "Directory entry read: {}x{} size={} offset={}",
        width, height, entry.bytes_in_res, entry.image_offset
    );
    // 0 leaves the depth to the bitmap descriptor.
    if entry.bit_count != 0 && entry.bit_count != BITS_PER_PIXEL {
        error!("Directory entry bit depth {} is not supported", entry.bit_count);
        return Err(DecodeError::UnsupportedEntryBitDepth(entry.bit_count));
    }

    cursor = entry.image_offset as usize;
    if cursor >= encoded_data.len() {
        error!("Image offset {} is past the end of data", cursor);
        return Err(DecodeError::OffsetOutOfBounds(entry.image_offset));
    }

    let row_len = width as usize * BYTES_PER_PIXEL;
    let color_len = row_len * height as usize;
    let required = BitmapInfoHeader::SIZE + color_len;
    if (entry.bytes_in_res as usize) < required {
        error!(
            "Declared image size {} is below the {} bytes needed",
            entry.bytes_in_res, required
        );
        return Err(DecodeError::DeclaredSizeTooSmall {
            declared: entry.bytes_in_res,
            required,
        });
    }
    let image_end = u64::from(entry.image_offset) + u64::from(entry.bytes_in_res);
    if image_end > encoded_data.len() as u64 {
        error!(
            "Image at offset {} with size {} runs past {} bytes of data",
            entry.image_offset,
            entry.bytes_in_res,
            encoded_data.len()
        );
        return Err(DecodeError::DeclaredSizeOutOfBounds {
            offset: entry.image_offset,
            size: entry.bytes_in_res,
            len: encoded_data.len(),
        });
    }

    // Bitmap descriptor
    ensure_len(encoded_data, cursor + BitmapInfoHeader::SIZE)?;
    let descriptor: BitmapInfoHeader = read_block(&encoded_data[cursor..])?;
    if descriptor.size as usize != BitmapInfoHeader::SIZE {
        error!("Bitmap descriptor size {} is not supported", descriptor.size);
        return Err(DecodeError::InvalidDescriptorSize(descriptor.size));
    }
    if i64::from(descriptor.width) != i64::from(width)
        || i64::from(descriptor.height) != i64::from(height) * 2
    {
        error!(
            "Descriptor {}x{} does not match entry {}x{}",
            descriptor.width, descriptor.height, width, height
        );
        return Err(DecodeError::DimensionMismatch {
            entry: (width, height),
            descriptor: (descriptor.width, descriptor.height),
        });
    }
    if descriptor.bit_count != BITS_PER_PIXEL {
        error!("Bit depth {} is not supported", descriptor.bit_count);
        return Err(DecodeError::UnsupportedBitDepth(descriptor.bit_count));
    }
    if descriptor.compression != BitmapInfoHeader::COMPRESSION_NONE {
        error!("Compression method {} is not supported", descriptor.compression);
        return Err(DecodeError::UnsupportedCompression(descriptor.compression));
    }
    cursor += BitmapInfoHeader::SIZE;

    // Pixel payload
    let mask_len = mask_row_bytes(width) * height as usize;
    ensure_len(encoded_data, cursor + color_len + mask_len)?;

    let color_plane = &encoded_data[cursor..cursor + color_len];
    let pixels: Vec<Bgra> = color_plane
        .chunks(row_len)
        .rev()
        .flat_map(|row| {
            row.chunks(BYTES_PER_PIXEL)
                .map(|p| Bgra::from_bytes([p[0], p[1], p[2], p[3]]))
        })
        .collect();
    cursor += color_len;
    debug!("Color plane read: {} pixels", pixels.len());

    let mask = encoded_data[cursor..cursor + mask_len].to_vec();
    info!("Decoding successful");

    Ok(IconImage {
        width,
        height,
        pixels,
        mask,
    })
}
