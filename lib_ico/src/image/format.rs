use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::constants::CANVAS_SIZE;
use crate::raster::Bgra;

pub const BITS_PER_PIXEL: u16 = 32;
pub const BYTES_PER_PIXEL: usize = 4;

/// BGRA plane of the 16x16 canvas.
pub const COLOR_DATA_SIZE: usize =
    CANVAS_SIZE as usize * CANVAS_SIZE as usize * BYTES_PER_PIXEL;
/// 1-bit opacity mask, one padded row per pixel row.
pub const MASK_SIZE: usize = mask_row_bytes(CANVAS_SIZE as u32) * CANVAS_SIZE as usize;

/// Offset of the bitmap descriptor from the start of the file.
pub const IMAGE_OFFSET: u32 = (IconDirHeader::SIZE + IconDirEntry::SIZE) as u32;
/// Value of the directory entry's size field. Covers the descriptor and the
/// color plane; the mask is left out, as in the icons this crate reproduces.
pub const DECLARED_IMAGE_SIZE: u32 = (COLOR_DATA_SIZE + BitmapInfoHeader::SIZE) as u32;

pub const ICON_FILE_SIZE: usize = IconDirHeader::SIZE
    + IconDirEntry::SIZE
    + BitmapInfoHeader::SIZE
    + COLOR_DATA_SIZE
    + MASK_SIZE;

/// Bytes per mask row: one bit per pixel, padded to 32 bits.
pub const fn mask_row_bytes(width: u32) -> usize {
    (((width + 31) / 32) * 4) as usize
}

/// ICONDIR: the 6-byte file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconDirHeader {
    pub reserved: u16,
    pub kind: u16,
    pub count: u16,
}

impl IconDirHeader {
    pub const SIZE: usize = 6;
    pub const KIND_ICON: u16 = 1;

    pub fn single_icon() -> Self {
        Self {
            reserved: 0,
            kind: Self::KIND_ICON,
            count: 1,
        }
    }
}

/// ICONDIRENTRY: one per image in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconDirEntry {
    pub width: u8,
    pub height: u8,
    pub color_count: u8,
    pub reserved: u8,
    pub planes: u16,
    pub bit_count: u16,
    pub bytes_in_res: u32,
    pub image_offset: u32,
}

impl IconDirEntry {
    pub const SIZE: usize = 16;

    pub fn for_canvas() -> Self {
        Self {
            width: CANVAS_SIZE,
            height: CANVAS_SIZE,
            color_count: 0,
            reserved: 0,
            planes: 1,
            bit_count: BITS_PER_PIXEL,
            bytes_in_res: DECLARED_IMAGE_SIZE,
            image_offset: IMAGE_OFFSET,
        }
    }

    /// A stored width of 0 stands for 256.
    pub fn pixel_width(&self) -> u32 {
        if self.width == 0 {
            256
        } else {
            u32::from(self.width)
        }
    }

    pub fn pixel_height(&self) -> u32 {
        if self.height == 0 {
            256
        } else {
            u32::from(self.height)
        }
    }
}

/// BITMAPINFOHEADER preceding the pixel data.
///
/// `height` covers the color plane and the mask stacked together, so it is
/// twice the visible height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitmapInfoHeader {
    pub size: u32,
    pub width: i32,
    pub height: i32,
    pub planes: u16,
    pub bit_count: u16,
    pub compression: u32,
    pub size_image: u32,
    pub x_pels_per_meter: i32,
    pub y_pels_per_meter: i32,
    pub clr_used: u32,
    pub clr_important: u32,
}

impl BitmapInfoHeader {
    pub const SIZE: usize = 40;
    pub const COMPRESSION_NONE: u32 = 0;

    pub fn for_canvas() -> Self {
        Self {
            size: Self::SIZE as u32,
            width: i32::from(CANVAS_SIZE),
            height: i32::from(CANVAS_SIZE) * 2,
            planes: 1,
            bit_count: BITS_PER_PIXEL,
            compression: Self::COMPRESSION_NONE,
            size_image: COLOR_DATA_SIZE as u32,
            x_pels_per_meter: 0,
            y_pels_per_meter: 0,
            clr_used: 0,
            clr_important: 0,
        }
    }
}

/// A decoded single-image icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconImage {
    pub width: u32,
    pub height: u32,
    /// Top-down, left to right.
    pub pixels: Vec<Bgra>,
    pub mask: Vec<u8>,
}

impl IconImage {
    pub fn pixel(&self, x: u32, y: u32) -> Option<Bgra> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get((y * self.width + x) as usize).copied()
    }
}

// Fixed-int little-endian bincode matches the packed on-disk layout.
pub(crate) fn write_block<T: Serialize>(out: &mut Vec<u8>, block: &T) -> bincode::Result<()> {
    bincode::serialize_into(out, block)
}

pub(crate) fn read_block<T: DeserializeOwned>(data: &[u8]) -> bincode::Result<T> {
    bincode::deserialize(data)
}
