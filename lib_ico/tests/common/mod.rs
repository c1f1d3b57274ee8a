#![allow(dead_code)]

pub const HEADER_LEN: usize = 6;
pub const ENTRY_LEN: usize = 16;
pub const DESCRIPTOR_LEN: usize = 40;
pub const COLOR_START: usize = HEADER_LEN + ENTRY_LEN + DESCRIPTOR_LEN;
pub const COLOR_LEN: usize = 16 * 16 * 4;
pub const MASK_START: usize = COLOR_START + COLOR_LEN;

pub const ACCENT: [u8; 4] = [0x00, 0x40, 0xFF, 0xFF];
pub const CLEAR: [u8; 4] = [0x00, 0x00, 0x00, 0x00];

pub fn read_u16(data: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([data[at], data[at + 1]])
}

pub fn read_u32(data: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
}

/// BGRA bytes of image pixel `(x, y)`, undoing the bottom-up row order.
pub fn pixel_at(data: &[u8], x: usize, y: usize) -> [u8; 4] {
    let stored_row = 15 - y;
    let at = COLOR_START + (stored_row * 16 + x) * 4;
    [data[at], data[at + 1], data[at + 2], data[at + 3]]
}

pub fn in_reference_disc(x: i32, y: i32) -> bool {
    (x - 8) * (x - 8) + (y - 8) * (y - 8) <= 49
}
