use log::debug;

use crate::config::IconConfig;
use crate::constants::CANVAS_SIZE;

/// A single 32-bit sample, stored blue first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bgra {
    pub b: u8,
    pub g: u8,
    pub r: u8,
    pub a: u8,
}

impl Bgra {
    pub const TRANSPARENT: Bgra = Bgra {
        b: 0,
        g: 0,
        r: 0,
        a: 0,
    };

    pub const fn from_rgba([r, g, b, a]: [u8; 4]) -> Self {
        Self { b, g, r, a }
    }

    pub const fn from_bytes([b, g, r, a]: [u8; 4]) -> Self {
        Self { b, g, r, a }
    }

    /// Byte layout as written to the color plane.
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.b, self.g, self.r, self.a]
    }
}

/// Whether `(x, y)` lies within `radius` of `center`, boundary included.
///
/// Squared distances keep the test exact for integer coordinates.
pub fn in_disc(x: u32, y: u32, center: (u32, u32), radius: u32) -> bool {
    let dx = u128::from(x.abs_diff(center.0));
    let dy = u128::from(y.abs_diff(center.1));
    let r = u128::from(radius);
    dx * dx + dy * dy <= r * r
}

/// Renders the filled disc on a transparent canvas.
///
/// Pixels come out top-down, left to right: index `y * CANVAS_SIZE + x`.
pub fn render_disc(config: &IconConfig) -> Vec<Bgra> {
    let size = u32::from(CANVAS_SIZE);
    let mut pixels = Vec::with_capacity((size * size) as usize);

    for y in 0..size {
        for x in 0..size {
            if in_disc(x, y, config.center, config.radius) {
                pixels.push(config.accent);
            } else {
                pixels.push(Bgra::TRANSPARENT);
            }
        }
    }

    debug!(
        "Rendered disc: center={:?} radius={} filled={}",
        config.center,
        config.radius,
        pixels.iter().filter(|p| **p != Bgra::TRANSPARENT).count()
    );
    pixels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_points() {
        let center = (8, 8);
        assert!(in_disc(8, 15, center, 7));
        assert!(in_disc(8, 1, center, 7));
        assert!(in_disc(8, 8, center, 7));
        assert!(!in_disc(0, 8, center, 7));
        assert!(!in_disc(1, 1, center, 7));
        assert!(!in_disc(15, 15, center, 7));
    }

    #[test]
    fn far_center_leaves_canvas_empty() {
        assert!(!in_disc(0, 0, (u32::MAX, u32::MAX), 7));
        assert!(in_disc(0, 0, (u32::MAX, 0), u32::MAX));

        let config = IconConfig {
            center: (u32::MAX, u32::MAX),
            ..IconConfig::default()
        };
        let pixels = render_disc(&config);
        assert!(pixels.iter().all(|p| *p == Bgra::TRANSPARENT));
    }

    #[test]
    fn rgba_is_reordered() {
        let pixel = Bgra::from_rgba([0xFF, 0x40, 0x00, 0xFF]);
        assert_eq!(pixel.to_bytes(), [0x00, 0x40, 0xFF, 0xFF]);
        assert_eq!(Bgra::from_bytes(pixel.to_bytes()), pixel);
    }

    #[test]
    fn render_is_top_down() {
        let pixels = render_disc(&IconConfig::default());
        assert_eq!(pixels.len(), 256);

        // Row 0 sits 8 pixels above the center.
        assert!(pixels[..16].iter().all(|p| *p == Bgra::TRANSPARENT));
        // Row 15 holds the bottom tip of the disc.
        assert_ne!(pixels[15 * 16 + 8], Bgra::TRANSPARENT);
    }

    #[test]
    fn disc_is_symmetric_around_center() {
        let pixels = render_disc(&IconConfig::default());
        for y in 1..16usize {
            for x in 1..16usize {
                let mirrored = (16 - y) * 16 + (16 - x);
                assert_eq!(pixels[y * 16 + x], pixels[mirrored], "({x}, {y})");
            }
        }
    }
}
