//! Shared helpers for integration tests.

use epd_pipeline::{PALETTE, RESERVED_INDEX};
use image::{Rgb, RgbImage};

/// Deterministic synthetic photo with gradients in all three channels.
pub fn gradient_photo(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            ((x * 255) / width.max(1)) as u8,
            ((y * 255) / height.max(1)) as u8,
            (((x + y) * 255) / (width + height).max(1)) as u8,
        ])
    })
}

/// The six palette colors the panel can actually display.
pub fn usable_palette() -> Vec<[u8; 3]> {
    PALETTE
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != RESERVED_INDEX)
        .map(|(_, c)| *c)
        .collect()
}

/// Assert every pixel of `image` is a usable palette color.
pub fn assert_palette_only(image: &RgbImage) {
    let usable = usable_palette();
    for (x, y, pixel) in image.enumerate_pixels() {
        assert!(
            usable.contains(&pixel.0),
            "pixel ({}, {}) = {:?} is not a usable palette color",
            x,
            y,
            pixel.0
        );
    }
}
