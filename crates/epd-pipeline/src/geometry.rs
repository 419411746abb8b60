//! Orientation and cover-fit normalization to the panel resolution.
//!
//! The panel is landscape (800x480). Portrait photos are rotated 90
//! degrees clockwise before any resampling, then anything that still
//! differs from the panel size goes through a cover-fit resize: scale by
//! the *larger* of the two axis ratios so the image always covers the
//! canvas, center it, and crop the overflow.

use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};

use crate::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// Normalize an arbitrary decoded image to exactly 800x480.
///
/// A landscape image already at the panel size passes through untouched.
pub fn normalize(image: &RgbImage) -> RgbImage {
    let image = if image.height() > image.width() {
        // Pure index remap: output (x, y) reads input (y, height-1-x).
        imageops::rotate90(image)
    } else {
        image.clone()
    };

    if image.dimensions() == (DISPLAY_WIDTH, DISPLAY_HEIGHT) {
        return image;
    }

    cover_resize(&image, DISPLAY_WIDTH, DISPLAY_HEIGHT)
}

/// Scale `image` to cover `target_width` x `target_height`, center it on a
/// black canvas of that size and crop whatever overflows.
///
/// The scale factor is `max(tw/w, th/h)`, so one axis lands exactly on the
/// target (up to rounding) and the other meets or exceeds it. Offsets use
/// floor division and may be negative; [`imageops::overlay`] clips the
/// out-of-canvas portion. Except for at most one pixel of rounding slack,
/// no canvas pixel keeps its black fill.
pub fn cover_resize(image: &RgbImage, target_width: u32, target_height: u32) -> RgbImage {
    let scale_x = target_width as f64 / image.width() as f64;
    let scale_y = target_height as f64 / image.height() as f64;
    let scale = scale_x.max(scale_y);

    let scaled_width = (image.width() as f64 * scale).round() as u32;
    let scaled_height = (image.height() as f64 * scale).round() as u32;

    // Fast path: scale 1.0 means pure center-crop, no resampling needed.
    let scaled = if (scaled_width, scaled_height) == image.dimensions() {
        image.clone()
    } else {
        imageops::resize(image, scaled_width, scaled_height, FilterType::Lanczos3)
    };

    let mut canvas = RgbImage::from_pixel(target_width, target_height, Rgb([0, 0, 0]));
    let offset_x = (target_width as i64 - scaled_width as i64).div_euclid(2);
    let offset_y = (target_height as i64 - scaled_height as i64).div_euclid(2);
    imageops::overlay(&mut canvas, &scaled, offset_x, offset_y);

    canvas
}
