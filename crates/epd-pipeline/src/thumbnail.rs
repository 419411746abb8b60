//! Preview thumbnail generation.
//!
//! Thumbnails are produced from the *original* decoded image, before
//! rotation and tone adjustment, so the preview shows the photo as shot.
//! The downscale preserves aspect ratio inside a fixed bounding box and
//! never upscales.

use image::imageops::{self, FilterType};
use image::RgbImage;

/// Maximum thumbnail width in pixels.
pub const THUMB_MAX_WIDTH: u32 = 480;

/// Maximum thumbnail height in pixels.
pub const THUMB_MAX_HEIGHT: u32 = 800;

/// Downscale `image` to fit within 480x800.
pub fn generate(image: &RgbImage) -> RgbImage {
    generate_bounded(image, THUMB_MAX_WIDTH, THUMB_MAX_HEIGHT)
}

/// Downscale `image` to fit within `max_width` x `max_height`, preserving
/// aspect ratio, with no cropping and no padding.
///
/// An image already inside the box is returned unchanged.
pub fn generate_bounded(image: &RgbImage, max_width: u32, max_height: u32) -> RgbImage {
    let (width, height) = image.dimensions();
    if width <= max_width && height <= max_height {
        return image.clone();
    }

    let scale = (max_width as f64 / width as f64).min(max_height as f64 / height as f64);
    let thumb_width = ((width as f64 * scale).round() as u32).max(1);
    let thumb_height = ((height as f64 * scale).round() as u32).max(1);

    imageops::resize(image, thumb_width, thumb_height, FilterType::Lanczos3)
}
