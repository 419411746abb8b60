//! Contrast and brightness adjustment.
//!
//! Both adjustments operate per channel in `f32`, clamp to [0, 255] and
//! truncate back to 8 bits (no rounding) to stay bit-compatible with the
//! firmware's math. Contrast is always applied before brightness; the two
//! do not commute for non-trivial inputs, so the order is part of the
//! pipeline contract.

use image::RgbImage;

/// Tone adjustment parameters for one processing run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneOptions {
    /// Contrast multiplier around the 128 midpoint.
    pub contrast: f32,

    /// Brightness offset in photographic f-stops: each full stop doubles
    /// the channel values.
    pub brightness_fstop: f32,
}

impl Default for ToneOptions {
    fn default() -> Self {
        Self {
            contrast: 1.3,
            brightness_fstop: 0.3,
        }
    }
}

/// Apply contrast, then brightness, in place.
pub fn adjust(image: &mut RgbImage, options: &ToneOptions) {
    apply_contrast(image, options.contrast);
    apply_brightness(image, options.brightness_fstop);
}

/// Scale each channel around the 128 midpoint: `(v - 128) * contrast + 128`.
///
/// Input 128 is a fixed point for any multiplier.
pub fn apply_contrast(image: &mut RgbImage, contrast: f32) {
    for pixel in image.pixels_mut() {
        for channel in pixel.0.iter_mut() {
            let adjusted = (*channel as f32 - 128.0) * contrast + 128.0;
            *channel = adjusted.clamp(0.0, 255.0) as u8;
        }
    }
}

/// Multiply each channel by `2^fstop`.
pub fn apply_brightness(image: &mut RgbImage, fstop: f32) {
    let multiplier = 2.0_f32.powf(fstop);
    for pixel in image.pixels_mut() {
        for channel in pixel.0.iter_mut() {
            let brightened = *channel as f32 * multiplier;
            *channel = brightened.clamp(0.0, 255.0) as u8;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use pretty_assertions::assert_eq;

    fn uniform(width: u32, height: u32, value: u8) -> RgbImage {
        RgbImage::from_pixel(width, height, Rgb([value, value, value]))
    }

    #[test]
    fn test_contrast_midpoint_is_fixed() {
        for contrast in [0.5, 1.0, 1.3, 2.0, 10.0] {
            let mut image = uniform(3, 3, 128);
            apply_contrast(&mut image, contrast);
            assert!(
                image.pixels().all(|p| p.0 == [128, 128, 128]),
                "midpoint should be fixed for contrast {}",
                contrast
            );
        }
    }

    #[test]
    fn test_contrast_spreads_away_from_midpoint() {
        let mut image = RgbImage::from_pixel(1, 1, Rgb([100, 128, 200]));
        apply_contrast(&mut image, 2.0);
        // (100-128)*2+128 = 72, (200-128)*2+128 = 272 -> clamped to 255
        assert_eq!(image.get_pixel(0, 0).0, [72, 128, 255]);
    }

    #[test]
    fn test_contrast_truncates_fractions() {
        let mut image = uniform(1, 1, 129);
        // (129-128)*1.3+128 = 129.3 -> truncates to 129
        apply_contrast(&mut image, 1.3);
        assert_eq!(image.get_pixel(0, 0).0, [129, 129, 129]);
    }

    #[test]
    fn test_brightness_one_stop_doubles() {
        let mut image = uniform(2, 2, 60);
        apply_brightness(&mut image, 1.0);
        assert!(image.pixels().all(|p| p.0 == [120, 120, 120]));
    }

    #[test]
    fn test_brightness_clamps_at_white() {
        let mut image = uniform(1, 1, 200);
        apply_brightness(&mut image, 1.0);
        assert_eq!(image.get_pixel(0, 0).0, [255, 255, 255]);
    }

    #[test]
    fn test_zero_fstop_is_identity() {
        let mut image = RgbImage::from_pixel(1, 1, Rgb([13, 77, 254]));
        apply_brightness(&mut image, 0.0);
        assert_eq!(image.get_pixel(0, 0).0, [13, 77, 254]);
    }

    #[test]
    fn test_order_contrast_then_brightness() {
        // Reversing the stages gives a different result for this input,
        // which is exactly why adjust() fixes the order.
        let options = ToneOptions {
            contrast: 2.0,
            brightness_fstop: 1.0,
        };

        let mut forward = uniform(1, 1, 100);
        adjust(&mut forward, &options);
        // contrast: (100-128)*2+128 = 72; brightness: 144
        assert_eq!(forward.get_pixel(0, 0).0, [144, 144, 144]);

        let mut reversed = uniform(1, 1, 100);
        apply_brightness(&mut reversed, options.brightness_fstop);
        apply_contrast(&mut reversed, options.contrast);
        // brightness: 200; contrast: (200-128)*2+128 = 272 -> 255
        assert_eq!(reversed.get_pixel(0, 0).0, [255, 255, 255]);
    }
}
