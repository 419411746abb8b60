//! Floyd-Steinberg error diffusion against the fixed panel palette.
//!
//! The scan is strictly row-major (top to bottom, left to right): each
//! pixel's input depends on error written by its left, top-left, top and
//! top-right neighbors, so the spatial order cannot be changed without
//! changing the output. The R, G and B channels are independent of each
//! other and share nothing but the scan position.
//!
//! The Floyd-Steinberg kernel distributes 100% of the quantization error
//! to 4 not-yet-processed neighbors:
//!
//! ```text
//!        X   7
//!    3   5   1        (out of 16)
//! ```
//!
//! Contributions aimed outside the image are dropped, never redistributed.
//!
//! Weight arithmetic uses *floor* division (`div_euclid`), matching the
//! reference tool's integer semantics for negative error values. This is
//! the one place where a C-style truncating division would produce a
//! different, equally plausible-looking image.

use image::{Rgb, RgbImage};

use crate::palette::{self, PALETTE};

/// Floyd-Steinberg kernel as `(dx, dy, weight)` entries over 16.
const KERNEL: [(i64, i64, i32); 4] = [
    (1, 0, 7),  // right
    (-1, 1, 3), // bottom-left
    (0, 1, 5),  // bottom
    (1, 1, 1),  // bottom-right
];

/// Kernel weight divisor.
const KERNEL_DIVISOR: i32 = 16;

/// Dither `image` to the panel palette.
///
/// Every pixel of the result is the verbatim RGB value of one of the six
/// usable palette entries. The input is not modified.
pub fn floyd_steinberg(image: &RgbImage) -> RgbImage {
    let width = image.width() as usize;
    let height = image.height() as usize;

    // One i32 accumulator per channel per pixel, zero-initialized. Each
    // slot is written only by earlier scan positions and read exactly once.
    let mut errors = vec![[0i32; 3]; width * height];
    let mut output = RgbImage::new(image.width(), image.height());

    for y in 0..height {
        for x in 0..width {
            let idx = y * width + x;
            let Rgb([r, g, b]) = *image.get_pixel(x as u32, y as u32);

            let old = [
                (r as i32 + errors[idx][0]).clamp(0, 255),
                (g as i32 + errors[idx][1]).clamp(0, 255),
                (b as i32 + errors[idx][2]).clamp(0, 255),
            ];

            let index = palette::nearest(old[0] as u8, old[1] as u8, old[2] as u8);
            let chosen = PALETTE[index as usize];
            output.put_pixel(x as u32, y as u32, Rgb(chosen));

            // Residue is measured from the clamped pre-quantization value.
            let err = [
                old[0] - chosen[0] as i32,
                old[1] - chosen[1] as i32,
                old[2] - chosen[2] as i32,
            ];

            for &(dx, dy, weight) in &KERNEL {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;
                if nx < 0 || nx >= width as i64 || ny >= height as i64 {
                    continue;
                }

                let neighbor = ny as usize * width + nx as usize;
                for channel in 0..3 {
                    errors[neighbor][channel] += (err[channel] * weight).div_euclid(KERNEL_DIVISOR);
                }
            }
        }
    }

    output
}
