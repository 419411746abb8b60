//! epd-pipeline: Deterministic image transforms for 7-color e-paper panels
//!
//! This library turns an arbitrary decoded photograph into the exact pixel
//! stream an ACeP (7-color) e-paper controller renders. A companion firmware
//! implementation runs the same algorithms on-device, so every stage here is
//! specified down to its integer arithmetic: two implementations fed the same
//! source image must produce byte-identical output.
//!
//! # Pipeline
//!
//! ```text
//! decoded RGB image
//!     |
//!     v
//! geometry::normalize      (portrait rotation + cover-fit resize to 800x480)
//!     |
//!     v
//! tone::adjust             (contrast, then brightness in f-stops)
//!     |
//!     v
//! dither::floyd_steinberg  (error diffusion against the fixed panel palette)
//!     |
//!     v
//! palette-quantized 800x480 image
//! ```
//!
//! [`thumbnail::generate`] is an independent branch that consumes the
//! *original* decoded image (before rotation and tone adjustment) and
//! produces a preview bounded by 480x800.
//!
//! [`pipeline::process`] runs the main branch end to end.
//!
//! # Determinism
//!
//! All stages are pure, synchronous and single-threaded. The only sources of
//! cross-implementation divergence are pinned down explicitly:
//!
//! - Quantization scans palette indices in ascending order with the reserved
//!   slot skipped, so distance ties always resolve to the lowest index
//!   ([`palette::nearest`]).
//! - Error diffusion uses floor division for the kernel weights, matching
//!   the reference tool's integer semantics ([`dither`]).
//! - Tone math runs in `f32` and truncates back to 8 bits ([`tone`]).
//!
//! # Example
//!
//! ```
//! use epd_pipeline::{pipeline, ToneOptions};
//! use image::RgbImage;
//!
//! let photo = RgbImage::from_pixel(1024, 768, image::Rgb([200, 180, 40]));
//! let dithered = pipeline::process(&photo, &ToneOptions::default()).unwrap();
//!
//! assert_eq!(dithered.dimensions(), (800, 480));
//! ```

pub mod dither;
pub mod error;
pub mod geometry;
pub mod palette;
pub mod pipeline;
pub mod thumbnail;
pub mod tone;


pub use error::PipelineError;
pub use palette::{PALETTE, RESERVED_INDEX};
pub use tone::ToneOptions;

/// Horizontal resolution of the target panel in pixels.
pub const DISPLAY_WIDTH: u32 = 800;

/// Vertical resolution of the target panel in pixels.
pub const DISPLAY_HEIGHT: u32 = 480;
