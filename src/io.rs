//! Decode and encode at the pipeline boundary.
//!
//! All container handling lives here: the core transforms only ever see
//! in-memory RGB buffers. The device consumes an uncompressed 24-bit BMP;
//! the thumbnail is a quality-85 JPEG for the web UI.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{ImageFormat, RgbImage};

use crate::error::ProcessError;

/// JPEG quality for preview thumbnails.
const THUMBNAIL_JPEG_QUALITY: u8 = 85;

/// Decode an image file into an 8-bit RGB buffer.
///
/// Any container the `image` crate understands is accepted; non-RGB
/// sources (grayscale, RGBA, paletted) are converted.
pub fn decode(path: &Path) -> Result<RgbImage, ProcessError> {
    let decoded = image::open(path).map_err(|source| ProcessError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(decoded.to_rgb8())
}

/// Write the dithered image as a 24-bit RGB BMP, the format the device
/// firmware parses directly.
pub fn write_bmp(image: &RgbImage, path: &Path) -> Result<(), ProcessError> {
    image
        .save_with_format(path, ImageFormat::Bmp)
        .map_err(|source| ProcessError::Encode {
            path: path.to_path_buf(),
            source,
        })
}

/// Write the thumbnail as a quality-85 JPEG.
pub fn write_jpeg_thumbnail(image: &RgbImage, path: &Path) -> Result<(), ProcessError> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    JpegEncoder::new_with_quality(writer, THUMBNAIL_JPEG_QUALITY)
        .encode_image(image)
        .map_err(|source| ProcessError::Encode {
            path: path.to_path_buf(),
            source,
        })
}
