//! End-to-end orchestration of the transform stages.

use image::RgbImage;

use crate::error::PipelineError;
use crate::tone::ToneOptions;
use crate::{dither, geometry, tone};

/// Run the full panel pipeline: geometry normalization, tone adjustment,
/// Floyd-Steinberg dithering.
///
/// The result is always exactly 800x480 and contains only the six usable
/// palette colors. The input image is left untouched; the thumbnail branch
/// consumes the same original separately.
pub fn process(image: &RgbImage, options: &ToneOptions) -> Result<RgbImage, PipelineError> {
    check_nonempty(image)?;

    let mut normalized = geometry::normalize(image);
    tone::adjust(&mut normalized, options);
    Ok(dither::floyd_steinberg(&normalized))
}

/// Run the independent thumbnail branch on the original decoded image.
pub fn thumbnail(image: &RgbImage) -> Result<RgbImage, PipelineError> {
    check_nonempty(image)?;
    Ok(crate::thumbnail::generate(image))
}

fn check_nonempty(image: &RgbImage) -> Result<(), PipelineError> {
    if image.width() == 0 || image.height() == 0 {
        return Err(PipelineError::EmptyImage {
            width: image.width(),
            height: image.height(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_empty_image_is_rejected() {
        let image = RgbImage::new(0, 10);
        let err = process(&image, &ToneOptions::default()).unwrap_err();
        assert_eq!(err, PipelineError::EmptyImage { width: 0, height: 10 });

        let err = thumbnail(&image).unwrap_err();
        assert_eq!(err, PipelineError::EmptyImage { width: 0, height: 10 });
    }

    #[test]
    fn test_process_outputs_panel_dimensions() {
        let image = RgbImage::from_pixel(1024, 768, Rgb([60, 120, 180]));
        let result = process(&image, &ToneOptions::default()).unwrap();
        assert_eq!(result.dimensions(), (800, 480));
    }

    #[test]
    fn test_input_image_is_not_mutated() {
        let image = RgbImage::from_pixel(900, 500, Rgb([77, 88, 99]));
        let copy = image.clone();
        let _ = process(&image, &ToneOptions::default()).unwrap();
        assert_eq!(image, copy);
    }
}
