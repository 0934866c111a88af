//! Brand watermark pass over uploaded listing photos.
//!
//! Blends a translucent band along the main diagonal of the photo before it
//! is stored, so published listing images carry the agency mark. Avatars
//! skip this pass.

use std::io::Cursor;

use anyhow::Context as _;
use image::{DynamicImage, ImageFormat};

/// Blend strength of the band (0 = invisible, 1 = solid white).
const BAND_ALPHA: f32 = 0.2;

/// Half-width of the band in normalized diagonal distance.
const BAND_HALF_WIDTH: f64 = 0.05;

/// Watermark an encoded image, preserving its format and dimensions.
///
/// Fails when the payload is not a decodable image.
pub fn apply(bytes: &[u8]) -> anyhow::Result<Vec<u8>> {
    let format = image::guess_format(bytes).context("unrecognized image format")?;
    let img = image::load_from_memory_with_format(bytes, format).context("decode image")?;
    let mut rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    for (x, y, pixel) in rgba.enumerate_pixels_mut() {
        let d = (x as f64 / width.max(1) as f64 - y as f64 / height.max(1) as f64).abs();
        if d < BAND_HALF_WIDTH {
            for channel in pixel.0.iter_mut().take(3) {
                *channel = (*channel as f32 * (1.0 - BAND_ALPHA) + 255.0 * BAND_ALPHA) as u8;
            }
        }
    }

    // JPEG has no alpha channel; re-encode from RGB there.
    let out = match format {
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(rgba).to_rgb8()),
        _ => DynamicImage::ImageRgba8(rgba),
    };
    let mut buffer = Cursor::new(Vec::new());
    out.write_to(&mut buffer, format)
        .context("encode watermarked image")?;
    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    fn black_png(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::new(width, height);
        let mut buffer = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(img)
            .write_to(&mut buffer, ImageFormat::Png)
            .unwrap();
        buffer.into_inner()
    }

    #[test]
    fn should_preserve_format_and_dimensions() {
        let bytes = apply(&black_png(120, 90)).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Png);
        let img = image::load_from_memory(&bytes).unwrap();
        assert_eq!((img.width(), img.height()), (120, 90));
    }

    #[test]
    fn should_lighten_the_diagonal_and_leave_corners_alone() {
        let bytes = apply(&black_png(100, 100)).unwrap();
        let img = image::load_from_memory(&bytes).unwrap().to_rgb8();
        // Center lies on the diagonal, the off-diagonal corner does not.
        assert!(img.get_pixel(50, 50).0[0] > 0);
        assert_eq!(img.get_pixel(99, 0).0[0], 0);
    }

    #[test]
    fn should_reject_non_image_payload() {
        assert!(apply(b"definitely not an image").is_err());
    }
}
