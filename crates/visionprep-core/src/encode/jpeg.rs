//! JPEG encoding with configurable quality.
//!
//! This module provides JPEG encoding using the `image` crate's JPEG encoder.
//! The quality parameter is the knob the size-constrained compressor turns:
//! each compression attempt is one call to [`encode_jpeg`] followed by a
//! byte-size measurement of the returned buffer.

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;
use thiserror::Error;

use crate::decode::DecodedImage;

/// Errors that can occur during JPEG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// JPEG encoding failed
    #[error("JPEG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode a decoded image to JPEG bytes at the given quality.
///
/// # Arguments
///
/// * `image` - RGB8 image to encode
/// * `quality` - JPEG quality (1-100, where 100 is highest quality; values
///   outside the range are clamped)
///
/// # Returns
///
/// JPEG-encoded bytes on success, or an error if encoding fails.
///
/// # Errors
///
/// Returns `EncodeError::InvalidDimensions` for a zero-sized image and
/// `EncodeError::InvalidPixelData` if the pixel buffer length does not match
/// `width * height * 3`.
pub fn encode_jpeg(image: &DecodedImage, quality: u8) -> Result<Vec<u8>, EncodeError> {
    if image.width == 0 || image.height == 0 {
        return Err(EncodeError::InvalidDimensions {
            width: image.width,
            height: image.height,
        });
    }

    let expected_len = (image.width as usize) * (image.height as usize) * 3;
    if image.pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: image.pixels.len(),
        });
    }

    let quality = quality.clamp(1, 100);

    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);

    encoder
        .write_image(
            &image.pixels,
            image.width,
            image.height,
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray_image(width: u32, height: u32) -> DecodedImage {
        DecodedImage::new(width, height, vec![128u8; (width * height * 3) as usize])
    }

    fn gradient_image(width: u32, height: u32) -> DecodedImage {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(((x * 255) / width) as u8);
                pixels.push(((y * 255) / height) as u8);
                pixels.push(128u8);
            }
        }
        DecodedImage::new(width, height, pixels)
    }

    #[test]
    fn test_encode_jpeg_basic() {
        let jpeg = encode_jpeg(&gray_image(100, 100), 90).unwrap();

        // SOI marker at the start, EOI marker at the end
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
        assert_eq!(&jpeg[jpeg.len() - 2..], &[0xFF, 0xD9]);
    }

    #[test]
    fn test_encode_jpeg_quality_affects_size() {
        let img = gradient_image(100, 100);

        let low_q = encode_jpeg(&img, 20).unwrap();
        let high_q = encode_jpeg(&img, 95).unwrap();

        // Higher quality generally produces larger files
        // (may not always be true for very simple images, but usually is)
        assert!(high_q.len() > low_q.len() || (low_q.len() - high_q.len()) < 100);
    }

    #[test]
    fn test_encode_jpeg_quality_clamping() {
        let img = gray_image(10, 10);

        // Quality 0 should be clamped to 1
        assert!(encode_jpeg(&img, 0).is_ok());

        // Quality 255 should be clamped to 100
        assert!(encode_jpeg(&img, 255).is_ok());
    }

    #[test]
    fn test_encode_jpeg_invalid_pixel_data() {
        let short = DecodedImage {
            width: 100,
            height: 100,
            pixels: vec![128u8; 99 * 100 * 3], // One row short
        };
        assert!(matches!(
            encode_jpeg(&short, 90),
            Err(EncodeError::InvalidPixelData { .. })
        ));

        let long = DecodedImage {
            width: 100,
            height: 100,
            pixels: vec![128u8; 101 * 100 * 3], // One row extra
        };
        assert!(matches!(
            encode_jpeg(&long, 90),
            Err(EncodeError::InvalidPixelData { .. })
        ));
    }

    #[test]
    fn test_encode_jpeg_zero_dimensions() {
        let zero_width = DecodedImage {
            width: 0,
            height: 100,
            pixels: vec![],
        };
        assert!(matches!(
            encode_jpeg(&zero_width, 90),
            Err(EncodeError::InvalidDimensions { .. })
        ));

        let zero_height = DecodedImage {
            width: 100,
            height: 0,
            pixels: vec![],
        };
        assert!(matches!(
            encode_jpeg(&zero_height, 90),
            Err(EncodeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_encode_jpeg_single_pixel() {
        let img = DecodedImage::new(1, 1, vec![255, 0, 0]);
        let jpeg = encode_jpeg(&img, 90).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_encode_jpeg_non_square() {
        assert!(encode_jpeg(&gray_image(200, 50), 90).is_ok());
        assert!(encode_jpeg(&gray_image(50, 200), 90).is_ok());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
