//! Upload decoding with EXIF orientation handling.
//!
//! Uploads arrive as JPEG or PNG byte streams. Both are decoded into the
//! fixed RGB8 representation the compressor operates on: alpha channels and
//! palettes are flattened away here, and EXIF orientation from phone cameras
//! is applied so the pixels we later submit match what the user saw.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::DynamicImage;
use image::ImageReader;

use super::{DecodeError, DecodedImage, Orientation};

/// Decode an uploaded image (JPEG or PNG) from bytes.
///
/// The format is guessed from the magic bytes, EXIF orientation correction is
/// applied, and the result is converted to RGB8. Transparency is discarded:
/// RGBA and paletted inputs come out as plain 3-channel images.
///
/// # Errors
///
/// Returns `DecodeError::CorruptedFile` if the bytes are not a valid JPEG or
/// PNG, or if the stream is truncated.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    // Extract EXIF orientation before decoding
    let orientation = extract_orientation(bytes);

    let img = decode_dynamic(bytes)?;

    // Apply orientation transformation, then flatten to RGB8
    let oriented = apply_orientation(img, orientation);
    Ok(DecodedImage::from_rgb_image(oriented.into_rgb8()))
}

/// Decode an image from bytes without applying EXIF orientation.
///
/// Used to rehydrate JPEG buffers the compressor produced itself, which carry
/// no EXIF data, or when orientation is handled elsewhere.
pub fn decode_image_no_orientation(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let img = decode_dynamic(bytes)?;
    Ok(DecodedImage::from_rgb_image(img.into_rgb8()))
}

fn decode_dynamic(bytes: &[u8]) -> Result<DynamicImage, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::IoError(e.to_string()))?;

    reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))
}

/// Extract EXIF orientation from image bytes.
///
/// Returns `Orientation::Normal` if no EXIF data is found or orientation
/// cannot be determined.
fn extract_orientation(bytes: &[u8]) -> Orientation {
    let exif_reader = Reader::new();
    let mut cursor = Cursor::new(bytes);

    match exif_reader.read_from_container(&mut cursor) {
        Ok(exif) => {
            if let Some(field) = exif.get_field(Tag::Orientation, In::PRIMARY) {
                if let Some(value) = field.value.get_uint(0) {
                    return Orientation::from(value);
                }
            }
            Orientation::Normal
        }
        Err(_) => Orientation::Normal,
    }
}

/// Apply EXIF orientation transformation to an image.
fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}

/// Extract EXIF orientation value from image bytes (for external use).
pub fn get_orientation(bytes: &[u8]) -> Orientation {
    extract_orientation(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode_jpeg;
    use image::{ImageFormat, Rgba, RgbaImage};

    fn gradient_image(width: u32, height: u32) -> DecodedImage {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(((x * 255) / width.max(1)) as u8);
                pixels.push(((y * 255) / height.max(1)) as u8);
                pixels.push(128);
            }
        }
        DecodedImage::new(width, height, pixels)
    }

    fn png_with_alpha(width: u32, height: u32, alpha: u8) -> Vec<u8> {
        let rgba = RgbaImage::from_pixel(width, height, Rgba([10, 200, 30, alpha]));
        let mut buf = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(rgba)
            .write_to(&mut buf, ImageFormat::Png)
            .unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_decode_jpeg_round_trip() {
        let original = gradient_image(64, 48);
        let jpeg = encode_jpeg(&original, 90).unwrap();

        let decoded = decode_image(&jpeg).unwrap();
        assert_eq!(decoded.width, 64);
        assert_eq!(decoded.height, 48);
        assert_eq!(decoded.pixels.len(), 64 * 48 * 3);
    }

    #[test]
    fn test_decode_png() {
        let png = png_with_alpha(16, 8, 255);

        let decoded = decode_image(&png).unwrap();
        assert_eq!(decoded.width, 16);
        assert_eq!(decoded.height, 8);
        assert_eq!(decoded.pixels.len(), 16 * 8 * 3);
    }

    #[test]
    fn test_decode_png_discards_alpha() {
        // Semi-transparent input must come out as a plain 3-channel image
        let png = png_with_alpha(4, 4, 64);

        let decoded = decode_image(&png).unwrap();
        assert_eq!(decoded.pixels.len(), 4 * 4 * 3);
        assert_eq!(&decoded.pixels[0..3], &[10, 200, 30]);
    }

    #[test]
    fn test_decode_no_orientation() {
        let original = gradient_image(32, 32);
        let jpeg = encode_jpeg(&original, 90).unwrap();

        let decoded = decode_image_no_orientation(&jpeg).unwrap();
        assert_eq!(decoded.width, 32);
        assert_eq!(decoded.height, 32);
    }

    #[test]
    fn test_decode_invalid_bytes() {
        let result = decode_image(&[0x00, 0x01, 0x02, 0x03]);
        assert!(result.is_err());

        match result {
            Err(DecodeError::CorruptedFile(_)) => {}
            Err(e) => panic!("Expected CorruptedFile error, got: {:?}", e),
            Ok(_) => panic!("Expected error, got success"),
        }
    }

    #[test]
    fn test_decode_empty_bytes() {
        assert!(decode_image(&[]).is_err());
    }

    #[test]
    fn test_decode_truncated_jpeg() {
        let original = gradient_image(32, 32);
        let jpeg = encode_jpeg(&original, 90).unwrap();

        let truncated = &jpeg[0..jpeg.len() / 2];
        assert!(decode_image(truncated).is_err());
    }

    #[test]
    fn test_orientation_extraction_no_exif() {
        // Our own encoder writes no EXIF data
        let jpeg = encode_jpeg(&gradient_image(8, 8), 90).unwrap();
        assert_eq!(get_orientation(&jpeg), Orientation::Normal);
    }

    #[test]
    fn test_orientation_extraction_invalid_data() {
        assert_eq!(get_orientation(&[0x00, 0x01, 0x02]), Orientation::Normal);
    }

    #[test]
    fn test_apply_orientation_normal() {
        let pixels = vec![
            255, 0, 0, // Red
            0, 255, 0, // Green
        ];
        let rgb = image::RgbImage::from_raw(2, 1, pixels).unwrap();
        let img = DynamicImage::ImageRgb8(rgb);

        let result = apply_orientation(img, Orientation::Normal).into_rgb8();
        assert_eq!(result.dimensions(), (2, 1));
        assert_eq!(result.get_pixel(0, 0).0, [255, 0, 0]);
    }

    #[test]
    fn test_apply_orientation_rotate90_swaps_dimensions() {
        let pixels = vec![
            255, 0, 0, // Red (left)
            0, 255, 0, // Green (right)
        ];
        let rgb = image::RgbImage::from_raw(2, 1, pixels).unwrap();
        let img = DynamicImage::ImageRgb8(rgb);

        let result = apply_orientation(img, Orientation::Rotate90CW).into_rgb8();
        assert_eq!(result.dimensions(), (1, 2));
    }

    #[test]
    fn test_apply_orientation_rotate180() {
        let pixels = vec![
            255, 0, 0, // Red (left)
            0, 255, 0, // Green (right)
        ];
        let rgb = image::RgbImage::from_raw(2, 1, pixels).unwrap();
        let img = DynamicImage::ImageRgb8(rgb);

        let result = apply_orientation(img, Orientation::Rotate180).into_rgb8();
        assert_eq!(result.get_pixel(0, 0).0, [0, 255, 0]);
        assert_eq!(result.get_pixel(1, 0).0, [255, 0, 0]);
    }

    #[test]
    fn test_apply_orientation_flip_horizontal() {
        let pixels = vec![
            255, 0, 0, // Red (left)
            0, 255, 0, // Green (right)
        ];
        let rgb = image::RgbImage::from_raw(2, 1, pixels).unwrap();
        let img = DynamicImage::ImageRgb8(rgb);

        let result = apply_orientation(img, Orientation::FlipHorizontal).into_rgb8();
        assert_eq!(result.get_pixel(0, 0).0, [0, 255, 0]);
        assert_eq!(result.get_pixel(1, 0).0, [255, 0, 0]);
    }
}
