//! Image decoding WASM bindings.
//!
//! This module exposes the visionprep-core decoding functions to JavaScript:
//! turning uploaded JPEG/PNG files into RGB pixel data, fitting images under
//! a dimension cap, and generating small previews for the upload grid.
//!
//! # Functions
//!
//! - [`decode_image`] - Decode an uploaded JPEG or PNG from bytes
//! - [`resize_to_fit`] - Fit an image within a max edge, preserving aspect ratio
//! - [`generate_preview`] - Generate a small preview for the upload grid
//!
//! # Example
//!
//! ```typescript
//! import { decode_image, generate_preview } from '@visionprep/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! const preview = generate_preview(image, 200);
//! ```

use crate::types::{filter_from_u8, JsDecodedImage};
use visionprep_core::decode;
use wasm_bindgen::prelude::*;

/// Decode an uploaded image (JPEG or PNG) from bytes.
///
/// The format is guessed from the magic bytes. EXIF orientation correction
/// is applied automatically, and any alpha channel or palette is flattened
/// to plain RGB, since the compressed output is always JPEG.
///
/// # Arguments
///
/// * `bytes` - The raw file bytes as a `Uint8Array`
///
/// # Errors
///
/// Returns an error if the bytes are not valid JPEG or PNG data, or if the
/// stream is corrupted or truncated.
///
/// # Example
///
/// ```typescript
/// const bytes = new Uint8Array(await file.arrayBuffer());
/// const image = decode_image(bytes);
/// console.log(`Decoded ${image.width}x${image.height} image`);
/// ```
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsDecodedImage, JsValue> {
    decode::decode_image(bytes)
        .map(JsDecodedImage::from_decoded)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Resize an image to fit within a maximum edge size, preserving aspect ratio.
///
/// The image is scaled so that its longest edge equals `max_edge` pixels. An
/// image that already fits is returned unchanged (no upscaling). Use this to
/// enforce a provider dimension cap before compression.
///
/// # Arguments
///
/// * `image` - The source image to resize
/// * `max_edge` - Maximum size for the longest edge in pixels
/// * `filter` - Resize algorithm: 0=Nearest (fastest), 1=Bilinear (default), 2=Lanczos3 (best quality)
///
/// # Errors
///
/// Returns an error if `max_edge` is zero.
#[wasm_bindgen]
pub fn resize_to_fit(
    image: &JsDecodedImage,
    max_edge: u32,
    filter: u8,
) -> Result<JsDecodedImage, JsValue> {
    let decoded = image.to_decoded();
    let filter_type = filter_from_u8(filter);

    decode::resize_to_fit(&decoded, max_edge, filter_type)
        .map(JsDecodedImage::from_decoded)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Generate a small preview for the upload grid.
///
/// Uses bilinear filtering for speed. The result preserves the aspect ratio
/// and fits within a square of `size` pixels.
///
/// # Example
///
/// ```typescript
/// // 200px previews for the three-column upload grid
/// const preview = generate_preview(image, 200);
/// ```
#[wasm_bindgen]
pub fn generate_preview(image: &JsDecodedImage, size: u32) -> Result<JsDecodedImage, JsValue> {
    let decoded = image.to_decoded();

    decode::generate_preview(&decoded, size)
        .map(JsDecodedImage::from_decoded)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Tests for decode bindings.
///
/// Note: The binding functions return `Result<T, JsValue>`, which only works
/// on wasm32 targets. The native tests below exercise the underlying core
/// calls the bindings delegate to; see `visionprep_core::decode` for the
/// comprehensive decode test suite.
#[cfg(test)]
mod tests {
    use super::*;
    use visionprep_core::decode::DecodedImage;

    #[test]
    fn test_preview_delegates_to_core() {
        let img = JsDecodedImage::from_decoded(DecodedImage::new(
            400,
            300,
            vec![128u8; 400 * 300 * 3],
        ));

        let preview = decode::generate_preview(&img.to_decoded(), 100).unwrap();
        assert_eq!(preview.width, 100);
        assert_eq!(preview.height, 75);
    }

    #[test]
    fn test_fit_delegates_to_core() {
        let img = JsDecodedImage::from_decoded(DecodedImage::new(
            200,
            100,
            vec![128u8; 200 * 100 * 3],
        ));

        let fitted = decode::resize_to_fit(&img.to_decoded(), 100, filter_from_u8(1)).unwrap();
        assert_eq!(fitted.width, 100);
        assert_eq!(fitted.height, 50);
    }
}
