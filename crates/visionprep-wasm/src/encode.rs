//! Image encoding WASM bindings.
//!
//! This module exposes one-shot JPEG encoding to JavaScript, for callers
//! that want a fixed-quality export without the budget search, plus the
//! data-URL form vision APIs accept inline.
//!
//! # Functions
//!
//! - [`encode_jpeg`] - Encode a decoded image to JPEG bytes
//! - [`encode_data_url`] - Encode a decoded image to a `data:image/jpeg` URL

use crate::types::JsDecodedImage;
use visionprep_core::encode;
use visionprep_core::payload;
use wasm_bindgen::prelude::*;

/// Encode a decoded image to JPEG bytes at the given quality.
///
/// # Arguments
///
/// * `image` - The decoded image to encode
/// * `quality` - JPEG quality (1-100, where 100 is highest quality; values
///   outside the range are clamped)
///
/// # Returns
///
/// A `Uint8Array` containing the JPEG-encoded bytes.
///
/// # Example
///
/// ```typescript
/// const jpeg = encode_jpeg(image, 85);
/// console.log(`Encoded ${jpeg.byteLength} bytes`);
/// ```
#[wasm_bindgen]
pub fn encode_jpeg(image: &JsDecodedImage, quality: u8) -> Result<Vec<u8>, JsValue> {
    encode::encode_jpeg(&image.to_decoded(), quality).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode a decoded image straight to a `data:image/jpeg;base64,...` URL.
///
/// Convenience for submitting an image that needs no budget search, e.g. one
/// the compressor already produced or a small preview.
///
/// # Example
///
/// ```typescript
/// const url = encode_data_url(image, 85);
/// messages.push({ type: 'image_url', image_url: { url } });
/// ```
#[wasm_bindgen]
pub fn encode_data_url(image: &JsDecodedImage, quality: u8) -> Result<String, JsValue> {
    encode::encode_jpeg(&image.to_decoded(), quality)
        .map(|jpeg| payload::to_data_url(&jpeg))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
