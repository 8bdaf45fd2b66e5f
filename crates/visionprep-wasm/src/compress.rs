//! Size-constrained compression WASM bindings.
//!
//! This module exposes the core budget compressor to JavaScript. The typical
//! flow in the upload pipeline is decode → compress → read `data_url()` off
//! the result and place it in the vision-model request.
//!
//! # Functions
//!
//! - [`compress_to_budget`] - Compress with the default search parameters and
//!   a custom byte budget
//! - [`compress_to_budget_with`] - Compress with a full config object
//! - [`default_max_bytes`] - The default byte budget (4 MiB)
//!
//! # Example
//!
//! ```typescript
//! import { decode_image, compress_to_budget } from '@visionprep/wasm';
//!
//! const image = decode_image(bytes);
//! const result = compress_to_budget(image, 4 * 1024 * 1024);
//! if (!result.met_budget) {
//!   showWarning(`Image still ${result.size_bytes} bytes after compression`);
//! }
//! sendToModel(result.data_url());
//! ```

use crate::types::{JsCompressionResult, JsDecodedImage};
use visionprep_core::compress::{self, CompressionConfig};
use visionprep_core::DEFAULT_MAX_BYTES;
use wasm_bindgen::prelude::*;

/// Compress an image under a byte budget using the default search parameters
/// (quality 85 down to 10 in steps of 5, Lanczos3 rescale).
///
/// A budget miss is not an error: the best achieved result is returned with
/// `met_budget` set to `false`, and a warning is logged to the console so the
/// miss is visible during development even if the UI ignores the flag.
///
/// # Arguments
///
/// * `image` - The decoded image to compress
/// * `max_bytes` - Maximum allowed size of the encoded output, in bytes
///
/// # Errors
///
/// Returns an error if `max_bytes` is zero.
#[wasm_bindgen]
pub fn compress_to_budget(
    image: &JsDecodedImage,
    max_bytes: u32,
) -> Result<JsCompressionResult, JsValue> {
    let config = CompressionConfig::with_max_bytes(max_bytes as u64);
    run_compress(image, &config)
}

/// Compress an image using a full configuration object.
///
/// The config is a plain JS object matching the core `CompressionConfig`
/// shape:
///
/// ```typescript
/// const result = compress_to_budget_with(image, {
///   max_bytes: 50 * 1024,
///   initial_quality: 85,
///   min_quality: 10,
///   quality_step: 5,
///   filter: 'Lanczos3',
/// });
/// ```
///
/// # Errors
///
/// Returns an error if the config object does not deserialize or describes a
/// non-terminating search (zero budget, zero step, floor above start).
#[wasm_bindgen]
pub fn compress_to_budget_with(
    image: &JsDecodedImage,
    config: JsValue,
) -> Result<JsCompressionResult, JsValue> {
    let config: CompressionConfig =
        serde_wasm_bindgen::from_value(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
    run_compress(image, &config)
}

/// The default byte budget for compressed output (4 MiB).
#[wasm_bindgen]
pub fn default_max_bytes() -> u32 {
    DEFAULT_MAX_BYTES as u32
}

fn run_compress(
    image: &JsDecodedImage,
    config: &CompressionConfig,
) -> Result<JsCompressionResult, JsValue> {
    let decoded = image.to_decoded();

    let result = compress::compress_to_budget(&decoded, config)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    if !result.met_budget {
        web_sys::console::warn_1(&JsValue::from_str(&format!(
            "Could not compress the image below the target size; final size: {:.2} KB",
            result.size_bytes() as f64 / 1024.0
        )));
    }

    Ok(JsCompressionResult::from_result(result))
}

/// Tests for compress bindings.
///
/// Note: The binding functions return `Result<T, JsValue>`, which only works
/// on wasm32 targets. The native tests below exercise the core calls the
/// bindings delegate to; see `visionprep_core::compress` for the
/// comprehensive compression test suite.
#[cfg(test)]
mod tests {
    use super::*;
    use visionprep_core::decode::DecodedImage;

    #[test]
    fn test_default_budget_matches_core() {
        assert_eq!(default_max_bytes() as u64, DEFAULT_MAX_BYTES);
    }

    #[test]
    fn test_compress_delegates_to_core() {
        let img = DecodedImage::new(64, 64, vec![128u8; 64 * 64 * 3]);
        let config = CompressionConfig::with_max_bytes(100_000);

        let result = compress::compress_to_budget(&img, &config).unwrap();
        assert!(result.met_budget);
        assert_eq!(result.width, 64);
        assert_eq!(result.height, 64);
    }
}
