//! WASM-compatible wrapper types for image data and compression results.
//!
//! This module provides JavaScript-friendly types that wrap the core
//! Visionprep types, handling the conversion between Rust and JavaScript
//! data representations.

use visionprep_core::compress::CompressionResult;
use visionprep_core::decode::{DecodedImage, FilterType};
use visionprep_core::payload;
use wasm_bindgen::prelude::*;

/// A decoded image wrapper for JavaScript.
///
/// Wraps the core `DecodedImage` type (RGB8, 3 bytes per pixel) and provides
/// a JavaScript-friendly interface for accessing dimensions and pixel data.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy
/// is made to JavaScript memory as a `Uint8Array`. The `free()` method can be
/// called to explicitly release WASM memory, but this is optional as
/// wasm-bindgen's finalizer will handle cleanup automatically.
#[wasm_bindgen]
pub struct JsDecodedImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsDecodedImage {
    /// Create a new JsDecodedImage from dimensions and RGB pixel data.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsDecodedImage {
        JsDecodedImage {
            width,
            height,
            pixels,
        }
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 3)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGB pixel data as a copy in JavaScript memory.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Explicitly free WASM memory.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsDecodedImage {
    /// Create a JsDecodedImage from a core DecodedImage.
    pub(crate) fn from_decoded(img: DecodedImage) -> Self {
        Self {
            width: img.width,
            height: img.height,
            pixels: img.pixels,
        }
    }

    /// Convert back to a core DecodedImage.
    ///
    /// Note: This clones the pixel data.
    pub(crate) fn to_decoded(&self) -> DecodedImage {
        DecodedImage {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        }
    }
}

/// Result of a size-constrained compression call, for JavaScript.
///
/// Carries the accepted JPEG buffer plus the parameters of the accepted
/// encode. `met_budget` is `false` when even the most aggressive settings
/// missed the byte budget; the UI decides whether to warn the user.
#[wasm_bindgen]
pub struct JsCompressionResult {
    inner: CompressionResult,
}

#[wasm_bindgen]
impl JsCompressionResult {
    /// Output width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Output height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// JPEG quality of the accepted encode (1-100)
    #[wasm_bindgen(getter)]
    pub fn quality(&self) -> u8 {
        self.inner.quality
    }

    /// Size of the accepted JPEG output in bytes
    #[wasm_bindgen(getter)]
    pub fn size_bytes(&self) -> usize {
        self.inner.jpeg.len()
    }

    /// Whether the output actually fits the byte budget
    #[wasm_bindgen(getter)]
    pub fn met_budget(&self) -> bool {
        self.inner.met_budget
    }

    /// Whether the dimension rescale phase ran
    #[wasm_bindgen(getter)]
    pub fn resized(&self) -> bool {
        self.inner.resized
    }

    /// The accepted JPEG bytes as a `Uint8Array` copy in JavaScript memory.
    pub fn bytes(&self) -> js_sys::Uint8Array {
        js_sys::Uint8Array::from(self.inner.jpeg.as_slice())
    }

    /// The accepted JPEG as a `data:image/jpeg;base64,...` URL, ready to be
    /// placed in a vision-model message or an `<img>` src.
    pub fn data_url(&self) -> String {
        payload::to_data_url(&self.inner.jpeg)
    }

    /// Decode the accepted JPEG back to pixels, e.g. for preview display.
    pub fn to_image(&self) -> Result<JsDecodedImage, JsValue> {
        self.inner
            .to_image()
            .map(JsDecodedImage::from_decoded)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl JsCompressionResult {
    /// Wrap a core compression result.
    pub(crate) fn from_result(inner: CompressionResult) -> Self {
        Self { inner }
    }
}

/// Convert a u8 filter type value to the core FilterType enum.
///
/// Values:
/// - 0 = Nearest (fastest, lowest quality)
/// - 1 = Bilinear (good balance of speed and quality)
/// - 2 = Lanczos3 (best quality, slowest)
///
/// Any other value defaults to Bilinear.
pub(crate) fn filter_from_u8(value: u8) -> FilterType {
    match value {
        0 => FilterType::Nearest,
        2 => FilterType::Lanczos3,
        _ => FilterType::Bilinear, // Default
    }
}
