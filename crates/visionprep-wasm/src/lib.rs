//! Visionprep WASM - WebAssembly bindings for Visionprep
//!
//! This crate exposes the visionprep-core functionality to
//! JavaScript/TypeScript applications: decoding uploaded images, compressing
//! them under a byte budget, and building the base64 payload for
//! vision-model submission.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for images and compression results
//! - `decode` - Upload decoding bindings (JPEG/PNG, fit, upload-grid previews)
//! - `compress` - Size-constrained compression bindings
//! - `encode` - One-shot JPEG encoding and data-URL bindings
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, compress_to_budget } from '@visionprep/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! // Decode an upload and squeeze it under the 4 MiB payload cap
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! const result = compress_to_budget(image, default_max_bytes());
//! console.log(`Compressed to ${result.size_bytes} bytes at q${result.quality}`);
//! ```

use wasm_bindgen::prelude::*;

mod compress;
mod decode;
mod encode;
mod types;

// Re-export public types
pub use compress::{compress_to_budget, compress_to_budget_with, default_max_bytes};
pub use decode::{decode_image, generate_preview, resize_to_fit};
pub use encode::{encode_data_url, encode_jpeg};
pub use types::{JsCompressionResult, JsDecodedImage};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
