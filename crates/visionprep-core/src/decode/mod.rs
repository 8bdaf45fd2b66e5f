//! Image decoding pipeline for Visionprep.
//!
//! This module provides functionality for:
//! - Decoding uploaded JPEG and PNG images into a fixed RGB8 representation
//! - EXIF orientation correction for camera uploads
//! - Resizing for budget rescaling, dimension caps, and upload-grid previews
//!
//! # Architecture
//!
//! Decoding is the boundary where arbitrary uploads are normalized: whatever
//! the input color mode (RGBA, grayscale, palette), the output is always a
//! 3-channel `DecodedImage`, since the JPEG output format has no transparency.
//! All operations are synchronous and hold no shared state, so independent
//! images can be processed concurrently from separate threads or workers.
//!
//! # Examples
//!
//! ```ignore
//! use visionprep_core::decode::{decode_image, DecodedImage};
//!
//! let bytes = std::fs::read("upload.png").unwrap();
//! let image = decode_image(&bytes).unwrap();
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod codec;
mod resize;
mod types;

pub use codec::{decode_image, decode_image_no_orientation, get_orientation};
pub use resize::{generate_preview, resize, resize_to_fit, scaled_dimensions};
pub use types::{DecodeError, DecodedImage, FilterType, Orientation};
