//! Visionprep Core - Size-constrained image compression
//!
//! This crate provides the image processing core for Visionprep: decoding
//! uploaded JPEG/PNG images, compressing them under a byte budget for
//! vision-model submission, and building the base64 payload the host
//! application sends to the model API.
//!
//! The crate is a pure local transform: it performs no I/O and holds no
//! reference to any remote-service client. Orchestration (which model to
//! call, how to retry, what to do when the budget is missed) lives entirely
//! in the caller.

pub mod compress;
pub mod decode;
pub mod encode;
pub mod payload;

pub use compress::{compress_to_budget, CompressError, CompressionConfig, CompressionResult};
pub use decode::{decode_image, DecodeError, DecodedImage, FilterType};
pub use encode::{encode_jpeg, EncodeError};

/// Default byte budget for encoded output (4 MiB, the inline-image cap of
/// the upstream vision API).
pub const DEFAULT_MAX_BYTES: u64 = 4 * 1024 * 1024;

/// Quality for the first encode attempt (0-100 scale).
pub const DEFAULT_INITIAL_QUALITY: u8 = 85;

/// Quality floor; lowered from typical export floors to allow aggressive
/// compression before falling back to a dimension rescale.
pub const DEFAULT_MIN_QUALITY: u8 = 10;

/// Amount quality is lowered by on each attempt.
pub const DEFAULT_QUALITY_STEP: u8 = 5;
