//! Image encoding pipeline for Visionprep.
//!
//! This module provides functionality for:
//! - Encoding images to JPEG format with configurable quality
//!
//! The encoder is the measurement half of the size-constrained compressor:
//! the compressor encodes, measures the byte length, and decides whether to
//! lower quality or rescale. It is also exposed directly for callers that
//! want a one-shot encode at a fixed quality.

mod jpeg;

pub use jpeg::{encode_jpeg, EncodeError};
