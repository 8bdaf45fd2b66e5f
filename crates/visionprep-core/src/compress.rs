//! Size-constrained JPEG compression.
//!
//! Hosted vision models cap the payload size of submitted images, so every
//! upload is squeezed under a byte budget before it leaves the browser. The
//! search runs in two phases:
//!
//! 1. **Quality descent**: encode at the configured starting quality and walk
//!    quality down in fixed steps until the output fits the budget or the
//!    quality floor is reached. A monotone linear search is used rather than
//!    binary search: codec quality/size is not perfectly monotone near the
//!    floor, and the step count is small and bounded either way.
//! 2. **Dimension rescale**: if the floor quality still misses the budget,
//!    shrink the pixel dimensions by `sqrt(budget / measured_size)` (byte size
//!    scales roughly with pixel area for JPEG), reset quality, and run the
//!    quality descent once more on the smaller image. The rescale happens at
//!    most once per call.
//!
//! A budget miss after both phases is a reported outcome, not an error: the
//! caller gets the best result achieved and a `met_budget` flag to decide
//! whether to warn the user.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decode::{self, DecodeError, DecodedImage, FilterType};
use crate::encode::{encode_jpeg, EncodeError};
use crate::{DEFAULT_INITIAL_QUALITY, DEFAULT_MAX_BYTES, DEFAULT_MIN_QUALITY, DEFAULT_QUALITY_STEP};

/// Errors that can occur during a compression call.
///
/// Missing the byte budget is NOT an error; see
/// [`CompressionResult::met_budget`].
#[derive(Debug, Error)]
pub enum CompressError {
    /// The configuration cannot drive a terminating search.
    #[error("Invalid compression config: {0}")]
    InvalidConfig(String),

    /// An encode attempt failed.
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// The dimension rescale failed.
    #[error(transparent)]
    Resize(#[from] DecodeError),
}

/// Parameters for the size-constrained compression search.
///
/// The defaults match the upload pipeline: a 4 MiB budget, quality walked
/// from 85 down to 10 in steps of 5, Lanczos3 resampling for the rescale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompressionConfig {
    /// Maximum allowed size of the encoded output, in bytes.
    pub max_bytes: u64,
    /// Quality for the first encode attempt of each phase (0-100 scale).
    pub initial_quality: u8,
    /// Quality floor; no encode attempt goes below this value.
    pub min_quality: u8,
    /// Amount quality is lowered by on each attempt.
    pub quality_step: u8,
    /// Resampling filter used for the dimension rescale.
    pub filter: FilterType,
}

impl Default for CompressionConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
            initial_quality: DEFAULT_INITIAL_QUALITY,
            min_quality: DEFAULT_MIN_QUALITY,
            quality_step: DEFAULT_QUALITY_STEP,
            filter: FilterType::Lanczos3,
        }
    }
}

impl CompressionConfig {
    /// Create a config with the default search parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config with the default search parameters and a custom budget.
    pub fn with_max_bytes(max_bytes: u64) -> Self {
        Self {
            max_bytes,
            ..Self::default()
        }
    }

    /// Check that the config describes a terminating search.
    fn validate(&self) -> Result<(), CompressError> {
        if self.max_bytes == 0 {
            return Err(CompressError::InvalidConfig(
                "max_bytes must be positive".to_string(),
            ));
        }
        if self.quality_step == 0 {
            return Err(CompressError::InvalidConfig(
                "quality_step must be positive".to_string(),
            ));
        }
        if self.min_quality > self.initial_quality {
            return Err(CompressError::InvalidConfig(format!(
                "min_quality ({}) must not exceed initial_quality ({})",
                self.min_quality, self.initial_quality
            )));
        }
        Ok(())
    }
}

/// Outcome of a compression call.
///
/// Owns the accepted JPEG buffer (what the caller submits) along with the
/// parameters of the accepted encode. Use [`CompressionResult::to_image`] to
/// decode the buffer back into pixels, e.g. for preview display.
#[derive(Debug, Clone)]
pub struct CompressionResult {
    /// The accepted JPEG-encoded output.
    pub jpeg: Vec<u8>,
    /// Output width in pixels (equal to the input width unless rescaled).
    pub width: u32,
    /// Output height in pixels (equal to the input height unless rescaled).
    pub height: u32,
    /// Quality of the accepted encode.
    pub quality: u8,
    /// Whether the output actually fits the byte budget.
    pub met_budget: bool,
    /// Whether the dimension rescale phase ran.
    pub resized: bool,
}

impl CompressionResult {
    /// Size of the accepted JPEG output in bytes.
    pub fn size_bytes(&self) -> u64 {
        self.jpeg.len() as u64
    }

    /// Decode the accepted JPEG back into pixels.
    ///
    /// The decoded image reflects the compression artifacts of the accepted
    /// encode, which is what the remote model will actually see.
    pub fn to_image(&self) -> Result<DecodedImage, DecodeError> {
        decode::decode_image_no_orientation(&self.jpeg)
    }

    /// Consume the result, returning the JPEG buffer.
    pub fn into_bytes(self) -> Vec<u8> {
        self.jpeg
    }
}

/// Compress an image under a byte budget by lowering JPEG quality and, if
/// necessary, shrinking pixel dimensions.
///
/// The input is expected in the fixed RGB8 representation produced by
/// [`crate::decode::decode_image`]. The call is pure and synchronous: no
/// I/O, no shared state, bounded loop count.
///
/// # Returns
///
/// The best result achieved. `met_budget` is `false` when even the floor
/// quality at the rescaled dimensions misses the budget; the caller decides
/// whether to surface that to the user.
///
/// # Errors
///
/// Returns `CompressError::InvalidConfig` for a zero budget or a
/// non-terminating quality schedule, and propagates encode/resize failures
/// (which cannot occur for a structurally valid `DecodedImage`).
pub fn compress_to_budget(
    image: &DecodedImage,
    config: &CompressionConfig,
) -> Result<CompressionResult, CompressError> {
    config.validate()?;

    // Phase 1: quality descent at full resolution.
    let (jpeg, quality) = descend_quality(image, config)?;

    if jpeg.len() as u64 <= config.max_bytes {
        return Ok(CompressionResult {
            jpeg,
            width: image.width,
            height: image.height,
            quality,
            met_budget: true,
            resized: false,
        });
    }

    // Phase 2: single area-based rescale, then quality descent again.
    // Byte size scales roughly with pixel area, so the linear scale factor
    // is the square root of the size ratio.
    let scale = (config.max_bytes as f64 / jpeg.len() as f64).sqrt();
    let (new_width, new_height) = decode::scaled_dimensions(image.width, image.height, scale);
    let shrunk = decode::resize(image, new_width, new_height, config.filter)?;

    let (jpeg, quality) = descend_quality(&shrunk, config)?;
    let met_budget = jpeg.len() as u64 <= config.max_bytes;

    Ok(CompressionResult {
        jpeg,
        width: shrunk.width,
        height: shrunk.height,
        quality,
        met_budget,
        resized: true,
    })
}

/// Walk quality down from `initial_quality` until the encoded size fits the
/// budget or the next step would cross `min_quality`.
///
/// Returns the last encode and its quality; the caller checks whether it fit.
fn descend_quality(
    image: &DecodedImage,
    config: &CompressionConfig,
) -> Result<(Vec<u8>, u8), CompressError> {
    let mut quality = config.initial_quality;
    let mut jpeg = encode_jpeg(image, quality)?;

    while jpeg.len() as u64 > config.max_bytes {
        let Some(next) = quality.checked_sub(config.quality_step) else {
            break;
        };
        if next < config.min_quality {
            break;
        }
        quality = next;
        jpeg = encode_jpeg(image, quality)?;
    }

    Ok((jpeg, quality))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
