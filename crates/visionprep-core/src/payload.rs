//! Payload encoding for vision-model submission.
//!
//! Hosted vision APIs accept images inline as base64 `data:` URLs. This
//! module turns the compressor's JPEG output into that wire shape. Building
//! the payload is the last local step: the actual network call belongs to the
//! host application, never to this crate.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Base64-encode a JPEG buffer (standard alphabet, padded).
pub fn to_base64(jpeg: &[u8]) -> String {
    STANDARD.encode(jpeg)
}

/// Build a `data:image/jpeg;base64,...` URL from a JPEG buffer.
///
/// This is the inline-image form vision APIs accept in message content.
pub fn to_data_url(jpeg: &[u8]) -> String {
    format!("data:image/jpeg;base64,{}", STANDARD.encode(jpeg))
}
