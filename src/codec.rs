//! Base64 data-URI encoding and decoding for audio payloads
//!
//! The endpoint transports audio in both directions as base64 text inside
//! JSON bodies, prefixed with a media-type tag.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

const WAV_DATA_URI_PREFIX: &str = "data:audio/wav;base64,";

/// Wrap raw audio bytes as a `data:` URI for the request body.
pub fn encode_wav_data_uri(bytes: &[u8]) -> String {
    format!("{WAV_DATA_URI_PREFIX}{}", STANDARD.encode(bytes))
}

/// Decode a base64 payload, tolerating an optional `data:...;base64,`
/// prefix. Everything up to and including the comma is stripped.
pub fn decode_payload(payload: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let raw = match payload.split_once(',') {
        Some((head, rest)) if head.contains("base64") => rest,
        _ => payload,
    };
    STANDARD.decode(raw)
}
