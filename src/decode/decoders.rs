//! Decoder implementations

use super::types::Envelope;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decode a generic response value into the envelope of `R`.
///
/// The value is re-encoded to canonical JSON bytes and decoded from those,
/// so a missing or mistyped field fails exactly as it would on the raw body.
pub fn decode_envelope<R: DeserializeOwned>(value: &Value) -> serde_json::Result<Envelope<R>> {
    let bytes = serde_json::to_vec(value)?;
    serde_json::from_slice(&bytes)
}
