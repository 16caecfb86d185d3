// The structured-message boundary — encode/decode for the entity types.
//
// The core never reads or writes files itself; callers hand bytes in and
// get bytes out. JSON via serde is the one wire format. Decode is
// all-or-nothing: malformed input returns an error and never a partially
// populated value. Fields a decoder does not recognize land in each
// type's `extra` overflow map and survive an unmodified re-encode, so an
// older build can pass newer records through without destroying them.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// A failure at the encode/decode boundary. Never retried internally;
/// the caller owns logging and retry policy.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("failed to encode value: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to decode value: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Encode a value to its wire representation.
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, CodecError> {
    serde_json::to_vec(value).map_err(CodecError::Encode)
}

/// Decode a value from its wire representation.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, CodecError> {
    serde_json::from_slice(bytes).map_err(CodecError::Decode)
}
