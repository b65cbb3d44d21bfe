mod cbor;
pub mod json;

#[cfg(test)]
mod tests;

use derive_more::Display;
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error as ThisError;

/// Wire encodings for documents and values.
///
/// CBOR is the storage encoding; JSON is for fixtures and tooling.
/// Size limits are caller policy and are passed in explicitly.

///
/// WireFormat
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum WireFormat {
    #[display("CBOR")]
    Cbor,

    #[display("JSON")]
    Json,
}

///
/// SerializeError
///

#[derive(Debug, ThisError)]
pub enum SerializeError {
    #[error("cannot encode {format}: {message}")]
    Encode { format: WireFormat, message: String },

    #[error("cannot decode {format}: {message}")]
    Decode { format: WireFormat, message: String },

    #[error("{format} input of {len} bytes exceeds the {max_bytes} byte limit")]
    TooLarge {
        format: WireFormat,
        len: usize,
        max_bytes: usize,
    },
}

impl SerializeError {
    pub(crate) fn encode(format: WireFormat, err: impl ToString) -> Self {
        Self::Encode {
            format,
            message: err.to_string(),
        }
    }

    pub(crate) fn decode(format: WireFormat, err: impl ToString) -> Self {
        Self::Decode {
            format,
            message: err.to_string(),
        }
    }

    /// Format the failing input or output was in.
    #[must_use]
    pub const fn format(&self) -> WireFormat {
        match self {
            Self::Encode { format, .. }
            | Self::Decode { format, .. }
            | Self::TooLarge { format, .. } => *format,
        }
    }
}

/// Serialize a value to CBOR.
pub fn serialize<T>(ty: &T) -> Result<Vec<u8>, SerializeError>
where
    T: Serialize,
{
    cbor::serialize(ty)
}

/// Deserialize a value produced by [`serialize`].
pub fn deserialize<T>(bytes: &[u8]) -> Result<T, SerializeError>
where
    T: DeserializeOwned,
{
    cbor::deserialize(bytes)
}

/// Deserialize a value produced by [`serialize`], rejecting input longer
/// than `max_bytes` before decoding.
pub fn deserialize_bounded<T>(bytes: &[u8], max_bytes: usize) -> Result<T, SerializeError>
where
    T: DeserializeOwned,
{
    cbor::deserialize_bounded(bytes, max_bytes)
}
