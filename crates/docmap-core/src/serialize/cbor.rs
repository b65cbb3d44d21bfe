use crate::serialize::{SerializeError, WireFormat};
use serde::{Serialize, de::DeserializeOwned};
use serde_cbor::{from_slice, to_vec};
use std::panic::{AssertUnwindSafe, catch_unwind};

pub(super) fn serialize<T>(t: &T) -> Result<Vec<u8>, SerializeError>
where
    T: Serialize,
{
    to_vec(t).map_err(|e| SerializeError::encode(WireFormat::Cbor, e))
}

/// Decode CBOR bytes. A panic inside the decoder is reported as a decode
/// error and never escapes.
pub(super) fn deserialize<T>(bytes: &[u8]) -> Result<T, SerializeError>
where
    T: DeserializeOwned,
{
    match catch_unwind(AssertUnwindSafe(|| from_slice(bytes))) {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => Err(SerializeError::decode(WireFormat::Cbor, err)),
        Err(_) => Err(SerializeError::decode(WireFormat::Cbor, "decoder panicked")),
    }
}

pub(super) fn deserialize_bounded<T>(bytes: &[u8], max_bytes: usize) -> Result<T, SerializeError>
where
    T: DeserializeOwned,
{
    if bytes.len() > max_bytes {
        return Err(SerializeError::TooLarge {
            format: WireFormat::Cbor,
            len: bytes.len(),
            max_bytes,
        });
    }

    deserialize(bytes)
}
