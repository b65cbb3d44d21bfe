//! JSON rendering of documents and values, for tooling and fixtures.

use crate::serialize::{SerializeError, WireFormat};
use serde::{Serialize, de::DeserializeOwned};

pub fn to_string<T>(t: &T) -> Result<String, SerializeError>
where
    T: Serialize,
{
    serde_json::to_string(t).map_err(|e| SerializeError::encode(WireFormat::Json, e))
}

pub fn to_string_pretty<T>(t: &T) -> Result<String, SerializeError>
where
    T: Serialize,
{
    serde_json::to_string_pretty(t).map_err(|e| SerializeError::encode(WireFormat::Json, e))
}

pub fn from_str<T>(s: &str) -> Result<T, SerializeError>
where
    T: DeserializeOwned,
{
    serde_json::from_str(s).map_err(|e| SerializeError::decode(WireFormat::Json, e))
}
