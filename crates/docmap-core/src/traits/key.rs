use crate::{
    error::MapError,
    types::{Timestamp, Ulid},
};

///
/// DocumentKey
///
/// Key type of a mapping field. Documents only hold textual keys, so keys
/// are written in their string form and parsed back on decode.
///

pub trait DocumentKey: Sized {
    fn to_key(&self) -> String;

    fn from_key(key: &str) -> Result<Self, MapError>;
}

impl DocumentKey for String {
    fn to_key(&self) -> String {
        self.clone()
    }

    fn from_key(key: &str) -> Result<Self, MapError> {
        Ok(key.to_string())
    }
}

// impl_parsed_key
macro_rules! impl_parsed_key {
    ( $( $type:ty ),* $(,)? ) => {
        $(
            impl DocumentKey for $type {
                fn to_key(&self) -> String {
                    self.to_string()
                }

                fn from_key(key: &str) -> Result<Self, MapError> {
                    key.parse::<Self>().map_err(|err| MapError::invalid_key(key, err))
                }
            }
        )*
    };
}

impl_parsed_key!(char, i8, i16, i32, i64, u8, u16, u32, u64, Timestamp, Ulid);
