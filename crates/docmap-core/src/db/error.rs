use crate::{error::MapError, serialize::SerializeError};
use thiserror::Error as ThisError;

///
/// StoreError
///

#[derive(Debug, ThisError)]
pub enum StoreError {
    #[error("document of {len} bytes exceeds the {max_bytes} byte limit")]
    DocumentTooLarge { len: usize, max_bytes: usize },

    #[error("store lock poisoned")]
    Poisoned,

    #[error(transparent)]
    Serialize(#[from] SerializeError),
}

///
/// RepositoryError
///

#[derive(Debug, ThisError)]
pub enum RepositoryError {
    #[error("'{0}' declares no collection")]
    MissingCollection(&'static str),

    #[error("'{0}' has no identity value to store under")]
    MissingIdentity(&'static str),

    #[error(transparent)]
    Map(#[from] MapError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
