//! Repository boundary: persisting mapped entities in named collections.
//!
//! The store only ever sees documents; entities cross the boundary through
//! the mapper.

mod error;
mod repository;
mod store;
mod timestamps;

#[cfg(test)]
mod tests;

pub use error::{RepositoryError, StoreError};
pub use repository::Repository;
pub use store::{DocumentStore, MemoryStore, StoreConfig};
pub use timestamps::Timestamps;
