//! Scalar types with a dedicated document representation.

mod blob;
mod timestamp;

pub use blob::Blob;
pub use timestamp::Timestamp;
pub use ulid::Ulid;
