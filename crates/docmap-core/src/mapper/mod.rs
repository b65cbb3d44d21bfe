//! Bidirectional mapping between entities and documents.
//!
//! `encode` and `decode` share one recursive shape in opposite directions
//! and one identity convention: the identity field lives under `ID_KEY`.
//! Both are pure over their input; no state is kept between calls.

mod decode;
mod encode;
mod reconstruct;


pub use decode::decode;
pub use encode::encode;
pub use reconstruct::reconstruct;
