//! ## Crate layout
//! - `value`: the document value model (`Value`, `Document`).
//! - `model`: static field and type descriptors emitted by `#[derive(Entity)]`.
//! - `traits`: conversion traits between Rust values and document values.
//! - `mapper`: the encoder and decoder.
//! - `serialize`: CBOR and JSON wire forms.
//! - `db`: the repository boundary and an in-memory store.
//!
//! The derive macro expands to `::docmap::...` paths, so depend on this crate
//! rather than on `docmap-core` directly.

pub use docmap_core::{ID_KEY, db, error, mapper, model, serialize, traits, types, value};
pub use docmap_derive::Entity;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
/// Domain vocabulary plus the derive macro.
///

pub mod prelude {
    pub use docmap_core::prelude::*;
    pub use docmap_derive::Entity;
}
