//! Core runtime for Docmap: the document value model, static type
//! descriptors, the encode/decode mapper, wire serialization, and the
//! repository boundary used by document stores.
#![warn(unreachable_pub)]

extern crate self as docmap;

// public exports are one module level down
pub mod db;
pub mod error;
pub mod mapper;
pub mod model;
pub mod serialize;
pub mod traits;
pub mod types;
pub mod value;

///
/// CONSTANTS
///

/// Reserved document key holding the identity field's value.
pub const ID_KEY: &str = "_id";

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, stores, serializers, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        ID_KEY,
        model::{EntityModel, FieldKind, FieldModel, FieldRole},
        traits::{DocumentKey, DocumentValue, Entity},
        types::{Blob, Timestamp, Ulid},
        value::{Document, Value},
    };
}
