//! Runtime data model definitions.
//!
//! Types in `model` are the static, macro-generated descriptions of mapped
//! structures: which fields exist, what they are called in a document, and
//! which declared kind each one has. The decoder relies on these because a
//! document alone does not say what a nested value should become.
//!
//! In general:
//! - Derive code defines *what exists*
//! - `model` defines *what runs*

pub mod entity;
pub mod field;
pub mod resolve;


pub use entity::EntityModel;
pub use field::{FieldKind, FieldModel, FieldRole};
