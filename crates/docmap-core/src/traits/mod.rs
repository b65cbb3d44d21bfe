mod collection;
mod key;
mod scalar;

#[cfg(test)]
mod tests;

pub use key::DocumentKey;

use crate::{
    db::Timestamps,
    error::MapError,
    model::{EntityModel, FieldKind},
    value::Value,
};

///
/// DocumentValue
///
/// Conversion boundary between Rust values and document values.
///
/// `KIND` is the declared type descriptor; it is what the decoder uses to
/// rebuild type-erased document content before `from_value` runs.
///

pub trait DocumentValue: Sized {
    const KIND: &'static FieldKind;

    /// Recursively serialize into a document value.
    /// `Value::Null` means "absent".
    fn to_value(&self) -> Value;

    /// Rebuild from a document value already shaped by `KIND`.
    fn from_value(value: Value) -> Result<Self, MapError>;
}

///
/// Entity
///
/// A structure that maps field-by-field onto a document.
///
/// Implementations are normally generated by `#[derive(Entity)]`, which
/// emits the static model and the indexed accessors. Indexes follow
/// `MODEL.fields`.
///

pub trait Entity: DocumentValue {
    const MODEL: &'static EntityModel;

    /// Static model accessor, usable as a function pointer.
    #[must_use]
    fn model() -> &'static EntityModel {
        Self::MODEL
    }

    /// Build the blank instance a decode fills in.
    fn construct() -> Result<Self, MapError>;

    /// Read one field as a document value; `None` past the last field.
    fn field_value(&self, index: usize) -> Option<Value>;

    /// Assign one field from a document value.
    fn set_field_value(&mut self, index: usize, value: Value) -> Result<(), MapError>;

    /// Create/update timestamps maintained by the repository layer.
    fn timestamps_mut(&mut self) -> Option<&mut Timestamps> {
        None
    }
}
