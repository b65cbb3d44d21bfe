//! Element-type resolution for container kinds.
//!
//! Works purely on declared kinds. There is no fallback inference from
//! document content: a container declared without an element kind is an
//! error in the type definition.

use crate::{error::MapError, model::FieldKind};

/// Declared element kind of a sequence kind, seeing through `Optional`.
pub fn element_kind(kind: &FieldKind) -> Result<&'static FieldKind, MapError> {
    match kind.unwrap_optional() {
        FieldKind::List(item) => Ok(*item),
        other => Err(MapError::missing_type_parameter(other, "sequence")),
    }
}

/// Declared value kind of a mapping kind, seeing through `Optional`.
/// Mapping keys are always textual.
pub fn value_kind(kind: &FieldKind) -> Result<&'static FieldKind, MapError> {
    match kind.unwrap_optional() {
        FieldKind::Map(value) => Ok(*value),
        other => Err(MapError::missing_type_parameter(other, "mapping")),
    }
}
