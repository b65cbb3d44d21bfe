use crate::{error::MapError, model::entity::EntityModel, model::resolve};
use std::fmt::{self, Display};

///
/// FieldModel
/// Static metadata for one mapped field.
///

#[derive(Debug)]
pub struct FieldModel {
    /// Stored key name (the Rust field name unless renamed).
    pub name: &'static str,
    /// Declared type descriptor.
    pub kind: &'static FieldKind,
    pub role: FieldRole,
}

impl FieldModel {
    /// Document key this field is read from and written to.
    /// A flattened structure has no key of its own; a flattened field of
    /// any other kind is stored under its name like a plain field.
    #[must_use]
    pub fn stored_key(&self) -> Option<&'static str> {
        match self.role {
            FieldRole::Plain => Some(self.name),
            FieldRole::Identity => Some(crate::ID_KEY),
            FieldRole::Flatten => self.kind.structure().is_none().then_some(self.name),
        }
    }

    #[must_use]
    pub const fn is_identity(&self) -> bool {
        matches!(self.role, FieldRole::Identity)
    }

    /// Declared element kind of a sequence field.
    pub fn element_kind(&self) -> Result<&'static FieldKind, MapError> {
        resolve::element_kind(self.kind).map_err(|err| err.at_field(self.name))
    }

    /// Declared value kind of a mapping field.
    pub fn value_kind(&self) -> Result<&'static FieldKind, MapError> {
        resolve::value_kind(self.kind).map_err(|err| err.at_field(self.name))
    }
}

///
/// FieldRole
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldRole {
    Plain,
    /// Stored under the reserved identity key.
    Identity,
    /// Nested structure whose fields are merged into the enclosing document.
    Flatten,
}

///
/// FieldKind
///
/// Declared type of a field, as far as the document model needs to know it.
/// Container kinds carry their element kind so that type-erased document
/// content can be rebuilt into the declared shape.
///

#[derive(Clone, Copy)]
pub enum FieldKind {
    // Scalars
    Blob,
    Bool,
    Char,
    Float,
    Int,
    Text,
    Timestamp,
    Uint,
    Ulid,

    /// Any value; passed through untouched.
    Dynamic,

    // Containers
    List(&'static Self),
    /// String-keyed mapping; the payload is the value kind.
    Map(&'static Self),
    Optional(&'static Self),
    /// Sequence declared without an element kind.
    UntypedList,
    /// Mapping declared without a value kind.
    UntypedMap,

    /// Custom structure. Held as a function so recursive types do not form
    /// a cycle while their static models are evaluated.
    Structure(fn() -> &'static EntityModel),
}

impl FieldKind {
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(
            self,
            Self::Blob
                | Self::Bool
                | Self::Char
                | Self::Float
                | Self::Int
                | Self::Text
                | Self::Timestamp
                | Self::Uint
                | Self::Ulid
        )
    }

    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Self::List(_) | Self::UntypedList)
    }

    #[must_use]
    pub const fn is_mapping(&self) -> bool {
        matches!(self, Self::Map(_) | Self::UntypedMap)
    }

    /// Strip any number of `Optional` layers.
    #[must_use]
    pub const fn unwrap_optional(&self) -> &Self {
        let mut kind = self;
        while let Self::Optional(inner) = kind {
            kind = *inner;
        }
        kind
    }

    /// Model of a structure kind.
    #[must_use]
    pub fn structure(&self) -> Option<&'static EntityModel> {
        match self.unwrap_optional() {
            Self::Structure(model) => Some(model()),
            _ => None,
        }
    }
}

impl Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blob => f.write_str("blob"),
            Self::Bool => f.write_str("bool"),
            Self::Char => f.write_str("char"),
            Self::Float => f.write_str("float"),
            Self::Int => f.write_str("int"),
            Self::Text => f.write_str("text"),
            Self::Timestamp => f.write_str("timestamp"),
            Self::Uint => f.write_str("uint"),
            Self::Ulid => f.write_str("ulid"),
            Self::Dynamic => f.write_str("dynamic"),
            Self::List(item) => write!(f, "list<{item}>"),
            Self::Map(value) => write!(f, "map<text, {value}>"),
            Self::Optional(inner) => write!(f, "option<{inner}>"),
            Self::UntypedList => f.write_str("list<?>"),
            Self::UntypedMap => f.write_str("map<text, ?>"),
            Self::Structure(model) => write!(f, "struct {}", model().path),
        }
    }
}

// Structures print by path only; the full model can recurse.
impl fmt::Debug for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldKind({self})")
    }
}

impl PartialEq for FieldKind {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::List(a), Self::List(b))
            | (Self::Map(a), Self::Map(b))
            | (Self::Optional(a), Self::Optional(b)) => a == b,
            (Self::Structure(a), Self::Structure(b)) => a().path == b().path,
            _ => std::mem::discriminant(self) == std::mem::discriminant(other),
        }
    }
}
