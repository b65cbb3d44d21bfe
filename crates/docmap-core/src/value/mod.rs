mod document;
mod tag;
mod wire;


use crate::types::{Blob, Timestamp, Ulid};
use std::fmt::{self, Display};

// re-exports
pub use document::Document;
pub use tag::ValueTag;

///
/// Value
///
/// Storage-neutral intermediate value held by documents.
///
/// Null        → an explicit hole inside a sequence or mapping.
///               Top-level fields are never encoded as Null; they are omitted.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Blob(Vec<u8>),
    Bool(bool),
    Char(char),
    /// Nested document; used for custom structures and string-keyed mappings.
    Document(Document),
    Float(f64),
    Int(i64),
    /// Ordered sequence; order and length are preserved end to end.
    List(Vec<Self>),
    Null,
    Text(String),
    Timestamp(Timestamp),
    Uint(u64),
    Ulid(Ulid),
}

impl Value {
    ///
    /// CONSTRUCTION
    ///

    /// Build a `Value::List` from owned items.
    pub fn from_list<T>(items: Vec<T>) -> Self
    where
        T: Into<Self>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    ///
    /// TYPES
    ///

    #[must_use]
    pub const fn tag(&self) -> ValueTag {
        match self {
            Self::Blob(_) => ValueTag::Blob,
            Self::Bool(_) => ValueTag::Bool,
            Self::Char(_) => ValueTag::Char,
            Self::Document(_) => ValueTag::Document,
            Self::Float(_) => ValueTag::Float,
            Self::Int(_) => ValueTag::Int,
            Self::List(_) => ValueTag::List,
            Self::Null => ValueTag::Null,
            Self::Text(_) => ValueTag::Text,
            Self::Timestamp(_) => ValueTag::Timestamp,
            Self::Uint(_) => ValueTag::Uint,
            Self::Ulid(_) => ValueTag::Ulid,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Scalars are every variant except containers and Null.
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        !matches!(self, Self::Document(_) | Self::List(_) | Self::Null)
    }

    ///
    /// ACCESSORS
    ///

    #[must_use]
    pub const fn as_document(&self) -> Option<&Document> {
        match self {
            Self::Document(doc) => Some(doc),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_document(self) -> Option<Document> {
        match self {
            Self::Document(doc) => Some(doc),
            _ => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blob(bytes) => write!(f, "[blob ({} bytes)]", bytes.len()),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Char(c) => write!(f, "{:?}", c.to_string()),
            Self::Document(doc) => write!(f, "{doc}"),
            Self::Float(v) => write!(f, "{v:?}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Null => f.write_str("null"),
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Timestamp(ts) => write!(f, "Timestamp({ts})"),
            Self::Uint(v) => write!(f, "{v}"),
            Self::Ulid(v) => write!(f, "Ulid(\"{v}\")"),
        }
    }
}

// impl_from_scalar
macro_rules! impl_from_scalar {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for Value {
                fn from(v: $type) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_scalar! {
    bool => Bool,
    char => Char,
    f32 => Float,
    f64 => Float,
    i8 => Int,
    i16 => Int,
    i32 => Int,
    i64 => Int,
    u8 => Uint,
    u16 => Uint,
    u32 => Uint,
    u64 => Uint,
    String => Text,
    Timestamp => Timestamp,
    Ulid => Ulid,
    Document => Document,
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<Blob> for Value {
    fn from(blob: Blob) -> Self {
        Self::Blob(blob.into_vec())
    }
}

impl From<Vec<Self>> for Value {
    fn from(items: Vec<Self>) -> Self {
        Self::List(items)
    }
}
