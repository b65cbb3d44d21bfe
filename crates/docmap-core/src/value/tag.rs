///
/// ValueTag
///
/// Value-variant tag used by diagnostics and error messages.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValueTag {
    Blob,
    Bool,
    Char,
    Document,
    Float,
    Int,
    List,
    Null,
    Text,
    Timestamp,
    Uint,
    Ulid,
}

impl ValueTag {
    /// Stable human-readable value kind label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Blob => "Blob",
            Self::Bool => "Bool",
            Self::Char => "Char",
            Self::Document => "Document",
            Self::Float => "Float",
            Self::Int => "Int",
            Self::List => "List",
            Self::Null => "Null",
            Self::Text => "Text",
            Self::Timestamp => "Timestamp",
            Self::Uint => "Uint",
            Self::Ulid => "Ulid",
        }
    }
}
