use crate::{model::FieldKind, value::Value};
use std::fmt;
use thiserror::Error as ThisError;

///
/// MapError
///
/// Failure raised while mapping between entities and documents.
/// The path is built inside-out as the error bubbles up through nested
/// structures, so the outermost field is the first segment.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("{class} at '{path}': {message}")]
pub struct MapError {
    pub class: ErrorClass,
    pub path: FieldPath,
    pub message: String,
}

impl MapError {
    pub fn new(class: ErrorClass, message: impl Into<String>) -> Self {
        Self {
            class,
            path: FieldPath::default(),
            message: message.into(),
        }
    }

    /// Construct a construction error for a target type.
    pub fn construction(entity_path: &str, message: impl Into<String>) -> Self {
        let message = message.into();

        Self::new(
            ErrorClass::Construction,
            format!("cannot construct '{entity_path}': {message}"),
        )
    }

    /// Construct a field-access error for a value whose shape does not
    /// match the declared kind.
    #[must_use]
    pub fn type_mismatch(expected: &FieldKind, found: &Value) -> Self {
        Self::new(
            ErrorClass::FieldAccess,
            format!("expected {expected}, found {}", found.tag().label()),
        )
    }

    /// Construct a field-access error for a numeric value that does not fit
    /// the declared type.
    pub fn out_of_range(expected: &FieldKind, found: impl fmt::Display) -> Self {
        Self::new(
            ErrorClass::FieldAccess,
            format!("value {found} is out of range for {expected}"),
        )
    }

    /// Construct a field-access error for a setter index with no field.
    #[must_use]
    pub fn unknown_field(entity_path: &str, index: usize) -> Self {
        Self::new(
            ErrorClass::FieldAccess,
            format!("'{entity_path}' has no field at index {index}"),
        )
    }

    /// Construct a field-access error for a mapping key that cannot be
    /// parsed back into the declared key type.
    pub fn invalid_key(key: &str, message: impl fmt::Display) -> Self {
        Self::new(
            ErrorClass::FieldAccess,
            format!("invalid mapping key '{key}': {message}"),
        )
    }

    /// Construct a field-access error for a document key written by more
    /// than one field of a structure.
    #[must_use]
    pub fn duplicate_key(entity_path: &str, key: &str) -> Self {
        Self::new(
            ErrorClass::FieldAccess,
            format!("key '{key}' is written by more than one field of '{entity_path}'"),
        )
        .at_field(key)
    }

    /// Construct a missing-type-parameter error for a container kind with no
    /// declared element type.
    #[must_use]
    pub fn missing_type_parameter(kind: &FieldKind, container: &str) -> Self {
        Self::new(
            ErrorClass::MissingTypeParameter,
            format!("{kind} does not declare a {container} element type"),
        )
    }

    /// Prepend a named field segment.
    #[must_use]
    pub fn at_field(mut self, name: impl Into<String>) -> Self {
        self.path.push_front(PathSegment::Field(name.into()));
        self
    }

    /// Prepend a sequence index segment.
    #[must_use]
    pub fn at_index(mut self, index: usize) -> Self {
        self.path.push_front(PathSegment::Index(index));
        self
    }

    /// Name the flattened field an error came through. Flattened keys share
    /// the enclosing document, so this adds no path segment.
    #[must_use]
    pub fn in_flattened(mut self, name: &str) -> Self {
        self.message = format!("{} (in flattened field '{name}')", self.message);
        self
    }

    /// Prepend a mapping key segment.
    #[must_use]
    pub fn at_key(mut self, key: impl Into<String>) -> Self {
        self.path.push_front(PathSegment::Key(key.into()));
        self
    }

    #[must_use]
    pub const fn is_construction(&self) -> bool {
        matches!(self.class, ErrorClass::Construction)
    }

    #[must_use]
    pub const fn is_field_access(&self) -> bool {
        matches!(self.class, ErrorClass::FieldAccess)
    }

    #[must_use]
    pub const fn is_missing_type_parameter(&self) -> bool {
        matches!(self.class, ErrorClass::MissingTypeParameter)
    }
}

///
/// ErrorClass
/// Mapping error taxonomy.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    Construction,
    FieldAccess,
    MissingTypeParameter,
}

impl ErrorClass {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Construction => "construction",
            Self::FieldAccess => "field_access",
            Self::MissingTypeParameter => "missing_type_parameter",
        }
    }
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// FieldPath
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FieldPath(Vec<PathSegment>);

impl FieldPath {
    fn push_front(&mut self, segment: PathSegment) {
        self.0.insert(0, segment);
    }

    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("$");
        }

        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Field(name) if i == 0 => write!(f, "{name}")?,
                PathSegment::Field(name) => write!(f, ".{name}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
                PathSegment::Key(key) => write!(f, "[{key:?}]")?,
            }
        }

        Ok(())
    }
}

///
/// PathSegment
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PathSegment {
    Field(String),
    Index(usize),
    Key(String),
}
