use crate::{
    error::MapError,
    model::FieldKind,
    traits::DocumentValue,
    types::{Blob, Timestamp, Ulid},
    value::{Document, Value},
};

// impl_int_value
// Integers accept either sign family as long as the value fits.
macro_rules! impl_int_value {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl DocumentValue for $type {
                const KIND: &'static FieldKind = &FieldKind::$variant;

                fn to_value(&self) -> Value {
                    Value::$variant((*self).into())
                }

                fn from_value(value: Value) -> Result<Self, MapError> {
                    match value {
                        Value::Int(v) => {
                            Self::try_from(v).map_err(|_| MapError::out_of_range(Self::KIND, v))
                        }
                        Value::Uint(v) => {
                            Self::try_from(v).map_err(|_| MapError::out_of_range(Self::KIND, v))
                        }
                        other => Err(MapError::type_mismatch(Self::KIND, &other)),
                    }
                }
            }
        )*
    };
}

impl_int_value!(
    i8 => Int,
    i16 => Int,
    i32 => Int,
    i64 => Int,
    u8 => Uint,
    u16 => Uint,
    u32 => Uint,
    u64 => Uint,
);

impl DocumentValue for f64 {
    const KIND: &'static FieldKind = &FieldKind::Float;

    fn to_value(&self) -> Value {
        Value::Float(*self)
    }

    #[allow(clippy::cast_precision_loss)]
    fn from_value(value: Value) -> Result<Self, MapError> {
        match value {
            Value::Float(v) => Ok(v),
            Value::Int(v) => Ok(v as Self),
            Value::Uint(v) => Ok(v as Self),
            other => Err(MapError::type_mismatch(Self::KIND, &other)),
        }
    }
}

impl DocumentValue for f32 {
    const KIND: &'static FieldKind = &FieldKind::Float;

    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }

    #[allow(clippy::cast_possible_truncation)]
    fn from_value(value: Value) -> Result<Self, MapError> {
        f64::from_value(value).map(|v| v as Self)
    }
}

// impl_exact_value
// One-to-one variants with no widening, for `Copy` types.
macro_rules! impl_exact_value {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl DocumentValue for $type {
                const KIND: &'static FieldKind = &FieldKind::$variant;

                fn to_value(&self) -> Value {
                    Value::$variant(*self)
                }

                fn from_value(value: Value) -> Result<Self, MapError> {
                    match value {
                        Value::$variant(v) => Ok(v),
                        other => Err(MapError::type_mismatch(Self::KIND, &other)),
                    }
                }
            }
        )*
    };
}

impl_exact_value!(
    bool => Bool,
    char => Char,
    Timestamp => Timestamp,
    Ulid => Ulid,
);

impl DocumentValue for String {
    const KIND: &'static FieldKind = &FieldKind::Text;

    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }

    fn from_value(value: Value) -> Result<Self, MapError> {
        match value {
            Value::Text(s) => Ok(s),
            other => Err(MapError::type_mismatch(Self::KIND, &other)),
        }
    }
}

impl DocumentValue for Blob {
    const KIND: &'static FieldKind = &FieldKind::Blob;

    fn to_value(&self) -> Value {
        Value::Blob(self.as_bytes().to_vec())
    }

    fn from_value(value: Value) -> Result<Self, MapError> {
        match value {
            Value::Blob(bytes) => Ok(Self::new(bytes)),
            other => Err(MapError::type_mismatch(Self::KIND, &other)),
        }
    }
}

impl DocumentValue for Value {
    const KIND: &'static FieldKind = &FieldKind::Dynamic;

    fn to_value(&self) -> Value {
        self.clone()
    }

    fn from_value(value: Value) -> Result<Self, MapError> {
        Ok(value)
    }
}

impl DocumentValue for Document {
    const KIND: &'static FieldKind = &FieldKind::Dynamic;

    fn to_value(&self) -> Value {
        Value::Document(self.clone())
    }

    fn from_value(value: Value) -> Result<Self, MapError> {
        match value {
            Value::Document(doc) => Ok(doc),
            other => Err(MapError::type_mismatch(Self::KIND, &other)),
        }
    }
}
