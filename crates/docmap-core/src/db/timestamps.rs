use crate::{
    error::MapError,
    mapper::{decode, encode},
    model::{EntityModel, FieldKind, FieldModel, FieldRole},
    traits::{DocumentValue, Entity},
    types::Timestamp,
    value::Value,
};

///
/// Timestamps
///
/// Creation and update times maintained by the repository on save.
/// Entities embed it with `#[entity(timestamps)]`, which flattens the two
/// keys into the entity's own document.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Timestamps {
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

impl Timestamps {
    /// Record a write at `now`: `created_at` is set once, `updated_at` every time.
    pub fn touch(&mut self, now: Timestamp) {
        if self.created_at.is_none() {
            self.created_at = Some(now);
        }
        self.updated_at = Some(now);
    }
}

impl DocumentValue for Timestamps {
    const KIND: &'static FieldKind = &FieldKind::Structure(<Self as Entity>::model);

    fn to_value(&self) -> Value {
        Value::Document(encode(self))
    }

    fn from_value(value: Value) -> Result<Self, MapError> {
        match value {
            Value::Document(doc) => decode(&doc),
            other => Err(MapError::type_mismatch(Self::KIND, &other)),
        }
    }
}

impl Entity for Timestamps {
    const MODEL: &'static EntityModel = &EntityModel {
        path: "docmap::db::Timestamps",
        name: "Timestamps",
        collection: None,
        fields: &[
            FieldModel {
                name: "created_at",
                kind: <Option<Timestamp> as DocumentValue>::KIND,
                role: FieldRole::Plain,
            },
            FieldModel {
                name: "updated_at",
                kind: <Option<Timestamp> as DocumentValue>::KIND,
                role: FieldRole::Plain,
            },
        ],
    };

    fn construct() -> Result<Self, MapError> {
        Ok(Self::default())
    }

    fn field_value(&self, index: usize) -> Option<Value> {
        match index {
            0 => Some(self.created_at.to_value()),
            1 => Some(self.updated_at.to_value()),
            _ => None,
        }
    }

    fn set_field_value(&mut self, index: usize, value: Value) -> Result<(), MapError> {
        match index {
            0 => self.created_at = DocumentValue::from_value(value)?,
            1 => self.updated_at = DocumentValue::from_value(value)?,
            _ => return Err(MapError::unknown_field(Self::MODEL.path, index)),
        }

        Ok(())
    }

    fn timestamps_mut(&mut self) -> Option<&mut Self> {
        Some(self)
    }
}
