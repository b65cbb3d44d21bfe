use crate::{
    error::MapError,
    model::FieldKind,
    traits::{DocumentKey, DocumentValue},
    value::{Document, Value},
};
use std::{
    collections::{BTreeMap, HashMap, VecDeque},
    hash::{BuildHasher, Hash},
};

impl<T: DocumentValue> DocumentValue for Option<T> {
    const KIND: &'static FieldKind = &FieldKind::Optional(T::KIND);

    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }

    fn from_value(value: Value) -> Result<Self, MapError> {
        if value.is_null() {
            return Ok(None);
        }

        T::from_value(value).map(Some)
    }
}

impl<T: DocumentValue> DocumentValue for Box<T> {
    const KIND: &'static FieldKind = T::KIND;

    fn to_value(&self) -> Value {
        (**self).to_value()
    }

    fn from_value(value: Value) -> Result<Self, MapError> {
        T::from_value(value).map(Self::new)
    }
}

///
/// SEQUENCES
///

fn list_items(kind: &FieldKind, value: Value) -> Result<Vec<Value>, MapError> {
    match value {
        Value::List(items) => Ok(items),
        other => Err(MapError::type_mismatch(kind, &other)),
    }
}

impl<T: DocumentValue> DocumentValue for Vec<T> {
    const KIND: &'static FieldKind = &FieldKind::List(T::KIND);

    fn to_value(&self) -> Value {
        Value::List(self.iter().map(DocumentValue::to_value).collect())
    }

    fn from_value(value: Value) -> Result<Self, MapError> {
        list_items(Self::KIND, value)?
            .into_iter()
            .enumerate()
            .map(|(i, item)| T::from_value(item).map_err(|err| err.at_index(i)))
            .collect()
    }
}

impl<T: DocumentValue> DocumentValue for VecDeque<T> {
    const KIND: &'static FieldKind = &FieldKind::List(T::KIND);

    fn to_value(&self) -> Value {
        Value::List(self.iter().map(DocumentValue::to_value).collect())
    }

    fn from_value(value: Value) -> Result<Self, MapError> {
        list_items(Self::KIND, value)?
            .into_iter()
            .enumerate()
            .map(|(i, item)| T::from_value(item).map_err(|err| err.at_index(i)))
            .collect()
    }
}

///
/// MAPPINGS
///

fn map_document(kind: &FieldKind, value: Value) -> Result<Document, MapError> {
    match value {
        Value::Document(doc) => Ok(doc),
        other => Err(MapError::type_mismatch(kind, &other)),
    }
}

fn map_entry<K, T>(key: String, value: Value) -> Result<(K, T), MapError>
where
    K: DocumentKey,
    T: DocumentValue,
{
    let parsed = K::from_key(&key).map_err(|err| err.at_key(key.as_str()))?;
    let value = T::from_value(value).map_err(|err| err.at_key(key))?;

    Ok((parsed, value))
}

impl<K, T> DocumentValue for BTreeMap<K, T>
where
    K: DocumentKey + Ord,
    T: DocumentValue,
{
    const KIND: &'static FieldKind = &FieldKind::Map(T::KIND);

    fn to_value(&self) -> Value {
        Value::Document(
            self.iter()
                .map(|(k, v)| (k.to_key(), v.to_value()))
                .collect(),
        )
    }

    fn from_value(value: Value) -> Result<Self, MapError> {
        map_document(Self::KIND, value)?
            .into_iter()
            .map(|(k, v)| map_entry(k, v))
            .collect()
    }
}

impl<K, T, S> DocumentValue for HashMap<K, T, S>
where
    K: DocumentKey + Eq + Hash,
    T: DocumentValue,
    S: BuildHasher + Default,
{
    const KIND: &'static FieldKind = &FieldKind::Map(T::KIND);

    fn to_value(&self) -> Value {
        Value::Document(
            self.iter()
                .map(|(k, v)| (k.to_key(), v.to_value()))
                .collect(),
        )
    }

    fn from_value(value: Value) -> Result<Self, MapError> {
        map_document(Self::KIND, value)?
            .into_iter()
            .map(|(k, v)| map_entry(k, v))
            .collect()
    }
}
