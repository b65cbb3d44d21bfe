use crate::{
    error::MapError,
    model::{FieldKind, resolve},
    types::{Timestamp, Ulid},
    value::{Document, Value},
};

/// Rebuild a raw document value into the shape a declared kind expects.
///
/// 1. document + mapping kind: each entry rebuilt with the declared value kind
/// 2. document + structure kind: left as-is for the structure's own decode
/// 3. list + sequence kind: each item rebuilt with the declared element kind
/// 4. anything else: scalar recovery (see `recover_scalar`), else unchanged
///
/// Element kinds come from the declaration only, never from the content.
pub fn reconstruct(value: Value, kind: &FieldKind) -> Result<Value, MapError> {
    match (value, kind) {
        (Value::Null, FieldKind::Optional(_)) => Ok(Value::Null),
        (value, FieldKind::Optional(inner)) => reconstruct(value, inner),

        (Value::Document(doc), FieldKind::Map(_) | FieldKind::UntypedMap) => {
            let item = resolve::value_kind(kind)?;
            let mut out = Document::with_capacity(doc.len());

            for (key, entry) in doc {
                let entry = reconstruct(entry, item).map_err(|err| err.at_key(key.as_str()))?;
                out.insert(key, entry);
            }

            Ok(Value::Document(out))
        }

        (Value::Document(doc), FieldKind::Structure(_)) => Ok(Value::Document(doc)),

        (Value::List(items), FieldKind::List(_) | FieldKind::UntypedList) => {
            let item = resolve::element_kind(kind)?;

            items
                .into_iter()
                .enumerate()
                .map(|(i, entry)| reconstruct(entry, item).map_err(|err| err.at_index(i)))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::List)
        }

        (value, kind) => Ok(recover_scalar(value, kind)),
    }
}

// Lossless recovery of scalars whose distinction a wire format dropped:
// signedness, char vs text, ulid and timestamp as their plain encodings,
// and bytes written as a list of small integers.
#[allow(clippy::cast_precision_loss)]
fn recover_scalar(value: Value, kind: &FieldKind) -> Value {
    match (value, kind) {
        (Value::Int(v), FieldKind::Uint) if v >= 0 => Value::Uint(v.unsigned_abs()),
        (Value::Uint(v), FieldKind::Int) => i64::try_from(v).map_or(Value::Uint(v), Value::Int),

        (Value::Int(v), FieldKind::Float) => Value::Float(v as f64),
        (Value::Uint(v), FieldKind::Float) => Value::Float(v as f64),

        (Value::Int(v), FieldKind::Timestamp) if v >= 0 => {
            Value::Timestamp(Timestamp::from_millis(v.unsigned_abs()))
        }
        (Value::Uint(v), FieldKind::Timestamp) => Value::Timestamp(Timestamp::from_millis(v)),

        (Value::Text(s), FieldKind::Ulid) => match Ulid::from_string(&s) {
            Ok(ulid) => Value::Ulid(ulid),
            Err(_) => Value::Text(s),
        },

        (Value::Text(s), FieldKind::Char) => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Value::Char(c),
                _ => Value::Text(s),
            }
        }
        (Value::Char(c), FieldKind::Text) => Value::Text(c.to_string()),

        (Value::List(items), FieldKind::Blob) => bytes_from_list(items),

        (value, _) => value,
    }
}

fn bytes_from_list(items: Vec<Value>) -> Value {
    let bytes = items
        .iter()
        .map(|item| match item {
            Value::Int(v) => u8::try_from(*v).ok(),
            Value::Uint(v) => u8::try_from(*v).ok(),
            _ => None,
        })
        .collect::<Option<Vec<u8>>>();

    match bytes {
        Some(bytes) => Value::Blob(bytes),
        None => Value::List(items),
    }
}
