use crate::{
    model::EntityModel,
    traits::Entity,
    value::{Document, Value},
};
use tracing::{trace, warn};

/// Encode an entity into a document.
///
/// Absent values (`None`) are omitted rather than written as null. The
/// identity field is written under `ID_KEY`; flattened structures
/// contribute their own keys to this document. When two fields would write
/// the same key the first one wins; decoding such a model fails.
#[must_use]
pub fn encode<E: Entity>(entity: &E) -> Document {
    let model = E::MODEL;
    let mut document = Document::with_capacity(model.fields.len());

    for (index, field) in model.fields.iter().enumerate() {
        let Some(value) = entity.field_value(index) else {
            continue;
        };
        if value.is_null() {
            continue;
        }

        match (field.stored_key(), value) {
            (None, Value::Document(inner)) => {
                for (key, value) in inner {
                    put(&mut document, model, key, value);
                }
            }
            (key, value) => put(&mut document, model, key.unwrap_or(field.name), value),
        }
    }

    trace!(
        entity = model.path,
        keys = document.len(),
        "encoded entity"
    );

    document
}

fn put<K>(document: &mut Document, model: &EntityModel, key: K, value: Value)
where
    K: AsRef<str> + Into<String>,
{
    if document.contains_key(key.as_ref()) {
        warn!(
            entity = model.path,
            key = key.as_ref(),
            "duplicate document key, keeping the first value"
        );
        return;
    }

    document.insert(key, value);
}
