use crate::{
    error::MapError,
    mapper::reconstruct,
    traits::Entity,
    value::{Document, Value},
};
use tracing::{debug, trace};

/// Decode a document into a new entity.
///
/// Fields whose key is missing (or null) keep the value they were
/// constructed with. Any construction or assignment failure aborts the whole
/// decode; no partially filled entity is returned. A model whose fields
/// share a document key is rejected before anything is read.
pub fn decode<E: Entity>(document: &Document) -> Result<E, MapError> {
    let model = E::MODEL;

    let result = decode_fields::<E>(document);
    match &result {
        Ok(_) => trace!(entity = model.path, keys = document.len(), "decoded entity"),
        Err(err) => debug!(entity = model.path, error = %err, "decode failed"),
    }

    result
}

fn decode_fields<E: Entity>(document: &Document) -> Result<E, MapError> {
    let model = E::MODEL;
    model.check_keys()?;
    let mut entity = E::construct()?;

    for (index, field) in model.fields.iter().enumerate() {
        let key = field.stored_key();
        let raw = match key {
            Some(key) => document.get(key).cloned(),
            None => Some(Value::Document(document.clone())),
        };

        let Some(raw) = raw else {
            continue;
        };
        if raw.is_null() {
            continue;
        }

        // flattened keys live at this level, so they get no extra segment
        let locate = |err: MapError| match key {
            Some(_) => err.at_field(field.name),
            None => err.in_flattened(field.name),
        };

        let value = reconstruct(raw, field.kind).map_err(locate)?;
        entity.set_field_value(index, value).map_err(locate)?;
    }

    Ok(entity)
}
