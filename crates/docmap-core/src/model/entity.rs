use crate::{error::MapError, model::field::FieldModel};
use std::collections::HashSet;

///
/// EntityModel
/// Minimal, macro-generated runtime model for one mapped structure.
///

#[derive(Debug)]
pub struct EntityModel {
    /// Fully-qualified Rust type path (for diagnostics).
    pub path: &'static str,
    /// Short type name.
    pub name: &'static str,
    /// Collection the repository layer stores this type in, if declared.
    pub collection: Option<&'static str>,
    /// Ordered field list; getter/setter indexes refer to this order.
    pub fields: &'static [FieldModel],
}

impl EntityModel {
    /// The identity field, if this structure declares one.
    #[must_use]
    pub fn identity(&self) -> Option<&'static FieldModel> {
        self.fields.iter().find(|field| field.is_identity())
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldModel> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Index of a field in the getter/setter order.
    #[must_use]
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }

    /// Document keys written by this structure, including those contributed
    /// by flattened structures.
    #[must_use]
    pub fn stored_keys(&self) -> Vec<&'static str> {
        let mut keys = Vec::with_capacity(self.fields.len());

        for field in self.fields {
            match field.stored_key() {
                Some(key) => keys.push(key),
                None => {
                    if let Some(model) = field.kind.structure() {
                        keys.extend(model.stored_keys());
                    }
                }
            }
        }

        keys
    }

    /// Reject a model where two fields write the same document key, which
    /// can only happen through flattening.
    pub fn check_keys(&self) -> Result<(), MapError> {
        let mut seen = HashSet::new();

        match self.stored_keys().into_iter().find(|key| !seen.insert(*key)) {
            Some(key) => Err(MapError::duplicate_key(self.path, key)),
            None => Ok(()),
        }
    }
}
