pub mod builder;
pub mod drift;
pub mod loader;

pub use builder::build_catalog;
pub use drift::{detect_drift, CatalogDrift};
pub use loader::{load_catalog, parse_catalog, write_catalog, CatalogFormat};

use crate::error::RegistryError;
use crate::schema::ObjectSchema;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeSet;

fn clashing_reference(name: &str) -> RegistryError {
    RegistryError::CatalogError(format!(
        "Reference id '{}' is both a schema and a group of schemas",
        name
    ))
}

/// Error body schemas keyed by reference id (`errors/400`, ...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaCatalog {
    schemas: IndexMap<String, ObjectSchema>,
}

impl SchemaCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, reference_id: impl Into<String>, schema: ObjectSchema) {
        self.schemas.insert(reference_id.into(), schema);
    }

    pub fn get(&self, reference_id: &str) -> Option<&ObjectSchema> {
        self.schemas.get(reference_id)
    }

    pub fn get_mut(&mut self, reference_id: &str) -> Option<&mut ObjectSchema> {
        self.schemas.get_mut(reference_id)
    }

    pub fn remove(&mut self, reference_id: &str) -> Option<ObjectSchema> {
        self.schemas.shift_remove(reference_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ObjectSchema)> {
        self.schemas.iter()
    }

    pub fn reference_ids(&self) -> impl Iterator<Item = &str> {
        self.schemas.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Groups schemas by reference id prefix so that `errors/400`
    /// is addressable as the JSON pointer `/errors/400`.
    ///
    /// Fails when a reference id without a prefix names an existing group
    /// (or the reverse), since one of the schemas would be unreachable.
    pub fn to_pointer_document(&self) -> Result<Value, RegistryError> {
        let mut root = Map::new();
        let mut groups = BTreeSet::new();

        for (reference_id, schema) in &self.schemas {
            let schema_value = serde_json::to_value(schema).map_err(|e| {
                RegistryError::CatalogError(format!(
                    "Failed to serialize schema {}: {}",
                    reference_id, e
                ))
            })?;

            match reference_id.split_once('/') {
                Some((group, name)) => {
                    if !groups.contains(group) && root.contains_key(group) {
                        return Err(clashing_reference(group));
                    }
                    groups.insert(group.to_string());

                    let entry = root
                        .entry(group.to_string())
                        .or_insert_with(|| Value::Object(Map::new()));
                    if let Value::Object(members) = entry {
                        members.insert(name.to_string(), schema_value);
                    }
                }
                None => {
                    if root.contains_key(reference_id.as_str()) {
                        return Err(clashing_reference(reference_id));
                    }
                    root.insert(reference_id.clone(), schema_value);
                }
            }
        }

        Ok(Value::Object(root))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ErrorSchemaRegistry;

    #[test]
    fn pointer_document_nests_reference_ids() {
        let catalog = build_catalog(&ErrorSchemaRegistry::new());
        let document = catalog.to_pointer_document().unwrap();

        let not_found = document.pointer("/errors/404/properties/error/enum/0");
        assert_eq!(not_found, Some(&Value::from("Not Found")));
        assert_eq!(document["errors"].as_object().map(|m| m.len()), Some(7));
    }

    #[test]
    fn flat_reference_id_cannot_shadow_a_group() {
        let mut catalog = build_catalog(&ErrorSchemaRegistry::new());
        let schema = catalog.get("errors/404").cloned().unwrap();
        catalog.insert("errors", schema);

        assert!(matches!(
            catalog.to_pointer_document(),
            Err(RegistryError::CatalogError(message)) if message.contains("'errors'")
        ));
    }

    #[test]
    fn group_cannot_extend_a_flat_reference_id() {
        let registry = ErrorSchemaRegistry::new();
        let schema = build_catalog(&registry).get("errors/404").cloned().unwrap();

        let mut catalog = SchemaCatalog::new();
        catalog.insert("errors", schema.clone());
        catalog.insert("errors/404", schema);

        assert!(catalog.to_pointer_document().is_err());
    }
}
