use crate::catalog::{build_catalog, SchemaCatalog};
use crate::error::RegistryError;
use crate::kind::ErrorKind;
use crate::registry::ErrorSchemaRegistry;
use crate::validation_helpers::{
    build_validator, format_instance_location, format_violation, CATALOG_BASE_URI,
};
use crate::violation_types::map_to_violation_type;
use jsonschema::{Registry, Resource, Validator};
use serde_json::{json, Value};
use std::collections::HashMap;
use tracing::debug;

/// Publishes the catalog as a JSON Schema resource for $ref resolution
fn build_schema_registry(catalog: &SchemaCatalog) -> Result<Registry, RegistryError> {
    let document = catalog.to_pointer_document()?;

    let resource = Resource::from_contents(document).map_err(|e| {
        RegistryError::SchemaCompilationError(format!("Failed to create resource: {}", e))
    })?;

    Registry::try_new(CATALOG_BASE_URI, resource).map_err(|e| {
        RegistryError::SchemaCompilationError(format!("Failed to create registry: {}", e))
    })
}

/// Validator for error bodies against the schema of their status code
pub struct PayloadValidator {
    exact: HashMap<u16, Validator>,
}

impl PayloadValidator {
    /// Compiles one validator per descriptor of the registry
    pub fn from_registry(registry: &ErrorSchemaRegistry) -> Result<Self, RegistryError> {
        let catalog = build_catalog(registry);
        let schema_registry = build_schema_registry(&catalog)?;
        let mut exact = HashMap::new();

        for descriptor in registry.list() {
            let reference = json!({
                "$ref": format!("{}#/{}", CATALOG_BASE_URI, descriptor.reference_id)
            });
            let validator = build_validator(
                &reference,
                &schema_registry,
                &format!("error {}", descriptor.status_code),
            )?;
            exact.insert(descriptor.status_code, validator);
        }

        debug!(validators = exact.len(), "error payload validators compiled");
        Ok(Self { exact })
    }

    /// Validates an error body against the schema of `kind`
    pub fn validate(&self, kind: ErrorKind, body: &Value) -> Result<(), RegistryError> {
        self.validate_status(kind.status_code(), body)
    }

    /// Validates an error body against the schema for the given status code
    pub fn validate_status(&self, status_code: u16, body: &Value) -> Result<(), RegistryError> {
        let validator = self
            .exact
            .get(&status_code)
            .ok_or(RegistryError::NoSchemaForStatusCode(status_code))?;

        if validator.is_valid(body) {
            return Ok(());
        }

        let violations: Vec<String> = validator
            .iter_errors(body)
            .map(|e| {
                let location = format_instance_location(&e.instance_path.to_string(), "body");
                format_violation(map_to_violation_type(&e.kind), &location, &e.to_string())
            })
            .collect();

        Err(RegistryError::ValidationFailed(violations.join("; ")))
    }

    pub fn is_valid(&self, status_code: u16, body: &Value) -> bool {
        self.exact
            .get(&status_code)
            .is_some_and(|validator| validator.is_valid(body))
    }
}
