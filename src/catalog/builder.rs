use crate::catalog::SchemaCatalog;
use crate::registry::ErrorSchemaRegistry;
use tracing::debug;

/// Renders every descriptor of the registry into a catalog, in declaration order
pub fn build_catalog(registry: &ErrorSchemaRegistry) -> SchemaCatalog {
    let mut catalog = SchemaCatalog::new();

    for descriptor in registry.list() {
        catalog.insert(descriptor.reference_id.clone(), descriptor.to_json_schema());
    }

    debug!(schemas = catalog.len(), "error schema catalog built");
    catalog
}
