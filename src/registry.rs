use crate::descriptor::SchemaDescriptor;
use crate::error::RegistryError;
use crate::kind::ErrorKind;
use once_cell::sync::Lazy;
use tracing::debug;

static REGISTRY: Lazy<ErrorSchemaRegistry> = Lazy::new(ErrorSchemaRegistry::new);

/// Returns the process-wide registry, building it on first use
pub fn registry() -> &'static ErrorSchemaRegistry {
    &REGISTRY
}

/// Read-only table of error schema descriptors, one per `ErrorKind`
#[derive(Debug, Clone)]
pub struct ErrorSchemaRegistry {
    descriptors: [SchemaDescriptor; 7],
}

impl ErrorSchemaRegistry {
    pub fn new() -> Self {
        let descriptors = ErrorKind::ALL.map(SchemaDescriptor::for_kind);
        debug!(count = descriptors.len(), "error schema registry built");
        Self { descriptors }
    }

    /// Looks a descriptor up by its symbolic name, e.g. `"notFound"`
    pub fn get(&self, name: &str) -> Result<&SchemaDescriptor, RegistryError> {
        let kind: ErrorKind = name.parse()?;
        Ok(self.descriptor(kind))
    }

    pub fn descriptor(&self, kind: ErrorKind) -> &SchemaDescriptor {
        &self.descriptors[kind.index()]
    }

    /// All descriptors in declaration order
    pub fn list(&self) -> impl Iterator<Item = &SchemaDescriptor> + '_ {
        self.descriptors.iter()
    }

    pub fn find_by_status(&self, status_code: u16) -> Option<&SchemaDescriptor> {
        self.list().find(|d| d.status_code == status_code)
    }

    pub fn find_by_reference(&self, reference_id: &str) -> Option<&SchemaDescriptor> {
        self.list().find(|d| d.reference_id == reference_id)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl Default for ErrorSchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptors_are_stored_under_their_own_kind() {
        let registry = ErrorSchemaRegistry::new();
        for kind in ErrorKind::ALL {
            assert_eq!(registry.descriptor(kind).kind, kind);
        }
    }

    #[test]
    fn global_registry_is_shared() {
        assert!(std::ptr::eq(registry(), registry()));
    }
}
