pub mod catalog;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod kind;
pub mod payload;
pub mod registry;
pub mod schema;
pub mod validation_helpers;
pub mod validators;
pub mod violation_types;

pub use catalog::{
    build_catalog, detect_drift, load_catalog, parse_catalog, write_catalog, CatalogDrift,
    CatalogFormat, SchemaCatalog,
};
pub use config::Config;
pub use descriptor::{ErrorsField, MessageConstraint, PayloadField, SchemaDescriptor, StackField};
pub use error::RegistryError;
pub use kind::ErrorKind;
pub use payload::{ErrorPayload, FieldErrors};
pub use registry::{registry, ErrorSchemaRegistry};
pub use schema::{ObjectSchema, PropertySchema};
pub use validation_helpers::{build_validator, format_instance_location, format_violation};
pub use validators::PayloadValidator;
pub use violation_types::{map_to_violation_type, ViolationType};
