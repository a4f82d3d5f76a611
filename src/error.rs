use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Unknown error kind: {0}")]
    UnknownErrorKind(String),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("No schema defined for status code {0}")]
    NoSchemaForStatusCode(u16),

    #[error("Failed to compile JSON schema: {0}")]
    SchemaCompilationError(String),

    #[error("Catalog error: {0}")]
    CatalogError(String),
}
