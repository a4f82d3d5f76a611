use crate::error::RegistryError;
use crate::violation_types::ViolationType;
use jsonschema::{Registry, Validator};
use serde_json::Value;

/// URI under which the error catalog is published for `$ref` resolution
pub const CATALOG_BASE_URI: &str = "urn:error-schemas:catalog";

/// Base URI of the small `$ref` wrappers compiled per status code
const PAYLOAD_BASE_URI: &str = "urn:error-schemas:payload";

/// Builds a JSON Schema validator with registry for $ref resolution
pub fn build_validator(
    schema: &Value,
    registry: &Registry,
    error_context: &str,
) -> Result<Validator, RegistryError> {
    jsonschema::options()
        .with_registry(registry.clone())
        .with_base_uri(PAYLOAD_BASE_URI.to_string())
        .build(schema)
        .map_err(|e| {
            RegistryError::SchemaCompilationError(format!(
                "Failed to compile schema for {}: {}",
                error_context, e
            ))
        })
}

/// Formats a violation message
pub fn format_violation(violation_type: ViolationType, location: &str, message: &str) -> String {
    format_finding(violation_type.as_str(), location, message)
}

/// Formats a coded finding as `[CODE] at location - message`
pub fn format_finding(code: &str, location: &str, message: &str) -> String {
    format!("[{}] at {} - {}", code, location, message)
}

/// Formats instance path from JSON Schema validation error
pub fn format_instance_location(instance_path: &str, prefix: &str) -> String {
    if instance_path.is_empty() {
        prefix.to_string()
    } else {
        format!("{}{}", prefix, instance_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_errors_are_reported_at_the_prefix() {
        assert_eq!(format_instance_location("", "body"), "body");
        assert_eq!(format_instance_location("/message", "body"), "body/message");
    }

    #[test]
    fn violations_carry_their_code() {
        assert_eq!(
            format_violation(
                ViolationType::EnumViolation,
                "body/statusCode",
                "400 is not one of [404]"
            ),
            "[ENUM_VIOLATION] at body/statusCode - 400 is not one of [404]"
        );
    }
}
