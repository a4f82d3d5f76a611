use crate::catalog::{build_catalog, SchemaCatalog};
use crate::registry::ErrorSchemaRegistry;
use crate::schema::{ObjectSchema, PropertySchema};
use crate::validation_helpers::format_finding;
use std::collections::BTreeSet;
use std::fmt;
use tracing::warn;

/// A difference between a documented catalog and the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogDrift {
    SchemaMissing {
        reference_id: String,
    },
    SchemaUnexpected {
        reference_id: String,
    },
    StatusCodeMismatch {
        reference_id: String,
        expected: Vec<u16>,
        found: Vec<u16>,
    },
    TitleMismatch {
        reference_id: String,
        expected: Vec<String>,
        found: Vec<String>,
    },
    RequiredMismatch {
        reference_id: String,
        expected: BTreeSet<String>,
        found: BTreeSet<String>,
    },
    PropertiesMismatch {
        reference_id: String,
        expected: BTreeSet<String>,
        found: BTreeSet<String>,
    },
    AdditionalPropertiesMismatch {
        reference_id: String,
        expected: bool,
        found: bool,
    },
    /// A property present on both sides accepts different values
    PropertyMismatch {
        reference_id: String,
        property: String,
    },
}

impl CatalogDrift {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SchemaMissing { .. } => "SCHEMA_MISSING",
            Self::SchemaUnexpected { .. } => "SCHEMA_UNEXPECTED",
            Self::StatusCodeMismatch { .. } => "STATUS_CODE_MISMATCH",
            Self::TitleMismatch { .. } => "TITLE_MISMATCH",
            Self::RequiredMismatch { .. } => "REQUIRED_MISMATCH",
            Self::PropertiesMismatch { .. } => "PROPERTIES_MISMATCH",
            Self::AdditionalPropertiesMismatch { .. } => "ADDITIONAL_PROPERTIES_MISMATCH",
            Self::PropertyMismatch { .. } => "PROPERTY_MISMATCH",
        }
    }

    pub fn reference_id(&self) -> &str {
        match self {
            Self::SchemaMissing { reference_id }
            | Self::SchemaUnexpected { reference_id }
            | Self::StatusCodeMismatch { reference_id, .. }
            | Self::TitleMismatch { reference_id, .. }
            | Self::RequiredMismatch { reference_id, .. }
            | Self::PropertiesMismatch { reference_id, .. }
            | Self::AdditionalPropertiesMismatch { reference_id, .. }
            | Self::PropertyMismatch { reference_id, .. } => reference_id,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::SchemaMissing { .. } => "schema is not documented".to_string(),
            Self::SchemaUnexpected { .. } => {
                "documented schema has no registered error kind".to_string()
            }
            Self::StatusCodeMismatch { expected, found, .. } => {
                format!("statusCode enum {:?} does not match {:?}", found, expected)
            }
            Self::TitleMismatch { expected, found, .. } => {
                format!("error enum {:?} does not match {:?}", found, expected)
            }
            Self::RequiredMismatch { expected, found, .. } => {
                format!("required {:?} does not match {:?}", found, expected)
            }
            Self::PropertiesMismatch { expected, found, .. } => {
                format!("properties {:?} do not match {:?}", found, expected)
            }
            Self::AdditionalPropertiesMismatch { expected, found, .. } => {
                format!("additionalProperties is {} but should be {}", found, expected)
            }
            Self::PropertyMismatch { property, .. } => {
                format!("{} constraints differ from the registered schema", property)
            }
        }
    }
}

impl fmt::Display for CatalogDrift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_finding(self.as_str(), self.reference_id(), &self.message()))
    }
}

fn property_names(schema: &ObjectSchema) -> BTreeSet<String> {
    schema.properties.keys().cloned().collect()
}

/// Properties whose enum is reported by `StatusCodeMismatch` / `TitleMismatch`
const PINNED_PROPERTIES: [&str; 2] = ["statusCode", "error"];

/// Whether two property schemas accept the same values.
///
/// `description` and `example` are annotations and are ignored.
fn same_constraints(expected: &PropertySchema, found: &PropertySchema, check_enum: bool) -> bool {
    let same_items = match (&expected.items, &found.items) {
        (Some(expected), Some(found)) => same_constraints(expected, found, true),
        (None, None) => true,
        _ => false,
    };
    let same_pattern_properties = expected.pattern_properties.len()
        == found.pattern_properties.len()
        && expected.pattern_properties.iter().all(|(pattern, expected)| {
            found
                .pattern_properties
                .get(pattern)
                .is_some_and(|found| same_constraints(expected, found, true))
        });

    expected.schema_type == found.schema_type
        && expected.pattern == found.pattern
        && expected.additional_properties.unwrap_or(true)
            == found.additional_properties.unwrap_or(true)
        && (!check_enum || expected.enumeration == found.enumeration)
        && same_items
        && same_pattern_properties
}

fn compare_schema(
    reference_id: &str,
    expected: &ObjectSchema,
    found: &ObjectSchema,
) -> Vec<CatalogDrift> {
    let mut drifts = Vec::new();
    let reference_id = reference_id.to_string();

    if expected.status_codes() != found.status_codes() {
        drifts.push(CatalogDrift::StatusCodeMismatch {
            reference_id: reference_id.clone(),
            expected: expected.status_codes(),
            found: found.status_codes(),
        });
    }
    if expected.titles() != found.titles() {
        drifts.push(CatalogDrift::TitleMismatch {
            reference_id: reference_id.clone(),
            expected: expected.titles(),
            found: found.titles(),
        });
    }
    if expected.required_set() != found.required_set() {
        drifts.push(CatalogDrift::RequiredMismatch {
            reference_id: reference_id.clone(),
            expected: expected.required_set(),
            found: found.required_set(),
        });
    }
    if property_names(expected) != property_names(found) {
        drifts.push(CatalogDrift::PropertiesMismatch {
            reference_id: reference_id.clone(),
            expected: property_names(expected),
            found: property_names(found),
        });
    }
    if expected.additional_properties != found.additional_properties {
        drifts.push(CatalogDrift::AdditionalPropertiesMismatch {
            reference_id: reference_id.clone(),
            expected: expected.additional_properties,
            found: found.additional_properties,
        });
    }

    for (property, expected_property) in &expected.properties {
        let Some(found_property) = found.properties.get(property) else {
            continue;
        };
        let check_enum = !PINNED_PROPERTIES.contains(&property.as_str());
        if !same_constraints(expected_property, found_property, check_enum) {
            drifts.push(CatalogDrift::PropertyMismatch {
                reference_id: reference_id.clone(),
                property: property.clone(),
            });
        }
    }

    drifts
}

/// Compares a documented catalog against the registry
pub fn detect_drift(
    documented: &SchemaCatalog,
    registry: &ErrorSchemaRegistry,
) -> Vec<CatalogDrift> {
    let expected = build_catalog(registry);
    let mut drifts = Vec::new();

    for (reference_id, expected_schema) in expected.iter() {
        match documented.get(reference_id) {
            Some(found) => drifts.extend(compare_schema(reference_id, expected_schema, found)),
            None => drifts.push(CatalogDrift::SchemaMissing {
                reference_id: reference_id.clone(),
            }),
        }
    }

    for reference_id in documented.reference_ids() {
        if expected.get(reference_id).is_none() {
            drifts.push(CatalogDrift::SchemaUnexpected {
                reference_id: reference_id.to_string(),
            });
        }
    }

    for drift in &drifts {
        warn!(code = drift.as_str(), reference_id = drift.reference_id(), "{}", drift);
    }

    drifts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drift_display_uses_the_finding_format() {
        let drift = CatalogDrift::AdditionalPropertiesMismatch {
            reference_id: "errors/404".to_string(),
            expected: false,
            found: true,
        };
        assert_eq!(
            drift.to_string(),
            "[ADDITIONAL_PROPERTIES_MISMATCH] at errors/404 - \
             additionalProperties is true but should be false"
        );
    }

    #[test]
    fn registry_catalog_has_no_drift() {
        let registry = ErrorSchemaRegistry::new();
        assert!(detect_drift(&build_catalog(&registry), &registry).is_empty());
    }

    #[test]
    fn empty_catalog_misses_every_schema() {
        let drifts = detect_drift(&SchemaCatalog::new(), &ErrorSchemaRegistry::new());
        assert_eq!(drifts.len(), 7);
        assert!(drifts.iter().all(|d| d.as_str() == "SCHEMA_MISSING"));
    }

    #[test]
    fn annotations_do_not_count_as_drift() {
        let expected = PropertySchema {
            description: Some("The error message".to_string()),
            example: Some(serde_json::json!("Not found")),
            pattern: Some(".+".to_string()),
            ..PropertySchema::typed("string")
        };
        let found = PropertySchema {
            pattern: Some(".+".to_string()),
            ..PropertySchema::typed("string")
        };
        assert!(same_constraints(&expected, &found, true));
    }

    #[test]
    fn nested_pattern_properties_are_compared() {
        let registry = ErrorSchemaRegistry::new();
        let expected = build_catalog(&registry);
        let errors = &expected.get("errors/422").unwrap().properties["errors"];

        let mut relaxed = errors.clone();
        if let Some(detail) = relaxed.pattern_properties.get_mut(".+") {
            detail.pattern_properties.clear();
        }
        assert!(same_constraints(errors, errors, true));
        assert!(!same_constraints(errors, &relaxed, true));
    }
}
