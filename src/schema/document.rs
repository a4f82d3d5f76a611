use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

/// A property schema inside an error body schema.
///
/// Covers only the keywords the error catalog uses: scalar types with a
/// pinned `enum` or a `pattern`, nested objects keyed by `patternProperties`,
/// and arrays of strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySchema {
    #[serde(rename = "type")]
    pub schema_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "enum", default, skip_serializing_if = "Vec::is_empty")]
    pub enumeration: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<bool>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub pattern_properties: IndexMap<String, PropertySchema>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<PropertySchema>>,
}

impl PropertySchema {
    pub fn typed(schema_type: &str) -> Self {
        Self {
            schema_type: schema_type.to_string(),
            ..Self::default()
        }
    }
}

fn default_additional_properties() -> bool {
    true
}

/// Top-level JSON schema of one error body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectSchema {
    #[serde(rename = "type")]
    pub schema_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub properties: IndexMap<String, PropertySchema>,
    #[serde(default)]
    pub required: Vec<String>,
    #[serde(default = "default_additional_properties")]
    pub additional_properties: bool,
}

impl ObjectSchema {
    /// Values allowed by the `statusCode` enum; `404.0` counts as `404`
    pub fn status_codes(&self) -> Vec<u16> {
        self.enum_values("statusCode")
            .iter()
            .filter_map(Value::as_f64)
            .filter(|code| code.fract() == 0.0 && (0.0..=f64::from(u16::MAX)).contains(code))
            .map(|code| code as u16)
            .collect()
    }

    /// Values allowed by the `error` enum
    pub fn titles(&self) -> Vec<String> {
        self.enum_values("error")
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect()
    }

    pub fn required_set(&self) -> BTreeSet<String> {
        self.required.iter().cloned().collect()
    }

    fn enum_values(&self, property: &str) -> &[Value] {
        self.properties
            .get(property)
            .map(|p| p.enumeration.as_slice())
            .unwrap_or_default()
    }

    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}
