use crate::descriptor::{
    ErrorsField, PayloadField, SchemaDescriptor, StackField, NON_EMPTY_PATTERN,
};
use crate::schema::document::{ObjectSchema, PropertySchema};
use indexmap::IndexMap;
use serde_json::{json, Value};

impl ErrorsField {
    /// `{ "<field>": { "<rule>": "<message>" } }`
    pub fn schema(&self) -> PropertySchema {
        let detail = PropertySchema {
            additional_properties: Some(true),
            pattern_properties: IndexMap::from([(
                NON_EMPTY_PATTERN.to_string(),
                PropertySchema::typed("string"),
            )]),
            ..PropertySchema::typed("object")
        };

        PropertySchema {
            additional_properties: Some(true),
            pattern_properties: IndexMap::from([(NON_EMPTY_PATTERN.to_string(), detail)]),
            ..PropertySchema::typed("object")
        }
    }
}

impl StackField {
    pub fn schema(&self) -> PropertySchema {
        PropertySchema {
            items: Some(Box::new(PropertySchema::typed("string"))),
            ..PropertySchema::typed("array")
        }
    }
}

fn pinned(schema_type: &str, description: &str, value: Value) -> PropertySchema {
    PropertySchema {
        description: Some(description.to_string()),
        enumeration: vec![value.clone()],
        example: Some(value),
        ..PropertySchema::typed(schema_type)
    }
}

impl SchemaDescriptor {
    /// Renders the descriptor as a JSON schema object
    pub fn to_json_schema(&self) -> ObjectSchema {
        let mut properties = IndexMap::new();

        for field in self.properties() {
            let schema = match field {
                PayloadField::StatusCode => {
                    pinned("number", "The error code", json!(self.status_code))
                }
                PayloadField::Error => pinned("string", "The error title", json!(self.title)),
                PayloadField::Message => PropertySchema {
                    description: Some("The error message".to_string()),
                    pattern: Some(self.message.pattern.to_string()),
                    example: Some(json!(self.message.example)),
                    ..PropertySchema::typed("string")
                },
                PayloadField::Stack => match &self.stack_field {
                    Some(stack) => stack.schema(),
                    None => continue,
                },
                PayloadField::Errors => match &self.errors_field {
                    Some(errors) => errors.schema(),
                    None => continue,
                },
            };
            properties.insert(field.as_str().to_string(), schema);
        }

        ObjectSchema {
            schema_type: "object".to_string(),
            description: Some(self.description.to_string()),
            properties,
            required: self
                .required_fields
                .iter()
                .map(|f| f.as_str().to_string())
                .collect(),
            additional_properties: self.allows_additional_properties,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::descriptor::SchemaDescriptor;
    use crate::kind::ErrorKind;
    use serde_json::json;

    #[test]
    fn not_found_renders_the_documented_shape() {
        let schema = SchemaDescriptor::for_kind(ErrorKind::NotFound).to_json_schema();
        let value = schema.to_value().unwrap();

        assert_eq!(value["type"], "object");
        assert_eq!(value["properties"]["statusCode"]["enum"], json!([404]));
        assert_eq!(value["properties"]["error"]["enum"], json!(["Not Found"]));
        assert_eq!(value["properties"]["message"]["pattern"], ".+");
        assert_eq!(value["required"], json!(["statusCode", "error", "message"]));
        assert_eq!(value["additionalProperties"], false);
        assert!(value["properties"].get("errors").is_none());
        assert!(value["properties"].get("stack").is_none());
    }

    #[test]
    fn errors_sub_schema_nests_string_maps() {
        let schema = SchemaDescriptor::for_kind(ErrorKind::UnprocessableEntity).to_json_schema();
        let value = schema.to_value().unwrap();

        assert_eq!(
            value["properties"]["errors"],
            json!({
                "type": "object",
                "additionalProperties": true,
                "patternProperties": {
                    ".+": {
                        "type": "object",
                        "additionalProperties": true,
                        "patternProperties": { ".+": { "type": "string" } }
                    }
                }
            })
        );
    }

    #[test]
    fn shared_errors_shape_is_identical_for_both_kinds() {
        let unprocessable =
            SchemaDescriptor::for_kind(ErrorKind::UnprocessableEntity).to_json_schema();
        let internal =
            SchemaDescriptor::for_kind(ErrorKind::InternalServerError).to_json_schema();
        assert_eq!(
            unprocessable.properties["errors"],
            internal.properties["errors"]
        );
    }

    #[test]
    fn stack_is_an_array_of_strings() {
        let schema = SchemaDescriptor::for_kind(ErrorKind::InternalServerError).to_json_schema();
        let value = schema.to_value().unwrap();
        assert_eq!(
            value["properties"]["stack"],
            json!({ "type": "array", "items": { "type": "string" } })
        );
    }
}
