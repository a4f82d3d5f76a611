use crate::kind::ErrorKind;
use serde_json::Value;

/// Pattern accepting any non-empty string
pub const NON_EMPTY_PATTERN: &str = ".+";

/// Top-level properties an error payload may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadField {
    StatusCode,
    Error,
    Message,
    Errors,
    Stack,
}

impl PayloadField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StatusCode => "statusCode",
            Self::Error => "error",
            Self::Message => "message",
            Self::Errors => "errors",
            Self::Stack => "stack",
        }
    }
}

/// Constraint on the free-text `message` property
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageConstraint {
    pub pattern: &'static str,
    pub example: &'static str,
}

/// Field-level detail: field name -> (rule name -> message).
///
/// Shared by every kind that reports per-field problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorsField;

/// Ordered stack trace lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackField;

/// Immutable schema definition of one HTTP error body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDescriptor {
    pub kind: ErrorKind,
    pub reference_id: String,
    pub description: &'static str,
    pub status_code: u16,
    pub title: &'static str,
    pub message: MessageConstraint,
    pub errors_field: Option<ErrorsField>,
    pub stack_field: Option<StackField>,
    pub required_fields: Vec<PayloadField>,
    pub allows_additional_properties: bool,
}

const BASE_REQUIRED: [PayloadField; 3] = [
    PayloadField::StatusCode,
    PayloadField::Error,
    PayloadField::Message,
];

impl SchemaDescriptor {
    /// Builds the fixed descriptor for `kind`
    pub fn for_kind(kind: ErrorKind) -> Self {
        let (description, example) = match kind {
            ErrorKind::BadRequest => (
                "Error returned when the client payload is either invalid or malformed.",
                "Invalid content type, only application/json is supported.",
            ),
            ErrorKind::Unauthorized => (
                "Error returned when then user does not provide any authorization grant.",
                "Unauthorized",
            ),
            ErrorKind::Forbidden => (
                "Error returned when then user is not authorized to access requested resource or resources.",
                "Forbidden",
            ),
            ErrorKind::NotFound => (
                "Error returned when then requested resource or resources are not found.",
                "Not found",
            ),
            ErrorKind::UnprocessableEntity => (
                "Error returned when the client payload is well formed but it also has some logical errors.",
                "Bad input data.",
            ),
            ErrorKind::InternalServerError => (
                "Error returned when a unexpected error was thrown by the server.",
                "Server error",
            ),
            ErrorKind::GatewayError => (
                "Error returned when a unexpected error was thrown by a upstream server.",
                "Upstream error",
            ),
        };

        let errors_field = match kind {
            ErrorKind::UnprocessableEntity | ErrorKind::InternalServerError => Some(ErrorsField),
            _ => None,
        };
        let stack_field = (kind == ErrorKind::InternalServerError).then_some(StackField);

        let mut required_fields = BASE_REQUIRED.to_vec();
        if kind == ErrorKind::UnprocessableEntity {
            required_fields.push(PayloadField::Errors);
        }

        Self {
            kind,
            reference_id: kind.reference_id(),
            description,
            status_code: kind.status_code(),
            title: kind.title(),
            message: MessageConstraint {
                pattern: NON_EMPTY_PATTERN,
                example,
            },
            errors_field,
            stack_field,
            required_fields,
            allows_additional_properties: false,
        }
    }

    /// Properties the schema declares, in rendering order
    pub fn properties(&self) -> Vec<PayloadField> {
        let mut fields = BASE_REQUIRED.to_vec();
        if self.stack_field.is_some() {
            fields.push(PayloadField::Stack);
        }
        if self.errors_field.is_some() {
            fields.push(PayloadField::Errors);
        }
        fields
    }

    pub fn is_required(&self, field: PayloadField) -> bool {
        self.required_fields.contains(&field)
    }

    /// Required fields absent from `payload`; every field is missing when it is not an object
    pub fn missing_fields(&self, payload: &Value) -> Vec<PayloadField> {
        let object = payload.as_object();
        self.required_fields
            .iter()
            .copied()
            .filter(|field| object.map_or(true, |map| !map.contains_key(field.as_str())))
            .collect()
    }

    pub fn satisfies_required(&self, payload: &Value) -> bool {
        self.missing_fields(payload).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn only_unprocessable_entity_requires_errors() {
        for kind in ErrorKind::ALL {
            let descriptor = SchemaDescriptor::for_kind(kind);
            assert_eq!(
                descriptor.is_required(PayloadField::Errors),
                kind == ErrorKind::UnprocessableEntity
            );
            assert!(!descriptor.is_required(PayloadField::Stack));
        }
    }

    #[test]
    fn internal_server_error_declares_stack_before_errors() {
        let descriptor = SchemaDescriptor::for_kind(ErrorKind::InternalServerError);
        assert_eq!(
            descriptor.properties(),
            vec![
                PayloadField::StatusCode,
                PayloadField::Error,
                PayloadField::Message,
                PayloadField::Stack,
                PayloadField::Errors,
            ]
        );
    }

    #[test]
    fn missing_fields_reports_absent_keys() {
        let descriptor = SchemaDescriptor::for_kind(ErrorKind::UnprocessableEntity);
        let payload = json!({ "statusCode": 422, "error": "Unprocessable Entity" });
        assert_eq!(
            descriptor.missing_fields(&payload),
            vec![PayloadField::Message, PayloadField::Errors]
        );
    }

    #[test]
    fn descriptions_match_the_published_catalog_text() {
        assert_eq!(
            SchemaDescriptor::for_kind(ErrorKind::UnprocessableEntity).description,
            "Error returned when the client payload is well formed but it also has some logical errors."
        );
        assert_eq!(
            SchemaDescriptor::for_kind(ErrorKind::GatewayError).description,
            "Error returned when a unexpected error was thrown by a upstream server."
        );
        assert_eq!(
            SchemaDescriptor::for_kind(ErrorKind::Unauthorized).description,
            "Error returned when then user does not provide any authorization grant."
        );
    }

    #[test]
    fn non_object_payload_misses_everything() {
        let descriptor = SchemaDescriptor::for_kind(ErrorKind::NotFound);
        assert_eq!(descriptor.missing_fields(&json!("oops")).len(), 3);
    }
}
