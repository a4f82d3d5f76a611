use crate::kind::ErrorKind;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Per-field error detail: field name -> (rule name -> message)
pub type FieldErrors = IndexMap<String, IndexMap<String, String>>;

/// HTTP error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    pub status_code: u16,
    /// Error title, e.g. "Not Found"
    pub error: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<Vec<String>>,
}

impl ErrorPayload {
    /// Creates a body with the status code and title pinned for `kind`
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            status_code: kind.status_code(),
            error: kind.title().to_string(),
            message: message.into(),
            errors: None,
            stack: None,
        }
    }

    /// Adds a failed rule for a field
    pub fn with_field_error(
        mut self,
        field: impl Into<String>,
        rule: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        self.errors
            .get_or_insert_with(IndexMap::new)
            .entry(field.into())
            .or_default()
            .insert(rule.into(), message.into());
        self
    }

    pub fn with_errors(mut self, errors: FieldErrors) -> Self {
        self.errors = Some(errors);
        self
    }

    pub fn with_stack<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stack = Some(lines.into_iter().map(Into::into).collect());
        self
    }

    /// The kind whose status code this body carries
    pub fn kind(&self) -> Option<ErrorKind> {
        ErrorKind::from_status_code(self.status_code)
    }

    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

/// Helpers for the common bodies
impl ErrorPayload {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadRequest, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// 422 body; starts with an empty `errors` map so it is never missing
    pub fn unprocessable_entity(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnprocessableEntity, message).with_errors(FieldErrors::new())
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InternalServerError, message)
    }
}
