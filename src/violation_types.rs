use jsonschema::error::ValidationErrorKind;

/// Classification of an error body that does not match its schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationType {
    TypeMismatch,
    MissingRequired,
    EnumViolation,
    PatternMismatch,
    UnexpectedProperty,
    SchemaViolation,
}

impl ViolationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TypeMismatch => "TYPE_MISMATCH",
            Self::MissingRequired => "MISSING_REQUIRED",
            Self::EnumViolation => "ENUM_VIOLATION",
            Self::PatternMismatch => "PATTERN_MISMATCH",
            Self::UnexpectedProperty => "UNEXPECTED_PROPERTY",
            Self::SchemaViolation => "SCHEMA_VIOLATION",
        }
    }
}

/// Maps ValidationErrorKind to ViolationType
pub fn map_to_violation_type(kind: &ValidationErrorKind) -> ViolationType {
    match kind {
        ValidationErrorKind::Type { .. } => ViolationType::TypeMismatch,
        ValidationErrorKind::Required { .. } => ViolationType::MissingRequired,
        ValidationErrorKind::Enum { .. } => ViolationType::EnumViolation,
        ValidationErrorKind::Pattern { .. } => ViolationType::PatternMismatch,
        ValidationErrorKind::AdditionalProperties { .. } => ViolationType::UnexpectedProperty,
        _ => ViolationType::SchemaViolation,
    }
}
