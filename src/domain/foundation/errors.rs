//! Error types for the domain layer.

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Key under which errors that span several fields are reported.
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

/// Field-level failures raised while checking a write payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("This field may not be blank.")]
    EmptyField { field: String },

    #[error("Ensure this field has no more than {max} characters.")]
    TooLong { field: String, max: usize },

    #[error("{reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("Invalid pk \"{id}\" - object does not exist.")]
    MissingReference { field: String, id: i64 },

    #[error("The fields {} must make a unique set.", .fields.join(", "))]
    NotUnique { fields: Vec<String> },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField {
            field: field.into(),
        }
    }

    /// Creates a length validation error.
    pub fn too_long(field: impl Into<String>, max: usize) -> Self {
        ValidationError::TooLong {
            field: field.into(),
            max,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a dangling foreign key validation error.
    pub fn missing_reference(field: impl Into<String>, id: i64) -> Self {
        ValidationError::MissingReference {
            field: field.into(),
            id,
        }
    }

    /// Creates a uniqueness validation error over the given fields.
    pub fn not_unique(fields: &[&str]) -> Self {
        ValidationError::NotUnique {
            fields: fields.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// Name of the field this error is reported under.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field }
            | ValidationError::TooLong { field, .. }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::MissingReference { field, .. } => field,
            ValidationError::NotUnique { .. } => NON_FIELD_ERRORS,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,

    // Not found errors
    NotFound,

    // Infrastructure errors
    DatabaseError,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
///
/// For validation failures `details` maps field names to their messages.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: BTreeMap<String, Vec<String>>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: BTreeMap::new(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, "Validation failed").with_detail(field, message)
    }

    /// Collects field-level failures into one validation error.
    pub fn from_validation(errors: Vec<ValidationError>) -> Self {
        errors.into_iter().fold(
            Self::new(ErrorCode::ValidationFailed, "Validation failed"),
            |err, e| err.with_detail(e.field().to_string(), e.to_string()),
        )
    }

    /// Creates a not found error for a resource.
    pub fn not_found(resource: &str, id: impl fmt::Display) -> Self {
        Self::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Wraps a storage failure with context.
    pub fn database(context: &str, err: impl fmt::Display) -> Self {
        Self::new(ErrorCode::DatabaseError, format!("{}: {}", context, err))
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.entry(key.into()).or_default().push(value.into());
        self
    }

    /// Returns true if this error means the record does not exist.
    pub fn is_not_found(&self) -> bool {
        self.code == ErrorCode::NotFound
    }
}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        Self::from_validation(vec![err])
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("name");
        assert_eq!(err.to_string(), "This field may not be blank.");
        assert_eq!(err.field(), "name");
    }

    #[test]
    fn validation_error_not_unique_reports_non_field_errors() {
        let err = ValidationError::not_unique(&["profile", "name"]);
        assert_eq!(
            err.to_string(),
            "The fields profile, name must make a unique set."
        );
        assert_eq!(err.field(), NON_FIELD_ERRORS);
    }

    #[test]
    fn validation_error_missing_reference_displays_pk() {
        let err = ValidationError::missing_reference("profile", 7);
        assert_eq!(
            err.to_string(),
            "Invalid pk \"7\" - object does not exist."
        );
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::not_found("Skill", 3);
        assert_eq!(err.to_string(), "[NOT_FOUND] Skill not found: 3");
        assert!(err.is_not_found());
    }

    #[test]
    fn from_validation_groups_messages_by_field() {
        let err = DomainError::from_validation(vec![
            ValidationError::empty_field("name"),
            ValidationError::too_long("email", 254),
            ValidationError::invalid_format("email", "Enter a valid email address."),
        ]);

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details["name"].len(), 1);
        assert_eq!(err.details["email"].len(), 2);
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(ErrorCode::NotFound.to_string(), "NOT_FOUND");
        assert_eq!(ErrorCode::InternalError.to_string(), "INTERNAL_ERROR");
    }
}
