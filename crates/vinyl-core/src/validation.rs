//! Validation utilities.

use crate::{FieldError, VinylError};
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `VinylError` on failure.
    fn validate_request(&self) -> Result<(), VinylError> {
        self.validate().map_err(validation_errors_to_vinyl_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Flattens `validator::ValidationErrors` into field errors, sorted by field.
#[must_use]
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut fields: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                field: (*field).to_string(),
                message: error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string),
                code: error.code.to_string(),
            })
        })
        .collect();
    fields.sort_by(|a, b| a.field.cmp(&b.field));
    fields
}

/// Converts `validator::ValidationErrors` to `VinylError`.
#[must_use]
pub fn validation_errors_to_vinyl_error(errors: ValidationErrors) -> VinylError {
    let message = field_errors(&errors)
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ");

    VinylError::Validation(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, max = 5, message = "name must be 1-5 characters"))]
        name: String,
        #[validate(range(exclusive_min = 0.0))]
        amount: f64,
    }

    #[test]
    fn test_valid_struct_passes() {
        let sample = Sample {
            name: "ok".to_string(),
            amount: 1.0,
        };
        assert!(sample.validate_request().is_ok());
    }

    #[test]
    fn test_field_errors_are_collected() {
        let sample = Sample {
            name: String::new(),
            amount: 0.0,
        };
        let errors = sample.validate().unwrap_err();
        let fields = field_errors(&errors);
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].field, "amount");
        assert_eq!(fields[1].field, "name");
        assert_eq!(fields[1].message, "name must be 1-5 characters");
    }

    #[test]
    fn test_validation_error_message_names_fields() {
        let sample = Sample {
            name: "too long".to_string(),
            amount: 2.0,
        };
        match sample.validate_request() {
            Err(VinylError::Validation(msg)) => assert!(msg.contains("name")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
