//! Validated JSON extractor for automatic request validation.
//!
//! `ValidatedJson<T>` deserializes the body and runs the `validator` rules
//! on it. Both malformed JSON and rule violations are answered with
//! 400 Bad Request; violations carry field-level details.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use tracing::debug;
use validator::{Validate, ValidationErrors};
use vinyl_core::{field_errors, ErrorResponse, VinylError};

/// JSON extractor that validates the deserialized value.
///
/// ```ignore
/// async fn create_album(ValidatedJson(request): ValidatedJson<AlbumRequest>) {
///     // request satisfies every #[validate] rule here
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T> std::ops::Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Rejection type for validated JSON extraction.
#[derive(Debug)]
pub enum ValidatedJsonRejection {
    /// Body missing, not JSON, or not the expected shape.
    JsonError(JsonRejection),
    /// Body parsed but broke a validation rule.
    ValidationError(ValidationErrors),
}

impl ValidatedJsonRejection {
    fn to_error_response(&self) -> ErrorResponse {
        match self {
            Self::JsonError(rejection) => ErrorResponse::from_error(&VinylError::validation(
                format!("Invalid JSON: {}", rejection.body_text()),
            )),
            Self::ValidationError(errors) => ErrorResponse::from_error(&VinylError::validation(
                "Request validation failed",
            ))
            .with_details(field_errors(errors)),
        }
    }
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        let body = self.to_error_response();
        debug!("Rejected request body: {}", body.message);
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ValidatedJsonRejection::JsonError)?;

        value
            .validate()
            .map_err(ValidatedJsonRejection::ValidationError)?;

        Ok(ValidatedJson(value))
    }
}
