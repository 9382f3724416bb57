use std::fmt;

use actix_web::{
    error::{InternalError, JsonPayloadError, PathError},
    http::StatusCode,
    HttpRequest, HttpResponse, ResponseError,
};
use cs_core::errors::{DomainError, ValidationError};
use cs_shared::error_codes;
use validator::ValidationErrors;

use crate::dto::{ErrorResponse, ErrorResponseExt};

/// HTTP status for each domain error kind
pub fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::DuplicateResource { .. } | DomainError::NoModification => StatusCode::CONFLICT,
        DomainError::AllocationUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        DomainError::AuthenticationFailed
        | DomainError::InvalidToken
        | DomainError::AuthenticationRequired => StatusCode::UNAUTHORIZED,
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Handle domain errors and convert them to appropriate HTTP responses
///
/// Internal failures keep their detail in the log only.
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    let status = status_for(error);

    let body = match error {
        DomainError::Internal { message } => {
            log::error!("Internal error: {}", message);
            ErrorResponse::new(error.code(), "An internal error occurred")
        }
        DomainError::Validation(validation) => {
            let body = ErrorResponse::new(error.code(), validation.to_string());
            match validation.field() {
                Some(field) => body.add_detail("field", field),
                None => body,
            }
        }
        _ => {
            log::debug!("Domain error: {}", error);
            ErrorResponse::new(error.code(), error.to_string())
        }
    };

    body.to_response(status)
}

/// Field-level `validator` failures as a 400 with the failing rules per field
pub fn handle_validation_errors(errors: ValidationErrors) -> HttpResponse {
    log::debug!("Request validation failed: {}", errors);

    let mut body = ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request data");
    for (field, field_errors) in errors.errors() {
        let codes: Vec<String> = match field_errors {
            validator::ValidationErrorsKind::Field(errors) => {
                errors.iter().map(|e| e.code.to_string()).collect()
            }
            _ => vec!["invalid".to_string()],
        };
        body = body.add_detail(field.to_string(), codes);
    }

    body.to_response(StatusCode::BAD_REQUEST)
}

/// JSON body extraction failures use the common error body
pub fn json_error_handler(error: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("Rejected request body: {}", error);

    let response = ErrorResponse::new(error_codes::BAD_REQUEST, "Malformed request body")
        .add_detail("reason", error.to_string())
        .to_response(StatusCode::BAD_REQUEST);
    InternalError::from_response(error, response).into()
}

/// Path extraction failures, such as an id that is not a UUID
pub fn path_error_handler(error: PathError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("Rejected path parameters: {}", error);

    let response = ErrorResponse::new(error_codes::BAD_REQUEST, "Malformed path parameter")
        .to_response(StatusCode::BAD_REQUEST);
    InternalError::from_response(error, response).into()
}

/// Domain error carried through actix's error channel
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self(error)
    }
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        Self(DomainError::Validation(error))
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        status_for(&self.0)
    }

    fn error_response(&self) -> HttpResponse {
        handle_domain_error(&self.0)
    }
}
