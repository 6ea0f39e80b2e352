use std::fmt;

use actix_web::{
    error::ResponseError,
    http::{header, header::ContentType, StatusCode},
    HttpResponse
};
use derive_more::Display;
use validator::{ValidationErrors, ValidationErrorsKind};

pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields";
pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email address";
pub const INVALID_SITE_COUNT_MESSAGE: &str = "noOfSites must be a non-negative integer";

#[derive(Debug, PartialEq)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    TooManyRequests { retry_after: u64 },
    InternalError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "{}", msg),
            AppError::NotFound(msg) => write!(f, "{}", msg),
            AppError::TooManyRequests { .. } => write!(f, "Too many requests. Please try again later."),
            AppError::InternalError(msg) => write!(f, "{}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        builder.insert_header(ContentType::json());

        if let AppError::TooManyRequests { retry_after } = self {
            builder.insert_header((header::RETRY_AFTER, retry_after.to_string()));
        }

        builder.json(serde_json::json!({"error": self.to_string()}))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::TooManyRequests { .. } => StatusCode::TOO_MANY_REQUESTS,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl AppError {
    /// Logs the storage failure with its detail and hides it behind `message`.
    pub fn storage(err: StorageError, message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::error!(error = %err, "{}", message);
        AppError::InternalError(message)
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::BadRequest(validation_message(&errors).to_string())
    }
}

/// Collapses field errors into the single message the API reports.
/// Missing fields win over format problems.
pub fn validation_message(errors: &ValidationErrors) -> &'static str {
    let codes: Vec<&str> = errors
        .errors()
        .values()
        .filter_map(|kind| match kind {
            ValidationErrorsKind::Field(errs) => Some(errs),
            _ => None,
        })
        .flatten()
        .map(|e| &*e.code)
        .collect();

    if codes.iter().any(|c| *c == "required" || *c == "blank") {
        MISSING_FIELDS_MESSAGE
    } else if codes.iter().any(|c| *c == "email") {
        INVALID_EMAIL_MESSAGE
    } else if codes.iter().any(|c| *c == "site_count") {
        INVALID_SITE_COUNT_MESSAGE
    } else {
        "Invalid request payload"
    }
}

/// Failures raised by a storage backend.
#[derive(Debug, Display)]
pub enum StorageError {
    #[display("I/O error on {path}: {source}")]
    Io { path: String, source: std::io::Error },

    #[display("Unreadable collection file {path}: {source}")]
    Corrupt { path: String, source: serde_json::Error },

    #[display("Serialization error: {_0}")]
    Serialization(serde_json::Error),

    #[display("Storage is not configured: {_0}")]
    Configuration(String),

    #[display("Transport error: {_0}")]
    Transport(reqwest::Error),

    #[display("Remote store responded with {status}: {message}")]
    Remote { status: u16, message: String },
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io { source, .. } => Some(source),
            StorageError::Corrupt { source, .. } => Some(source),
            StorageError::Serialization(e) => Some(e),
            StorageError::Transport(e) => Some(e),
            StorageError::Configuration(_) | StorageError::Remote { .. } => None,
        }
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err)
    }
}

impl From<reqwest::Error> for StorageError {
    fn from(err: reqwest::Error) -> Self {
        StorageError::Transport(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    fn errors_with(codes: &[(&'static str, &'static str)]) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for (field, code) in codes {
            errors.add(*field, ValidationError::new(*code));
        }
        errors
    }

    #[test]
    fn missing_fields_take_precedence() {
        let errors = errors_with(&[("email", "email"), ("fullName", "required")]);
        assert_eq!(validation_message(&errors), MISSING_FIELDS_MESSAGE);
    }

    #[test]
    fn email_errors_are_reported() {
        let errors = errors_with(&[("email", "email")]);
        assert_eq!(validation_message(&errors), INVALID_EMAIL_MESSAGE);
    }

    #[test]
    fn error_body_is_a_single_message() {
        let response = AppError::NotFound("Project not found".into()).error_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn rate_limited_responses_carry_retry_after() {
        let response = AppError::TooManyRequests { retry_after: 42 }.error_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(
            response.headers().get(header::RETRY_AFTER).and_then(|v| v.to_str().ok()),
            Some("42")
        );
    }
}
