//! Error mapping: every failure a handler can see, translated to an HTTP
//! status plus the `{ message, code? }` wire body.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

use blog_core::error::{DomainError, RepoError};
use blog_core::ports::AuthError;
use blog_core::validation::FieldError;
use blog_shared::ErrorBody;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Auth(AuthError),

    #[error("{what} not found")]
    NotFound { what: &'static str },

    #[error("Invalid id")]
    BadId,

    #[error("Permission denied")]
    Forbidden,

    #[error("You have already liked this article")]
    DuplicateLike,

    #[error("You have not liked this article")]
    NotLiked,

    #[error("This email is already registered")]
    EmailTaken,

    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    #[error("{0}")]
    BadRequest(String),

    #[error("Server error")]
    Internal(String),
}

impl AppError {
    fn code(&self) -> Option<&'static str> {
        match self {
            AppError::Auth(e) => Some(e.code()),
            AppError::NotFound { .. } => Some("NOT_FOUND"),
            AppError::BadId => Some("BAD_ID"),
            AppError::Forbidden => Some("FORBIDDEN"),
            AppError::DuplicateLike => Some("DUPLICATE_LIKE"),
            AppError::NotLiked => Some("NOT_LIKED"),
            AppError::EmailTaken => Some("EMAIL_TAKEN"),
            AppError::Validation(_) => Some("VALIDATION_FAILED"),
            AppError::BadRequest(_) => None,
            AppError::Internal(_) => Some("SERVER_ERROR"),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Auth(AuthError::AdminRequired) => StatusCode::FORBIDDEN,
            AppError::Auth(AuthError::Hashing(_)) | AppError::Auth(AuthError::Lookup(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Auth(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::BadId
            | AppError::DuplicateLike
            | AppError::NotLiked
            | AppError::EmailTaken
            | AppError::Validation(_)
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::Validation(errors) => errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                // Stack detail stays server-side unless explicitly in development
                let dev = std::env::var("RUST_ENV")
                    .map(|v| v == "development" || v == "dev")
                    .unwrap_or(false);
                if dev {
                    format!("Server error: {detail}")
                } else {
                    "Server error".to_string()
                }
            }
            other => other.to_string(),
        };

        let body = match self.code() {
            Some(code) => ErrorBody::with_code(message, code),
            None => ErrorBody::new(message),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { entity_type, .. } => AppError::NotFound { what: entity_type },
            DomainError::BadId(_) => AppError::BadId,
            DomainError::Forbidden => AppError::Forbidden,
            DomainError::DuplicateLike => AppError::DuplicateLike,
            DomainError::NotLiked => AppError::NotLiked,
            DomainError::EmailTaken => AppError::EmailTaken,
            DomainError::Validation(errors) => AppError::Validation(errors),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound { what: "Resource" },
            // Contextless unique violations reach here only when a handler
            // forgot to translate them; surface as a server error.
            RepoError::UniqueViolation(msg) => AppError::Internal(msg),
            RepoError::Connection(msg) | RepoError::Query(msg) => {
                tracing::error!("Database error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        AppError::Auth(err)
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn auth_errors_map_to_401_except_admin() {
        assert_eq!(
            AppError::from(AuthError::NoToken).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::from(AuthError::TokenExpired).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::from(AuthError::AdminRequired).status_code(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn domain_errors_map_to_expected_statuses() {
        let not_found = AppError::from(DomainError::NotFound {
            entity_type: "Article",
            id: Uuid::nil(),
        });
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::from(DomainError::DuplicateLike).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(DomainError::Forbidden).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::BadId.status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn validation_joins_field_messages() {
        let err = AppError::Validation(vec![
            FieldError {
                field: "name",
                message: "name is required".into(),
            },
            FieldError {
                field: "email",
                message: "invalid email format".into(),
            },
        ]);
        let resp = err.error_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
