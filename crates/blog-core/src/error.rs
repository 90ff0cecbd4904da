//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

use crate::validation::FieldError;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: Uuid },

    #[error("Malformed identifier: {0}")]
    BadId(String),

    #[error("Not allowed to modify this resource")]
    Forbidden,

    #[error("Article already liked by this user")]
    DuplicateLike,

    #[error("Article not liked by this user")]
    NotLiked,

    #[error("Email already registered")]
    EmailTaken,

    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Machine-readable code for the wire (`{ message, code }` error body).
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::NotFound { .. } => "NOT_FOUND",
            DomainError::BadId(_) => "BAD_ID",
            DomainError::Forbidden => "FORBIDDEN",
            DomainError::DuplicateLike => "DUPLICATE_LIKE",
            DomainError::NotLiked => "NOT_LIKED",
            DomainError::EmailTaken => "EMAIL_TAKEN",
            DomainError::Validation(_) => "VALIDATION_FAILED",
            DomainError::Internal(_) => "SERVER_ERROR",
        }
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),
}
