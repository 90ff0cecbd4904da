//! Authentication and authorization ports.

use uuid::Uuid;

/// Token service trait for the stateless signed identity tokens.
///
/// Tokens carry only the user id; the principal is re-resolved from the
/// store on every request, so revocation happens through the user's
/// `is_active` flag rather than token invalidation.
pub trait TokenService: Send + Sync {
    /// Issue a signed token embedding the user id.
    fn issue(&self, user_id: Uuid) -> Result<String, AuthError>;

    /// Verify a token and extract the embedded user id.
    fn verify(&self, token: &str) -> Result<Uuid, AuthError>;

    /// Validity window in seconds, for the login/register response.
    fn expiration_seconds(&self) -> i64;
}

/// Password hashing service.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a password against a hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Authentication failures, each with a machine-readable wire code.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Authorization required")]
    NoToken,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("User not found")]
    UserNotFound,

    #[error("Account is blocked")]
    AccountBlocked,

    #[error("Admin privileges required")]
    AdminRequired,

    #[error("Hashing error: {0}")]
    Hashing(String),

    #[error("Lookup failed: {0}")]
    Lookup(String),
}

impl AuthError {
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::NoToken => "NO_TOKEN",
            AuthError::InvalidToken => "INVALID_TOKEN",
            AuthError::TokenExpired => "TOKEN_EXPIRED",
            AuthError::UserNotFound => "USER_NOT_FOUND",
            AuthError::AccountBlocked => "ACCOUNT_BLOCKED",
            AuthError::AdminRequired => "ADMIN_REQUIRED",
            AuthError::Hashing(_) | AuthError::Lookup(_) => "SERVER_ERROR",
        }
    }
}
