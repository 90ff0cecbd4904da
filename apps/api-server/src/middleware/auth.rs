//! Authentication extractors.
//!
//! Every authenticated request resolves its bearer token back to a stored
//! user - a token alone is never enough, so deleted or blocked accounts are
//! rejected even while their tokens are still within the validity window.

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};
use chrono::{DateTime, Utc};
use futures::future::LocalBoxFuture;

use blog_core::domain::{Role, User};
use blog_core::ports::AuthError;

use crate::middleware::error::AppError;
use crate::state::AppState;

/// The authenticated user resolved from a request's token, with the
/// password hash stripped.
#[derive(Debug, Clone)]
pub struct Principal {
    pub id: uuid::Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for Principal {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            avatar: user.avatar,
            bio: user.bio,
            created_at: user.created_at,
        }
    }
}

/// Required-auth extractor.
///
/// Use this in handlers to require authentication:
/// ```ignore
/// async fn protected_route(identity: Identity) -> impl Responder {
///     format!("Hello, {}!", identity.user.name)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Identity {
    pub user: Principal,
}

async fn resolve(req: HttpRequest) -> Result<Identity, AppError> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| {
            tracing::error!("AppState not found in app data");
            AppError::Internal("Server configuration error".to_string())
        })?
        .clone();

    // The Authorization header, with an optional "Bearer " prefix. A missing
    // header is NoToken; anything present but unverifiable is InvalidToken.
    let header_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::NoToken)?;
    let raw = header_value.to_str().map_err(|_| AuthError::InvalidToken)?;
    let token = raw.strip_prefix("Bearer ").unwrap_or(raw);

    let user_id = state.tokens.verify(token)?;

    let user = state
        .users
        .find_by_id(user_id)
        .await
        .map_err(|e| AuthError::Lookup(e.to_string()))?
        .ok_or(AuthError::UserNotFound)?;

    if !user.is_active {
        return Err(AuthError::AccountBlocked.into());
    }

    Ok(Identity {
        user: Principal::from(user),
    })
}

impl FromRequest for Identity {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(resolve(req))
    }
}

/// Optional-auth extractor - any resolution failure leaves the request
/// anonymous instead of rejecting it.
pub struct OptionalIdentity(pub Option<Principal>);

impl FromRequest for OptionalIdentity {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            Ok(OptionalIdentity(
                resolve(req).await.ok().map(|identity| identity.user),
            ))
        })
    }
}

/// Privilege-elevation extractor: full authentication plus the admin role.
pub struct AdminIdentity {
    pub user: Principal,
}

impl FromRequest for AdminIdentity {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            let identity = resolve(req).await?;
            if identity.user.role != Role::Admin {
                return Err(AuthError::AdminRequired.into());
            }
            Ok(AdminIdentity {
                user: identity.user,
            })
        })
    }
}
