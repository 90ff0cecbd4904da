//! Account handlers: registration, login, profile and password updates.

use actix_web::{HttpResponse, web};

use blog_core::domain::User;
use blog_core::error::RepoError;
use blog_core::validation::{
    validate_login, validate_password_change, validate_profile_update, validate_registration,
};
use blog_shared::dto::{
    AuthResponse, ChangePasswordRequest, LoginRequest, ProfileResponse, RegisterRequest,
    UpdateProfileRequest,
};
use blog_shared::response::MessageBody;

use super::user_response;
use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/users/register
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterRequest>,
) -> AppResult<HttpResponse> {
    let body = body.into_inner();
    validate_registration(&body.name, &body.email, &body.password)?;

    let email = body.email.trim().to_lowercase();
    if state.users.find_by_email(&email).await?.is_some() {
        return Err(AppError::EmailTaken);
    }

    let hash = state.passwords.hash(&body.password)?;
    let user = User::new(body.name, body.email, hash);

    // The pre-check races with concurrent registrations; the unique email
    // constraint is the authority.
    let user = match state.users.insert(user).await {
        Ok(user) => user,
        Err(RepoError::UniqueViolation(_)) => return Err(AppError::EmailTaken),
        Err(e) => return Err(e.into()),
    };

    tracing::info!(user_id = %user.id, "User registered");

    let token = state.tokens.issue(user.id)?;
    Ok(HttpResponse::Created().json(AuthResponse {
        token,
        expires_in: state.tokens.expiration_seconds(),
        user: user_response(&user),
    }))
}

/// POST /api/users/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let body = body.into_inner();
    validate_login(&body.email, &body.password)?;

    let email = body.email.trim().to_lowercase();
    // Missing user and wrong password produce the same response, so the
    // endpoint cannot be used to probe which emails are registered.
    let invalid = || AppError::BadRequest("Invalid email or password".to_string());

    let mut user = state.users.find_by_email(&email).await?.ok_or_else(invalid)?;
    if !state.passwords.verify(&body.password, &user.password_hash)? {
        return Err(invalid());
    }

    user.last_login = Some(chrono::Utc::now());
    user.updated_at = chrono::Utc::now();
    let user = state.users.update(user).await?;

    tracing::info!(user_id = %user.id, "User logged in");

    let token = state.tokens.issue(user.id)?;
    Ok(HttpResponse::Ok().json(AuthResponse {
        token,
        expires_in: state.tokens.expiration_seconds(),
        user: user_response(&user),
    }))
}

/// PUT /api/users/profile
pub async fn update_profile(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<UpdateProfileRequest>,
) -> AppResult<HttpResponse> {
    let body = body.into_inner();
    validate_profile_update(body.name.as_deref(), body.email.as_deref())?;

    let mut user = state
        .users
        .find_by_id(identity.user.id)
        .await?
        .ok_or(AppError::NotFound { what: "User" })?;

    if let Some(name) = body.name {
        user.name = name.trim().to_string();
    }
    if let Some(email) = body.email {
        let email = email.trim().to_lowercase();
        if email != user.email {
            if state.users.find_by_email(&email).await?.is_some() {
                return Err(AppError::EmailTaken);
            }
            user.email = email;
        }
    }
    // Empty string clears the optional field, absence leaves it unchanged.
    if let Some(avatar) = body.avatar {
        user.avatar = (!avatar.trim().is_empty()).then(|| avatar.trim().to_string());
    }
    if let Some(bio) = body.bio {
        user.bio = (!bio.trim().is_empty()).then(|| bio.trim().to_string());
    }
    user.updated_at = chrono::Utc::now();

    let user = match state.users.update(user).await {
        Ok(user) => user,
        Err(RepoError::UniqueViolation(_)) => return Err(AppError::EmailTaken),
        Err(e) => return Err(e.into()),
    };

    Ok(HttpResponse::Ok().json(ProfileResponse {
        user: user_response(&user),
    }))
}

/// PUT /api/users/password
pub async fn change_password(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<ChangePasswordRequest>,
) -> AppResult<HttpResponse> {
    let body = body.into_inner();
    validate_password_change(&body.current_password, &body.new_password)?;

    let mut user = state
        .users
        .find_by_id(identity.user.id)
        .await?
        .ok_or(AppError::NotFound { what: "User" })?;

    if !state
        .passwords
        .verify(&body.current_password, &user.password_hash)?
    {
        return Err(AppError::BadRequest(
            "Current password is incorrect".to_string(),
        ));
    }

    user.password_hash = state.passwords.hash(&body.new_password)?;
    user.updated_at = chrono::Utc::now();
    state.users.update(user).await?;

    tracing::info!(user_id = %identity.user.id, "Password changed");

    Ok(HttpResponse::Ok().json(MessageBody::new("Password updated successfully")))
}
