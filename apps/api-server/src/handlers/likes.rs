//! Like handlers. Duplicate protection is two-layered: a pre-check for the
//! common case, the unique (article, user) constraint for concurrent racers.

use actix_web::{HttpResponse, web};

use blog_core::domain::Like;
use blog_core::error::RepoError;
use blog_shared::dto::{LikeActionResponse, LikeStatusResponse};

use super::parse_id;
use crate::middleware::auth::{Identity, OptionalIdentity};
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

async fn require_article(state: &AppState, id: uuid::Uuid) -> Result<(), AppError> {
    state
        .articles
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound { what: "Article" })?;
    Ok(())
}

/// POST /api/articles/{id}/like
pub async fn like(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let article_id = parse_id(&path)?;
    require_article(&state, article_id).await?;

    if state
        .likes
        .find_by_pair(article_id, identity.user.id)
        .await?
        .is_some()
    {
        return Err(AppError::DuplicateLike);
    }

    match state
        .likes
        .insert(Like::new(article_id, identity.user.id))
        .await
    {
        Ok(_) => {}
        Err(RepoError::UniqueViolation(_)) => return Err(AppError::DuplicateLike),
        Err(e) => return Err(e.into()),
    }

    let likes = state.likes.count_by_article(article_id).await?;
    Ok(HttpResponse::Ok().json(LikeActionResponse {
        message: "Article liked".to_string(),
        likes,
        is_liked: true,
    }))
}

/// DELETE /api/articles/{id}/like
pub async fn unlike(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let article_id = parse_id(&path)?;
    require_article(&state, article_id).await?;

    let removed = state
        .likes
        .delete_by_pair(article_id, identity.user.id)
        .await?;
    if !removed {
        return Err(AppError::NotLiked);
    }

    let likes = state.likes.count_by_article(article_id).await?;
    Ok(HttpResponse::Ok().json(LikeActionResponse {
        message: "Like removed".to_string(),
        likes,
        is_liked: false,
    }))
}

/// GET /api/articles/{id}/likes
///
/// `is_liked` is false for anonymous callers; a bad token degrades to
/// anonymous rather than failing the request.
pub async fn status(
    state: web::Data<AppState>,
    identity: OptionalIdentity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let article_id = parse_id(&path)?;
    require_article(&state, article_id).await?;

    let count = state.likes.count_by_article(article_id).await?;
    let is_liked = match identity.0 {
        Some(principal) => state
            .likes
            .find_by_pair(article_id, principal.id)
            .await?
            .is_some(),
        None => false,
    };

    Ok(HttpResponse::Ok().json(LikeStatusResponse { count, is_liked }))
}
