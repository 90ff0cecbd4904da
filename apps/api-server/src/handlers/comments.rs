//! Comment handlers. Comments are nested one level through
//! `parent_comment_id`; editing is restricted to the comment's author, while
//! deletion also extends to the article's author for moderation.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use blog_core::domain::{Article, Comment, can_delete_comment, ensure_owner};
use blog_core::validation::validate_comment;
use blog_shared::dto::{
    CommentListResponse, CommentResponse, CreateCommentRequest, UpdateCommentRequest,
};
use blog_shared::response::MessageBody;

use super::{author_info, parse_id};
use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

async fn comment_response(state: &AppState, comment: Comment) -> Result<CommentResponse, AppError> {
    let author = author_info(state, comment.author_id).await?;
    let replies_count = state.comments.count_replies(comment.id).await?;

    Ok(CommentResponse {
        id: comment.id,
        content: comment.content,
        article: comment.article_id,
        author,
        parent_comment: comment.parent_comment_id,
        status: comment.status.as_str().to_string(),
        is_edited: comment.is_edited,
        edited_at: comment.edited_at,
        replies_count,
        created_at: comment.created_at,
        updated_at: comment.updated_at,
    })
}

async fn require_article(state: &AppState, id: Uuid) -> Result<Article, AppError> {
    state
        .articles
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound { what: "Article" })
}

/// GET /api/articles/{id}/comments
pub async fn list(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let article_id = parse_id(&path)?;
    require_article(&state, article_id).await?;

    let comments = state.comments.find_active_by_article(article_id).await?;
    let mut out = Vec::with_capacity(comments.len());
    for comment in comments {
        out.push(comment_response(&state, comment).await?);
    }
    Ok(HttpResponse::Ok().json(CommentListResponse { comments: out }))
}

/// POST /api/articles/{id}/comments
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
    body: web::Json<CreateCommentRequest>,
) -> AppResult<HttpResponse> {
    let article_id = parse_id(&path)?;
    let body = body.into_inner();
    validate_comment(&body.content)?;
    require_article(&state, article_id).await?;

    // A reply's parent must exist and sit under the same article.
    if let Some(parent_id) = body.parent_comment {
        let parent = state
            .comments
            .find_by_id(parent_id)
            .await?
            .ok_or(AppError::NotFound { what: "Comment" })?;
        if parent.article_id != article_id {
            return Err(AppError::BadRequest(
                "Parent comment belongs to a different article".to_string(),
            ));
        }
    }

    let comment = Comment::new(article_id, identity.user.id, body.content, body.parent_comment);
    let comment = state.comments.insert(comment).await?;

    tracing::info!(comment_id = %comment.id, article_id = %article_id, "Comment created");

    Ok(HttpResponse::Created().json(comment_response(&state, comment).await?))
}

/// PUT /api/articles/{article_id}/comments/{comment_id}
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<(String, String)>,
    body: web::Json<UpdateCommentRequest>,
) -> AppResult<HttpResponse> {
    let (raw_article, raw_comment) = path.into_inner();
    let article_id = parse_id(&raw_article)?;
    let comment_id = parse_id(&raw_comment)?;
    let body = body.into_inner();
    validate_comment(&body.content)?;

    let mut comment = state
        .comments
        .find_by_id(comment_id)
        .await?
        .ok_or(AppError::NotFound { what: "Comment" })?;
    if comment.article_id != article_id {
        return Err(AppError::BadRequest(
            "Comment does not belong to this article".to_string(),
        ));
    }
    ensure_owner(comment.author_id, identity.user.id)?;

    comment.edit(body.content);
    comment.updated_at = chrono::Utc::now();
    let comment = state.comments.update(comment).await?;

    Ok(HttpResponse::Ok().json(comment_response(&state, comment).await?))
}

/// DELETE /api/articles/{article_id}/comments/{comment_id}
pub async fn delete(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<(String, String)>,
) -> AppResult<HttpResponse> {
    let (raw_article, raw_comment) = path.into_inner();
    let article_id = parse_id(&raw_article)?;
    let comment_id = parse_id(&raw_comment)?;

    let comment = state
        .comments
        .find_by_id(comment_id)
        .await?
        .ok_or(AppError::NotFound { what: "Comment" })?;
    if comment.article_id != article_id {
        return Err(AppError::BadRequest(
            "Comment does not belong to this article".to_string(),
        ));
    }

    let article = require_article(&state, article_id).await?;
    if !can_delete_comment(comment.author_id, article.author_id, identity.user.id) {
        return Err(AppError::Forbidden);
    }

    state.comments.delete(comment_id).await?;

    tracing::info!(comment_id = %comment_id, "Comment deleted");

    Ok(HttpResponse::Ok().json(MessageBody::new("Comment deleted successfully")))
}
