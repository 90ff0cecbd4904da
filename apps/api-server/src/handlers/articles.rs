//! Article CRUD. Responses carry the author's public fields plus live like
//! and comment counts; deletion cascades over comments and likes.

use std::str::FromStr;

use actix_web::{HttpResponse, web};

use blog_core::domain::{Article, ArticleCategory, ArticleStatus, ensure_owner};
use blog_core::validation::{validate_article, validate_article_update};
use blog_shared::dto::{
    ArticleListResponse, ArticleResponse, CreateArticleRequest, UpdateArticleRequest,
};
use blog_shared::response::MessageBody;

use super::{author_info, parse_id};
use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Listing cap; there is no pagination beyond it.
const LIST_LIMIT: u64 = 50;

/// Assemble the wire shape for one article: author public fields plus live
/// counts read at response time.
pub(crate) async fn article_response(
    state: &AppState,
    article: Article,
) -> Result<ArticleResponse, AppError> {
    let author = author_info(state, article.author_id).await?;
    let likes = state.likes.count_by_article(article.id).await?;
    let comments_count = state.comments.count_by_article(article.id).await?;

    Ok(ArticleResponse {
        id: article.id,
        title: article.title,
        content: article.content,
        description: article.description,
        image: article.image,
        category: article.category.as_str().to_string(),
        status: article.status.as_str().to_string(),
        tags: article.tags,
        reading_time: article.reading_time,
        slug: article.slug,
        author,
        likes,
        comments_count,
        created_at: article.created_at,
        updated_at: article.updated_at,
    })
}

async fn respond_many(state: &AppState, articles: Vec<Article>) -> AppResult<HttpResponse> {
    let mut out = Vec::with_capacity(articles.len());
    for article in articles {
        out.push(article_response(state, article).await?);
    }
    Ok(HttpResponse::Ok().json(ArticleListResponse { articles: out }))
}

fn parse_category(raw: Option<&str>) -> Result<ArticleCategory, AppError> {
    match raw {
        None => Ok(ArticleCategory::General),
        Some(s) => ArticleCategory::from_str(s)
            .map_err(|_| AppError::BadRequest(format!("Unknown category: {s}"))),
    }
}

/// GET /api/articles
pub async fn list_published(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let articles = state.articles.find_published(LIST_LIMIT).await?;
    respond_many(&state, articles).await
}

/// GET /api/articles/user
pub async fn list_own(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let articles = state.articles.find_by_author(identity.user.id).await?;
    respond_many(&state, articles).await
}

/// GET /api/articles/{id}
pub async fn get_one(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let article = state
        .articles
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound { what: "Article" })?;
    Ok(HttpResponse::Ok().json(article_response(&state, article).await?))
}

/// POST /api/articles
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreateArticleRequest>,
) -> AppResult<HttpResponse> {
    let body = body.into_inner();
    validate_article(&body.title, &body.content, body.description.as_deref())?;
    let category = parse_category(body.category.as_deref())?;

    let article = Article::new(
        identity.user.id,
        body.title,
        body.content,
        body.description,
        category,
        body.image,
        body.tags,
    );
    let article = state.articles.insert(article).await?;

    tracing::info!(article_id = %article.id, author_id = %identity.user.id, "Article created");

    Ok(HttpResponse::Created().json(article_response(&state, article).await?))
}

/// PUT /api/articles/{id}
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
    body: web::Json<UpdateArticleRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let body = body.into_inner();
    validate_article_update(
        body.title.as_deref(),
        body.content.as_deref(),
        body.description.as_deref(),
    )?;

    let mut article = state
        .articles
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound { what: "Article" })?;
    ensure_owner(article.author_id, identity.user.id)?;

    if let Some(title) = body.title {
        article.set_title(title);
    }
    if let Some(content) = body.content {
        article.set_content(content);
    }
    // Empty string clears the optional field, absence leaves it unchanged.
    if let Some(description) = body.description {
        let d = description.trim();
        article.description = (!d.is_empty()).then(|| d.to_string());
    }
    if let Some(image) = body.image {
        article.image = (!image.trim().is_empty()).then(|| image.trim().to_string());
    }
    if let Some(category) = body.category {
        article.category = parse_category(Some(&category))?;
    }
    if let Some(status) = body.status {
        article.status = ArticleStatus::from_str(&status)
            .map_err(|_| AppError::BadRequest(format!("Unknown status: {status}")))?;
    }
    if let Some(tags) = body.tags {
        article.tags = tags.into_iter().map(|t| t.trim().to_lowercase()).collect();
    }
    article.updated_at = chrono::Utc::now();

    let article = state.articles.update(article).await?;
    Ok(HttpResponse::Ok().json(article_response(&state, article).await?))
}

/// DELETE /api/articles/{id}
///
/// Cascade order: comments, then likes, then the article itself. Any step
/// failing aborts with a server error; the request can simply be re-issued,
/// every step is idempotent.
pub async fn delete(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let article = state
        .articles
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound { what: "Article" })?;
    ensure_owner(article.author_id, identity.user.id)?;

    let comments_removed = state.comments.delete_by_article(id).await?;
    let likes_removed = state.likes.delete_by_article(id).await?;
    state.articles.delete(id).await?;

    tracing::info!(
        article_id = %id,
        comments_removed,
        likes_removed,
        "Article deleted"
    );

    Ok(HttpResponse::Ok().json(MessageBody::new("Article deleted successfully")))
}
