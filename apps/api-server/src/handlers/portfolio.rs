//! Portfolio handlers. Same ownership rules as articles, but nothing
//! references portfolio items so deletion is a single step.

use std::str::FromStr;

use actix_web::{HttpResponse, web};
use serde_json::json;

use blog_core::domain::{
    PortfolioCategory, PortfolioItem, PortfolioLinks, PortfolioStatus, ensure_owner,
};
use blog_core::validation::{validate_portfolio, validate_portfolio_update};
use blog_shared::dto::{
    CreatePortfolioRequest, PortfolioLinksDto, PortfolioResponse, UpdatePortfolioRequest,
};
use blog_shared::response::MessageBody;

use super::{author_info, parse_id};
use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn links_from_dto(dto: PortfolioLinksDto) -> PortfolioLinks {
    PortfolioLinks {
        demo: dto.demo,
        github: dto.github,
        live: dto.live,
        documentation: dto.documentation,
    }
}

async fn portfolio_response(
    state: &AppState,
    item: PortfolioItem,
) -> Result<PortfolioResponse, AppError> {
    let author = author_info(state, item.author_id).await?;

    Ok(PortfolioResponse {
        id: item.id,
        title: item.title,
        content: item.content,
        image: item.image,
        category: item.category.as_str().to_string(),
        status: item.status.as_str().to_string(),
        author,
        technologies: item.technologies,
        links: PortfolioLinksDto {
            demo: item.links.demo,
            github: item.links.github,
            live: item.links.live,
            documentation: item.links.documentation,
        },
        duration: item.duration,
        role: item.role,
        features: item.features,
        tags: item.tags,
        created_at: item.created_at,
        updated_at: item.updated_at,
    })
}

async fn respond_many(state: &AppState, items: Vec<PortfolioItem>) -> AppResult<HttpResponse> {
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        out.push(portfolio_response(state, item).await?);
    }
    Ok(HttpResponse::Ok().json(json!({ "items": out })))
}

fn parse_category(raw: Option<&str>) -> Result<PortfolioCategory, AppError> {
    match raw {
        None => Ok(PortfolioCategory::Other),
        Some(s) => PortfolioCategory::from_str(s)
            .map_err(|_| AppError::BadRequest(format!("Unknown category: {s}"))),
    }
}

/// GET /api/portfolio
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let items = state.portfolio.find_all().await?;
    respond_many(&state, items).await
}

/// GET /api/portfolio/user
pub async fn list_own(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let items = state.portfolio.find_by_author(identity.user.id).await?;
    respond_many(&state, items).await
}

/// GET /api/portfolio/{id}
pub async fn get_one(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let item = state
        .portfolio
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound {
            what: "Portfolio item",
        })?;
    Ok(HttpResponse::Ok().json(portfolio_response(&state, item).await?))
}

/// POST /api/portfolio
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreatePortfolioRequest>,
) -> AppResult<HttpResponse> {
    let body = body.into_inner();
    validate_portfolio(&body.title, &body.content)?;
    let category = parse_category(body.category.as_deref())?;

    let mut item = PortfolioItem::new(identity.user.id, body.title, body.content, category);
    item.image = body.image;
    if let Some(status) = body.status {
        item.status = PortfolioStatus::from_str(&status)
            .map_err(|_| AppError::BadRequest(format!("Unknown status: {status}")))?;
    }
    item.technologies = body.technologies;
    if let Some(links) = body.links {
        item.links = links_from_dto(links);
    }
    if let Some(duration) = body.duration {
        item.duration = duration;
    }
    if let Some(role) = body.role {
        item.role = role;
    }
    item.features = body.features;
    item.tags = body.tags;

    let item = state.portfolio.insert(item).await?;

    tracing::info!(item_id = %item.id, author_id = %identity.user.id, "Portfolio item created");

    Ok(HttpResponse::Created().json(portfolio_response(&state, item).await?))
}

/// PUT /api/portfolio/{id}
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
    body: web::Json<UpdatePortfolioRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let body = body.into_inner();
    validate_portfolio_update(body.title.as_deref(), body.content.as_deref())?;

    let mut item = state
        .portfolio
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound {
            what: "Portfolio item",
        })?;
    ensure_owner(item.author_id, identity.user.id)?;

    if let Some(title) = body.title {
        item.title = title.trim().to_string();
    }
    if let Some(content) = body.content {
        item.content = content;
    }
    if let Some(image) = body.image {
        item.image = (!image.trim().is_empty()).then(|| image.trim().to_string());
    }
    if let Some(category) = body.category {
        item.category = parse_category(Some(&category))?;
    }
    if let Some(status) = body.status {
        item.status = PortfolioStatus::from_str(&status)
            .map_err(|_| AppError::BadRequest(format!("Unknown status: {status}")))?;
    }
    if let Some(technologies) = body.technologies {
        item.technologies = technologies;
    }
    if let Some(links) = body.links {
        item.links = links_from_dto(links);
    }
    if let Some(duration) = body.duration {
        item.duration = duration;
    }
    if let Some(role) = body.role {
        item.role = role;
    }
    if let Some(features) = body.features {
        item.features = features;
    }
    if let Some(tags) = body.tags {
        item.tags = tags;
    }
    item.updated_at = chrono::Utc::now();

    let item = state.portfolio.update(item).await?;
    Ok(HttpResponse::Ok().json(portfolio_response(&state, item).await?))
}

/// DELETE /api/portfolio/{id}
pub async fn delete(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let item = state
        .portfolio
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound {
            what: "Portfolio item",
        })?;
    ensure_owner(item.author_id, identity.user.id)?;

    state.portfolio.delete(id).await?;

    tracing::info!(item_id = %id, "Portfolio item deleted");

    Ok(HttpResponse::Ok().json(MessageBody::new("Portfolio item deleted successfully")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_category_defaults_to_other() {
        assert_eq!(parse_category(None).unwrap(), PortfolioCategory::Other);
    }

    #[test]
    fn unknown_category_is_rejected() {
        let result = parse_category(Some("Gardening"));
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
