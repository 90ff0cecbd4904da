//! HTTP handlers and route configuration.

mod admin;
mod articles;
mod comments;
mod health;
mod likes;
mod portfolio;
mod users;

use actix_web::{HttpRequest, HttpResponse, web};
use uuid::Uuid;

use blog_shared::dto::{AuthorInfo, UserResponse};
use blog_shared::response::UnknownRouteBody;

use crate::middleware::error::AppError;
use crate::state::AppState;

/// Configure all application routes.
///
/// Literal segments are registered before parameterized ones
/// (`/articles/user` vs `/articles/{id}`); actix matches in registration
/// order within a scope.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health::root)).service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .route("/db-status", web::get().to(health::db_status))
            .service(
                web::scope("/users")
                    .route("/register", web::post().to(users::register))
                    .route("/login", web::post().to(users::login))
                    .route("/profile", web::put().to(users::update_profile))
                    .route("/password", web::put().to(users::change_password)),
            )
            .service(web::scope("/admin").route("/users", web::get().to(admin::list_users)))
            .service(
                web::scope("/articles")
                    .route("", web::get().to(articles::list_published))
                    .route("", web::post().to(articles::create))
                    .route("/user", web::get().to(articles::list_own))
                    .route("/{id}", web::get().to(articles::get_one))
                    .route("/{id}", web::put().to(articles::update))
                    .route("/{id}", web::delete().to(articles::delete))
                    .route("/{id}/like", web::post().to(likes::like))
                    .route("/{id}/like", web::delete().to(likes::unlike))
                    .route("/{id}/likes", web::get().to(likes::status))
                    .route("/{id}/comments", web::get().to(comments::list))
                    .route("/{id}/comments", web::post().to(comments::create))
                    .route(
                        "/{article_id}/comments/{comment_id}",
                        web::put().to(comments::update),
                    )
                    .route(
                        "/{article_id}/comments/{comment_id}",
                        web::delete().to(comments::delete),
                    ),
            )
            .service(
                web::scope("/portfolio")
                    .route("", web::get().to(portfolio::list))
                    .route("", web::post().to(portfolio::create))
                    .route("/user", web::get().to(portfolio::list_own))
                    .route("/{id}", web::get().to(portfolio::get_one))
                    .route("/{id}", web::put().to(portfolio::update))
                    .route("/{id}", web::delete().to(portfolio::delete)),
            ),
    );
}

/// Catch-all for unknown routes: 404 plus the known endpoint set.
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    tracing::debug!(path = %req.path(), method = %req.method(), "Route not found");
    HttpResponse::NotFound().json(UnknownRouteBody {
        message: "API endpoint not found".to_string(),
        path: req.path().to_string(),
        method: req.method().to_string(),
        available_endpoints: vec![
            "GET /",
            "GET /api/health",
            "GET /api/db-status",
            "POST /api/users/register",
            "POST /api/users/login",
            "PUT /api/users/profile",
            "PUT /api/users/password",
            "GET /api/articles",
            "GET /api/articles/user",
            "GET /api/articles/:id",
            "POST /api/articles",
            "PUT /api/articles/:id",
            "DELETE /api/articles/:id",
            "POST /api/articles/:id/like",
            "DELETE /api/articles/:id/like",
            "GET /api/articles/:id/likes",
            "GET /api/articles/:id/comments",
            "POST /api/articles/:id/comments",
            "PUT /api/articles/:articleId/comments/:commentId",
            "DELETE /api/articles/:articleId/comments/:commentId",
            "GET /api/portfolio",
            "GET /api/portfolio/user",
            "GET /api/portfolio/:id",
            "POST /api/portfolio",
            "PUT /api/portfolio/:id",
            "DELETE /api/portfolio/:id",
            "GET /api/admin/users",
        ],
    })
}

/// Parse a path id; anything that is not a well-formed UUID is a 400, not
/// a 404.
pub(crate) fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::BadId)
}

pub(crate) fn user_response(user: &blog_core::domain::User) -> UserResponse {
    UserResponse {
        id: user.id,
        name: user.name.clone(),
        email: user.email.clone(),
        role: user.role.as_str().to_string(),
        avatar: user.avatar.clone(),
        bio: user.bio.clone(),
        created_at: user.created_at,
    }
}

/// Load the denormalized public author fields attached to every entity
/// response.
pub(crate) async fn author_info(state: &AppState, author_id: Uuid) -> Result<AuthorInfo, AppError> {
    let author = state
        .users
        .find_by_id(author_id)
        .await?
        .ok_or_else(|| AppError::Internal(format!("author {author_id} missing")))?;

    Ok(AuthorInfo {
        id: author.id,
        name: author.name,
        email: author.email,
    })
}
