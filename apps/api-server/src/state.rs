//! Application state - shared across all handlers.

use std::sync::Arc;

use sea_orm::DbConn;

use blog_core::ports::{
    ArticleRepository, CommentRepository, LikeRepository, PasswordService, PortfolioRepository,
    TokenService, UserRepository,
};
use blog_infra::auth::{Argon2PasswordService, JwtTokenService};
use blog_infra::database::{
    self, DatabaseConfig, PgArticleRepository, PgCommentRepository, PgLikeRepository,
    PgPortfolioRepository, PgUserRepository,
};

/// Shared application state: one repository handle per collection plus the
/// token and password services. Everything is behind `Arc`, so cloning per
/// worker is cheap.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DbConn>,
    pub started_at: chrono::DateTime<chrono::Utc>,
    pub users: Arc<dyn UserRepository>,
    pub articles: Arc<dyn ArticleRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub likes: Arc<dyn LikeRepository>,
    pub portfolio: Arc<dyn PortfolioRepository>,
    pub tokens: Arc<dyn TokenService>,
    pub passwords: Arc<dyn PasswordService>,
}

impl AppState {
    /// Connect the pool and build the repositories. Fails fast when the
    /// database is unreachable.
    pub async fn new(config: &DatabaseConfig) -> Result<Self, sea_orm::DbErr> {
        let db = Arc::new(database::connect(config).await?);

        let state = Self {
            started_at: chrono::Utc::now(),
            users: Arc::new(PgUserRepository::new(db.clone())),
            articles: Arc::new(PgArticleRepository::new(db.clone())),
            comments: Arc::new(PgCommentRepository::new(db.clone())),
            likes: Arc::new(PgLikeRepository::new(db.clone())),
            portfolio: Arc::new(PgPortfolioRepository::new(db.clone())),
            tokens: Arc::new(JwtTokenService::from_env()),
            passwords: Arc::new(Argon2PasswordService::new()),
            db,
        };

        tracing::info!("Application state initialized");
        Ok(state)
    }

    /// Liveness of the underlying connection, for the health endpoints.
    pub async fn db_connected(&self) -> bool {
        self.db.ping().await.is_ok()
    }
}
