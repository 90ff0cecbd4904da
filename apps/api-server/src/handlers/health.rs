use actix_web::{HttpResponse, web};
use serde_json::json;

use crate::state::AppState;

/// GET / - service banner with connectivity and the feature set.
pub async fn root(state: web::Data<AppState>) -> HttpResponse {
    let connected = state.db_connected().await;
    HttpResponse::Ok().json(json!({
        "status": "OK",
        "message": "Blog Platform API Server",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now(),
        "database": if connected { "connected" } else { "disconnected" },
        "features": ["Authentication", "Articles", "Portfolio", "Comments", "Likes"],
    }))
}

/// GET /api/health - liveness plus uptime and database connectivity.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let uptime = (chrono::Utc::now() - state.started_at).num_seconds();
    HttpResponse::Ok().json(json!({
        "status": "OK",
        "environment": std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string()),
        "database": state.db_connected().await,
        "uptime": uptime,
        "timestamp": chrono::Utc::now(),
    }))
}

/// GET /api/db-status - reports database connectivity without failing the
/// request when the database is down.
pub async fn db_status(state: web::Data<AppState>) -> HttpResponse {
    let connected = state.db_connected().await;
    HttpResponse::Ok().json(json!({
        "connected": connected,
        "status": if connected { "connected" } else { "disconnected" },
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::body;
    use sea_orm::{DatabaseBackend, MockDatabase};

    use blog_infra::auth::{Argon2PasswordService, JwtConfig, JwtTokenService};
    use blog_infra::database::{
        PgArticleRepository, PgCommentRepository, PgLikeRepository, PgPortfolioRepository,
        PgUserRepository,
    };

    use super::*;

    fn test_state() -> AppState {
        let db = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());
        AppState {
            started_at: chrono::Utc::now(),
            users: Arc::new(PgUserRepository::new(db.clone())),
            articles: Arc::new(PgArticleRepository::new(db.clone())),
            comments: Arc::new(PgCommentRepository::new(db.clone())),
            likes: Arc::new(PgLikeRepository::new(db.clone())),
            portfolio: Arc::new(PgPortfolioRepository::new(db.clone())),
            tokens: Arc::new(JwtTokenService::new(JwtConfig::default())),
            passwords: Arc::new(Argon2PasswordService::new()),
            db,
        }
    }

    #[actix_web::test]
    async fn root_banner_reports_status_database_and_features() {
        let resp = root(web::Data::new(test_state())).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::OK);

        let bytes = body::to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["status"], "OK");
        assert_eq!(json["database"], "connected");
        let features = json["features"].as_array().unwrap();
        assert!(features.contains(&serde_json::json!("Articles")));
        assert!(features.contains(&serde_json::json!("Likes")));
    }
}
