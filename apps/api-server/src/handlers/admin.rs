//! Admin-only handlers.

use actix_web::{HttpResponse, web};
use serde_json::json;

use super::user_response;
use crate::middleware::auth::AdminIdentity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/admin/users
pub async fn list_users(
    state: web::Data<AppState>,
    _admin: AdminIdentity,
) -> AppResult<HttpResponse> {
    let users = state.users.find_all().await?;
    let users: Vec<_> = users.iter().map(user_response).collect();
    Ok(HttpResponse::Ok().json(json!({ "users": users, "total": users.len() })))
}
