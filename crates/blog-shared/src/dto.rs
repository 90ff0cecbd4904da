//! Data Transfer Objects - request/response types for the API.
//!
//! Wire names are camelCase. Enum-valued fields travel as their canonical
//! strings (e.g. category "AI/ML", status "published"); the server parses
//! and validates them against the closed sets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Users

/// Request to register a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Request to login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Partial profile update; omitted fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
}

/// Password change; the current password must verify.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// A user's public fields - never the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Login/register payload: token plus the public profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

/// Envelope for the profile update response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub user: UserResponse,
}

/// Denormalized author fields attached to articles, comments and
/// portfolio items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorInfo {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

// ---------------------------------------------------------------------------
// Articles

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateArticleRequest {
    pub title: String,
    pub content: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Partial article update. Omitted fields stay untouched; `description`
/// and `image` set to an empty string are cleared.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub status: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub category: String,
    pub status: String,
    pub tags: Vec<String>,
    pub reading_time: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    pub author: AuthorInfo,
    pub likes: u64,
    pub comments_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleListResponse {
    pub articles: Vec<ArticleResponse>,
}

// ---------------------------------------------------------------------------
// Comments

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub content: String,
    pub parent_comment: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCommentRequest {
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: Uuid,
    pub content: String,
    pub article: Uuid,
    pub author: AuthorInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_comment: Option<Uuid>,
    pub status: String,
    pub is_edited: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edited_at: Option<DateTime<Utc>>,
    pub replies_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentListResponse {
    pub comments: Vec<CommentResponse>,
}

// ---------------------------------------------------------------------------
// Likes

/// Body of the like/unlike mutations: acknowledgement plus the new total.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeActionResponse {
    pub message: String,
    pub likes: u64,
    pub is_liked: bool,
}

/// Body of the like-status read: total plus the caller's own state
/// (always false for anonymous callers).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeStatusResponse {
    pub count: u64,
    pub is_liked: bool,
}

// ---------------------------------------------------------------------------
// Portfolio

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortfolioLinksDto {
    #[serde(default)]
    pub demo: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub live: String,
    #[serde(default)]
    pub documentation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePortfolioRequest {
    pub title: String,
    pub content: String,
    pub category: Option<String>,
    pub image: Option<String>,
    pub status: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub links: Option<PortfolioLinksDto>,
    pub duration: Option<String>,
    pub role: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePortfolioRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub status: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub links: Option<PortfolioLinksDto>,
    pub duration: Option<String>,
    pub role: Option<String>,
    pub features: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub category: String,
    pub status: String,
    pub author: AuthorInfo,
    pub technologies: Vec<String>,
    pub links: PortfolioLinksDto,
    pub duration: String,
    pub role: String,
    pub features: Vec<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_request_distinguishes_absent_from_empty() {
        let req: UpdateArticleRequest = serde_json::from_str(r#"{"description": ""}"#).unwrap();
        assert_eq!(req.description.as_deref(), Some(""));
        assert!(req.title.is_none());
    }

    #[test]
    fn auth_response_wire_shape() {
        let json = serde_json::to_value(AuthResponse {
            token: "t".into(),
            expires_in: 60,
            user: UserResponse {
                id: Uuid::nil(),
                name: "Ana".into(),
                email: "ana@x.com".into(),
                role: "user".into(),
                avatar: None,
                bio: None,
                created_at: Utc::now(),
            },
        })
        .unwrap();

        assert!(json.get("token").is_some());
        assert!(json.get("expiresIn").is_some());
        let user = json.get("user").unwrap();
        assert!(user.get("createdAt").is_some());
        assert!(user.get("passwordHash").is_none());
    }

    #[test]
    fn like_action_uses_camel_case() {
        let json = serde_json::to_value(LikeActionResponse {
            message: "Like added".into(),
            likes: 3,
            is_liked: true,
        })
        .unwrap();
        assert_eq!(json.get("isLiked"), Some(&serde_json::json!(true)));
    }
}
