use std::sync::Arc;

use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, SqlErr};
use uuid::Uuid;

use blog_core::domain::{Article, User};
use blog_core::error::RepoError;
use blog_core::ports::{ArticleRepository, LikeRepository, UserRepository};

use super::entity::{article, user};
use super::repos::{PgArticleRepository, PgLikeRepository, PgUserRepository, classify_db_err};

fn user_model(email: &str) -> user::Model {
    let now = chrono::Utc::now();
    user::Model {
        id: Uuid::new_v4(),
        name: "Ana".to_owned(),
        email: email.to_owned(),
        password_hash: "hash".to_owned(),
        role: "user".to_owned(),
        avatar: None,
        bio: None,
        is_active: true,
        last_login: None,
        created_at: now.into(),
        updated_at: now.into(),
    }
}

#[tokio::test]
async fn find_article_by_id_maps_to_domain() {
    let article_id = Uuid::new_v4();
    let author_id = Uuid::new_v4();
    let now = chrono::Utc::now();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![article::Model {
            id: article_id,
            title: "Test Article".to_owned(),
            content: "Content".to_owned(),
            description: None,
            image: None,
            category: "Backend".to_owned(),
            author_id,
            status: "published".to_owned(),
            tags: serde_json::json!(["rust"]),
            reading_time: 1,
            slug: Some("test-article".to_owned()),
            created_at: now.into(),
            updated_at: now.into(),
        }]])
        .into_connection();

    let repo = PgArticleRepository::new(Arc::new(db));

    let result: Option<Article> = repo.find_by_id(article_id).await.unwrap();

    let found = result.unwrap();
    assert_eq!(found.title, "Test Article");
    assert_eq!(found.id, article_id);
    assert_eq!(found.author_id, author_id);
    assert_eq!(found.tags, vec!["rust"]);
    assert_eq!(found.slug.as_deref(), Some("test-article"));
}

#[tokio::test]
async fn stored_enum_outside_closed_set_is_a_query_error() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![{
            let mut m = user_model("ana@x.com");
            m.role = "superuser".to_owned();
            m
        }]])
        .into_connection();

    let repo = PgUserRepository::new(Arc::new(db));

    let result = repo.find_by_id(Uuid::new_v4()).await;
    assert!(matches!(result, Err(RepoError::Query(_))));
}

#[tokio::test]
async fn find_by_email_returns_stored_user() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![user_model("ana@x.com")]])
        .into_connection();

    let repo = PgUserRepository::new(Arc::new(db));

    // Probe with mixed case; the repository lowercases before querying.
    let result: Option<User> = repo.find_by_email("Ana@X.com").await.unwrap();
    assert_eq!(result.unwrap().email, "ana@x.com");
}

#[tokio::test]
async fn delete_missing_article_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = PgArticleRepository::new(Arc::new(db));

    let result = repo.delete(Uuid::new_v4()).await;
    assert!(matches!(result, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn unlike_without_like_reports_false() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = PgLikeRepository::new(Arc::new(db));

    let removed = repo
        .delete_by_pair(Uuid::new_v4(), Uuid::new_v4())
        .await
        .unwrap();
    assert!(!removed);
}

#[test]
fn unique_violation_maps_to_its_own_variant() {
    // The concurrent double-like / duplicate-registration path: the driver
    // reports a unique-constraint breach, which must stay distinguishable
    // from a plain query failure so handlers can reject it as a duplicate.
    let result = classify_db_err(
        Some(SqlErr::UniqueConstraintViolation(
            "duplicate key value violates unique constraint \"idx_likes_article_user\""
                .to_owned(),
        )),
        DbErr::Custom("constraint".to_owned()),
    );
    assert!(matches!(result, RepoError::UniqueViolation(msg)
        if msg.contains("idx_likes_article_user")));
}

#[test]
fn record_not_updated_maps_to_not_found() {
    let result = classify_db_err(None, DbErr::RecordNotUpdated);
    assert!(matches!(result, RepoError::NotFound));
}

#[test]
fn other_driver_errors_map_to_query() {
    let result = classify_db_err(None, DbErr::Custom("connection reset".to_owned()));
    assert!(matches!(result, RepoError::Query(_)));
}

#[tokio::test]
async fn cascade_steps_report_rows_affected() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 3,
        }])
        .into_connection();

    let repo = PgLikeRepository::new(Arc::new(db));

    let removed = repo.delete_by_article(Uuid::new_v4()).await.unwrap();
    assert_eq!(removed, 3);
}
