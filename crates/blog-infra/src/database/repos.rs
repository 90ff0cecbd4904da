//! PostgreSQL repository implementations.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, SqlErr,
};
use uuid::Uuid;

use blog_core::domain::{Article, ArticleStatus, Comment, CommentStatus, Like, LikeKind,
    PortfolioItem, User};
use blog_core::error::RepoError;
use blog_core::ports::{
    ArticleRepository, CommentRepository, LikeRepository, PortfolioRepository, UserRepository,
};

use super::entity::article::{self, Entity as ArticleEntity};
use super::entity::comment::{self, Entity as CommentEntity};
use super::entity::like::{self, Entity as LikeEntity};
use super::entity::portfolio::{self, Entity as PortfolioEntity};
use super::entity::user::{self, Entity as UserEntity};

/// Map a driver error, surfacing unique-constraint violations distinctly so
/// handlers can translate the concurrent duplicate-insert path into the same
/// rejection as the pre-check path.
fn map_db_err(e: DbErr) -> RepoError {
    classify_db_err(e.sql_err(), e)
}

pub(super) fn classify_db_err(sql_err: Option<SqlErr>, e: DbErr) -> RepoError {
    match sql_err {
        Some(SqlErr::UniqueConstraintViolation(msg)) => RepoError::UniqueViolation(msg),
        _ if matches!(e, DbErr::RecordNotUpdated) => RepoError::NotFound,
        _ => RepoError::Query(e.to_string()),
    }
}

fn into_domain<M, T>(model: M) -> Result<T, RepoError>
where
    T: TryFrom<M, Error = String>,
{
    T::try_from(model).map_err(RepoError::Query)
}

fn into_domain_opt<M, T>(model: Option<M>) -> Result<Option<T>, RepoError>
where
    T: TryFrom<M, Error = String>,
{
    model.map(into_domain).transpose()
}

fn into_domain_vec<M, T>(models: Vec<M>) -> Result<Vec<T>, RepoError>
where
    T: TryFrom<M, Error = String>,
{
    models.into_iter().map(into_domain).collect()
}

/// PostgreSQL user repository.
pub struct PgUserRepository {
    db: Arc<DbConn>,
}

impl PgUserRepository {
    pub fn new(db: Arc<DbConn>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        let result = UserEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;
        into_domain_opt(result)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        // Mask email for logging to avoid PII in logs
        let masked = if let Some(at_pos) = email.find('@') {
            let (local, domain) = email.split_at(at_pos);
            let masked_local = if local.len() > 1 {
                format!("{}***", &local[..1])
            } else {
                "***".to_string()
            };
            format!("{}{}", masked_local, domain)
        } else {
            "***".to_string()
        };
        tracing::debug!(user_email = %masked, "Finding user by email");

        // Stored emails are lowercased, so a lowercased probe is a
        // case-insensitive match.
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email.trim().to_lowercase()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;
        into_domain_opt(result)
    }

    async fn find_all(&self) -> Result<Vec<User>, RepoError> {
        let result = UserEntity::find()
            .order_by_desc(user::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;
        into_domain_vec(result)
    }

    async fn insert(&self, u: User) -> Result<User, RepoError> {
        let model = user::ActiveModel::from(u)
            .insert(&*self.db)
            .await
            .map_err(map_db_err)?;
        into_domain(model)
    }

    async fn update(&self, u: User) -> Result<User, RepoError> {
        let model = user::ActiveModel::from(u)
            .update(&*self.db)
            .await
            .map_err(map_db_err)?;
        into_domain(model)
    }
}

/// PostgreSQL article repository.
pub struct PgArticleRepository {
    db: Arc<DbConn>,
}

impl PgArticleRepository {
    pub fn new(db: Arc<DbConn>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ArticleRepository for PgArticleRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Article>, RepoError> {
        let result = ArticleEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;
        into_domain_opt(result)
    }

    async fn find_published(&self, limit: u64) -> Result<Vec<Article>, RepoError> {
        let result = ArticleEntity::find()
            .filter(article::Column::Status.eq(ArticleStatus::Published.as_str()))
            .order_by_desc(article::Column::CreatedAt)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;
        into_domain_vec(result)
    }

    async fn find_by_author(&self, author_id: Uuid) -> Result<Vec<Article>, RepoError> {
        let result = ArticleEntity::find()
            .filter(article::Column::AuthorId.eq(author_id))
            .order_by_desc(article::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;
        into_domain_vec(result)
    }

    async fn insert(&self, a: Article) -> Result<Article, RepoError> {
        let model = article::ActiveModel::from(a)
            .insert(&*self.db)
            .await
            .map_err(map_db_err)?;
        into_domain(model)
    }

    async fn update(&self, a: Article) -> Result<Article, RepoError> {
        let model = article::ActiveModel::from(a)
            .update(&*self.db)
            .await
            .map_err(map_db_err)?;
        into_domain(model)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let result = ArticleEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}

/// PostgreSQL comment repository.
pub struct PgCommentRepository {
    db: Arc<DbConn>,
}

impl PgCommentRepository {
    pub fn new(db: Arc<DbConn>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Comment>, RepoError> {
        let result = CommentEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;
        into_domain_opt(result)
    }

    async fn find_active_by_article(&self, article_id: Uuid) -> Result<Vec<Comment>, RepoError> {
        let result = CommentEntity::find()
            .filter(comment::Column::ArticleId.eq(article_id))
            .filter(comment::Column::Status.eq(CommentStatus::Active.as_str()))
            .order_by_desc(comment::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;
        into_domain_vec(result)
    }

    async fn count_by_article(&self, article_id: Uuid) -> Result<u64, RepoError> {
        CommentEntity::find()
            .filter(comment::Column::ArticleId.eq(article_id))
            .count(&*self.db)
            .await
            .map_err(map_db_err)
    }

    async fn count_replies(&self, comment_id: Uuid) -> Result<u64, RepoError> {
        CommentEntity::find()
            .filter(comment::Column::ParentCommentId.eq(comment_id))
            .count(&*self.db)
            .await
            .map_err(map_db_err)
    }

    async fn insert(&self, c: Comment) -> Result<Comment, RepoError> {
        let model = comment::ActiveModel::from(c)
            .insert(&*self.db)
            .await
            .map_err(map_db_err)?;
        into_domain(model)
    }

    async fn update(&self, c: Comment) -> Result<Comment, RepoError> {
        let model = comment::ActiveModel::from(c)
            .update(&*self.db)
            .await
            .map_err(map_db_err)?;
        into_domain(model)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let result = CommentEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }

    async fn delete_by_article(&self, article_id: Uuid) -> Result<u64, RepoError> {
        let result = CommentEntity::delete_many()
            .filter(comment::Column::ArticleId.eq(article_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(result.rows_affected)
    }
}

/// PostgreSQL like repository.
pub struct PgLikeRepository {
    db: Arc<DbConn>,
}

impl PgLikeRepository {
    pub fn new(db: Arc<DbConn>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LikeRepository for PgLikeRepository {
    async fn find_by_pair(
        &self,
        article_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Like>, RepoError> {
        let result = LikeEntity::find()
            .filter(like::Column::ArticleId.eq(article_id))
            .filter(like::Column::UserId.eq(user_id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;
        into_domain_opt(result)
    }

    async fn count_by_article(&self, article_id: Uuid) -> Result<u64, RepoError> {
        LikeEntity::find()
            .filter(like::Column::ArticleId.eq(article_id))
            .filter(like::Column::Kind.eq(LikeKind::Like.as_str()))
            .count(&*self.db)
            .await
            .map_err(map_db_err)
    }

    async fn insert(&self, l: Like) -> Result<Like, RepoError> {
        let model = like::ActiveModel::from(l)
            .insert(&*self.db)
            .await
            .map_err(map_db_err)?;
        into_domain(model)
    }

    async fn delete_by_pair(&self, article_id: Uuid, user_id: Uuid) -> Result<bool, RepoError> {
        let result = LikeEntity::delete_many()
            .filter(like::Column::ArticleId.eq(article_id))
            .filter(like::Column::UserId.eq(user_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(result.rows_affected > 0)
    }

    async fn delete_by_article(&self, article_id: Uuid) -> Result<u64, RepoError> {
        let result = LikeEntity::delete_many()
            .filter(like::Column::ArticleId.eq(article_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(result.rows_affected)
    }
}

/// PostgreSQL portfolio repository.
pub struct PgPortfolioRepository {
    db: Arc<DbConn>,
}

impl PgPortfolioRepository {
    pub fn new(db: Arc<DbConn>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PortfolioRepository for PgPortfolioRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<PortfolioItem>, RepoError> {
        let result = PortfolioEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;
        into_domain_opt(result)
    }

    async fn find_all(&self) -> Result<Vec<PortfolioItem>, RepoError> {
        let result = PortfolioEntity::find()
            .order_by_desc(portfolio::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;
        into_domain_vec(result)
    }

    async fn find_by_author(&self, author_id: Uuid) -> Result<Vec<PortfolioItem>, RepoError> {
        let result = PortfolioEntity::find()
            .filter(portfolio::Column::AuthorId.eq(author_id))
            .order_by_desc(portfolio::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;
        into_domain_vec(result)
    }

    async fn insert(&self, item: PortfolioItem) -> Result<PortfolioItem, RepoError> {
        let model = portfolio::ActiveModel::from(item)
            .insert(&*self.db)
            .await
            .map_err(map_db_err)?;
        into_domain(model)
    }

    async fn update(&self, item: PortfolioItem) -> Result<PortfolioItem, RepoError> {
        let model = portfolio::ActiveModel::from(item)
            .update(&*self.db)
            .await
            .map_err(map_db_err)?;
        into_domain(model)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let result = PortfolioEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}
