use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Article, Comment, Like, PortfolioItem, User};
use crate::error::RepoError;

/// User repository.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError>;

    /// Lookup by email, case-insensitive (emails are stored lowercased).
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;

    /// All users, newest first. Admin surface only.
    async fn find_all(&self) -> Result<Vec<User>, RepoError>;

    async fn insert(&self, user: User) -> Result<User, RepoError>;

    async fn update(&self, user: User) -> Result<User, RepoError>;
}

/// Article repository.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Article>, RepoError>;

    /// Published articles, newest first, capped at `limit`.
    async fn find_published(&self, limit: u64) -> Result<Vec<Article>, RepoError>;

    /// All of an author's articles regardless of status, newest first.
    async fn find_by_author(&self, author_id: Uuid) -> Result<Vec<Article>, RepoError>;

    async fn insert(&self, article: Article) -> Result<Article, RepoError>;

    async fn update(&self, article: Article) -> Result<Article, RepoError>;

    /// Delete the article itself. Dependent comments and likes are removed
    /// by the caller through their own repositories (best-effort cascade).
    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;
}

/// Comment repository.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Comment>, RepoError>;

    /// Active comments on an article, newest first.
    async fn find_active_by_article(&self, article_id: Uuid) -> Result<Vec<Comment>, RepoError>;

    /// Live count of all comments on an article.
    async fn count_by_article(&self, article_id: Uuid) -> Result<u64, RepoError>;

    /// Live count of direct replies to a comment.
    async fn count_replies(&self, comment_id: Uuid) -> Result<u64, RepoError>;

    async fn insert(&self, comment: Comment) -> Result<Comment, RepoError>;

    async fn update(&self, comment: Comment) -> Result<Comment, RepoError>;

    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;

    /// Remove every comment on an article (article-delete cascade step).
    async fn delete_by_article(&self, article_id: Uuid) -> Result<u64, RepoError>;
}

/// Like repository. The (article, user) pair is unique at the store level;
/// `insert` surfaces a concurrent duplicate as `RepoError::UniqueViolation`.
#[async_trait]
pub trait LikeRepository: Send + Sync {
    async fn find_by_pair(&self, article_id: Uuid, user_id: Uuid)
    -> Result<Option<Like>, RepoError>;

    async fn count_by_article(&self, article_id: Uuid) -> Result<u64, RepoError>;

    async fn insert(&self, like: Like) -> Result<Like, RepoError>;

    /// Delete by pair; `Ok(false)` when no like existed.
    async fn delete_by_pair(&self, article_id: Uuid, user_id: Uuid) -> Result<bool, RepoError>;

    /// Remove every like on an article (article-delete cascade step).
    async fn delete_by_article(&self, article_id: Uuid) -> Result<u64, RepoError>;
}

/// Portfolio repository.
#[async_trait]
pub trait PortfolioRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<PortfolioItem>, RepoError>;

    /// All items, newest first.
    async fn find_all(&self) -> Result<Vec<PortfolioItem>, RepoError>;

    async fn find_by_author(&self, author_id: Uuid) -> Result<Vec<PortfolioItem>, RepoError>;

    async fn insert(&self, item: PortfolioItem) -> Result<PortfolioItem, RepoError>;

    async fn update(&self, item: PortfolioItem) -> Result<PortfolioItem, RepoError>;

    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;
}
