//! Domain entities - the core business objects.

mod article;
mod comment;
mod like;
mod ownership;
mod portfolio;
mod slug;
mod user;

pub use article::{Article, ArticleCategory, ArticleStatus};
pub use comment::{Comment, CommentStatus};
pub use like::{Like, LikeKind};
pub use ownership::{can_delete_comment, ensure_owner};
pub use portfolio::{PortfolioCategory, PortfolioItem, PortfolioLinks, PortfolioStatus};
pub use slug::{reading_time, slugify};
pub use user::{Role, User};
