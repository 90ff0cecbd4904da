//! PostgreSQL persistence via SeaORM.

mod connections;
pub mod entity;
mod repos;

pub use connections::{DatabaseConfig, connect};
pub use repos::{
    PgArticleRepository, PgCommentRepository, PgLikeRepository, PgPortfolioRepository,
    PgUserRepository,
};

#[cfg(test)]
mod tests;
