//! # Blog Infra
//!
//! Infrastructure implementations of the blog-core ports: PostgreSQL
//! repositories via SeaORM, the JWT token service and the Argon2 password
//! service.

pub mod auth;
pub mod database;
