//! SeaORM entities, one per table, with conversions to and from the
//! domain types. Enum-valued columns are stored as their canonical wire
//! strings; list and map fields are JSON columns.

pub mod article;
pub mod comment;
pub mod like;
pub mod portfolio;
pub mod user;
