//! # Blog Shared
//!
//! Wire types shared between the API server and its clients: request and
//! response DTOs plus the `{ message, code? }` error body.

pub mod dto;
pub mod response;

pub use response::ErrorBody;
