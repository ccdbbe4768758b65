//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod company;
pub mod health;
pub mod invoice;

use crate::shared::error::AppError;

/// Fallback for unmatched routes
pub async fn not_found() -> AppError {
    AppError::NotFound("Not Found".into())
}
