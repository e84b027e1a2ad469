//! Endpoint handlers, one module per resource.

pub mod alerts;
pub mod health;
pub mod symptoms;

use crate::api::error::ApiError;

/// Fallback for unknown routes.
pub async fn not_found() -> ApiError {
    ApiError::NotFound("Route not found".into())
}
