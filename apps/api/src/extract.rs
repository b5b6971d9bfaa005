use axum::extract::FromRequest;

use crate::errors::AppError;

/// `axum::Json` whose rejections become `AppError::Validation`, so malformed
/// bodies get the same `{error, code, field}` shape as range checks.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
