//! Request extractors whose rejections render as `ApiError`.

use axum::extract::FromRequest;

use crate::api::error::ApiError;

/// `axum::Json` with malformed or mistyped bodies answered by a
/// `BAD_REQUEST` JSON error instead of axum's plain-text rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
