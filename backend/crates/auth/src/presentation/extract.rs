//! Request Extractors

use axum::extract::FromRequest;

use crate::error::AuthError;

/// JSON body whose rejections render as `{"error": ...}` like every other
/// auth failure
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AuthError))]
pub struct JsonBody<T>(pub T);
