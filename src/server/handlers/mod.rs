pub mod auth;
pub mod client_info;
pub mod health;
pub mod reference;
pub mod results;

use axum::{http::StatusCode, response::Json};
use serde_json::{json, Value};

/// Error half of a handler result: status plus a JSON `error` body.
pub type ApiError = (StatusCode, Json<Value>);

pub fn bad_request(message: &str) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message })))
}

pub fn internal_error(message: &str) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": message })),
    )
}

/// Presence check for required request fields: set and non-blank.
pub fn present(field: &Option<String>) -> bool {
    field.as_deref().map_or(false, |value| !value.trim().is_empty())
}
