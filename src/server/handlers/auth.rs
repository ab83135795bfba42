use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;

use super::{bad_request, present, ApiError};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub surname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub accepted: Option<bool>,
}

/// Consent step. Nothing is persisted; a successful call only allocates the
/// opaque identifier the client threads through the rest of the flow.
pub async fn login(Json(payload): Json<LoginRequest>) -> Result<Json<Value>, ApiError> {
    if !present(&payload.name)
        || !present(&payload.surname)
        || !present(&payload.email)
        || !payload.accepted.unwrap_or(false)
    {
        return Err(bad_request("Missing required fields"));
    }

    let user_id = Uuid::new_v4().to_string();
    info!(
        "User logged in: {} {} ({}) with id {}",
        payload.name.as_deref().unwrap_or(""),
        payload.surname.as_deref().unwrap_or(""),
        payload.email.as_deref().unwrap_or(""),
        user_id
    );

    Ok(Json(json!({ "userId": user_id })))
}
