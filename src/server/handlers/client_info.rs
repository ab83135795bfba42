use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use super::{bad_request, present, ApiError};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfoRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub activities: Option<String>,
    #[serde(default)]
    pub intent: Option<String>,
}

/// Acknowledgment only: the classification fields are logged for operators
/// but there is no table for them, so nothing is written.
pub async fn record_client_info(
    Json(payload): Json<ClientInfoRequest>,
) -> Result<Json<Value>, ApiError> {
    if !present(&payload.user_id)
        || !present(&payload.industry)
        || !present(&payload.activities)
        || !present(&payload.intent)
    {
        return Err(bad_request("Missing required fields"));
    }

    info!(
        "Client info received for user {}: company={:?} industry={:?} activities={:?} intent={:?}",
        payload.user_id.as_deref().unwrap_or(""),
        payload.company_name,
        payload.industry,
        payload.activities,
        payload.intent
    );

    Ok(Json(json!({
        "success": true,
        "message": "Client info recorded"
    })))
}
