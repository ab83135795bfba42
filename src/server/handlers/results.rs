use axum::{extract::State, http::StatusCode, response::Json};
use sea_orm::{ConnectionTrait, Statement};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{error, info, warn};

use crate::record;
use crate::server::app::AppState;

use super::{bad_request, ApiError};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveResultsRequest {
    #[serde(default)]
    pub data_string: Option<String>,
}

/// Results ingestion: decode the positional data string and insert it as one
/// row. The INSERT always names all 53 columns but binds one placeholder per
/// decoded segment, so a malformed segment count is rejected by the store,
/// not silently truncated here.
pub async fn save_results(
    State(state): State<AppState>,
    Json(payload): Json<SaveResultsRequest>,
) -> Result<Json<Value>, ApiError> {
    let raw = match payload.data_string.as_deref() {
        Some(value) if !value.is_empty() => value,
        _ => {
            error!("No dataString received");
            return Err(bad_request("Missing dataString"));
        }
    };

    let values = record::decode(raw);

    info!("Final combined data string received: {}", raw);
    info!("Total segments in string: {}", values.len());

    if values.len() != record::FIELD_COUNT {
        warn!(
            "Expected {} columns, got {}. Please check the order.",
            record::FIELD_COUNT,
            values.len()
        );
    }

    let placeholders = vec!["?"; values.len()].join(", ");
    let sql = format!(
        "INSERT INTO user_data ({}) VALUES ({})",
        record::COLUMNS.join(", "),
        placeholders
    );

    let stmt = Statement::from_sql_and_values(
        state.db.get_database_backend(),
        sql.as_str(),
        values.into_iter().map(sea_orm::Value::from),
    );

    let result = state.db.execute(stmt).await.map_err(|err| {
        error!("DB error saving results: {}", err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "Database insert failed",
                "detail": err.to_string()
            })),
        )
    })?;

    let inserted_id = result.last_insert_id();
    info!("Data inserted successfully, row id {}", inserted_id);

    Ok(Json(json!({ "success": true, "insertedId": inserted_id })))
}
