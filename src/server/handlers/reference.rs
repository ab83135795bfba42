use axum::{extract::State, response::Json};
use sea_orm::{EntityTrait, QueryOrder};
use tracing::error;

use crate::database::entities::{fuels, industries, renewables};
use crate::server::app::AppState;

use super::{internal_error, ApiError};

/// The three reference reads. Each is a single ordered query; store errors
/// are logged with detail and reported to the caller generically.

pub async fn list_industries(
    State(state): State<AppState>,
) -> Result<Json<Vec<industries::Model>>, ApiError> {
    let rows = industries::Entity::find()
        .order_by_asc(industries::Column::Industry)
        .all(&state.db)
        .await
        .map_err(|err| {
            error!("DB error loading industries: {}", err);
            internal_error("Failed to load industries")
        })?;

    Ok(Json(rows))
}

pub async fn list_fuels(
    State(state): State<AppState>,
) -> Result<Json<Vec<fuels::Model>>, ApiError> {
    let rows = fuels::Entity::find()
        .order_by_asc(fuels::Column::Fuel)
        .all(&state.db)
        .await
        .map_err(|err| {
            error!("DB error loading fuels: {}", err);
            internal_error("Failed to load fuels")
        })?;

    Ok(Json(rows))
}

pub async fn list_renewables(
    State(state): State<AppState>,
) -> Result<Json<Vec<renewables::Model>>, ApiError> {
    let rows = renewables::Entity::find()
        .order_by_asc(renewables::Column::Renewable)
        .all(&state.db)
        .await
        .map_err(|err| {
            error!("DB error loading renewables: {}", err);
            internal_error("Failed to load renewables")
        })?;

    Ok(Json(rows))
}
