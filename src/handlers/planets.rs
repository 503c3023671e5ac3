use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use crate::app::AppState;
use crate::database::models::{Planet, PlanetInput};
use crate::middleware::{ApiResponse, ApiResult};

/// GET /planets
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Planet>> {
    let rows = state.catalog().list_planets().await?;
    Ok(ApiResponse::success(rows))
}

/// GET /planets/:id
pub async fn get(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Planet> {
    let row = state.catalog().get_planet(id).await?;
    Ok(ApiResponse::success(row))
}

/// POST /planet (also accepted on /planets)
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<PlanetInput>, JsonRejection>,
) -> ApiResult<Planet> {
    let Json(input) = payload?;
    let row = state.catalog().create_planet(input).await?;
    Ok(ApiResponse::created(row))
}
