use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use crate::app::AppState;
use crate::database::models::{Vehicle, VehicleInput};
use crate::middleware::{ApiResponse, ApiResult};

/// GET /vehicles
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Vehicle>> {
    let rows = state.catalog().list_vehicles().await?;
    Ok(ApiResponse::success(rows))
}

/// GET /vehicles/:id
pub async fn get(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Vehicle> {
    let row = state.catalog().get_vehicle(id).await?;
    Ok(ApiResponse::success(row))
}

/// POST /vehicle (also accepted on /vehicles)
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<VehicleInput>, JsonRejection>,
) -> ApiResult<Vehicle> {
    let Json(input) = payload?;
    let row = state.catalog().create_vehicle(input).await?;
    Ok(ApiResponse::created(row))
}
