use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use crate::app::AppState;
use crate::database::models::{People, PeopleInput};
use crate::middleware::{ApiResponse, ApiResult};

/// GET /people
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<People>> {
    let rows = state.catalog().list_people().await?;
    Ok(ApiResponse::success(rows))
}

/// GET /people/:id
pub async fn get(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<People> {
    let row = state.catalog().get_people(id).await?;
    Ok(ApiResponse::success(row))
}

/// POST /people
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<PeopleInput>, JsonRejection>,
) -> ApiResult<People> {
    let Json(input) = payload?;
    let row = state.catalog().create_people(input).await?;
    Ok(ApiResponse::created(row))
}
