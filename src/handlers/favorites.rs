use axum::extract::{Path, State};

use crate::app::AppState;
use crate::database::models::FavoriteView;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::types::FavoriteKind;

fn parse_kind(kind: &str) -> Result<FavoriteKind, ApiError> {
    kind.parse()
        .map_err(|_| ApiError::not_found(format!("Unknown favorites collection '{}'", kind)))
}

/// GET /users/:user_id/favorites
pub async fn get(State(state): State<AppState>, Path(user_id): Path<i64>) -> ApiResult<FavoriteView> {
    let favorites = state.favorites().get(user_id).await?;
    Ok(ApiResponse::success(favorites))
}

/// POST /users/:user_id/favorites/:kind/:item_id
pub async fn add(
    State(state): State<AppState>,
    Path((user_id, kind, item_id)): Path<(i64, String, i64)>,
) -> ApiResult<FavoriteView> {
    let kind = parse_kind(&kind)?;
    let favorites = state.favorites().add(user_id, kind, item_id).await?;
    Ok(ApiResponse::created(favorites))
}

/// DELETE /users/:user_id/favorites/:kind/:item_id
pub async fn remove(
    State(state): State<AppState>,
    Path((user_id, kind, item_id)): Path<(i64, String, i64)>,
) -> ApiResult<FavoriteView> {
    let kind = parse_kind(&kind)?;
    let favorites = state.favorites().remove(user_id, kind, item_id).await?;
    Ok(ApiResponse::success(favorites))
}
