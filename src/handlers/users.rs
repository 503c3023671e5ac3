use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use crate::app::AppState;
use crate::database::models::{UserInput, UserView};
use crate::middleware::{ApiResponse, ApiResult};

/// GET /users
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<UserView>> {
    let users = state.users().list().await?;
    Ok(ApiResponse::success(users))
}

/// POST /users - register a user from `{email, password}`
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<UserInput>, JsonRejection>,
) -> ApiResult<UserView> {
    let Json(input) = payload?;
    let user = state.users().create(input).await?;
    Ok(ApiResponse::created(user))
}

/// GET /users/:user_id
pub async fn get(State(state): State<AppState>, Path(user_id): Path<i64>) -> ApiResult<UserView> {
    let user = state.users().get(user_id).await?;
    Ok(ApiResponse::success(user))
}
