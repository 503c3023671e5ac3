use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::app::AppState;

/// GET / - service information
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Star Wars favorites API",
        "version": version,
        "endpoints": {
            "health": "GET /health",
            "users": "GET, POST /users; GET /users/:user_id",
            "favorites": "GET /users/:user_id/favorites; POST, DELETE /users/:user_id/favorites/{people,planets,vehicles}/:id",
            "people": "GET, POST /people; GET /people/:id",
            "planets": "GET /planets; POST /planet; GET /planets/:id",
            "vehicles": "GET /vehicles; POST /vehicle; GET /vehicles/:id",
        }
    }))
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "degraded",
                    "timestamp": now,
                    "database": "unavailable"
                })),
            )
        }
    }
}
