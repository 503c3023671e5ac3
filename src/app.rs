use axum::{
    extract::{DefaultBodyLimit, Request},
    routing::{get, post},
    Router, ServiceExt,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::Layer;
use tower_http::{normalize_path::NormalizePathLayer, trace::TraceLayer};

use crate::config::ApiConfig;
use crate::database::Store;
use crate::handlers::{favorites, people, planets, system, users, vehicles};
use crate::services::{CatalogService, FavoriteService, UserService};

/// Shared handler state: the store every service works against
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub fn users(&self) -> UserService {
        UserService::new(self.store.clone())
    }

    pub fn catalog(&self) -> CatalogService {
        CatalogService::new(self.store.clone())
    }

    pub fn favorites(&self) -> FavoriteService {
        FavoriteService::new(self.store.clone())
    }
}

pub fn router(state: AppState, api: &ApiConfig) -> Router {
    Router::new()
        .route("/", get(system::root))
        .route("/health", get(system::health))
        .merge(user_routes())
        .merge(favorite_routes())
        .merge(catalog_routes())
        .layer(DefaultBodyLimit::max(api.max_request_size_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list).post(users::create))
        .route("/users/:user_id", get(users::get))
}

fn favorite_routes() -> Router<AppState> {
    Router::new()
        .route("/users/:user_id/favorites", get(favorites::get))
        .route(
            "/users/:user_id/favorites/:kind/:item_id",
            post(favorites::add).delete(favorites::remove),
        )
}

fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/people", get(people::list).post(people::create))
        .route("/people/:id", get(people::get))
        .route("/planets", get(planets::list).post(planets::create))
        .route("/planet", post(planets::create))
        .route("/planets/:id", get(planets::get))
        .route("/vehicles", get(vehicles::list).post(vehicles::create))
        .route("/vehicle", post(vehicles::create))
        .route("/vehicles/:id", get(vehicles::get))
}

/// Serve the API on an already-bound listener until the process stops.
/// Trailing slashes are trimmed before routing, so `/users/` matches `/users`.
pub async fn serve(listener: TcpListener, state: AppState, api: &ApiConfig) -> std::io::Result<()> {
    let app = NormalizePathLayer::trim_trailing_slash().layer(router(state, api));
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await
}
