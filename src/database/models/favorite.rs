use serde::Serialize;
use sqlx::FromRow;

use super::{People, Planet, Vehicle};

/// One favorites row per user; the join tables hang off its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow)]
pub struct Favorite {
    pub id: i64,
    pub user_id: i64,
}

/// Resolved favorites for a user, each list ordered by item id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FavoriteView {
    pub user_id: i64,
    pub people: Vec<People>,
    pub planets: Vec<Planet>,
    pub vehicles: Vec<Vehicle>,
}
