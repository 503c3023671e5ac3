pub mod manager;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod repository;

use async_trait::async_trait;

use crate::types::FavoriteKind;
use models::{
    Favorite, FavoriteView, NewPeople, NewPlanet, NewUser, NewVehicle, People, Planet, User, Vehicle,
};

pub use manager::{DatabaseError, DatabaseManager};
pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Persistence seam between the services and a concrete backend.
///
/// Inserts on a unique column report `DatabaseError::Conflict` instead of a
/// driver error, so callers can turn races into client-facing duplicates.
#[async_trait]
pub trait Store: Send + Sync {
    async fn ping(&self) -> Result<(), DatabaseError>;

    async fn list_users(&self) -> Result<Vec<User>, DatabaseError>;
    async fn get_user(&self, id: i64) -> Result<Option<User>, DatabaseError>;
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError>;
    async fn insert_user(&self, user: NewUser) -> Result<User, DatabaseError>;

    async fn list_people(&self) -> Result<Vec<People>, DatabaseError>;
    async fn get_people(&self, id: i64) -> Result<Option<People>, DatabaseError>;
    async fn find_people_by_name(&self, name: &str) -> Result<Option<People>, DatabaseError>;
    async fn insert_people(&self, people: NewPeople) -> Result<People, DatabaseError>;

    async fn list_planets(&self) -> Result<Vec<Planet>, DatabaseError>;
    async fn get_planet(&self, id: i64) -> Result<Option<Planet>, DatabaseError>;
    async fn find_planet_by_name(&self, name: &str) -> Result<Option<Planet>, DatabaseError>;
    async fn insert_planet(&self, planet: NewPlanet) -> Result<Planet, DatabaseError>;

    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, DatabaseError>;
    async fn get_vehicle(&self, id: i64) -> Result<Option<Vehicle>, DatabaseError>;
    async fn find_vehicle_by_name(&self, name: &str) -> Result<Option<Vehicle>, DatabaseError>;
    async fn insert_vehicle(&self, vehicle: NewVehicle) -> Result<Vehicle, DatabaseError>;

    /// Whether the catalog row behind a favorite kind exists
    async fn item_exists(&self, kind: FavoriteKind, item_id: i64) -> Result<bool, DatabaseError>;

    async fn find_favorite(&self, user_id: i64) -> Result<Option<Favorite>, DatabaseError>;
    /// Returns the user's favorites row, creating it on first use
    async fn ensure_favorite(&self, user_id: i64) -> Result<Favorite, DatabaseError>;
    /// `false` when the link was already present
    async fn link_favorite(&self, favorite_id: i64, kind: FavoriteKind, item_id: i64) -> Result<bool, DatabaseError>;
    /// `false` when there was nothing to remove
    async fn unlink_favorite(&self, favorite_id: i64, kind: FavoriteKind, item_id: i64) -> Result<bool, DatabaseError>;
    async fn favorite_view(&self, favorite: Favorite) -> Result<FavoriteView, DatabaseError>;
}
