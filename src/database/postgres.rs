use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::{
    Favorite, FavoriteView, NewPeople, NewPlanet, NewUser, NewVehicle, People, Planet, User, Vehicle,
};
use crate::database::repository::Repository;
use crate::database::Store;
use crate::types::FavoriteKind;

/// PostgreSQL-backed store
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn users(&self) -> Repository<User> {
        Repository::new(self.pool.clone())
    }

    fn people(&self) -> Repository<People> {
        Repository::new(self.pool.clone())
    }

    fn planets(&self) -> Repository<Planet> {
        Repository::new(self.pool.clone())
    }

    fn vehicles(&self) -> Repository<Vehicle> {
        Repository::new(self.pool.clone())
    }
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> Result<(), DatabaseError> {
        DatabaseManager::health_check(&self.pool).await
    }

    async fn list_users(&self) -> Result<Vec<User>, DatabaseError> {
        self.users().select_all().await
    }

    async fn get_user(&self, id: i64) -> Result<Option<User>, DatabaseError> {
        self.users().select_by_id(id).await
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError> {
        self.users().select_by("email", email).await
    }

    async fn insert_user(&self, user: NewUser) -> Result<User, DatabaseError> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (email, password, is_active) VALUES ($1, $2, TRUE) RETURNING *",
        )
        .bind(&user.email)
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DatabaseError::from_insert(e, "users.email"))
    }

    async fn list_people(&self) -> Result<Vec<People>, DatabaseError> {
        self.people().select_all().await
    }

    async fn get_people(&self, id: i64) -> Result<Option<People>, DatabaseError> {
        self.people().select_by_id(id).await
    }

    async fn find_people_by_name(&self, name: &str) -> Result<Option<People>, DatabaseError> {
        self.people().select_by("name", name).await
    }

    async fn insert_people(&self, people: NewPeople) -> Result<People, DatabaseError> {
        sqlx::query_as::<_, People>(
            r#"
            INSERT INTO people (name, gender, height, mass, hair_color, skin_color, eye_color, birth_year)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(&people.name)
        .bind(&people.gender)
        .bind(people.height)
        .bind(people.mass)
        .bind(&people.hair_color)
        .bind(&people.skin_color)
        .bind(&people.eye_color)
        .bind(&people.birth_year)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DatabaseError::from_insert(e, "people.name"))
    }

    async fn list_planets(&self) -> Result<Vec<Planet>, DatabaseError> {
        self.planets().select_all().await
    }

    async fn get_planet(&self, id: i64) -> Result<Option<Planet>, DatabaseError> {
        self.planets().select_by_id(id).await
    }

    async fn find_planet_by_name(&self, name: &str) -> Result<Option<Planet>, DatabaseError> {
        self.planets().select_by("name", name).await
    }

    async fn insert_planet(&self, planet: NewPlanet) -> Result<Planet, DatabaseError> {
        sqlx::query_as::<_, Planet>(
            r#"
            INSERT INTO planets (name, terrain, climate, population, gravity, diameter,
                                 rotation_period, orbital_period, surface_water)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(&planet.name)
        .bind(&planet.terrain)
        .bind(&planet.climate)
        .bind(planet.population)
        .bind(planet.gravity)
        .bind(planet.diameter)
        .bind(planet.rotation_period)
        .bind(planet.orbital_period)
        .bind(planet.surface_water)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DatabaseError::from_insert(e, "planets.name"))
    }

    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, DatabaseError> {
        self.vehicles().select_all().await
    }

    async fn get_vehicle(&self, id: i64) -> Result<Option<Vehicle>, DatabaseError> {
        self.vehicles().select_by_id(id).await
    }

    async fn find_vehicle_by_name(&self, name: &str) -> Result<Option<Vehicle>, DatabaseError> {
        self.vehicles().select_by("name", name).await
    }

    async fn insert_vehicle(&self, vehicle: NewVehicle) -> Result<Vehicle, DatabaseError> {
        sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (name, model, vehicle_class, manufacturer, cost_in_credits, length,
                                  crew, max_atmosphering_speed, cargo_capacity, consumables)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(&vehicle.name)
        .bind(&vehicle.model)
        .bind(&vehicle.vehicle_class)
        .bind(&vehicle.manufacturer)
        .bind(vehicle.cost_in_credits)
        .bind(vehicle.length)
        .bind(vehicle.crew)
        .bind(vehicle.max_atmosphering_speed)
        .bind(vehicle.cargo_capacity)
        .bind(&vehicle.consumables)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DatabaseError::from_insert(e, "vehicles.name"))
    }

    async fn item_exists(&self, kind: FavoriteKind, item_id: i64) -> Result<bool, DatabaseError> {
        match kind {
            FavoriteKind::People => self.people().exists(item_id).await,
            FavoriteKind::Planets => self.planets().exists(item_id).await,
            FavoriteKind::Vehicles => self.vehicles().exists(item_id).await,
        }
    }

    async fn find_favorite(&self, user_id: i64) -> Result<Option<Favorite>, DatabaseError> {
        Ok(sqlx::query_as::<_, Favorite>("SELECT id, user_id FROM favorites WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn ensure_favorite(&self, user_id: i64) -> Result<Favorite, DatabaseError> {
        // The no-op update makes RETURNING yield the existing row on conflict
        Ok(sqlx::query_as::<_, Favorite>(
            r#"
            INSERT INTO favorites (user_id) VALUES ($1)
            ON CONFLICT (user_id) DO UPDATE SET user_id = EXCLUDED.user_id
            RETURNING id, user_id
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn link_favorite(&self, favorite_id: i64, kind: FavoriteKind, item_id: i64) -> Result<bool, DatabaseError> {
        let sql = format!(
            "INSERT INTO {} (favorite_id, {}) VALUES ($1, $2) ON CONFLICT DO NOTHING",
            kind.join_table(),
            kind.item_column()
        );
        let result = sqlx::query(&sql).bind(favorite_id).bind(item_id).execute(&self.pool).await?;
        Ok(result.rows_affected() == 1)
    }

    async fn unlink_favorite(&self, favorite_id: i64, kind: FavoriteKind, item_id: i64) -> Result<bool, DatabaseError> {
        let sql = format!(
            "DELETE FROM {} WHERE favorite_id = $1 AND {} = $2",
            kind.join_table(),
            kind.item_column()
        );
        let result = sqlx::query(&sql).bind(favorite_id).bind(item_id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    async fn favorite_view(&self, favorite: Favorite) -> Result<FavoriteView, DatabaseError> {
        Ok(FavoriteView {
            user_id: favorite.user_id,
            people: self.people().select_favorited(FavoriteKind::People, favorite.id).await?,
            planets: self.planets().select_favorited(FavoriteKind::Planets, favorite.id).await?,
            vehicles: self.vehicles().select_favorited(FavoriteKind::Vehicles, favorite.id).await?,
        })
    }
}
