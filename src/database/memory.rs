use async_trait::async_trait;
use std::collections::{BTreeSet, HashMap};
use tokio::sync::RwLock;

use crate::database::manager::DatabaseError;
use crate::database::models::{
    Favorite, FavoriteView, Named, NewPeople, NewPlanet, NewUser, NewVehicle, People, Planet, Resource, User,
    Vehicle,
};
use crate::database::Store;
use crate::types::FavoriteKind;

/// Process-local store used when no `DATABASE_URL` is configured, and by tests.
/// Nothing survives a restart.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    favorites: Vec<Favorite>,
    people: Vec<People>,
    planets: Vec<Planet>,
    vehicles: Vec<Vehicle>,
    /// (favorite_id, item_id) pairs per join table
    links: HashMap<FavoriteKind, BTreeSet<(i64, i64)>>,
    sequences: HashMap<&'static str, i64>,
}

impl Tables {
    fn next_id(&mut self, table: &'static str) -> i64 {
        let seq = self.sequences.entry(table).or_insert(0);
        *seq += 1;
        *seq
    }

    fn item_exists(&self, kind: FavoriteKind, item_id: i64) -> bool {
        match kind {
            FavoriteKind::People => by_id(&self.people, item_id).is_some(),
            FavoriteKind::Planets => by_id(&self.planets, item_id).is_some(),
            FavoriteKind::Vehicles => by_id(&self.vehicles, item_id).is_some(),
        }
    }

    fn linked<T: Resource + Clone>(&self, rows: &[T], kind: FavoriteKind, favorite_id: i64) -> Vec<T> {
        self.links
            .get(&kind)
            .map(|pairs| {
                pairs
                    .range((favorite_id, i64::MIN)..=(favorite_id, i64::MAX))
                    .filter_map(|(_, item_id)| by_id(rows, *item_id))
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn by_id<T: Resource + Clone>(rows: &[T], id: i64) -> Option<T> {
    rows.iter().find(|row| row.id() == id).cloned()
}

fn by_name<T: Named + Clone>(rows: &[T], name: &str) -> Option<T> {
    rows.iter().find(|row| row.name() == name).cloned()
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> Result<(), DatabaseError> {
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<User>, DatabaseError> {
        Ok(self.tables.read().await.users.clone())
    }

    async fn get_user(&self, id: i64) -> Result<Option<User>, DatabaseError> {
        Ok(by_id(&self.tables.read().await.users, id))
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError> {
        Ok(self.tables.read().await.users.iter().find(|u| u.email == email).cloned())
    }

    async fn insert_user(&self, user: NewUser) -> Result<User, DatabaseError> {
        let mut tables = self.tables.write().await;
        if tables.users.iter().any(|u| u.email == user.email) {
            return Err(DatabaseError::Conflict("users.email".to_string()));
        }
        let row = User {
            id: tables.next_id(User::TABLE),
            email: user.email,
            password: user.password_hash,
            is_active: true,
        };
        tables.users.push(row.clone());
        Ok(row)
    }

    async fn list_people(&self) -> Result<Vec<People>, DatabaseError> {
        Ok(self.tables.read().await.people.clone())
    }

    async fn get_people(&self, id: i64) -> Result<Option<People>, DatabaseError> {
        Ok(by_id(&self.tables.read().await.people, id))
    }

    async fn find_people_by_name(&self, name: &str) -> Result<Option<People>, DatabaseError> {
        Ok(by_name(&self.tables.read().await.people, name))
    }

    async fn insert_people(&self, people: NewPeople) -> Result<People, DatabaseError> {
        let mut tables = self.tables.write().await;
        if by_name(&tables.people, &people.name).is_some() {
            return Err(DatabaseError::Conflict("people.name".to_string()));
        }
        let row = people.with_id(tables.next_id(People::TABLE));
        tables.people.push(row.clone());
        Ok(row)
    }

    async fn list_planets(&self) -> Result<Vec<Planet>, DatabaseError> {
        Ok(self.tables.read().await.planets.clone())
    }

    async fn get_planet(&self, id: i64) -> Result<Option<Planet>, DatabaseError> {
        Ok(by_id(&self.tables.read().await.planets, id))
    }

    async fn find_planet_by_name(&self, name: &str) -> Result<Option<Planet>, DatabaseError> {
        Ok(by_name(&self.tables.read().await.planets, name))
    }

    async fn insert_planet(&self, planet: NewPlanet) -> Result<Planet, DatabaseError> {
        let mut tables = self.tables.write().await;
        if by_name(&tables.planets, &planet.name).is_some() {
            return Err(DatabaseError::Conflict("planets.name".to_string()));
        }
        let row = planet.with_id(tables.next_id(Planet::TABLE));
        tables.planets.push(row.clone());
        Ok(row)
    }

    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, DatabaseError> {
        Ok(self.tables.read().await.vehicles.clone())
    }

    async fn get_vehicle(&self, id: i64) -> Result<Option<Vehicle>, DatabaseError> {
        Ok(by_id(&self.tables.read().await.vehicles, id))
    }

    async fn find_vehicle_by_name(&self, name: &str) -> Result<Option<Vehicle>, DatabaseError> {
        Ok(by_name(&self.tables.read().await.vehicles, name))
    }

    async fn insert_vehicle(&self, vehicle: NewVehicle) -> Result<Vehicle, DatabaseError> {
        let mut tables = self.tables.write().await;
        if by_name(&tables.vehicles, &vehicle.name).is_some() {
            return Err(DatabaseError::Conflict("vehicles.name".to_string()));
        }
        let row = vehicle.with_id(tables.next_id(Vehicle::TABLE));
        tables.vehicles.push(row.clone());
        Ok(row)
    }

    async fn item_exists(&self, kind: FavoriteKind, item_id: i64) -> Result<bool, DatabaseError> {
        Ok(self.tables.read().await.item_exists(kind, item_id))
    }

    async fn find_favorite(&self, user_id: i64) -> Result<Option<Favorite>, DatabaseError> {
        Ok(self.tables.read().await.favorites.iter().find(|f| f.user_id == user_id).copied())
    }

    async fn ensure_favorite(&self, user_id: i64) -> Result<Favorite, DatabaseError> {
        let mut tables = self.tables.write().await;
        if let Some(existing) = tables.favorites.iter().find(|f| f.user_id == user_id) {
            return Ok(*existing);
        }
        let favorite = Favorite {
            id: tables.next_id("favorites"),
            user_id,
        };
        tables.favorites.push(favorite);
        Ok(favorite)
    }

    async fn link_favorite(&self, favorite_id: i64, kind: FavoriteKind, item_id: i64) -> Result<bool, DatabaseError> {
        let mut tables = self.tables.write().await;
        Ok(tables.links.entry(kind).or_default().insert((favorite_id, item_id)))
    }

    async fn unlink_favorite(&self, favorite_id: i64, kind: FavoriteKind, item_id: i64) -> Result<bool, DatabaseError> {
        let mut tables = self.tables.write().await;
        Ok(tables
            .links
            .get_mut(&kind)
            .map(|pairs| pairs.remove(&(favorite_id, item_id)))
            .unwrap_or(false))
    }

    async fn favorite_view(&self, favorite: Favorite) -> Result<FavoriteView, DatabaseError> {
        let tables = self.tables.read().await;
        Ok(FavoriteView {
            user_id: favorite.user_id,
            people: tables.linked(&tables.people, FavoriteKind::People, favorite.id),
            planets: tables.linked(&tables.planets, FavoriteKind::Planets, favorite.id),
            vehicles: tables.linked(&tables.vehicles, FavoriteKind::Vehicles, favorite.id),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_people(name: &str) -> NewPeople {
        NewPeople {
            name: name.to_string(),
            gender: "male".to_string(),
            height: Some(172.0),
            mass: Some(77.0),
            hair_color: None,
            skin_color: None,
            eye_color: None,
            birth_year: None,
        }
    }

    #[tokio::test]
    async fn assigns_sequential_ids_per_table() {
        let store = MemoryStore::new();
        let a = store.insert_people(new_people("Luke Skywalker")).await.unwrap();
        let b = store.insert_people(new_people("Han Solo")).await.unwrap();
        let fav = store.ensure_favorite(1).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));
        assert_eq!(fav.id, 1);
    }

    #[tokio::test]
    async fn rejects_duplicate_names() {
        let store = MemoryStore::new();
        store.insert_people(new_people("Luke Skywalker")).await.unwrap();
        let err = store.insert_people(new_people("Luke Skywalker")).await.unwrap_err();
        assert!(matches!(err, DatabaseError::Conflict(_)));
    }

    #[tokio::test]
    async fn ensure_favorite_is_idempotent() {
        let store = MemoryStore::new();
        let first = store.ensure_favorite(3).await.unwrap();
        let second = store.ensure_favorite(3).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(store.find_favorite(3).await.unwrap(), Some(first));
        assert_eq!(store.find_favorite(4).await.unwrap(), None);
    }

    #[tokio::test]
    async fn links_are_unique_and_views_are_ordered() {
        let store = MemoryStore::new();
        let luke = store.insert_people(new_people("Luke Skywalker")).await.unwrap();
        let han = store.insert_people(new_people("Han Solo")).await.unwrap();
        let fav = store.ensure_favorite(1).await.unwrap();

        assert!(store.link_favorite(fav.id, FavoriteKind::People, han.id).await.unwrap());
        assert!(store.link_favorite(fav.id, FavoriteKind::People, luke.id).await.unwrap());
        assert!(!store.link_favorite(fav.id, FavoriteKind::People, luke.id).await.unwrap());

        let view = store.favorite_view(fav).await.unwrap();
        let names: Vec<_> = view.people.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Luke Skywalker", "Han Solo"]);
        assert!(view.planets.is_empty());

        assert!(store.unlink_favorite(fav.id, FavoriteKind::People, luke.id).await.unwrap());
        assert!(!store.unlink_favorite(fav.id, FavoriteKind::People, luke.id).await.unwrap());
        assert!(!store.unlink_favorite(fav.id, FavoriteKind::Vehicles, 1).await.unwrap());
    }
}
