use std::sync::Arc;
use tracing::info;

use super::ServiceError;
use crate::database::models::{FavoriteView, Resource, User};
use crate::database::Store;
use crate::types::FavoriteKind;

const NO_FAVORITES: &str = "User has no favorites";

/// Membership rules for a user's favorites across the three join tables
pub struct FavoriteService {
    store: Arc<dyn Store>,
}

impl FavoriteService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub async fn get(&self, user_id: i64) -> Result<FavoriteView, ServiceError> {
        self.require_user(user_id).await?;
        let favorite = self
            .store
            .find_favorite(user_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(NO_FAVORITES.to_string()))?;
        Ok(self.store.favorite_view(favorite).await?)
    }

    /// Link an item, creating the user's favorites row on first use.
    /// Adding an item that is already linked is rejected.
    pub async fn add(&self, user_id: i64, kind: FavoriteKind, item_id: i64) -> Result<FavoriteView, ServiceError> {
        self.require_user(user_id).await?;
        self.require_item(kind, item_id).await?;

        let favorite = self.store.ensure_favorite(user_id).await?;
        if !self.store.link_favorite(favorite.id, kind, item_id).await? {
            return Err(ServiceError::AlreadyExists(format!(
                "{} with id #{} is already in user favorites",
                kind.label(),
                item_id
            )));
        }

        info!(user_id, item_id, kind = %kind, "Added favorite");
        Ok(self.store.favorite_view(favorite).await?)
    }

    pub async fn remove(&self, user_id: i64, kind: FavoriteKind, item_id: i64) -> Result<FavoriteView, ServiceError> {
        self.require_user(user_id).await?;
        self.require_item(kind, item_id).await?;

        let favorite = self
            .store
            .find_favorite(user_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(NO_FAVORITES.to_string()))?;

        if !self.store.unlink_favorite(favorite.id, kind, item_id).await? {
            return Err(ServiceError::NotFound(format!(
                "{} with id #{} is not in user favorites",
                kind.label(),
                item_id
            )));
        }

        info!(user_id, item_id, kind = %kind, "Removed favorite");
        Ok(self.store.favorite_view(favorite).await?)
    }

    async fn require_user(&self, user_id: i64) -> Result<(), ServiceError> {
        match self.store.get_user(user_id).await? {
            Some(_) => Ok(()),
            None => Err(ServiceError::missing(User::LABEL, user_id)),
        }
    }

    async fn require_item(&self, kind: FavoriteKind, item_id: i64) -> Result<(), ServiceError> {
        if self.store.item_exists(kind, item_id).await? {
            Ok(())
        } else {
            Err(ServiceError::missing(kind.label(), item_id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::{NewUser, PlanetInput, VehicleInput};
    use crate::database::MemoryStore;
    use crate::services::CatalogService;

    struct Fixture {
        favorites: FavoriteService,
        user_id: i64,
        planet_id: i64,
        vehicle_id: i64,
    }

    async fn fixture() -> Fixture {
        let store: Arc<dyn Store> = Arc::new(MemoryStore::new());
        let user = store
            .insert_user(NewUser {
                email: "rey@jakku.net".to_string(),
                password_hash: "salt$hash".to_string(),
            })
            .await
            .unwrap();

        let catalog = CatalogService::new(store.clone());
        let planet = catalog
            .create_planet(PlanetInput {
                name: Some("Jakku".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        let vehicle = catalog
            .create_vehicle(VehicleInput {
                name: Some("Speeder".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        Fixture {
            favorites: FavoriteService::new(store),
            user_id: user.id,
            planet_id: planet.id,
            vehicle_id: vehicle.id,
        }
    }

    #[tokio::test]
    async fn user_without_favorites_row() {
        let f = fixture().await;
        let err = f.favorites.get(f.user_id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(ref m) if m == "User has no favorites"));

        let err = f.favorites.remove(f.user_id, FavoriteKind::Planets, f.planet_id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(ref m) if m == "User has no favorites"));
    }

    #[tokio::test]
    async fn add_then_remove() {
        let f = fixture().await;
        let view = f.favorites.add(f.user_id, FavoriteKind::Planets, f.planet_id).await.unwrap();
        assert_eq!(view.user_id, f.user_id);
        assert_eq!(view.planets.len(), 1);

        let view = f.favorites.add(f.user_id, FavoriteKind::Vehicles, f.vehicle_id).await.unwrap();
        assert_eq!((view.planets.len(), view.vehicles.len()), (1, 1));

        let view = f.favorites.remove(f.user_id, FavoriteKind::Planets, f.planet_id).await.unwrap();
        assert!(view.planets.is_empty());
        assert_eq!(view.vehicles[0].name, "Speeder");

        // the favorites row outlives its last item
        assert!(f.favorites.get(f.user_id).await.is_ok());
    }

    #[tokio::test]
    async fn duplicate_add_is_rejected() {
        let f = fixture().await;
        f.favorites.add(f.user_id, FavoriteKind::Planets, f.planet_id).await.unwrap();
        let err = f.favorites.add(f.user_id, FavoriteKind::Planets, f.planet_id).await.unwrap_err();
        assert!(
            matches!(err, ServiceError::AlreadyExists(ref m) if *m == format!("Planet with id #{} is already in user favorites", f.planet_id))
        );
    }

    #[tokio::test]
    async fn remove_of_unlinked_item() {
        let f = fixture().await;
        f.favorites.add(f.user_id, FavoriteKind::Planets, f.planet_id).await.unwrap();
        let err = f.favorites.remove(f.user_id, FavoriteKind::Vehicles, f.vehicle_id).await.unwrap_err();
        assert!(
            matches!(err, ServiceError::NotFound(ref m) if *m == format!("Vehicle with id #{} is not in user favorites", f.vehicle_id))
        );
    }

    #[tokio::test]
    async fn checks_user_before_item() {
        let f = fixture().await;
        let err = f.favorites.add(99, FavoriteKind::People, 99).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(ref m) if m == "User with id #99 not exist in database"));

        let err = f.favorites.add(f.user_id, FavoriteKind::People, 99).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(ref m) if m == "People with id #99 not exist in database"));
    }
}
