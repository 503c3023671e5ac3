use std::sync::Arc;
use tracing::info;

use super::ServiceError;
use crate::database::models::{People, PeopleInput, Planet, PlanetInput, Resource, Vehicle, VehicleInput};
use crate::database::{DatabaseError, Store};

const MISSING_FIELDS: &str = "Missing required fields";

/// Read and create access to people, planets and vehicles
pub struct CatalogService {
    store: Arc<dyn Store>,
}

fn already_exists(label: &str) -> ServiceError {
    ServiceError::AlreadyExists(format!("{} already exists", label))
}

/// Unique-name races surface from the store as `Conflict`
fn on_insert<T>(result: Result<T, DatabaseError>, label: &str) -> Result<T, ServiceError> {
    match result {
        Ok(row) => Ok(row),
        Err(DatabaseError::Conflict(_)) => Err(already_exists(label)),
        Err(e) => Err(e.into()),
    }
}

impl CatalogService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub async fn list_people(&self) -> Result<Vec<People>, ServiceError> {
        Ok(self.store.list_people().await?)
    }

    pub async fn get_people(&self, id: i64) -> Result<People, ServiceError> {
        self.store
            .get_people(id)
            .await?
            .ok_or_else(|| ServiceError::missing(People::LABEL, id))
    }

    pub async fn create_people(&self, input: PeopleInput) -> Result<People, ServiceError> {
        let new = input
            .into_new()
            .ok_or_else(|| ServiceError::Invalid(MISSING_FIELDS.to_string()))?;

        if self.store.find_people_by_name(&new.name).await?.is_some() {
            return Err(already_exists(People::LABEL));
        }

        let people = on_insert(self.store.insert_people(new).await, People::LABEL)?;
        info!(people_id = people.id, name = %people.name, "Created people");
        Ok(people)
    }

    pub async fn list_planets(&self) -> Result<Vec<Planet>, ServiceError> {
        Ok(self.store.list_planets().await?)
    }

    pub async fn get_planet(&self, id: i64) -> Result<Planet, ServiceError> {
        self.store
            .get_planet(id)
            .await?
            .ok_or_else(|| ServiceError::missing(Planet::LABEL, id))
    }

    pub async fn create_planet(&self, input: PlanetInput) -> Result<Planet, ServiceError> {
        let new = input
            .into_new()
            .ok_or_else(|| ServiceError::Invalid(MISSING_FIELDS.to_string()))?;

        if self.store.find_planet_by_name(&new.name).await?.is_some() {
            return Err(already_exists(Planet::LABEL));
        }

        let planet = on_insert(self.store.insert_planet(new).await, Planet::LABEL)?;
        info!(planet_id = planet.id, name = %planet.name, "Created planet");
        Ok(planet)
    }

    pub async fn list_vehicles(&self) -> Result<Vec<Vehicle>, ServiceError> {
        Ok(self.store.list_vehicles().await?)
    }

    pub async fn get_vehicle(&self, id: i64) -> Result<Vehicle, ServiceError> {
        self.store
            .get_vehicle(id)
            .await?
            .ok_or_else(|| ServiceError::missing(Vehicle::LABEL, id))
    }

    pub async fn create_vehicle(&self, input: VehicleInput) -> Result<Vehicle, ServiceError> {
        let new = input
            .into_new()
            .ok_or_else(|| ServiceError::Invalid(MISSING_FIELDS.to_string()))?;

        if self.store.find_vehicle_by_name(&new.name).await?.is_some() {
            return Err(already_exists(Vehicle::LABEL));
        }

        let vehicle = on_insert(self.store.insert_vehicle(new).await, Vehicle::LABEL)?;
        info!(vehicle_id = vehicle.id, name = %vehicle.name, "Created vehicle");
        Ok(vehicle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::MemoryStore;

    fn service() -> CatalogService {
        CatalogService::new(Arc::new(MemoryStore::new()))
    }

    fn planet(name: &str) -> PlanetInput {
        PlanetInput {
            name: Some(name.to_string()),
            climate: Some("arid".to_string()),
            population: Some(200_000),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn creates_and_reads_planets() {
        let catalog = service();
        let tatooine = catalog.create_planet(planet("Tatooine")).await.unwrap();
        let hoth = catalog.create_planet(planet("Hoth")).await.unwrap();

        assert_eq!(catalog.get_planet(tatooine.id).await.unwrap().name, "Tatooine");
        let names: Vec<_> = catalog.list_planets().await.unwrap().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Tatooine".to_string(), "Hoth".to_string()]);
        assert_eq!(hoth.population, Some(200_000));
    }

    #[tokio::test]
    async fn duplicate_names_are_rejected_per_resource() {
        let catalog = service();
        catalog.create_planet(planet("Naboo")).await.unwrap();
        let err = catalog.create_planet(planet("Naboo")).await.unwrap_err();
        assert!(matches!(err, ServiceError::AlreadyExists(ref m) if m == "Planet already exists"));

        let vehicle = VehicleInput {
            name: Some("Naboo".to_string()),
            ..Default::default()
        };
        assert!(catalog.create_vehicle(vehicle).await.is_ok());
    }

    #[tokio::test]
    async fn missing_required_fields() {
        let catalog = service();
        let err = catalog.create_vehicle(VehicleInput::default()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Invalid(ref m) if m == "Missing required fields"));

        let people = PeopleInput {
            name: Some("Yoda".to_string()),
            ..Default::default()
        };
        let err = catalog.create_people(people).await.unwrap_err();
        assert!(matches!(err, ServiceError::Invalid(_)));
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found() {
        let catalog = service();
        let err = catalog.get_vehicle(9).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(ref m) if m == "Vehicle with id #9 not exist in database"));
        let err = catalog.get_people(1).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(ref m) if m == "People with id #1 not exist in database"));
    }
}
