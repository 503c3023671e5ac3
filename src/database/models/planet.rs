use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{required, Named, Resource};

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Planet {
    pub id: i64,
    pub name: String,
    pub terrain: Option<String>,
    pub climate: Option<String>,
    pub population: Option<i64>,
    pub gravity: Option<f64>,
    pub diameter: Option<i64>,
    pub rotation_period: Option<i64>,
    pub orbital_period: Option<i64>,
    pub surface_water: Option<f64>,
}

impl Resource for Planet {
    const TABLE: &'static str = "planets";
    const LABEL: &'static str = "Planet";

    fn id(&self) -> i64 {
        self.id
    }
}

impl Named for Planet {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Body of `POST /planet`
#[derive(Debug, Default, Deserialize)]
pub struct PlanetInput {
    pub name: Option<String>,
    pub terrain: Option<String>,
    pub climate: Option<String>,
    pub population: Option<i64>,
    pub gravity: Option<f64>,
    pub diameter: Option<i64>,
    pub rotation_period: Option<i64>,
    pub orbital_period: Option<i64>,
    pub surface_water: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct NewPlanet {
    pub name: String,
    pub terrain: Option<String>,
    pub climate: Option<String>,
    pub population: Option<i64>,
    pub gravity: Option<f64>,
    pub diameter: Option<i64>,
    pub rotation_period: Option<i64>,
    pub orbital_period: Option<i64>,
    pub surface_water: Option<f64>,
}

impl PlanetInput {
    pub fn into_new(self) -> Option<NewPlanet> {
        let name = required(self.name)?;
        Some(NewPlanet {
            name,
            terrain: self.terrain,
            climate: self.climate,
            population: self.population,
            gravity: self.gravity,
            diameter: self.diameter,
            rotation_period: self.rotation_period,
            orbital_period: self.orbital_period,
            surface_water: self.surface_water,
        })
    }
}

impl NewPlanet {
    pub fn with_id(self, id: i64) -> Planet {
        Planet {
            id,
            name: self.name,
            terrain: self.terrain,
            climate: self.climate,
            population: self.population,
            gravity: self.gravity,
            diameter: self.diameter,
            rotation_period: self.rotation_period,
            orbital_period: self.orbital_period,
            surface_water: self.surface_water,
        }
    }
}
