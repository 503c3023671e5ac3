use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{required, Named, Resource};

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Vehicle {
    pub id: i64,
    pub name: String,
    pub model: Option<String>,
    pub vehicle_class: Option<String>,
    pub manufacturer: Option<String>,
    pub cost_in_credits: Option<f64>,
    pub length: Option<f64>,
    pub crew: Option<i64>,
    pub max_atmosphering_speed: Option<i64>,
    pub cargo_capacity: Option<f64>,
    pub consumables: Option<String>,
}

impl Resource for Vehicle {
    const TABLE: &'static str = "vehicles";
    const LABEL: &'static str = "Vehicle";

    fn id(&self) -> i64 {
        self.id
    }
}

impl Named for Vehicle {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Body of `POST /vehicle`
#[derive(Debug, Default, Deserialize)]
pub struct VehicleInput {
    pub name: Option<String>,
    pub model: Option<String>,
    pub vehicle_class: Option<String>,
    pub manufacturer: Option<String>,
    pub cost_in_credits: Option<f64>,
    pub length: Option<f64>,
    pub crew: Option<i64>,
    pub max_atmosphering_speed: Option<i64>,
    pub cargo_capacity: Option<f64>,
    pub consumables: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewVehicle {
    pub name: String,
    pub model: Option<String>,
    pub vehicle_class: Option<String>,
    pub manufacturer: Option<String>,
    pub cost_in_credits: Option<f64>,
    pub length: Option<f64>,
    pub crew: Option<i64>,
    pub max_atmosphering_speed: Option<i64>,
    pub cargo_capacity: Option<f64>,
    pub consumables: Option<String>,
}

impl VehicleInput {
    pub fn into_new(self) -> Option<NewVehicle> {
        let name = required(self.name)?;
        Some(NewVehicle {
            name,
            model: self.model,
            vehicle_class: self.vehicle_class,
            manufacturer: self.manufacturer,
            cost_in_credits: self.cost_in_credits,
            length: self.length,
            crew: self.crew,
            max_atmosphering_speed: self.max_atmosphering_speed,
            cargo_capacity: self.cargo_capacity,
            consumables: self.consumables,
        })
    }
}

impl NewVehicle {
    pub fn with_id(self, id: i64) -> Vehicle {
        Vehicle {
            id,
            name: self.name,
            model: self.model,
            vehicle_class: self.vehicle_class,
            manufacturer: self.manufacturer,
            cost_in_credits: self.cost_in_credits,
            length: self.length,
            crew: self.crew,
            max_atmosphering_speed: self.max_atmosphering_speed,
            cargo_capacity: self.cargo_capacity,
            consumables: self.consumables,
        }
    }
}
