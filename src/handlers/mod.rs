// handlers/mod.rs - one module per resource
//
// Handlers stay thin: extract path/body, call the matching service,
// wrap the result in an ApiResponse. Business rules live in crate::services.

pub mod favorites;
pub mod people;
pub mod planets;
pub mod system;
pub mod users;
pub mod vehicles;
