pub mod catalog_service;
pub mod favorite_service;
pub mod user_service;

pub use catalog_service::CatalogService;
pub use favorite_service::FavoriteService;
pub use user_service::UserService;

use thiserror::Error;

use crate::database::DatabaseError;

/// Business-rule failures raised by the services
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Invalid(String),

    #[error("{0}")]
    AlreadyExists(String),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl ServiceError {
    pub fn missing(label: &str, id: i64) -> Self {
        ServiceError::NotFound(format!("{} with id #{} not exist in database", label, id))
    }
}
