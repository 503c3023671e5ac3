pub mod favorite;
pub mod people;
pub mod planet;
pub mod user;
pub mod vehicle;

pub use favorite::{Favorite, FavoriteView};
pub use people::{NewPeople, People, PeopleInput};
pub use planet::{NewPlanet, Planet, PlanetInput};
pub use user::{NewUser, User, UserInput, UserView};
pub use vehicle::{NewVehicle, Vehicle, VehicleInput};

/// A table-backed entity addressable by integer primary key.
pub trait Resource {
    /// Table the rows live in
    const TABLE: &'static str;
    /// Singular name used in client-facing messages ("People", "Planet", ...)
    const LABEL: &'static str;

    fn id(&self) -> i64;
}

/// Catalog entities are looked up by their unique `name` on create.
pub trait Named: Resource {
    fn name(&self) -> &str;
}

/// Treats missing, empty and whitespace-only strings the same way.
/// A value that is kept is returned exactly as sent.
pub(crate) fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
